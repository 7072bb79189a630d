use std::rc::Rc;

use anyhow::Result;
use combinators::{Combinator::*, CombinatorRef};

fn c(c: combinators::Combinator) -> CombinatorRef {
    Rc::new(c)
}

fn main() -> Result<()> {
    let runs = [
        c(Test)
            .apply(c(Fls))
            .apply(c(Id))
            .apply(c(Constant(c(Fls))).apply(c(Tru))),
        c(Test).apply(c(Tru)).apply(c(Tru)).apply(c(Fls)),
        c(Test)
            .apply(c(Fls))
            .apply(c(FreeVar))
            .apply(c(Fls).apply(c(FreeVar))),
    ];
    for run in runs {
        println!("{run}");
    }
    Ok(())
}
