//! A handful of closed combinators with hand-written application rules.
//!
//! There is no substitution here: each combinator knows what it turns into
//! when applied, and partially applied combinators carry their arguments.

use std::rc::Rc;

pub type CombinatorRef = Rc<Combinator>;

#[derive(PartialEq, Eq, Clone, derive_more::Display, Debug)]
pub enum Combinator {
    #[display(fmt = "v")]
    FreeVar,
    /// `λx.x`
    #[display(fmt = "λx.x")]
    Id,
    /// `λx.c`, ignores its argument
    #[display(fmt = "λx.{}", _0)]
    Constant(CombinatorRef),
    #[display(fmt = "λt.λf.t")]
    Tru,
    #[display(fmt = "λt.λf.f")]
    Fls,
    /// `λx.λy.λz.(x y z)`
    #[display(fmt = "λx.λy.λz.(x y z)")]
    Test,
    #[display(fmt = "λy.λz.({} y z)", _0)]
    TestWith(CombinatorRef),
    #[display(fmt = "λz.({} {} z)", _0, _1)]
    TestWithBoth(CombinatorRef, CombinatorRef),
    /// A free variable applied to something.
    #[display(fmt = "({} {})", _0, _1)]
    StuckApp(CombinatorRef, CombinatorRef),
}

impl Combinator {
    pub fn apply(self: &Rc<Self>, arg: CombinatorRef) -> CombinatorRef {
        use Combinator::*;
        match self.as_ref() {
            FreeVar | StuckApp(_, _) => StuckApp(self.clone(), arg).into(),
            Id => arg,
            Constant(c) => c.clone(),
            Tru => Constant(arg).into(),
            Fls => Id.into(),
            Test => TestWith(arg).into(),
            TestWith(x) => TestWithBoth(x.clone(), arg).into(),
            TestWithBoth(x, y) => x.apply(y.clone()).apply(arg),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Combinator::*, *};

    fn c(c: Combinator) -> CombinatorRef {
        Rc::new(c)
    }

    #[test]
    fn test_test() {
        // test false id ((λx.false) true)
        let run = c(Test)
            .apply(c(Fls))
            .apply(c(Id))
            .apply(c(Constant(c(Fls))).apply(c(Tru)));
        assert_eq!(run, c(Fls));
        let run = c(Test).apply(c(Tru)).apply(c(Tru)).apply(c(Fls));
        assert_eq!(run, c(Tru));
        let run = c(Test)
            .apply(c(Fls))
            .apply(c(FreeVar))
            .apply(c(Fls).apply(c(FreeVar)));
        assert_eq!(run, c(Id));
    }

    #[test]
    fn test_stuck() {
        let run = c(FreeVar).apply(c(Tru)).apply(c(Fls));
        assert_eq!(run.to_string(), "((v λt.λf.t) λt.λf.f)");
        let run = c(Tru).apply(c(FreeVar)).apply(c(Id));
        assert_eq!(run, c(FreeVar));
    }

    #[test]
    fn test_display() {
        assert_eq!(c(Constant(c(Tru))).to_string(), "λx.λt.λf.t");
        assert_eq!(c(Test).apply(c(Tru)).to_string(), "λy.λz.(λt.λf.t y z)");
    }
}
