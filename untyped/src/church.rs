//! Church encodings over the four-name alphabet, and the example runs built
//! from them.

use crate::{
    eval::evaluate,
    term::{Term, TermRef},
    var::Name::{self, *},
};

fn var(name: Name) -> TermRef {
    Term::name(name)
}

/// `λt.λf.t`
pub fn tru() -> TermRef {
    Term::abs(T, Term::abs(F, var(T)))
}

/// `λt.λf.f`
pub fn fls() -> TermRef {
    Term::abs(T, Term::abs(F, var(F)))
}

/// `λx.λy.λt.[[x y] t]`
pub fn test() -> TermRef {
    Term::abs(
        X,
        Term::abs(Y, Term::abs(T, Term::apply_all(var(X), [var(Y), var(T)]))),
    )
}

/// `λx.λy.[[x y] false]`
pub fn and() -> TermRef {
    Term::abs(X, Term::abs(Y, Term::apply_all(var(X), [var(Y), fls()])))
}

/// `λf.λx.λy.[[y f] x]`
pub fn pair() -> TermRef {
    Term::abs(
        F,
        Term::abs(X, Term::abs(Y, Term::apply_all(var(Y), [var(F), var(X)]))),
    )
}

/// `λt.[t true]`
pub fn fst() -> TermRef {
    Term::abs(T, Term::apply(var(T), tru()))
}

/// `λt.[t false]`
pub fn snd() -> TermRef {
    Term::abs(T, Term::apply(var(T), fls()))
}

/// `λx.λy.[x [x ... y]]` with `n` applications of `x`.
pub fn numeral(n: usize) -> TermRef {
    let body = (0..n).fold(var(Y), |acc, _| Term::apply(var(X), acc));
    Term::abs(X, Term::abs(Y, body))
}

/// `λt.[[t λx.false] true]`
pub fn iszero() -> TermRef {
    Term::abs(
        T,
        Term::apply_all(var(T), [Term::abs(X, fls()), tru()]),
    )
}

/// `λx.[x x]`
pub fn omega_aux() -> TermRef {
    Term::abs(X, Term::apply(var(X), var(X)))
}

/// `[λx.[x x] λx.[x x]]`, which has no normal form.
pub fn omega() -> TermRef {
    Term::apply(omega_aux(), omega_aux())
}

/// Reads a term back as a boolean by applying it to the free variables `x`
/// and `y` and checking which one comes out.
pub fn as_bool(term: &TermRef) -> Option<bool> {
    let result = evaluate(&Term::apply_all(term.clone(), [var(X), var(Y)]));
    match result.as_ref() {
        Term::Var(v) if v.same(&X.into()) => Some(true),
        Term::Var(v) if v.same(&Y.into()) => Some(false),
        _ => None,
    }
}

pub struct Example {
    pub name: &'static str,
    pub term: TermRef,
    /// Whether evaluation is expected to finish.
    pub terminates: bool,
}

impl Example {
    fn new(name: &'static str, term: TermRef) -> Self {
        Self {
            name,
            term,
            terminates: true,
        }
    }
}

pub fn examples() -> Vec<Example> {
    let pair_tru_f = || Term::apply_all(pair(), [tru(), var(F)]);
    let and_tru_tru = Term::apply_all(and(), [tru(), tru()]);
    vec![
        Example::new("test", Term::apply_all(test(), [fls(), fls(), tru()])),
        Example::new("and", and_tru_tru.clone()),
        Example::new(
            "test-and",
            Term::apply_all(test(), [and_tru_tru, var(F), tru()]),
        ),
        Example::new("pair", pair_tru_f()),
        Example::new("fst", Term::apply(fst(), pair_tru_f())),
        Example::new("snd", Term::apply(snd(), pair_tru_f())),
        Example::new("iszero-c0", Term::apply(iszero(), numeral(0))),
        Example::new("iszero-c1", Term::apply(iszero(), numeral(1))),
        Example::new("iszero-c2", Term::apply(iszero(), numeral(2))),
        Example::new("stuck", Term::apply_all(var(F), [var(F), var(F)])),
        Example {
            name: "omega",
            term: omega(),
            terminates: false,
        },
    ]
}

pub fn find_example(name: &str) -> Option<Example> {
    examples().into_iter().find(|e| e.name == name)
}
