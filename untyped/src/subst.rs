use std::rc::Rc;

use crate::{
    term::{Term, TermRef},
    var::Var,
};

trait Rewriter {
    fn on_var(&mut self, term: &TermRef, var: &Var) -> TermRef;
    fn on_abs(&mut self, term: &TermRef, param: &Var, body: &TermRef) -> TermRef;
}

/// Pushes `rewriter` through applications and stuck terms, rebuilding only
/// the nodes whose children changed.
fn rewrite(term: &TermRef, rewriter: &mut impl Rewriter) -> TermRef {
    match term.as_ref() {
        Term::Var(var) => rewriter.on_var(term, var),
        Term::Abs(param, body) => rewriter.on_abs(term, param, body),
        Term::Apply(lhs, rhs) => {
            let new_lhs = rewrite(lhs, rewriter);
            let new_rhs = rewrite(rhs, rewriter);
            if Rc::ptr_eq(lhs, &new_lhs) && Rc::ptr_eq(rhs, &new_rhs) {
                term.clone()
            } else {
                Term::apply(new_lhs, new_rhs)
            }
        }
        Term::Stuck(inner) => {
            let new_inner = rewrite(inner, rewriter);
            if Rc::ptr_eq(inner, &new_inner) {
                term.clone()
            } else {
                Term::stuck(new_inner)
            }
        }
    }
}

/// Wraps every free occurrence of `var` in `term` in one more `Bound` layer.
///
/// Occurrences under an abstraction that rebinds `var` are left alone.
pub fn mark(term: &TermRef, var: &Var) -> TermRef {
    struct M<'a>(&'a Var);
    impl<'a> Rewriter for M<'a> {
        fn on_var(&mut self, term: &TermRef, var: &Var) -> TermRef {
            self.0.select(var, Term::bound(var.clone()), term.clone())
        }
        fn on_abs(&mut self, term: &TermRef, param: &Var, body: &TermRef) -> TermRef {
            if self.0.same(param) {
                return term.clone();
            }
            let new_body = rewrite(body, self);
            if Rc::ptr_eq(body, &new_body) {
                term.clone()
            } else {
                Term::abs(param.clone(), new_body)
            }
        }
    }
    rewrite(term, &mut M(var))
}

/// Replaces the free occurrences of `target` in `base` by `value`.
///
/// Passing under an abstraction over `x` rebinds it: the parameter becomes
/// `x'` and the body's own occurrences of `x` are marked before `value` goes
/// in, so any `x` that `value` carries stays free.
pub fn substitute(base: &TermRef, target: &Var, value: &TermRef) -> TermRef {
    struct M<'a> {
        target: &'a Var,
        value: &'a TermRef,
    }
    impl<'a> Rewriter for M<'a> {
        fn on_var(&mut self, term: &TermRef, var: &Var) -> TermRef {
            self.target.select(var, self.value.clone(), term.clone())
        }
        fn on_abs(&mut self, term: &TermRef, param: &Var, body: &TermRef) -> TermRef {
            if self.target.same(param) {
                return term.clone();
            }
            let body = mark(body, param);
            Term::abs(param.bind(), rewrite(&body, self))
        }
    }
    rewrite(base, &mut M { target, value })
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::var::Name::*;

    macro_rules! var {
        ($n:expr) => {
            Term::name($n)
        };
    }
    macro_rules! lambda {
        ($x:expr, $body: expr) => {
            Term::abs($x, $body)
        };
    }
    macro_rules! apply {
        ($lhs:expr, $rhs: expr) => {
            Term::apply($lhs, $rhs)
        };
    }

    #[test]
    fn test_mark_free_only() {
        let x = Var::from(X);
        let term = apply!(var!(X), lambda!(X, var!(X)));
        assert_eq!(
            mark(&term, &x),
            apply!(Term::bound(x.clone()), lambda!(X, var!(X)))
        );
        let term = apply!(var!(Y), lambda!(T, var!(X)));
        assert_eq!(
            mark(&term, &x),
            apply!(var!(Y), lambda!(T, Term::bound(x)))
        );
    }

    #[test]
    fn test_mark_nests() {
        let x = Var::from(X);
        let once = mark(&var!(X), &x);
        assert_eq!(once, Term::bound(x.clone()));
        assert_eq!(mark(&once, &x), once);
        assert_eq!(mark(&once, &x.bind()), Term::bound(x.bind()));
    }

    #[test]
    fn test_mark_shares_untouched() {
        let term = apply!(var!(Y), lambda!(T, var!(F)));
        assert!(Rc::ptr_eq(&mark(&term, &X.into()), &term));
    }

    #[test]
    fn test_substitute_var() {
        let value = lambda!(T, var!(T));
        assert_eq!(substitute(&var!(X), &X.into(), &value), value);
        assert_eq!(substitute(&var!(Y), &X.into(), &value), var!(Y));
        assert_eq!(
            substitute(&Term::bound(X.into()), &X.into(), &value),
            Term::bound(X.into())
        );
    }

    #[test]
    fn test_substitute_shadowed() {
        let term = lambda!(X, apply!(var!(X), var!(Y)));
        assert!(Rc::ptr_eq(&substitute(&term, &X.into(), &var!(F)), &term));
    }

    #[test]
    fn test_substitute_avoids_capture() {
        // (λy.[x y])[x := y] must not capture the incoming y.
        let term = lambda!(Y, apply!(var!(X), var!(Y)));
        let y = Var::from(Y);
        assert_eq!(
            substitute(&term, &X.into(), &var!(Y)),
            lambda!(y.bind(), apply!(var!(Y), Term::bound(y)))
        );
    }

    #[test]
    fn test_substitute_into_stuck() {
        let term = Term::stuck(apply!(var!(F), var!(X)));
        assert_eq!(
            substitute(&term, &X.into(), &var!(T)),
            Term::stuck(apply!(var!(F), var!(T)))
        );
    }
}
