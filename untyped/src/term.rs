use std::rc::Rc;

use crate::var::{Name, Var};

pub type TermRef = Rc<Term>;

/// An immutable term tree. Unchanged subtrees may be shared between terms.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `x`, `x'`, ...
    Var(Var),
    /// `[t t]`
    Apply(TermRef, TermRef),
    /// `(λx.t)`
    Abs(Var, TermRef),
    /// An application headed by a free variable; never reduces further.
    Stuck(TermRef),
}

impl Term {
    pub fn name(name: Name) -> TermRef {
        Self::var(name.into())
    }

    pub fn var(var: Var) -> TermRef {
        Rc::new(Term::Var(var))
    }

    pub fn bound(var: Var) -> TermRef {
        Rc::new(Term::Var(var.bind()))
    }

    pub fn apply(lhs: TermRef, rhs: TermRef) -> TermRef {
        Rc::new(Term::Apply(lhs, rhs))
    }

    pub fn abs(param: impl Into<Var>, body: TermRef) -> TermRef {
        Rc::new(Term::Abs(param.into(), body))
    }

    pub fn stuck(inner: TermRef) -> TermRef {
        Rc::new(Term::Stuck(inner))
    }

    /// Left-nested application `[[[head a] b] c]`.
    pub fn apply_all(head: TermRef, args: impl IntoIterator<Item = TermRef>) -> TermRef {
        args.into_iter().fold(head, Self::apply)
    }

    pub fn is_value(&self) -> bool {
        !matches!(self, Term::Apply(_, _))
    }

    pub fn is_stuck(&self) -> bool {
        matches!(self, Term::Stuck(_))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(var) => f.write_fmt(format_args!("{var}")),
            Term::Apply(lhs, rhs) => f.write_fmt(format_args!("[{lhs} {rhs}]")),
            Term::Abs(param, body) => f.write_fmt(format_args!("(λ{param}.{body})")),
            Term::Stuck(inner) => f.write_fmt(format_args!("{inner}")),
        }
    }
}

pub fn render(term: &Term) -> String {
    term.to_string()
}
