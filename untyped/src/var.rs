use std::rc::Rc;

/// The closed alphabet of variable names.
#[derive(PartialEq, Eq, Clone, Copy, derive_more::Display, Debug)]
pub enum Name {
    #[display(fmt = "x")]
    X,
    #[display(fmt = "y")]
    Y,
    #[display(fmt = "t")]
    T,
    #[display(fmt = "f")]
    F,
}

impl Name {
    pub const ALL: [Name; 4] = [Name::X, Name::Y, Name::T, Name::F];
}

/// A variable occurrence or binder.
///
/// `Bound` marks an occurrence that an enclosing abstraction already owns, so
/// that a same-named variable carried in by substitution stays distinct from
/// it. Every rebinding adds one more layer.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Var {
    Name(Name),
    Bound(Rc<Var>),
}

impl Var {
    pub fn bind(&self) -> Var {
        Var::Bound(Rc::new(self.clone()))
    }

    /// Whether `self` and `other` denote the same variable.
    ///
    /// A bound variable only ever matches another bound variable whose
    /// unwrapped form matches; it never matches a plain name, even one with the
    /// same base.
    pub fn same(&self, other: &Var) -> bool {
        match (self, other) {
            (Var::Name(lhs), Var::Name(rhs)) => lhs == rhs,
            (Var::Bound(lhs), Var::Bound(rhs)) => lhs.same(rhs),
            (Var::Name(_), Var::Bound(_)) | (Var::Bound(_), Var::Name(_)) => false,
        }
    }

    /// Returns `then` if `self` and `other` denote the same variable, `otherwise` if not.
    pub fn select<T>(&self, other: &Var, then: T, otherwise: T) -> T {
        if self.same(other) {
            then
        } else {
            otherwise
        }
    }

    pub fn base(&self) -> Name {
        match self {
            Var::Name(name) => *name,
            Var::Bound(inner) => inner.base(),
        }
    }

    /// Number of rebinding layers around the base name.
    pub fn depth(&self) -> usize {
        match self {
            Var::Name(_) => 0,
            Var::Bound(inner) => inner.depth() + 1,
        }
    }
}

impl From<Name> for Var {
    fn from(name: Name) -> Self {
        Var::Name(name)
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Var::Name(name) => f.write_fmt(format_args!("{name}")),
            Var::Bound(inner) => f.write_fmt(format_args!("{inner}'")),
        }
    }
}
