use std::convert::Infallible;

use thiserror::Error;

use crate::{
    subst::substitute,
    term::{Term, TermRef},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Gave up after {limit} beta reductions")]
    OutOfFuel { limit: usize },
}
pub type Result<T> = std::result::Result<T, EvalError>;

/// Applies a value to an argument: one beta reduction for an abstraction,
/// a stuck application for anything headed by a variable.
pub fn apply(value: &TermRef, argument: &TermRef) -> TermRef {
    match value.as_ref() {
        Term::Abs(param, body) => {
            log::trace!("beta {param} := {argument}");
            substitute(body, param, argument)
        }
        Term::Var(var) => {
            log::trace!("stuck on {var}");
            Term::stuck(Term::apply(value.clone(), argument.clone()))
        }
        Term::Stuck(inner) => Term::stuck(Term::apply(inner.clone(), argument.clone())),
        Term::Apply(_, _) => Term::apply(value.clone(), argument.clone()),
    }
}

trait Budget {
    type Error;
    fn spend(&mut self) -> std::result::Result<(), Self::Error>;
}

struct Unbounded;
impl Budget for Unbounded {
    type Error = Infallible;
    fn spend(&mut self) -> std::result::Result<(), Infallible> {
        Ok(())
    }
}

struct Fuel {
    limit: usize,
    remaining: usize,
}
impl Budget for Fuel {
    type Error = EvalError;
    fn spend(&mut self) -> Result<()> {
        match self.remaining.checked_sub(1) {
            Some(remaining) => {
                self.remaining = remaining;
                Ok(())
            }
            None => {
                log::debug!("fuel exhausted after {} beta reductions", self.limit);
                Err(EvalError::OutOfFuel { limit: self.limit })
            }
        }
    }
}

fn eval_big<B: Budget>(term: &TermRef, budget: &mut B) -> std::result::Result<TermRef, B::Error> {
    Ok(match term.as_ref() {
        Term::Var(_) | Term::Abs(_, _) | Term::Stuck(_) => term.clone(),
        Term::Apply(lhs, rhs) => {
            let lhs = eval_big(lhs, budget)?;
            let rhs = eval_big(rhs, budget)?;
            if let Term::Abs(_, _) = lhs.as_ref() {
                budget.spend()?;
            }
            eval_big(&apply(&lhs, &rhs), budget)?
        }
    })
}

/// Call-by-value evaluation to weak-head normal form.
///
/// There is no step limit: a term without a normal form recurses until the
/// stack runs out. Use [`evaluate_bounded`] to cap the number of reductions.
pub fn evaluate(term: &TermRef) -> TermRef {
    match eval_big(term, &mut Unbounded) {
        Ok(term) => term,
        Err(never) => match never {},
    }
}

/// Same as [`evaluate`], but fails once more than `fuel` beta reductions
/// would be needed. Applications headed by variables cost nothing.
pub fn evaluate_bounded(term: &TermRef, fuel: usize) -> Result<TermRef> {
    eval_big(
        term,
        &mut Fuel {
            limit: fuel,
            remaining: fuel,
        },
    )
}
