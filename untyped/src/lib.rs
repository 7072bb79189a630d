//! Call-by-value evaluator for the untyped lambda calculus over a closed
//! four-name alphabet.
//!
//! Capture is avoided without fresh names: when substitution passes under a
//! binder, the binder and its own occurrences get one more [`Var::Bound`]
//! layer, so they can no longer be confused with anything the substituted
//! term brings in.

pub mod church;
pub mod eval;
pub mod subst;
pub mod term;
pub mod var;

pub use eval::{apply, evaluate, evaluate_bounded, EvalError};
pub use subst::{mark, substitute};
pub use term::{render, Term, TermRef};
pub use var::{Name, Var};
