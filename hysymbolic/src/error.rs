//! Errors surfaced by evaluation.
//!
//! Construction, equality, hashing and display never fail. Only [`crate::formula::Formula::evaluate`]
//! and [`crate::expression::Expression::evaluate`] return a [`SymbolicResult`].
use strum::EnumIs;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum SymbolicError {
    /// The requested operation is a known capability gap (e.g. evaluating a quantifier).
    #[error("`{operation}` is not implemented yet.")]
    NotImplemented { operation: &'static str },

    /// Evaluation needed the value of a variable the environment does not bind.
    #[error(
        "The variable `{variable}` is not bound in the environment. Every free variable must be assigned before evaluation."
    )]
    UnboundVariable { variable: String },

    /// The divisor of a division evaluated to zero.
    #[error("Division by zero while evaluating `{expression}`.")]
    DivisionByZero { expression: String },
}

pub type SymbolicResult<T> = Result<T, SymbolicError>;
