//! Arithmetic terms over real-valued variables.
//!
//! Role
//! - [`Expression`] is the numeric sub-language relational formulas compare. It is a cheap-to-clone
//!   handle over a shared, immutable [`ExpressionCell`].
//! - Terms are built from constants, variables and the operators `+ - * /` and unary `-`
//!   (see [`ops`]); an `f64` literal is accepted on either side of a binary operator.
//!
//! Equality semantics
//! - [`Expression::equal_to`] is structural. Constants compare by bit pattern (after folding
//!   `-0.0` into `0.0`), so a `NaN` constant equals itself and the hash/equality contract holds.
//!
//! Example
//! ```
//! use hysymbolic::prelude::*;
//!
//! let x = Variable::new("x");
//! let e = (&x + 1.0) * 2.0;
//! assert_eq!(e.to_string(), "((x + 1) * 2)");
//! assert_eq!(e.evaluate(&Environment::from([(x, 3.0)])), Ok(8.0));
//! ```
pub mod ops;

use std::sync::Arc;

use smallvec::SmallVec;
use strum::EnumIs;

use crate::{
    environment::Environment,
    error::{SymbolicError, SymbolicResult},
    utils::hash::{hash_combine, hash_value},
    variable::{Variable, Variables},
};

/// Discriminant of an [`ExpressionCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs)]
#[repr(u8)]
pub enum ExpressionKind {
    Constant,
    Var,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
}

/// Shape of one term node.
#[derive(Debug, Clone)]
pub enum ExpressionCell {
    Constant(f64),
    Var(Variable),
    Neg(Expression),
    Add(Expression, Expression),
    Sub(Expression, Expression),
    Mul(Expression, Expression),
    Div(Expression, Expression),
}

impl ExpressionCell {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            ExpressionCell::Constant(_) => ExpressionKind::Constant,
            ExpressionCell::Var(_) => ExpressionKind::Var,
            ExpressionCell::Neg(_) => ExpressionKind::Neg,
            ExpressionCell::Add(..) => ExpressionKind::Add,
            ExpressionCell::Sub(..) => ExpressionKind::Sub,
            ExpressionCell::Mul(..) => ExpressionKind::Mul,
            ExpressionCell::Div(..) => ExpressionKind::Div,
        }
    }

    fn compute_hash(&self) -> u64 {
        let seed = hash_value(&(self.kind() as u8));
        match self {
            ExpressionCell::Constant(v) => hash_combine(seed, hash_value(&v.to_bits())),
            ExpressionCell::Var(v) => hash_combine(seed, v.get_hash()),
            ExpressionCell::Neg(e) => hash_combine(seed, e.get_hash()),
            ExpressionCell::Add(e1, e2)
            | ExpressionCell::Sub(e1, e2)
            | ExpressionCell::Mul(e1, e2)
            | ExpressionCell::Div(e1, e2) => {
                hash_combine(hash_combine(seed, e1.get_hash()), e2.get_hash())
            }
        }
    }

    fn release_into(self, pending: &mut SmallVec<[Expression; 8]>) {
        match self {
            ExpressionCell::Constant(_) | ExpressionCell::Var(_) => {}
            ExpressionCell::Neg(e) => pending.push(e),
            ExpressionCell::Add(e1, e2)
            | ExpressionCell::Sub(e1, e2)
            | ExpressionCell::Mul(e1, e2)
            | ExpressionCell::Div(e1, e2) => {
                pending.push(e1);
                pending.push(e2);
            }
        }
    }
}

#[derive(Debug)]
struct ExpressionNode {
    hash: u64,
    cell: ExpressionCell,
}

// Same iterative release as formula nodes.
impl Drop for ExpressionNode {
    fn drop(&mut self) {
        let mut pending: SmallVec<[Expression; 8]> = SmallVec::new();
        std::mem::replace(&mut self.cell, ExpressionCell::Constant(0.0)).release_into(&mut pending);

        while let Some(child) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(child.0) {
                std::mem::replace(&mut node.cell, ExpressionCell::Constant(0.0))
                    .release_into(&mut pending);
            }
        }
    }
}

/// Immutable arithmetic term. Cloning shares the underlying node.
#[derive(Debug, Clone)]
pub struct Expression(Arc<ExpressionNode>);

impl Expression {
    fn new(cell: ExpressionCell) -> Self {
        let hash = cell.compute_hash();
        Self(Arc::new(ExpressionNode { hash, cell }))
    }

    /// Numeric literal. `-0.0` is stored as `0.0`.
    pub fn constant(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        Self::new(ExpressionCell::Constant(value))
    }

    pub fn variable(var: &Variable) -> Self {
        Self::new(ExpressionCell::Var(var.clone()))
    }

    pub(crate) fn unary(cell: fn(Expression) -> ExpressionCell, e: Expression) -> Self {
        Self::new(cell(e))
    }

    pub(crate) fn binary(
        cell: fn(Expression, Expression) -> ExpressionCell,
        e1: Expression,
        e2: Expression,
    ) -> Self {
        Self::new(cell(e1, e2))
    }

    #[inline]
    pub fn get_kind(&self) -> ExpressionKind {
        self.0.cell.kind()
    }

    #[inline]
    pub fn get_hash(&self) -> u64 {
        self.0.hash
    }

    /// Borrow the node for pattern matching.
    #[inline]
    pub fn cell(&self) -> &ExpressionCell {
        &self.0.cell
    }

    /// Whether both handles share the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Expression) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Structural equality, O(n) in the number of nodes in the worst case.
    pub fn equal_to(&self, other: &Expression) -> bool {
        let mut stack: SmallVec<[(&Expression, &Expression); 12]> = SmallVec::new();
        stack.push((self, other));

        while let Some((a, b)) = stack.pop() {
            if a.ptr_eq(b) {
                continue;
            }
            if a.get_kind() != b.get_kind() || a.get_hash() != b.get_hash() {
                return false;
            }

            match (a.cell(), b.cell()) {
                (ExpressionCell::Constant(x), ExpressionCell::Constant(y)) => {
                    if x.to_bits() != y.to_bits() {
                        return false;
                    }
                }
                (ExpressionCell::Var(x), ExpressionCell::Var(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (ExpressionCell::Neg(x), ExpressionCell::Neg(y)) => stack.push((x, y)),
                (ExpressionCell::Add(a1, a2), ExpressionCell::Add(b1, b2))
                | (ExpressionCell::Sub(a1, a2), ExpressionCell::Sub(b1, b2))
                | (ExpressionCell::Mul(a1, a2), ExpressionCell::Mul(b1, b2))
                | (ExpressionCell::Div(a1, a2), ExpressionCell::Div(b1, b2)) => {
                    stack.push((a2, b2));
                    stack.push((a1, b1));
                }
                _ => return false,
            }
        }

        true
    }

    /// Variables occurring in this term.
    pub fn get_variables(&self) -> Variables {
        match self.cell() {
            ExpressionCell::Constant(_) => Variables::new(),
            ExpressionCell::Var(v) => Variables::from(v.clone()),
            ExpressionCell::Neg(e) => e.get_variables(),
            ExpressionCell::Add(e1, e2)
            | ExpressionCell::Sub(e1, e2)
            | ExpressionCell::Mul(e1, e2)
            | ExpressionCell::Div(e1, e2) => e1.get_variables() | e2.get_variables(),
        }
    }

    /// Evaluate under `env`. Fails on unbound variables and on division by zero.
    pub fn evaluate(&self, env: &Environment) -> SymbolicResult<f64> {
        Ok(match self.cell() {
            ExpressionCell::Constant(v) => *v,
            ExpressionCell::Var(v) => env.lookup(v)?,
            ExpressionCell::Neg(e) => -e.evaluate(env)?,
            ExpressionCell::Add(e1, e2) => e1.evaluate(env)? + e2.evaluate(env)?,
            ExpressionCell::Sub(e1, e2) => e1.evaluate(env)? - e2.evaluate(env)?,
            ExpressionCell::Mul(e1, e2) => e1.evaluate(env)? * e2.evaluate(env)?,
            ExpressionCell::Div(e1, e2) => {
                let numerator = e1.evaluate(env)?;
                let denominator = e2.evaluate(env)?;
                if denominator == 0.0 {
                    return Err(SymbolicError::DivisionByZero {
                        expression: self.to_string(),
                    });
                }
                numerator / denominator
            }
        })
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Expression {}

impl std::hash::Hash for Expression {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.get_hash());
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::constant(value)
    }
}

impl From<Variable> for Expression {
    fn from(value: Variable) -> Self {
        Expression::new(ExpressionCell::Var(value))
    }
}

impl From<&Variable> for Expression {
    fn from(value: &Variable) -> Self {
        Expression::variable(value)
    }
}

impl From<&Expression> for Expression {
    fn from(value: &Expression) -> Self {
        value.clone()
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (lhs, op, rhs) = match self.cell() {
            ExpressionCell::Constant(v) => return write!(f, "{v}"),
            ExpressionCell::Var(v) => return write!(f, "{v}"),
            ExpressionCell::Neg(e) => return write!(f, "-({e})"),
            ExpressionCell::Add(e1, e2) => (e1, "+", e2),
            ExpressionCell::Sub(e1, e2) => (e1, "-", e2),
            ExpressionCell::Mul(e1, e2) => (e1, "*", e2),
            ExpressionCell::Div(e1, e2) => (e1, "/", e2),
        };
        write!(f, "({lhs} {op} {rhs})")
    }
}
