//! Node shapes of a [`Formula`] and their per-kind behavior.
use log::debug;
use smallvec::SmallVec;

use crate::{
    environment::Environment,
    error::{SymbolicError, SymbolicResult},
    expression::Expression,
    formula::{Formula, FormulaKind},
    utils::hash::{hash_combine, hash_value},
    variable::Variables,
};

/// One formula node. Relational operands and connective children are order-significant.
#[derive(Debug, Clone)]
pub enum FormulaCell {
    True,
    False,

    /// `e1 = e2`
    Eq(Expression, Expression),
    /// `e1 != e2`
    Neq(Expression, Expression),
    /// `e1 < e2`
    Lt(Expression, Expression),
    /// `e1 <= e2`
    Leq(Expression, Expression),
    /// `e1 > e2`
    Gt(Expression, Expression),
    /// `e1 >= e2`
    Geq(Expression, Expression),

    And(Formula, Formula),
    Or(Formula, Formula),
    Not(Formula),

    /// Universal quantification of `body` over the bound `vars`.
    Forall { vars: Variables, body: Formula },
}

impl FormulaCell {
    pub fn kind(&self) -> FormulaKind {
        match self {
            FormulaCell::True => FormulaKind::True,
            FormulaCell::False => FormulaKind::False,
            FormulaCell::Eq(..) => FormulaKind::Eq,
            FormulaCell::Neq(..) => FormulaKind::Neq,
            FormulaCell::Lt(..) => FormulaKind::Lt,
            FormulaCell::Leq(..) => FormulaKind::Leq,
            FormulaCell::Gt(..) => FormulaKind::Gt,
            FormulaCell::Geq(..) => FormulaKind::Geq,
            FormulaCell::And(..) => FormulaKind::And,
            FormulaCell::Or(..) => FormulaKind::Or,
            FormulaCell::Not(_) => FormulaKind::Not,
            FormulaCell::Forall { .. } => FormulaKind::Forall,
        }
    }

    /// Operands of a relational node.
    pub fn relational_operands(&self) -> Option<(&Expression, &Expression)> {
        match self {
            FormulaCell::Eq(e1, e2)
            | FormulaCell::Neq(e1, e2)
            | FormulaCell::Lt(e1, e2)
            | FormulaCell::Leq(e1, e2)
            | FormulaCell::Gt(e1, e2)
            | FormulaCell::Geq(e1, e2) => Some((e1, e2)),
            _ => None,
        }
    }

    /// `hash(node) = combine(kind, children hashes in order)`.
    pub(crate) fn compute_hash(&self) -> u64 {
        let seed = hash_value(&(self.kind() as u8));
        match self {
            FormulaCell::True | FormulaCell::False => seed,
            FormulaCell::Eq(e1, e2)
            | FormulaCell::Neq(e1, e2)
            | FormulaCell::Lt(e1, e2)
            | FormulaCell::Leq(e1, e2)
            | FormulaCell::Gt(e1, e2)
            | FormulaCell::Geq(e1, e2) => {
                hash_combine(hash_combine(seed, e1.get_hash()), e2.get_hash())
            }
            FormulaCell::And(f1, f2) | FormulaCell::Or(f1, f2) => {
                hash_combine(hash_combine(seed, f1.get_hash()), f2.get_hash())
            }
            FormulaCell::Not(f) => hash_combine(seed, f.get_hash()),
            FormulaCell::Forall { vars, body } => {
                hash_combine(hash_combine(seed, vars.get_hash()), body.get_hash())
            }
        }
    }

    /// Compare the payload of two cells of the same kind. Expression operands and binders are
    /// compared here; child formula pairs are pushed to `pending` for the caller to check.
    pub(crate) fn shallow_equal<'a>(
        &'a self,
        other: &'a FormulaCell,
        pending: &mut SmallVec<[(&'a Formula, &'a Formula); 12]>,
    ) -> bool {
        match (self, other) {
            (FormulaCell::True, FormulaCell::True) | (FormulaCell::False, FormulaCell::False) => {
                true
            }
            (FormulaCell::Eq(a1, a2), FormulaCell::Eq(b1, b2))
            | (FormulaCell::Neq(a1, a2), FormulaCell::Neq(b1, b2))
            | (FormulaCell::Lt(a1, a2), FormulaCell::Lt(b1, b2))
            | (FormulaCell::Leq(a1, a2), FormulaCell::Leq(b1, b2))
            | (FormulaCell::Gt(a1, a2), FormulaCell::Gt(b1, b2))
            | (FormulaCell::Geq(a1, a2), FormulaCell::Geq(b1, b2)) => {
                a1.equal_to(b1) && a2.equal_to(b2)
            }
            (FormulaCell::And(a1, a2), FormulaCell::And(b1, b2))
            | (FormulaCell::Or(a1, a2), FormulaCell::Or(b1, b2)) => {
                pending.push((a2, b2));
                pending.push((a1, b1));
                true
            }
            (FormulaCell::Not(a), FormulaCell::Not(b)) => {
                pending.push((a, b));
                true
            }
            (
                FormulaCell::Forall { vars: va, body: a },
                FormulaCell::Forall { vars: vb, body: b },
            ) => {
                if va != vb {
                    return false;
                }
                pending.push((a, b));
                true
            }
            _ => false,
        }
    }

    /// Move the child formulas of this cell into `pending`. Expression operands are dropped here.
    pub(crate) fn release_into(self, pending: &mut SmallVec<[Formula; 8]>) {
        match self {
            FormulaCell::And(f1, f2) | FormulaCell::Or(f1, f2) => {
                pending.push(f1);
                pending.push(f2);
            }
            FormulaCell::Not(f) => pending.push(f),
            FormulaCell::Forall { body, .. } => pending.push(body),
            _ => {}
        }
    }

    pub fn free_variables(&self) -> Variables {
        match self {
            FormulaCell::True | FormulaCell::False => Variables::new(),
            FormulaCell::Eq(e1, e2)
            | FormulaCell::Neq(e1, e2)
            | FormulaCell::Lt(e1, e2)
            | FormulaCell::Leq(e1, e2)
            | FormulaCell::Gt(e1, e2)
            | FormulaCell::Geq(e1, e2) => e1.get_variables() | e2.get_variables(),
            FormulaCell::And(f1, f2) | FormulaCell::Or(f1, f2) => {
                f1.get_free_variables() | f2.get_free_variables()
            }
            FormulaCell::Not(f) => f.get_free_variables(),
            FormulaCell::Forall { vars, body } => body.get_free_variables() - vars,
        }
    }

    pub fn evaluate(&self, env: &Environment) -> SymbolicResult<bool> {
        Ok(match self {
            FormulaCell::True => true,
            FormulaCell::False => false,
            FormulaCell::Eq(e1, e2) => e1.evaluate(env)? == e2.evaluate(env)?,
            FormulaCell::Neq(e1, e2) => e1.evaluate(env)? != e2.evaluate(env)?,
            FormulaCell::Lt(e1, e2) => e1.evaluate(env)? < e2.evaluate(env)?,
            FormulaCell::Leq(e1, e2) => e1.evaluate(env)? <= e2.evaluate(env)?,
            FormulaCell::Gt(e1, e2) => e1.evaluate(env)? > e2.evaluate(env)?,
            FormulaCell::Geq(e1, e2) => e1.evaluate(env)? >= e2.evaluate(env)?,
            // Both sides are always evaluated so that a missing binding is never masked
            FormulaCell::And(f1, f2) => {
                let lhs = f1.evaluate(env)?;
                let rhs = f2.evaluate(env)?;
                lhs && rhs
            }
            FormulaCell::Or(f1, f2) => {
                let lhs = f1.evaluate(env)?;
                let rhs = f2.evaluate(env)?;
                lhs || rhs
            }
            FormulaCell::Not(f) => !f.evaluate(env)?,
            FormulaCell::Forall { vars, .. } => {
                debug!("Refusing to evaluate a universal quantifier over {vars}");
                return Err(SymbolicError::NotImplemented {
                    operation: "Formula::evaluate on forall",
                });
            }
        })
    }
}

impl std::fmt::Display for FormulaCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulaCell::True => f.write_str("True"),
            FormulaCell::False => f.write_str("False"),
            FormulaCell::Eq(e1, e2)
            | FormulaCell::Neq(e1, e2)
            | FormulaCell::Lt(e1, e2)
            | FormulaCell::Leq(e1, e2)
            | FormulaCell::Gt(e1, e2)
            | FormulaCell::Geq(e1, e2) => {
                let symbol = self.kind().relational_symbol().ok_or(std::fmt::Error)?;
                write!(f, "({e1} {symbol} {e2})")
            }
            FormulaCell::And(f1, f2) => write!(f, "({f1} and {f2})"),
            FormulaCell::Or(f1, f2) => write!(f, "({f1} or {f2})"),
            FormulaCell::Not(inner) => write!(f, "!({inner})"),
            FormulaCell::Forall { vars, body } => write!(f, "forall({vars}. {body})"),
        }
    }
}
