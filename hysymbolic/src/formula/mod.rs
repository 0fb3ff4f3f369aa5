//! Immutable symbolic formulas over arithmetic terms.
//!
//! Role
//! - [`Formula`] is a cheap-to-clone handle over a shared, immutable [`FormulaCell`]. A
//!   sub-formula may be referenced by many parents, so a formula is a DAG rather than a tree.
//! - Formulas are only built through the canonicalizing constructors in [`func`] (and the
//!   operator sugar in [`ops`]), which fold statically decidable cases before allocating.
//!
//! Equality semantics
//! - [`Formula::equal_to`] (and `==`) is structural. Comparison of any pair of nodes checks,
//!   in order: node identity, kind, precomputed hash, then children.
//! - Structurally equal formulas always have equal hashes; the converse does not hold.
//!
//! Example
//! ```
//! use hysymbolic::prelude::*;
//!
//! let x = Variable::new("x");
//! let y = Variable::new("y");
//! let f = eq(&x, &y) & lt(&y, 1.0);
//! assert_eq!(f.to_string(), "((x = y) and (y < 1))");
//!
//! let env = Environment::from([(x, 0.5), (y, 0.5)]);
//! assert_eq!(f.evaluate(&env), Ok(true));
//! ```
pub mod cell;
pub mod func;
pub mod ops;
pub mod pretty;

use std::sync::Arc;

use once_cell::sync::Lazy;
use smallvec::{SmallVec, smallvec};
use strum::{EnumIs, EnumIter};

pub use cell::FormulaCell;

use crate::{environment::Environment, error::SymbolicResult, variable::Variables};

/// Discriminant of a [`FormulaCell`]. The set of kinds is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumIter)]
#[repr(u8)]
pub enum FormulaKind {
    // Constants
    True,
    False,

    // Relations over expressions
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,

    // Connectives
    And,
    Or,
    Not,

    // Quantifiers
    Forall,
}

impl FormulaKind {
    /// Whether this kind compares two [`crate::expression::Expression`]s.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            FormulaKind::Eq
                | FormulaKind::Neq
                | FormulaKind::Lt
                | FormulaKind::Leq
                | FormulaKind::Gt
                | FormulaKind::Geq
        )
    }

    /// Infix symbol of a relational kind, as rendered by `Display`.
    pub fn relational_symbol(self) -> Option<&'static str> {
        match self {
            FormulaKind::Eq => Some("="),
            FormulaKind::Neq => Some("!="),
            FormulaKind::Lt => Some("<"),
            FormulaKind::Leq => Some("<="),
            FormulaKind::Gt => Some(">"),
            FormulaKind::Geq => Some(">="),
            _ => None,
        }
    }
}

struct FormulaNode {
    hash: u64,
    cell: FormulaCell,
}

// Children are released from a work stack, so dropping a deep formula never recurses.
impl Drop for FormulaNode {
    fn drop(&mut self) {
        let mut pending: SmallVec<[Formula; 8]> = SmallVec::new();
        std::mem::replace(&mut self.cell, FormulaCell::True).release_into(&mut pending);

        while let Some(child) = pending.pop() {
            // Shared children only lose one reference
            if let Some(mut node) = Arc::into_inner(child.0) {
                std::mem::replace(&mut node.cell, FormulaCell::True).release_into(&mut pending);
            }
        }
    }
}

/// Immutable formula handle. Cloning shares the underlying node.
///
/// A `Formula` always owns a node: there is no empty handle, so every method is total.
#[derive(Clone)]
pub struct Formula(Arc<FormulaNode>);

static TRUE: Lazy<Formula> = Lazy::new(|| Formula::new(FormulaCell::True));
static FALSE: Lazy<Formula> = Lazy::new(|| Formula::new(FormulaCell::False));

impl Formula {
    pub(crate) fn new(cell: FormulaCell) -> Self {
        let hash = cell.compute_hash();
        Self(Arc::new(FormulaNode { hash, cell }))
    }

    /// Build a node carrying an arbitrary hash, used to exercise collision handling.
    #[cfg(test)]
    pub(crate) fn with_hash(cell: FormulaCell, hash: u64) -> Self {
        Self(Arc::new(FormulaNode { hash, cell }))
    }

    /// The `True` singleton.
    pub fn true_() -> Formula {
        TRUE.clone()
    }

    /// The `False` singleton.
    pub fn false_() -> Formula {
        FALSE.clone()
    }

    #[inline]
    pub fn get_kind(&self) -> FormulaKind {
        self.0.cell.kind()
    }

    /// Precomputed hash, O(1).
    #[inline]
    pub fn get_hash(&self) -> u64 {
        self.0.hash
    }

    /// Borrow the node for pattern matching.
    #[inline]
    pub fn cell(&self) -> &FormulaCell {
        &self.0.cell
    }

    #[inline]
    pub fn is_true(&self) -> bool {
        self.get_kind().is_true()
    }

    #[inline]
    pub fn is_false(&self) -> bool {
        self.get_kind().is_false()
    }

    /// Whether both handles share the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Formula) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Variables occurring unbound in this formula.
    pub fn get_free_variables(&self) -> Variables {
        self.cell().free_variables()
    }

    /// Structural equality. Expect O(n) in the number of nodes in the worst case.
    pub fn equal_to(&self, other: &Formula) -> bool {
        let mut stack: SmallVec<[(&Formula, &Formula); 12]> = smallvec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            // Quick path: the very same node
            if a.ptr_eq(b) {
                continue;
            }
            if a.get_kind() != b.get_kind() {
                return false;
            }
            if a.get_hash() != b.get_hash() {
                return false;
            }

            // Same kind and hash, possibly a collision: compare children
            if !a.cell().shallow_equal(b.cell(), &mut stack) {
                return false;
            }
        }

        true
    }

    /// Evaluate under `env`.
    ///
    /// Fails if `env` does not bind one of [`Self::get_free_variables`], on division by zero
    /// inside a term, and unconditionally on `Forall` nodes.
    pub fn evaluate(&self, env: &Environment) -> SymbolicResult<bool> {
        self.cell().evaluate(env)
    }
}

impl From<bool> for Formula {
    fn from(value: bool) -> Self {
        if value {
            Formula::true_()
        } else {
            Formula::false_()
        }
    }
}

impl From<&Formula> for Formula {
    fn from(value: &Formula) -> Self {
        value.clone()
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Formula {}

impl std::hash::Hash for Formula {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.get_hash());
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.cell(), f)
    }
}

impl std::fmt::Debug for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Formula({:?}, {self})", self.get_kind())
    }
}
