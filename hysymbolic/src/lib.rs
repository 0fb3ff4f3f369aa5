//! Hysymbolic: immutable, canonicalizing symbolic formulas over arithmetic terms.
//!
//! This crate provides the formula layer of hyperion's symbolic reasoning: relations
//! (`=`, `!=`, `<`, `<=`, `>`, `>=`) between arithmetic [`expression::Expression`]s, combined with
//! boolean connectives and universal quantification.
//!
//! Design
//!  - A [`formula::Formula`] is a cheap-to-clone handle over a shared, immutable node. Nodes are
//!    never mutated after construction, so sub-formulas are freely shared between parents and
//!    across threads.
//!  - Nodes are only built through canonicalizing constructors ([`formula::func`] and the `&`,
//!    `|`, `!` operators) which fold statically decidable cases (`x & False`, `e = e`, ...)
//!    before allocating.
//!  - Equality is structural and backed by a hash precomputed at construction time.
//!
//! Example
//! ```
//! use hysymbolic::prelude::*;
//!
//! let x = Variable::new("x");
//! let y = Variable::new("y");
//!
//! // Canonicalization at construction time
//! assert!(eq(&x, &x).is_true());
//! assert_eq!(lt(&x, &y) & Formula::true_(), lt(&x, &y));
//!
//! // Evaluation under an assignment
//! let f = eq(1.0, &x);
//! assert_eq!(f.evaluate(&Environment::from([(x.clone(), 1.0)])), Ok(true));
//! assert_eq!(f.evaluate(&Environment::from([(x.clone(), 2.0)])), Ok(false));
//!
//! // Quantifiers are represented but not evaluated
//! let q = forall(x.clone(), leq(&x, &y));
//! assert_eq!(q.to_string(), "forall({x}. (x <= y))");
//! assert!(q.evaluate(&Environment::new()).unwrap_err().is_not_implemented());
//! ```

/// Variable assignments used during evaluation.
pub mod environment;
/// Error type returned by evaluation.
pub mod error;
/// Arithmetic terms compared by relational formulas.
pub mod expression;
/// Formulas: handle, node kinds, constructors and rendering.
pub mod formula;
/// Utility helpers (hashing).
pub mod utils;
/// Variables and variable sets.
pub mod variable;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Formula`, `FormulaKind`, `FormulaCell`
    //! - Canonicalizing constructors from `func::*`
    //! - Pretty-printing via `PrettyFormula`
    //! - Terms, variables and environments
    pub use crate::environment::Environment;
    pub use crate::error::{SymbolicError, SymbolicResult};
    pub use crate::expression::{Expression, ExpressionCell, ExpressionKind};
    pub use crate::formula::{
        Formula, FormulaCell, FormulaKind,
        func::*,
        pretty::{PrettyConfig, PrettyFormula},
    };
    pub use crate::variable::{Variable, Variables};
}
