//! Canonicalizing constructors.
//!
//! These free functions are the only way to allocate formula nodes. Each one folds the
//! statically decidable cases first and only allocates a node when no rule applies:
//!
//! | Builder            | Folding                                              |
//! |--------------------|------------------------------------------------------|
//! | [`and`]            | any `False` operand gives `False`, `True` is dropped |
//! | [`or`]             | any `True` operand gives `True`, `False` is dropped  |
//! | [`not`]            | `!True = False`, `!False = True` (no double negation)|
//! | [`eq`] [`leq`] [`geq`] | structurally equal operands give `True`          |
//! | [`neq`] [`lt`] [`gt`]  | structurally equal operands give `False`         |
//! | [`forall`]         | none                                                 |
//!
//! Relational builders accept anything convertible into an [`Expression`], so numeric literals
//! and variables may appear on either side.
use log::trace;

use crate::{
    expression::Expression,
    formula::{Formula, FormulaCell},
    variable::Variables,
};

/// Conjunction `f1 and f2`.
pub fn and<F1: Into<Formula>, F2: Into<Formula>>(f1: F1, f2: F2) -> Formula {
    let (f1, f2) = (f1.into(), f2.into());
    if f1.is_false() || f2.is_false() {
        trace!("and({f1}, {f2}) folded to False");
        return Formula::false_();
    }
    if f1.is_true() {
        trace!("and(True, {f2}) folded to its right operand");
        return f2;
    }
    if f2.is_true() {
        trace!("and({f1}, True) folded to its left operand");
        return f1;
    }
    Formula::new(FormulaCell::And(f1, f2))
}

/// Disjunction `f1 or f2`.
pub fn or<F1: Into<Formula>, F2: Into<Formula>>(f1: F1, f2: F2) -> Formula {
    let (f1, f2) = (f1.into(), f2.into());
    if f1.is_true() || f2.is_true() {
        trace!("or({f1}, {f2}) folded to True");
        return Formula::true_();
    }
    if f1.is_false() {
        trace!("or(False, {f2}) folded to its right operand");
        return f2;
    }
    if f2.is_false() {
        trace!("or({f1}, False) folded to its left operand");
        return f1;
    }
    Formula::new(FormulaCell::Or(f1, f2))
}

/// Negation `!f`. A double negation is kept as is.
pub fn not<F: Into<Formula>>(f: F) -> Formula {
    let f = f.into();
    if f.is_true() {
        trace!("not(True) folded to False");
        return Formula::false_();
    }
    if f.is_false() {
        trace!("not(False) folded to True");
        return Formula::true_();
    }
    Formula::new(FormulaCell::Not(f))
}

/// Universal quantification of `f` over `vars`. Always allocates.
pub fn forall<V: Into<Variables>, F: Into<Formula>>(vars: V, f: F) -> Formula {
    Formula::new(FormulaCell::Forall {
        vars: vars.into(),
        body: f.into(),
    })
}

/// Shared body of the six relational builders: `reflexive` is the value of `e R e`.
fn relational(
    cell: fn(Expression, Expression) -> FormulaCell,
    reflexive: bool,
    e1: Expression,
    e2: Expression,
) -> Formula {
    if e1.equal_to(&e2) {
        trace!("relation over structurally equal operands {e1} folded to {reflexive}");
        return Formula::from(reflexive);
    }
    Formula::new(cell(e1, e2))
}

/// `e1 = e2`
pub fn eq<E1: Into<Expression>, E2: Into<Expression>>(e1: E1, e2: E2) -> Formula {
    relational(FormulaCell::Eq, true, e1.into(), e2.into())
}

/// `e1 != e2`
pub fn neq<E1: Into<Expression>, E2: Into<Expression>>(e1: E1, e2: E2) -> Formula {
    relational(FormulaCell::Neq, false, e1.into(), e2.into())
}

/// `e1 < e2`
pub fn lt<E1: Into<Expression>, E2: Into<Expression>>(e1: E1, e2: E2) -> Formula {
    relational(FormulaCell::Lt, false, e1.into(), e2.into())
}

/// `e1 <= e2`
pub fn leq<E1: Into<Expression>, E2: Into<Expression>>(e1: E1, e2: E2) -> Formula {
    relational(FormulaCell::Leq, true, e1.into(), e2.into())
}

/// `e1 > e2`
pub fn gt<E1: Into<Expression>, E2: Into<Expression>>(e1: E1, e2: E2) -> Formula {
    relational(FormulaCell::Gt, false, e1.into(), e2.into())
}

/// `e1 >= e2`
pub fn geq<E1: Into<Expression>, E2: Into<Expression>>(e1: E1, e2: E2) -> Formula {
    relational(FormulaCell::Geq, true, e1.into(), e2.into())
}
