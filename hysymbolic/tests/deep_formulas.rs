use hysymbolic::prelude::*;

const DEPTH: usize = 100_000;

fn negation_chain(base: &Formula, depth: usize) -> Formula {
    (0..depth).fold(base.clone(), |acc, _| not(acc))
}

#[test]
fn deep_negation_chain_is_compared_and_released() {
    let x = Variable::new("x");
    let base = lt(&x, 1.0);

    let a = negation_chain(&base, DEPTH);
    let b = negation_chain(&base, DEPTH);
    assert!(!a.ptr_eq(&b));
    assert!(a.equal_to(&b));

    drop(a);
    drop(b);
    assert_eq!(base.get_kind(), FormulaKind::Lt);
}

#[test]
fn releasing_a_deep_parent_keeps_shared_children() {
    let x = Variable::new("x");
    let base = geq(&x, 0.0);
    let middle = negation_chain(&base, DEPTH / 2);
    let top = negation_chain(&middle, DEPTH / 2);

    drop(top);
    assert_eq!(middle.get_kind(), FormulaKind::Not);
    assert!(middle.equal_to(&negation_chain(&base, DEPTH / 2)));
}

#[test]
fn deep_connective_spine_is_released() {
    let x = Variable::new("x");
    let f = (0..DEPTH).fold(Formula::true_(), |acc, i| {
        let leaf = lt(&x, i as f64);
        if i % 2 == 0 { and(leaf, acc) } else { or(acc, leaf) }
    });
    let q = forall(x.clone(), &f);
    assert_eq!(q.get_kind(), FormulaKind::Forall);
    drop(f);
    drop(q);
}

#[test]
fn deep_expression_is_released() {
    let x = Variable::new("x");
    let e = (0..DEPTH).fold(Expression::from(&x), |acc, i| {
        if i % 2 == 0 { -acc } else { acc + 1.0 }
    });
    let f = gt(&e, 0.0);
    assert_eq!(f.get_kind(), FormulaKind::Gt);

    drop(e);
    drop(f);
}
