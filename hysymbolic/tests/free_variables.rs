use hysymbolic::prelude::*;

#[test]
fn constants_have_no_free_variables() {
    assert!(Formula::true_().get_free_variables().is_empty());
    assert!(Formula::false_().get_free_variables().is_empty());
    assert!(lt(1.0, 2.0).get_free_variables().is_empty());
}

#[test]
fn relational_free_variables_are_term_variables() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let z = Variable::new("z");

    let f = leq(&x * &y, &z - &x);
    assert_eq!(
        f.get_free_variables(),
        Variables::from([x.clone(), y.clone(), z.clone()])
    );
    assert_eq!(eq(&x, 0.0).get_free_variables(), Variables::from(x));
}

#[test]
fn connectives_take_the_union() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let z = Variable::new("z");
    let f1 = eq(&x, &y);
    let f2 = gt(&y, &z);

    let expected = &f1.get_free_variables() | &f2.get_free_variables();
    assert_eq!(expected, Variables::from([x.clone(), y.clone(), z.clone()]));
    assert_eq!(and(&f1, &f2).get_free_variables(), expected);
    assert_eq!(or(&f1, &f2).get_free_variables(), expected);
    assert_eq!(not(&f1).get_free_variables(), f1.get_free_variables());
}

#[test]
fn forall_removes_bound_variables() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let body = lt(&x, &y);

    let q = forall(x.clone(), &body);
    assert_eq!(
        q.get_free_variables(),
        &body.get_free_variables() - &Variables::from(x.clone())
    );
    assert_eq!(q.get_free_variables(), Variables::from(y.clone()));

    // Binding a variable that does not occur is harmless
    let w = Variable::new("w");
    assert_eq!(
        forall(w, &body).get_free_variables(),
        body.get_free_variables()
    );

    // Nested binders
    let closed = forall(y.clone(), &q);
    assert!(closed.get_free_variables().is_empty());

    // A variable bound in one conjunct stays free in the other
    let mixed = and(&q, gt(&x, 0.0));
    assert_eq!(mixed.get_free_variables(), Variables::from([x, y]));
}

#[test]
fn iteration_order_follows_creation_order() {
    let a = Variable::new("a");
    let b = Variable::new("b");
    let c = Variable::new("c");
    let f = and(eq(&c, &a), lt(&b, 1.0));

    let vars = f.get_free_variables();
    let names: Vec<&str> = vars.iter().map(Variable::get_name).collect();
    assert_eq!(names, ["a", "b", "c"]);
}
