use hysymbolic::prelude::*;
use strum::IntoEnumIterator;
use termcolor::{Ansi, NoColor};

#[test]
fn display_is_fully_parenthesized() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let z = Variable::new("z");

    assert_eq!(eq(&x, &y).to_string(), "(x = y)");
    assert_eq!(
        and(eq(&x, &y), lt(&y, &z)).to_string(),
        "((x = y) and (y < z))"
    );
    assert_eq!(
        or(neq(&x, 1.0), geq(&z, -2.5)).to_string(),
        "((x != 1) or (z >= -2.5))"
    );
    assert_eq!(not(leq(&x, &y)).to_string(), "!((x <= y))");
    assert_eq!(gt(&x * (&y + 1.0), -(&z)).to_string(), "((x * (y + 1)) > -(z))");
    assert_eq!(Formula::true_().to_string(), "True");
    assert_eq!(Formula::false_().to_string(), "False");
    assert_eq!(
        forall([x.clone(), y.clone()], lt(&x, &y)).to_string(),
        "forall({x, y}. (x < y))"
    );
    assert_eq!(format!("{}", not(not(eq(&x, 0.0)))), "!(!((x = 0)))");
}

#[test]
fn relations_render_their_kind_symbol() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let builders: [fn(&Variable, &Variable) -> Formula; 6] = [
        |a, b| eq(a, b),
        |a, b| neq(a, b),
        |a, b| lt(a, b),
        |a, b| leq(a, b),
        |a, b| gt(a, b),
        |a, b| geq(a, b),
    ];

    let symbols: Vec<&str> = builders
        .iter()
        .map(|build| {
            let f = build(&x, &y);
            let symbol = f.get_kind().relational_symbol().unwrap();
            assert_eq!(f.to_string(), format!("(x {symbol} y)"));
            assert_eq!(f.pretty_string(), f.to_string());
            symbol
        })
        .collect();
    assert_eq!(symbols, ["=", "!=", "<", "<=", ">", ">="]);

    for kind in FormulaKind::iter() {
        assert_eq!(kind.relational_symbol().is_some(), kind.is_relational(), "{kind:?}");
    }
}

#[test]
fn display_depends_only_on_structure() {
    let x = Variable::new("x");
    let build = || and(or(lt(&x, 0.0), gt(&x, 1.0)), not(eq(&x, 0.5)));
    assert_eq!(build().to_string(), build().to_string());
    let f = build();
    assert_eq!(f.to_string(), f.to_string());
}

#[test]
fn pretty_string_matches_display_when_it_fits() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let f = forall(x.clone(), or(and(eq(&x, &y), lt(&y, 3.0)), not(gt(&x, 1.0))));

    assert_eq!(f.pretty_string(), f.to_string());
    assert_eq!(Formula::true_().pretty_string(), "True");
}

#[test]
fn pretty_string_breaks_long_formulas() {
    let vars: Vec<Variable> = (0..12).map(|i| Variable::new(format!("v{i}"))).collect();
    let f = vars
        .windows(2)
        .fold(Formula::true_(), |acc, w| and(acc, lt(&w[0], &w[1])));

    let flat = f.to_string();
    assert!(flat.len() > 40);
    let narrow = f.pretty_string_with_width(40);
    assert!(narrow.contains('\n'));
    // Only whitespace differs from the canonical rendering
    let squash = |s: &str| s.split_whitespace().collect::<String>();
    assert_eq!(squash(&narrow), squash(&flat));
}

#[test]
fn render_to_writers() {
    let x = Variable::new("x");
    let f = and(eq(&x, 1.0), not(lt(&x, 0.0)));

    let mut plain = NoColor::new(Vec::new());
    f.pretty_render_to(80, &mut plain).unwrap();
    assert_eq!(String::from_utf8(plain.into_inner()).unwrap(), f.to_string());

    let mut colored = Ansi::new(Vec::new());
    f.pretty_render_to(80, &mut colored).unwrap();
    let colored = String::from_utf8(colored.into_inner()).unwrap();
    assert!(colored.contains("\u{1b}["));
    assert!(colored.contains("and"));
}

#[test]
fn pretty_config_defaults() {
    let config = PrettyConfig::default();
    assert_eq!(config.width, None);
    assert!(config.effective_width() > 0);

    let fixed = PrettyConfig {
        width: Some(42),
        color: termcolor::ColorChoice::Never,
    };
    assert_eq!(fixed.effective_width(), 42);
}

#[test]
fn environment_and_variables_display() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    assert_eq!(Variables::new().to_string(), "{}");
    assert_eq!(Variables::from([y.clone(), x.clone()]).to_string(), "{x, y}");
    assert_eq!(
        Environment::from([(y.clone(), 2.0), (x.clone(), 1.5)]).to_string(),
        "{x -> 1.5, y -> 2}"
    );
}
