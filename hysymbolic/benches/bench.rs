use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hysymbolic::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn build_simple_formula(x: &Variable, y: &Variable) -> Formula {
    // forall x. (x = y) and (y < 1)
    forall(x.clone(), and(eq(x, y), lt(y, 1.0)))
}

fn build_complex_formula(pool: &[Variable], seed: u64) -> Formula {
    // Build a medium-sized formula by nesting random connectives. Use randomness seeded for
    // determinism.
    fn next_term(budget: usize, rng: &mut impl Rng, pool: &[Variable]) -> Expression {
        if budget == 0 || rng.random_bool(0.4) {
            return match rng.random_range(0..=1) {
                0 => Expression::constant(rng.random_range(-4..=4) as f64),
                _ => Expression::from(&pool[rng.random_range(0..pool.len())]),
            };
        }
        let lhs = next_term(budget - 1, rng, pool);
        let rhs = next_term(budget - 1, rng, pool);
        match rng.random_range(0..=2) {
            0 => lhs + rhs,
            1 => lhs - rhs,
            _ => lhs * rhs,
        }
    }

    fn next_create(budget: usize, rng: &mut impl Rng, pool: &[Variable]) -> Formula {
        if budget == 0 || rng.random_bool(0.1) {
            let e1 = next_term(2, rng, pool);
            let e2 = next_term(2, rng, pool);
            return match rng.random_range(0..=5) {
                0 => eq(e1, e2),
                1 => neq(e1, e2),
                2 => lt(e1, e2),
                3 => leq(e1, e2),
                4 => gt(e1, e2),
                _ => geq(e1, e2),
            };
        }

        match rng.random_range(0..=2) {
            0 => and(
                next_create(budget - 1, rng, pool),
                next_create(budget - 1, rng, pool),
            ),
            1 => or(
                next_create(budget - 1, rng, pool),
                next_create(budget - 1, rng, pool),
            ),
            _ => not(next_create(budget - 1, rng, pool)),
        }
    }

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    next_create(10, &mut rng, pool)
}

fn variable_pool() -> Vec<Variable> {
    (0..6).map(|i| Variable::new(format!("v{i}"))).collect()
}

fn bench_construct(c: &mut Criterion) {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let pool = variable_pool();

    c.bench_function("construct_simple", |b| {
        b.iter(|| black_box(build_simple_formula(&x, &y)))
    });

    c.bench_function("construct_complex", |b| {
        b.iter(|| black_box(build_complex_formula(&pool, 0x42)))
    });
}

fn bench_equal_to(c: &mut Criterion) {
    let pool = variable_pool();
    let lhs = build_complex_formula(&pool, 0x42);
    let rhs = build_complex_formula(&pool, 0x42);
    let other = build_complex_formula(&pool, 0x43);

    // Structurally equal but not pointer-equal: walks the whole DAG
    c.bench_function("equal_to_complex_same", |b| {
        b.iter(|| black_box(lhs.equal_to(&rhs)))
    });

    c.bench_function("equal_to_complex_different", |b| {
        b.iter(|| black_box(lhs.equal_to(&other)))
    });
}

fn bench_traversals(c: &mut Criterion) {
    let pool = variable_pool();
    let f = build_complex_formula(&pool, 0x42);
    let env: Environment = pool
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i as f64 + 0.5))
        .collect();

    c.bench_function("free_variables_complex", |b| {
        b.iter(|| black_box(f.get_free_variables()))
    });

    c.bench_function("evaluate_complex", |b| {
        b.iter(|| black_box(f.evaluate(&env)))
    });

    c.bench_function("display_complex", |b| b.iter(|| black_box(f.to_string())));

    c.bench_function("pretty_string_complex", |b| {
        b.iter(|| black_box(f.pretty_string_with_width(60)))
    });
}

criterion_group!(benches, bench_construct, bench_equal_to, bench_traversals);
criterion_main!(benches);
