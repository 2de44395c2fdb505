//! Benchmarks for sugeno inference operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sugeno::{FuzzySystem, InputVariable, Inputs, MembershipFunction, Rule};

fn rating(name: &str) -> InputVariable {
    let mut var = InputVariable::new(name, 0.0..=10.0);
    var.set_term("low", MembershipFunction::triangular(0.0, 0.0, 5.0).unwrap());
    var.set_term("good", MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap());
    var.set_term(
        "excellent",
        MembershipFunction::triangular(5.0, 10.0, 10.0).unwrap(),
    );
    var
}

fn tipping_system() -> FuzzySystem {
    let food = rating("food");
    let service = rating("service");

    let pair = |f: &str, s: &str| food.is(f).unwrap() & service.is(s).unwrap();

    FuzzySystem::new(vec![
        Rule::new(pair("low", "low"), 0.0),
        Rule::new(pair("low", "good"), 5.0),
        Rule::new(pair("good", "low"), 8.0),
        Rule::new(pair("low", "excellent"), 10.0),
        Rule::new(pair("excellent", "low"), 9.0),
        Rule::new(pair("good", "good"), 10.0),
        Rule::new(pair("good", "excellent"), 12.0),
        Rule::new(pair("excellent", "good"), 15.0),
        Rule::new(pair("excellent", "excellent"), 20.0),
    ])
    .unwrap()
}

fn compute_benchmark(c: &mut Criterion) {
    let system = tipping_system();

    let mut group = c.benchmark_group("compute");

    for (food, service) in [(10.0, 10.0), (4.0, 4.0), (2.0, 6.0)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", food, service)),
            &(food, service),
            |b, &(food, service)| {
                b.iter(|| {
                    let inputs = Inputs::new().with("food", food).with("service", service);
                    black_box(system.compute(&inputs).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn grid_benchmark(c: &mut Criterion) {
    let system = tipping_system();
    let resolution = 20usize;

    c.bench_function("grid_20x20", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..resolution {
                for j in 0..resolution {
                    let food = 10.0 * i as f64 / (resolution - 1) as f64;
                    let service = 10.0 * j as f64 / (resolution - 1) as f64;
                    let inputs = Inputs::new().with("food", food).with("service", service);
                    sum += system.compute(&inputs).unwrap();
                }
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, compute_benchmark, grid_benchmark);
criterion_main!(benches);
