//! Criterion benchmarks for the pet purchase search.
//!
//! Measures each stage of a generation separately, then whole runs with a
//! fixed seed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pet_purchase::ga::{breed, create_population, select, GaConfig, GaRunner};
use pet_purchase::purchase::{PetPurchase, PetPurchaseProblem};
use pet_purchase::random::create_rng;

fn bench_fitness(c: &mut Criterion) {
    let problem = PetPurchaseProblem::default();
    let mut rng = create_rng(42);
    let pop = create_population(&problem, 1000, &mut rng);

    c.bench_function("fitness/1000", |b| {
        b.iter(|| pop.iter().map(|p| black_box(p).fitness()).sum::<u32>())
    });
    c.bench_function("fitness/perfect", |b| {
        b.iter(|| black_box(PetPurchase::new(3, 41, 56)).fitness())
    });
}

fn bench_generation(c: &mut Criterion) {
    let problem = PetPurchaseProblem::default();
    let mut group = c.benchmark_group("generation");

    for &size in &[30usize, 300, 3000] {
        let mut rng = create_rng(42);
        let pop = create_population(&problem, size, &mut rng);

        group.bench_with_input(BenchmarkId::new("select", size), &pop, |b, pop| {
            b.iter(|| select(&problem, pop.clone(), size, false))
        });

        let survivors = select(&problem, pop, size, false);
        group.bench_with_input(BenchmarkId::new("breed", size), &survivors, |b, survivors| {
            let mut rng = create_rng(7);
            b.iter(|| breed(&problem, black_box(survivors), &mut rng))
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let problem = PetPurchaseProblem::default();
    let mut group = c.benchmark_group("run");
    group.sample_size(20);

    for &generations in &[100usize, 1000] {
        let config = GaConfig::default()
            .with_max_generations(generations)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("pop30", generations),
            &config,
            |b, config| b.iter(|| GaRunner::run(&problem, config)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_generation, bench_run);
criterion_main!(benches);
