//! Criterion benchmarks for the OneMax GA.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use onemax_ga::ga::{GaConfig, GaRunner, OneMax};

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax_run");
    group.sample_size(10);

    // Elites plus their 2(K - 1) children must fit: 3K - 2 <= population.
    for (len, pop, elites, gen) in [
        (50usize, 50usize, 16usize, 40usize),
        (100, 100, 20, 40),
        (200, 100, 20, 40),
    ] {
        let config = GaConfig::default()
            .with_gene_length(len)
            .with_population_size(pop)
            .with_elite_count(elites)
            .with_max_generations(gen)
            .with_seed(42);
        config.validate().expect("benchmark config must be valid");
        group.bench_with_input(
            BenchmarkId::new(format!("l{}_p{}_g{}", len, pop, gen), len),
            &config,
            |b, c| {
                b.iter(|| {
                    let runner = GaRunner::new(black_box(c.clone()), OneMax).unwrap();
                    black_box(runner.run().unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax_step");

    for &len in &[100usize, 1000] {
        let config = GaConfig::default()
            .with_gene_length(len)
            .with_max_generations(usize::MAX)
            .with_seed(42);
        config.validate().expect("benchmark config must be valid");
        let mut runner = GaRunner::new(config, OneMax).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| black_box(runner.step().unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_run, bench_single_step);
criterion_main!(benches);
