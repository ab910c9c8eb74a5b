//! Benchmarks for word placement.
//!
//! Measures the complete placement run (word placement plus random
//! back-fill) at a beginner level and at the densest expert level.
//!
//! # Test Data
//!
//! Uses three fixed seeds so runs are reproducible while still covering
//! multiple cases. Each seed produces a different grid.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench placer
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use wordseek_core::LevelConfig;
use wordseek_generator::{PuzzleSeed, place_with_seed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const BEGINNER_WORDS: [&str; 4] = ["CAT", "DOG", "OWL", "FOX"];

const EXPERT_WORDS: [&str; 20] = [
    "TELESCOPE",
    "SATELLITE",
    "ASTRONAUT",
    "NEBULA",
    "GRAVITY",
    "GALAXY",
    "METEOR",
    "PLANET",
    "COMET",
    "ORBIT",
    "LUNAR",
    "SOLAR",
    "QUASAR",
    "PULSAR",
    "COSMOS",
    "ECLIPSE",
    "ZENITH",
    "APOGEE",
    "VACUUM",
    "PHOTON",
];

fn bench_placer_beginner(c: &mut Criterion) {
    let config = LevelConfig::get(1).unwrap();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("placer_beginner", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| place_with_seed(&BEGINNER_WORDS, config, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_placer_expert(c: &mut Criterion) {
    let config = LevelConfig::get(30).unwrap();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("placer_expert", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| place_with_seed(&EXPERT_WORDS, config, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_placer_beginner,
        bench_placer_expert
);
criterion_main!(benches);
