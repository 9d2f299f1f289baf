//! Benchmarks for Sudoku puzzle generation.
//!
//! This benchmark suite measures the full generation pipeline per
//! difficulty: seed board selection, shuffling, cell blanking, and the
//! solve that pins down the reference solution.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `7b1c9e04d2aa5f38c6e1b90247d8a3f5e0c41b867f2d9a30514e6c8b9d72e0af`
//! - **`seed_1`**: `2e8f1a97c05b63d4e9a20f8c715d46b3a8e05c92d17f4b6089c3e25a7d1f80cb`
//! - **`seed_2`**: `f4a0d7213c9b85e6071fd2c44b38a9e5d6017cf39e824ba1f05d68c27a93e41b`
//!
//! Each seed produces a different puzzle, allowing measurement across various
//! cases while maintaining reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use shufoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed, SeedCorpus};

const SEEDS: [&str; 3] = [
    "7b1c9e04d2aa5f38c6e1b90247d8a3f5e0c41b867f2d9a30514e6c8b9d72e0af",
    "2e8f1a97c05b63d4e9a20f8c715d46b3a8e05c92d17f4b6089c3e25a7d1f80cb",
    "f4a0d7213c9b85e6071fd2c44b38a9e5d6017cf39e824ba1f05d68c27a93e41b",
];

fn bench_generate(c: &mut Criterion) {
    let corpus = SeedCorpus::bundled();
    let generator = PuzzleGenerator::new(&corpus);

    for difficulty in Difficulty::ALL {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(difficulty, seed).unwrap(),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_corpus_load(c: &mut Criterion) {
    c.bench_function("corpus_bundled", |b| {
        b.iter(|| hint::black_box(SeedCorpus::bundled()));
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate,
        bench_corpus_load
);
criterion_main!(benches);
