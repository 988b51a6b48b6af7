use criterion::{criterion_group, criterion_main, Criterion};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sudoku_grid_engine::SudokuGrid;
use sudoku_grid_engine::generator::{Difficulty, Generator};
use sudoku_grid_engine::solver::BacktrackingSolver;

// Explanation of benchmark classes:
//
// solve: Completing a fixed, classic 27-clue puzzle with the backtracking
//        solver.
// generate: Building a full puzzle (seed + solve + carve + lock) at each
//           difficulty preset.
//
// All benchmarks use a seeded ChaCha8Rng so runs are comparable.

const EXAMPLE_PUZZLE: &str = "\
    ....81...\
    ..2..78..\
    .53...17.\
    37.......\
    6.......3\
    .......24\
    .69...23.\
    ..59..4..\
    ...65....";

fn bench_solve(c: &mut Criterion) {
    let puzzle = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();

    c.bench_function("solve classic puzzle", |b| {
        let mut solver = BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(0));

        b.iter(|| {
            let mut grid = puzzle.clone();
            assert!(solver.solve(&mut grid));
            grid
        })
    });

    c.bench_function("solve empty grid", |b| {
        let mut solver = BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(0));

        b.iter(|| {
            let mut grid = SudokuGrid::new();
            assert!(solver.solve(&mut grid));
            grid
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let difficulties = [
        ("easy", Difficulty::Easy),
        ("medium", Difficulty::Medium),
        ("hard", Difficulty::Hard)
    ];

    for (name, difficulty) in difficulties.iter() {
        c.bench_function(&format!("generate {}", name), |b| {
            let mut generator =
                Generator::new(ChaCha8Rng::seed_from_u64(0));

            b.iter(|| generator.generate(*difficulty).unwrap())
        });
    }
}

criterion_group!(benches, bench_solve, bench_generate);
criterion_main!(benches);
