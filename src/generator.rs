//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation is done in four phases: seeding a few random clues into an
//! empty grid, completing it into a full solution with the backtracking
//! solver, carving a requested number of holes into the solution, and locking
//! the remaining digits as the clues of the puzzle.

use crate::{NUM_CELLS, SIZE, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};
use crate::solver::{shuffle, solve_with};

use log::error;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// The number of random clues placed into the empty grid before the solver
/// completes it. Seeding is best-effort; an iteration whose candidate list is
/// exhausted places nothing.
const SEED_CLUES: usize = 10;

/// The maximum number of holes that can be carved into a full grid. At least
/// one filled cell must remain, since the carve phase re-rolls until it hits
/// a filled cell.
pub const MAX_HOLES: usize = NUM_CELLS - 1;

/// A difficulty preset naming the number of cells that are emptied after a
/// full solution has been built. More holes make a harder puzzle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// An easy puzzle with 35 empty cells.
    Easy,

    /// An intermediate puzzle with 50 empty cells.
    Medium,

    /// A hard puzzle with 65 empty cells.
    Hard
}

impl Difficulty {

    /// Gets the number of cells that are emptied when generating a puzzle of
    /// this difficulty.
    pub fn empty_cells(self) -> usize {
        match self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 50,
            Difficulty::Hard => 65
        }
    }
}

/// A generator which randomly builds playable Sudoku puzzles. It uses a
/// random number generator to decide the content. For most cases, sensible
/// defaults are provided by [Generator::new_default].
///
/// Note that generated puzzles are guaranteed to be solvable, since the holes
/// are carved out of a complete solution, but they are *not* guaranteed to
/// have a unique solution.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the random
    /// digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator to
    /// generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn random_cell(&mut self) -> (usize, usize) {
        let column = self.rng.gen_range(0..SIZE);
        let row = self.rng.gen_range(0..SIZE);
        (column, row)
    }

    fn seed(&mut self, grid: &mut SudokuGrid) {
        for _ in 0..SEED_CLUES {
            let (mut column, mut row) = self.random_cell();

            while grid.get_number(column, row).unwrap().is_some() {
                let (c, r) = self.random_cell();
                column = c;
                row = r;
            }

            for number in shuffle(&mut self.rng, 1..=SIZE) {
                if grid.is_valid_number(column, row, number) {
                    grid.set_number(column, row, number).unwrap();
                    break;
                }
            }
        }
    }

    fn carve(&mut self, grid: &mut SudokuGrid, holes: usize) {
        for _ in 0..holes {
            let (mut column, mut row) = self.random_cell();

            while grid.get_number(column, row).unwrap().is_none() {
                let (c, r) = self.random_cell();
                column = c;
                row = r;
            }

            grid.clear_number(column, row).unwrap();
        }
    }

    /// Generates a new puzzle with the given number of empty cells. The
    /// result is a grid in which every filled cell is locked and which can be
    /// completed into a full, correct solution.
    ///
    /// # Arguments
    ///
    /// * `holes`: The number of cells to empty after building a full
    /// solution. Must be at most [MAX_HOLES].
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDifficulty` If `holes` exceeds [MAX_HOLES].
    /// * `SudokuError::UnsatisfiableGrid` If the solver fails to complete the
    /// seeded grid. Since every seeded digit is validated before placement,
    /// this indicates a broken invariant and should never occur.
    pub fn generate_with_holes(&mut self, holes: usize)
            -> SudokuResult<SudokuGrid> {
        if holes > MAX_HOLES {
            return Err(SudokuError::InvalidDifficulty);
        }

        let mut grid = SudokuGrid::new();
        self.seed(&mut grid);

        if !solve_with(&mut grid, &mut self.rng) {
            error!("seeded grid with {} clues could not be completed",
                grid.count_clues());
            return Err(SudokuError::UnsatisfiableGrid);
        }

        self.carve(&mut grid, holes);
        grid.lock_filled_cells();
        Ok(grid)
    }

    /// Generates a new puzzle of the given [Difficulty]. This is equivalent
    /// to calling [Generator::generate_with_holes] with the preset's number
    /// of empty cells.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If the solver fails to complete the
    /// seeded grid, which indicates a broken invariant and should never
    /// occur.
    pub fn generate(&mut self, difficulty: Difficulty)
            -> SudokuResult<SudokuGrid> {
        self.generate_with_holes(difficulty.empty_cells())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::solver::BacktrackingSolver;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generate_with_holes(holes: usize) -> SudokuGrid {
        let mut generator = Generator::new_default();
        generator.generate_with_holes(holes).unwrap()
    }

    #[test]
    fn difficulty_presets() {
        assert_eq!(35, Difficulty::Easy.empty_cells());
        assert_eq!(50, Difficulty::Medium.empty_cells());
        assert_eq!(65, Difficulty::Hard.empty_cells());
    }

    #[test]
    fn generated_puzzle_has_requested_holes() {
        for &holes in &[0, 35, 50, 65, 80] {
            let grid = generate_with_holes(holes);
            assert_eq!(holes, grid.count_empty(),
                "Wrong number of holes for difficulty {}.", holes);
        }
    }

    #[test]
    fn generated_puzzle_locks_exactly_the_clues() {
        let grid = generate_with_holes(50);

        for row in 0..SIZE {
            for column in 0..SIZE {
                let cell = grid.get_cell(column, row).unwrap();
                assert_eq!(cell.number().is_some(), cell.is_locked());
            }
        }
    }

    #[test]
    fn generated_clues_are_mutually_consistent() {
        let grid = generate_with_holes(Difficulty::Hard.empty_cells());

        for row in 0..SIZE {
            for column in 0..SIZE {
                let number =
                    match grid.get_number(column, row).unwrap() {
                        Some(number) => number,
                        None => continue
                    };
                let mut rest = grid.clone();
                rest.clear_number(column, row).unwrap();
                rest.lock_filled_cells();

                assert!(rest.is_valid_number(column, row, number),
                    "Clue {} at ({}, {}) conflicts with another clue.",
                    number, column, row);
            }
        }
    }

    #[test]
    fn generated_puzzle_is_solvable() {
        for &holes in &[0, 35, 65, 80] {
            let mut grid = generate_with_holes(holes);
            let mut solver = BacktrackingSolver::new_default();

            assert!(solver.solve(&mut grid),
                "Puzzle with {} holes not solvable.", holes);
            assert!(grid.is_solved());
        }
    }

    #[test]
    fn full_grid_without_holes_is_solved() {
        let grid = generate_with_holes(0);

        assert!(grid.is_full());
        assert!(grid.is_solved());
    }

    #[test]
    fn too_many_holes_rejected() {
        let mut generator = Generator::new_default();

        assert_eq!(Err(SudokuError::InvalidDifficulty),
            generator.generate_with_holes(NUM_CELLS));
        assert_eq!(Err(SudokuError::InvalidDifficulty),
            generator.generate_with_holes(NUM_CELLS + 7));
    }

    #[test]
    fn maximum_holes_leaves_one_clue() {
        let grid = generate_with_holes(MAX_HOLES);
        assert_eq!(1, grid.count_clues());
    }

    #[test]
    fn generation_deterministic_under_fixed_seed() {
        let mut generator_1 = Generator::new(ChaCha8Rng::seed_from_u64(123));
        let mut generator_2 = Generator::new(ChaCha8Rng::seed_from_u64(123));

        let grid_1 = generator_1.generate(Difficulty::Medium).unwrap();
        let grid_2 = generator_2.generate(Difficulty::Medium).unwrap();

        assert_eq!(grid_1, grid_2);
    }

    #[test]
    fn difficulty_serde_round_trip() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        let deserialized: Difficulty = serde_json::from_str(&json).unwrap();

        assert_eq!(Difficulty::Medium, deserialized);
    }
}
