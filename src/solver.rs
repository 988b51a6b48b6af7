//! This module contains the logic for solving Sudoku grids.
//!
//! Most importantly, this module contains the definition of the
//! [BacktrackingSolver](struct.BacktrackingSolver.html), which completes
//! arbitrary partially filled grids by recursive search.

use crate::{SIZE, SudokuGrid};

use rand::Rng;
use rand::rngs::ThreadRng;

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len < 2 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

fn solve_rec(grid: &mut SudokuGrid, rng: &mut impl Rng, column: usize,
        row: usize) -> bool {
    if row == SIZE {
        return true;
    }

    let next_column = (column + 1) % SIZE;
    let next_row = if next_column == 0 { row + 1 } else { row };

    if grid.get_number(column, row).unwrap().is_some() {
        return solve_rec(grid, rng, next_column, next_row);
    }

    for number in shuffle(rng, 1..=SIZE) {
        if grid.is_valid_number(column, row, number) {
            grid.set_number(column, row, number).unwrap();

            if solve_rec(grid, rng, next_column, next_row) {
                return true;
            }

            grid.clear_number(column, row).unwrap();
        }
    }

    false
}

pub(crate) fn solve_with(grid: &mut SudokuGrid, rng: &mut impl Rng) -> bool {
    solve_rec(grid, rng, 0, 0)
}

/// A solver which fills the empty cells of a [SudokuGrid] by recursively
/// testing the digits 1 to 9 for each empty cell in a randomly shuffled
/// order, reverting every placement that does not lead to a full grid. Cells
/// are visited in row-major order and already filled cells are skipped.
///
/// Two things follow from this design:
///
/// * Its worst-case runtime is exponential, i.e. it may be slow if the grid
/// has many missing digits. Empirically it is near-linear on grids with a
/// handful of seeded clues.
/// * Because candidates are tried in random order, different runs may
/// complete the same ambiguous grid in different ways. Grids with a unique
/// solution always yield that solution.
///
/// If no completion exists from the current partial state, [solve](#method.solve)
/// returns `false` and leaves the grid unchanged. This is a normal outcome
/// for arbitrary inputs, not an error.
pub struct BacktrackingSolver<R: Rng> {
    rng: R
}

impl BacktrackingSolver<ThreadRng> {

    /// Creates a new solver that uses a [ThreadRng] to shuffle the candidate
    /// digits.
    pub fn new_default() -> BacktrackingSolver<ThreadRng> {
        BacktrackingSolver::new(rand::thread_rng())
    }
}

impl<R: Rng> BacktrackingSolver<R> {

    /// Creates a new solver that uses the given random number generator to
    /// shuffle the candidate digits.
    pub fn new(rng: R) -> BacktrackingSolver<R> {
        BacktrackingSolver {
            rng
        }
    }

    /// Attempts to complete the given grid without moving any digit already
    /// present. On success, `true` is returned and the grid is full; a
    /// subsequent [SudokuGrid::is_solved] is guaranteed to hold if the
    /// pre-existing digits were mutually consistent. On failure, `false` is
    /// returned and the grid is left exactly as it was.
    ///
    /// Note that locked cells are rejected as placement targets, so a grid
    /// containing locked *empty* cells can never be completed.
    pub fn solve(&mut self, grid: &mut SudokuGrid) -> bool {
        solve_with(grid, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

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

    const EXAMPLE_SOLUTION: &str = "\
        746281359\
        912537846\
        853496172\
        374125698\
        628749513\
        591368724\
        169874235\
        285913467\
        437652981";

    #[test]
    fn shuffling_uniformly_distributed() {
        // 18000 experiments, 6 options (3!), so if uniformly distributed:
        // p = 1/6, my = 3000, sigma = sqrt(18000 * 1/6 * 5/6) = 50
        // with a probability of the amount being in the range [2600, 3400]
        // is more than 99,9999999999999 %.

        let mut counts = [0; 6];
        let mut rng = rand::thread_rng();

        for _ in 0..18000 {
            let result = shuffle(&mut rng, 1..=3);

            if result == vec![1, 2, 3] {
                counts[0] += 1;
            }
            else if result == vec![1, 3, 2] {
                counts[1] += 1;
            }
            else if result == vec![2, 1, 3] {
                counts[2] += 1;
            }
            else if result == vec![2, 3, 1] {
                counts[3] += 1;
            }
            else if result == vec![3, 1, 2] {
                counts[4] += 1;
            }
            else if result == vec![3, 2, 1] {
                counts[5] += 1;
            }
        }

        for count in counts.iter() {
            assert!(*count >= 2600 && *count <= 3400,
                "Count is not in range [2600, 3400].");
        }
    }

    #[test]
    fn shuffle_degenerate_inputs() {
        let mut rng = rand::thread_rng();

        assert!(shuffle(&mut rng, std::iter::empty::<usize>()).is_empty());
        assert_eq!(vec![42], shuffle(&mut rng, std::iter::once(42)));
    }

    #[test]
    fn solves_classic_puzzle() {
        let mut grid = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();
        let expected = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap();
        let mut solver = BacktrackingSolver::new_default();

        assert!(solver.solve(&mut grid));
        assert_eq!(expected, grid, "Solver gave wrong grid.");
        assert!(grid.is_solved());
    }

    #[test]
    fn solves_empty_grid() {
        let mut grid = SudokuGrid::new();
        let mut solver = BacktrackingSolver::new_default();

        assert!(solver.solve(&mut grid));
        assert!(grid.is_full());
        assert!(grid.is_solved());
    }

    #[test]
    fn keeps_present_digits() {
        let mut grid = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();
        let puzzle = grid.clone();
        let mut solver = BacktrackingSolver::new_default();

        assert!(solver.solve(&mut grid));

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(number) = puzzle.get_number(column, row).unwrap() {
                    assert_eq!(Some(number),
                        grid.get_number(column, row).unwrap());
                }
            }
        }
    }

    #[test]
    fn unsolvable_grid_is_not_changed() {
        // Cell (8, 0) can hold neither 1 to 8 (row) nor 9 (column).

        let mut grid = SudokuGrid::parse(&format!("12345678.........9{}",
            ".".repeat(63))).unwrap();
        let before = grid.clone();
        let mut solver = BacktrackingSolver::new_default();

        assert!(!solver.solve(&mut grid));
        assert_eq!(before, grid);
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let mut grid_1 = SudokuGrid::new();
        let mut grid_2 = SudokuGrid::new();
        let mut solver_1 = BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(7));
        let mut solver_2 = BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(7));

        assert!(solver_1.solve(&mut grid_1));
        assert!(solver_2.solve(&mut grid_2));
        assert_eq!(grid_1, grid_2);
    }
}
