//! This module contains the [SudokuEngine](struct.SudokuEngine.html), the
//! boundary surface through which a presentation layer plays a puzzle.
//!
//! The engine owns two grids: the live, player-editable grid and an immutable
//! snapshot of the puzzle as originally generated (the "givens"). Player
//! moves are validated against the givens snapshot by default, so the
//! original clues can never be overwritten. Both grids are rebuilt wholesale
//! by [SudokuEngine::generate] and live for the lifetime of the engine.

use crate::{BLOCK_SIZE, Cell, NUM_CELLS, SudokuGrid};
use crate::error::SudokuResult;
use crate::generator::{Difficulty, Generator};

use rand::Rng;
use rand::rngs::ThreadRng;

/// Selects which grid player moves are validated against.
///
/// The historic contract of this engine validates against the frozen givens
/// snapshot, which means a player may legally enter a value that conflicts
/// with another player-entered value; only conflicts with the original clues
/// are blocked. [ValidationMode::FullBoard] is offered for deployments that
/// want every conflict blocked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationMode {

    /// Validate player moves against the givens snapshot only. This is the
    /// default.
    GivensOnly,

    /// Validate player moves against the entire live grid, including other
    /// player-entered values.
    FullBoard
}

impl Default for ValidationMode {
    fn default() -> ValidationMode {
        ValidationMode::GivensOnly
    }
}

/// A Sudoku engine holding one puzzle: the live grid that the player fills
/// in and the snapshot of the originally generated clues that is used to
/// validate the player's moves. The engine also owns the [Generator] used to
/// rebuild both grids for a new puzzle.
///
/// Immediately after [SudokuEngine::generate], the live grid and the snapshot
/// are identical; they diverge as the player fills in unlocked cells.
pub struct SudokuEngine<R: Rng> {
    grid: SudokuGrid,
    givens: SudokuGrid,
    generator: Generator<R>,
    validation: ValidationMode
}

impl SudokuEngine<ThreadRng> {

    /// Creates a new engine with two empty grids that uses a [ThreadRng] for
    /// puzzle generation.
    pub fn new_default() -> SudokuEngine<ThreadRng> {
        SudokuEngine::new(rand::thread_rng())
    }
}

impl<R: Rng> SudokuEngine<R> {

    /// Creates a new engine with two empty grids that uses the given random
    /// number generator for puzzle generation.
    pub fn new(rng: R) -> SudokuEngine<R> {
        SudokuEngine {
            grid: SudokuGrid::new(),
            givens: SudokuGrid::new(),
            generator: Generator::new(rng),
            validation: ValidationMode::default()
        }
    }

    /// Creates an engine that plays the given grid instead of a generated
    /// one. Every filled cell of `givens` is locked as a clue and the result
    /// is installed as both the live grid and the snapshot. This is useful
    /// for replaying known puzzles and for restoring a saved game.
    pub fn with_givens(rng: R, mut givens: SudokuGrid) -> SudokuEngine<R> {
        givens.lock_filled_cells();

        SudokuEngine {
            grid: givens.clone(),
            givens,
            generator: Generator::new(rng),
            validation: ValidationMode::default()
        }
    }

    /// Gets the [ValidationMode] player moves are checked with.
    pub fn validation_mode(&self) -> ValidationMode {
        self.validation
    }

    /// Sets the [ValidationMode] player moves are checked with.
    pub fn set_validation_mode(&mut self, validation: ValidationMode) {
        self.validation = validation;
    }

    /// Rebuilds both grids with a newly generated puzzle of the given
    /// [Difficulty]. Afterwards, the live grid and the givens snapshot are
    /// identical and every filled cell is locked.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If the generator's solve phase
    /// fails, which indicates a broken invariant and should never occur.
    pub fn generate(&mut self, difficulty: Difficulty) -> SudokuResult<()> {
        self.generate_with_holes(difficulty.empty_cells())
    }

    /// Rebuilds both grids with a newly generated puzzle containing the given
    /// number of empty cells. Afterwards, the live grid and the givens
    /// snapshot are identical and every filled cell is locked.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDifficulty` If `holes` exceeds
    /// [MAX_HOLES](crate::generator::MAX_HOLES).
    /// * `SudokuError::UnsatisfiableGrid` If the generator's solve phase
    /// fails, which indicates a broken invariant and should never occur.
    pub fn generate_with_holes(&mut self, holes: usize) -> SudokuResult<()> {
        self.grid = self.generator.generate_with_holes(holes)?;
        self.givens = self.grid.clone();
        Ok(())
    }

    /// Indicates whether the given number could be placed in the cell at the
    /// given position. If `against_givens` is `true`, the check runs against
    /// the givens snapshot, otherwise against the live grid. See
    /// [SudokuGrid::is_valid_number] for the exact rules; out-of-range
    /// arguments yield `false`.
    pub fn is_valid(&self, column: usize, row: usize, number: usize,
            against_givens: bool) -> bool {
        if against_givens {
            self.givens.is_valid_number(column, row, number)
        }
        else {
            self.grid.is_valid_number(column, row, number)
        }
    }

    /// Attempts to enter `number` into the live grid at the given position as
    /// a player move. The move is validated according to the engine's
    /// [ValidationMode]; in the default mode, it is checked against the
    /// givens snapshot, so it may conflict with other player-entered values
    /// but never with the original clues. On success, the live grid is
    /// updated and `true` is returned; otherwise all state is left unchanged
    /// and `false` is returned.
    pub fn set_element(&mut self, column: usize, row: usize, number: usize)
            -> bool {
        let valid = match self.validation {
            ValidationMode::GivensOnly =>
                self.givens.is_valid_number(column, row, number),
            ValidationMode::FullBoard =>
                self.grid.is_valid_number(column, row, number)
        };

        if !valid {
            return false;
        }

        self.grid.set_number(column, row, number).unwrap();
        true
    }

    /// Attempts to empty the live-grid cell at the given position as a player
    /// move. Returns `true` if the cell was editable and is now empty, and
    /// `false` (leaving all state unchanged) if the position is out of range
    /// or the cell is locked.
    pub fn clear_element(&mut self, column: usize, row: usize) -> bool {
        if !self.is_allowed(column, row) {
            return false;
        }

        self.grid.clear_number(column, row).unwrap();
        true
    }

    /// Indicates whether the live-grid cell at the given position may be
    /// edited by the player, i.e. is not a locked clue. Out-of-range
    /// positions yield `false`.
    pub fn is_allowed(&self, column: usize, row: usize) -> bool {
        match self.grid.is_locked(column, row) {
            Ok(locked) => !locked,
            Err(_) => false
        }
    }

    /// Gets a read-only view of the live grid, e.g. for rendering.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a read-only view of the givens snapshot, i.e. the puzzle as it
    /// was originally generated.
    pub fn givens(&self) -> &SudokuGrid {
        &self.givens
    }

    /// Gets the 81 cells of the live grid as an ordered sequence in
    /// block-major order: the outer traversal runs over the 3x3 grid of
    /// blocks (row-blocks first, then column-blocks within each row-block),
    /// the inner traversal over the cells of each block in row-major order.
    /// The cell at flat index `i` is therefore the live-grid cell at
    /// `row = 3 * (i / 27) + (i / 3) % 3` and `col = 3 * ((i / 9) % 3) + i % 3`.
    pub fn cells_block_major(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(NUM_CELLS);

        for row_block in 0..BLOCK_SIZE {
            for column_block in 0..BLOCK_SIZE {
                for row_in_block in 0..BLOCK_SIZE {
                    for column_in_block in 0..BLOCK_SIZE {
                        let column =
                            column_block * BLOCK_SIZE + column_in_block;
                        let row = row_block * BLOCK_SIZE + row_in_block;
                        cells.push(self.grid.get_cell(column, row).unwrap());
                    }
                }
            }
        }

        cells
    }

    /// Indicates whether the live grid is a complete, correct Sudoku
    /// solution. See [SudokuGrid::is_solved].
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }
}
