// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand 9x9 Sudoku engine. It supports
//! the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking the validity of individual placements against standard Sudoku
//! rules, with locked clue cells that can never be overwritten
//! * Solving partially filled grids using a randomized backtracking algorithm
//! * Generating playable puzzles of a requested difficulty
//! * Tracking a player's grid against an immutable snapshot of the originally
//! generated puzzle
//!
//! # Parsing and printing Sudoku grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code. Codes can be
//! used to exchange grids, while pretty prints can be used to display a grid
//! in a clearer manner. An example of how to parse and display a grid is
//! provided below.
//!
//! ```
//! use sudoku_grid_engine::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     53..7....\
//!     6..195...\
//!     .98....6.\
//!     8...6...3\
//!     4..8.3..1\
//!     7...2...6\
//!     .6....28.\
//!     ...419..5\
//!     ....8..79").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity of placements
//!
//! [SudokuGrid::is_valid_number] indicates whether a number could be placed
//! in a given cell without breaking the standard row, column, and 3x3-block
//! rules or overwriting a locked clue. It is a pure predicate with no side
//! effects.
//!
//! ```
//! use sudoku_grid_engine::SudokuGrid;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_number(0, 0, 5).unwrap();
//!
//! // 5 is already in row 0 and in the top-left block.
//! assert!(!grid.is_valid_number(2, 0, 5));
//! assert!(grid.is_valid_number(2, 0, 4));
//! ```
//!
//! # Solving Sudoku
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills the empty cells
//! of a grid by recursively testing the digits 1 to 9 in a randomly shuffled
//! order, reverting each placement that does not lead to a full grid.
//!
//! ```
//! use sudoku_grid_engine::SudokuGrid;
//! use sudoku_grid_engine::solver::BacktrackingSolver;
//!
//! let mut grid = SudokuGrid::parse("\
//!     ....81...\
//!     ..2..78..\
//!     .53...17.\
//!     37.......\
//!     6.......3\
//!     .......24\
//!     .69...23.\
//!     ..59..4..\
//!     ...65....").unwrap();
//! let mut solver = BacktrackingSolver::new_default();
//!
//! assert!(solver.solve(&mut grid));
//! assert!(grid.is_solved());
//! ```
//!
//! # Generating puzzles
//!
//! The highest-level entry point is the
//! [SudokuEngine](engine::SudokuEngine), which owns a live, player-editable
//! grid together with an immutable snapshot of the generated clues. Player
//! moves are validated against the snapshot, so the original clues can never
//! be overwritten.
//!
//! ```
//! use sudoku_grid_engine::engine::SudokuEngine;
//! use sudoku_grid_engine::generator::Difficulty;
//!
//! let mut engine = SudokuEngine::new_default();
//! engine.generate(Difficulty::Easy).unwrap();
//!
//! assert_eq!(Difficulty::Easy.empty_cells(), engine.grid().count_empty());
//! ```
//!
//! # Note regarding performance
//!
//! The backtracking search is worst-case exponential, but the seeded clues
//! prune it drastically in practice. It is still strongly recommended to use
//! at least `opt-level = 2`, even in tests that generate puzzles.

pub mod engine;
pub mod error;
pub mod generator;
pub mod solver;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The width and height of one 3x3 block of the grid.
pub const BLOCK_SIZE: usize = 3;

/// The number of columns and rows of the grid.
pub const SIZE: usize = BLOCK_SIZE * BLOCK_SIZE;

/// The total number of cells in the grid.
pub const NUM_CELLS: usize = SIZE * SIZE;

/// A single cell of a [SudokuGrid]. A cell may contain a number from 1 to 9
/// or be empty, and it may be locked. Locked cells are part of the originally
/// generated puzzle and are never overwritten through the engine.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cell {
    number: Option<usize>,
    locked: bool
}

impl Cell {

    /// Creates a new, empty, unlocked cell.
    pub fn new() -> Cell {
        Cell::default()
    }

    /// Gets the number contained in this cell, or `None` if it is empty.
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    /// Indicates whether this cell is locked, i.e. part of the originally
    /// generated puzzle.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Indicates whether this cell is empty.
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
    }

    /// Renders this cell as a single glyph: its decimal digit if it contains
    /// a number, and `'.'` otherwise.
    pub fn to_char(&self) -> char {
        if let Some(number) = self.number {
            (b'0' + number as u8) as char
        }
        else {
            '.'
        }
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| grid.get_cell(x, y).unwrap().to_char(), ' ', '║',
        true)
}

/// A 9x9 Sudoku grid composed of [Cell]s that are organized into nine 3x3
/// blocks. Cells are stored in row-major order, with columns and rows indexed
/// from 0 to 8. Each cell may or may not be occupied by a number, and cells
/// that hold clues of a generated puzzle are locked.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuGrid {
    cells: Vec<Cell>
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty grid in which all cells are unlocked.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![Cell::new(); NUM_CELLS]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code consists of exactly 81
    /// significant characters which are assigned left-to-right,
    /// top-to-bottom, where each row is completed before the next one is
    /// started. The digits `'1'` to `'9'` denote filled cells, while `'.'`
    /// and `'0'` denote empty ones. Whitespace is ignored to allow for more
    /// intuitive formatting.
    ///
    /// As an example, the code
    ///
    /// ```text
    /// 53..7....
    /// 6..195...
    /// .98....6.
    /// 8...6...3
    /// 4..8.3..1
    /// 7...2...6
    /// .6....28.
    /// ...419..5
    /// ....8..79
    /// ```
    ///
    /// parses to a famous newspaper puzzle. All parsed cells are unlocked;
    /// use [SudokuGrid::lock_filled_cells] to mark the filled ones as clues.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();
        let mut i = 0;

        for c in code.chars() {
            if c.is_whitespace() {
                continue;
            }

            if i == NUM_CELLS {
                return Err(SudokuParseError::WrongNumberOfCells);
            }

            match c {
                '.' | '0' => { },
                '1'..='9' => {
                    let number = c as usize - '0' as usize;
                    grid.cells[i].number = Some(number);
                },
                _ => return Err(SudokuParseError::InvalidCharacter)
            }

            i += 1;
        }

        if i != NUM_CELLS {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below. Note that
    /// locked flags are not part of the code.
    ///
    /// ```
    /// use sudoku_grid_engine::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_number(1, 1, 4).unwrap();
    /// grid.set_number(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(Cell::to_char)
            .collect()
    }

    /// Gets the [Cell] at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 8]`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 8]`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize) -> SudokuResult<Cell> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Gets the number in the cell at the specified position, or `None` if
    /// that cell is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 8]`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 8]`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_number(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        Ok(self.get_cell(column, row)?.number)
    }

    /// Indicates whether the cell at the specified position is locked, i.e.
    /// holds a clue of the originally generated puzzle.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 8]`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_locked(&self, column: usize, row: usize) -> SudokuResult<bool> {
        Ok(self.get_cell(column, row)?.locked)
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    /// Note that neither Sudoku rules nor locked flags are checked here; use
    /// [SudokuGrid::is_valid_number] for that.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 8]`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 8]`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_number(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)].number = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way. Locked flags are not checked here.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 8]`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 8]`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_number(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)].number = None;
        Ok(())
    }

    /// Locks every cell that currently holds a number and unlocks every empty
    /// cell. The generator applies this after carving, turning the remaining
    /// digits into the fixed clues of the puzzle.
    pub fn lock_filled_cells(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.locked = cell.number.is_some();
        }
    }

    /// Indicates whether the given number could be placed in the cell at the
    /// given position without violating standard Sudoku rules with respect to
    /// this grid. Specifically, the placement is rejected if
    ///
    /// * `column` or `row` are outside the range `[0, 8]` or `number` is
    /// outside the range `[1, 9]`,
    /// * the target cell is locked,
    /// * `number` already appears anywhere in the target row or column, or
    /// * `number` already appears in the target cell's 3x3 block.
    ///
    /// This is a pure predicate: it has no side effects, and out-of-range
    /// arguments yield `false` rather than an error.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> bool {
        if column >= SIZE || row >= SIZE || number == 0 || number > SIZE {
            return false;
        }

        if self.cells[index(column, row)].locked {
            return false;
        }

        for i in 0..SIZE {
            if self.cells[index(column, i)].number == Some(number) ||
                    self.cells[index(i, row)].number == Some(number) {
                return false;
            }
        }

        let block_column = BLOCK_SIZE * (column / BLOCK_SIZE);
        let block_row = BLOCK_SIZE * (row / BLOCK_SIZE);

        for y in block_row..(block_row + BLOCK_SIZE) {
            for x in block_column..(block_column + BLOCK_SIZE) {
                if self.cells[index(x, y)].number == Some(number) {
                    return false;
                }
            }
        }

        true
    }

    /// Indicates whether this grid is a complete, correct Sudoku solution.
    /// That is the case if every cell holds a number from 1 to 9 and no other
    /// cell in its row, column, or 3x3 block holds the same number. Locked
    /// flags are ignored; this validates the finished puzzle, not adherence
    /// to the original clues.
    pub fn is_solved(&self) -> bool {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if !self.is_solved_cell(column, row) {
                    return false;
                }
            }
        }

        true
    }

    fn is_solved_cell(&self, column: usize, row: usize) -> bool {
        let number = match self.cells[index(column, row)].number {
            Some(number) => number,
            None => return false
        };

        for i in 0..SIZE {
            if i != column && self.cells[index(i, row)].number == Some(number) {
                return false;
            }

            if i != row && self.cells[index(column, i)].number == Some(number) {
                return false;
            }
        }

        let block_column = BLOCK_SIZE * (column / BLOCK_SIZE);
        let block_row = BLOCK_SIZE * (row / BLOCK_SIZE);

        for y in block_row..(block_row + BLOCK_SIZE) {
            for x in block_column..(block_column + BLOCK_SIZE) {
                if (x, y) != (column, row) &&
                        self.cells[index(x, y)].number == Some(number) {
                    return false;
                }
            }
        }

        true
    }

    /// Counts the number of clues given by this grid, i.e. the number of
    /// non-empty cells. While on average grids with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.number.is_some())
            .count()
    }

    /// Counts the number of empty cells in this grid.
    pub fn count_empty(&self) -> usize {
        NUM_CELLS - self.count_clues()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
