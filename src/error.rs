//! This module contains some error and result definitions used in this crate.

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html) and in the
/// [generator](../generator/index.html). This does not exclude errors that
/// occur when parsing grids, see [SudokuParseError](enum.SudokuParseError.html)
/// for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a Sudoku cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either is greater than 8.
    OutOfBounds,

    /// Indicates that the number of holes requested from the generator is too
    /// large. At least one filled cell must remain, so at most 80 holes can be
    /// carved into a full grid.
    InvalidDifficulty,

    /// An error that is raised when the solver fails to complete a freshly
    /// seeded grid during generation. Since every seeded digit is validated
    /// before placement, this indicates a broken invariant rather than an
    /// ordinary unsolvable input.
    UnsatisfiableGrid
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of significant characters (digits and
    /// placeholders, ignoring whitespace) does not equal 81.
    WrongNumberOfCells,

    /// Indicates that the code contains a character which is neither a digit,
    /// nor a placeholder (`'.'` or `'0'`), nor whitespace.
    InvalidCharacter
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
