use crate::tiles::DIM;
use crate::Error;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Quarter of the standard wordfeud board, the centre square is at the bottom right.
pub const DEFAULT_QUARTER_BOARD: [&str; 8] = [
    "3l -- -- -- 3w -- -- 2l",
    "-- 2l -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "-- -- -- 3l -- -- -- 2w",
    "3w -- -- -- 2w -- 2l --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- 2l -- -- --",
    "2l -- -- 2w -- -- -- ss",
];

/// A square of the board grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Square {
    NoBonus,
    /// The centre square. It only marks where the first word must go, it has no bonus.
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

use Square::{LetterBonus, NoBonus, Start, WordBonus};

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = Vec<Vec<Square>>;

/// Wordfeud board grid, consisting of N x N (normal or bonus) squares.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// N is odd; the centre square is the "start" square, and must be used in the first turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard wordfeud grid
    /// ## Example
    /// ```
    /// # use wordfeud_movegen::Grid;
    /// let grid = Grid::default();
    /// assert_eq!(grid.dim(), 15);
    /// ```
    fn default() -> Grid {
        // The default layout is well formed
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD).unwrap()
    }
}

fn check_dim(n: usize) -> Result<(), Error> {
    // a row plus the sentinel square must fit in a code list
    if n % 2 == 0 || n < 3 || n >= DIM {
        return Err(Error::InvalidBoardSize(n));
    }
    Ok(())
}

fn parse_row(row: &str, expected: usize) -> Result<Vec<Square>, Error> {
    let squares = row
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Square>, Error>>()?;
    if squares.len() != expected {
        return Err(Error::InvalidRowLength {
            row: String::from(row),
            len: squares.len(),
            expected,
        });
    }
    Ok(squares)
}

impl Grid {
    /// Create a point symmetric grid by mirroring a quarter board: every row is
    /// reflected without repeating the centre column, then the rows are reflected
    /// without repeating the centre row.
    ///
    /// ## Errors
    /// If the quarter board is not square, has an unsupported size, or holds
    /// an unknown square.
    /// ## Example
    /// ```
    /// # use wordfeud_movegen::{Grid, Error};
    /// let grid = Grid::expand_quarter_board(&["3w --", "-- ss"])?;
    /// assert_eq!(grid.to_strings(), vec!["3w -- 3w", "-- ss --", "3w -- 3w"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn expand_quarter_board<S: AsRef<str>>(quarter: &[S]) -> Result<Grid, Error> {
        let q = quarter.len();
        let n = (2 * q).saturating_sub(1);
        check_dim(n)?;
        let mut top = Vec::with_capacity(q);
        for row in quarter {
            let mut squares = parse_row(row.as_ref(), q)?;
            let mirror: Vec<Square> = squares[..q - 1].iter().rev().copied().collect();
            squares.extend(mirror);
            top.push(squares);
        }
        let bottom: Vec<Vec<Square>> = top[..q - 1].iter().rev().cloned().collect();
        top.extend(bottom);
        Ok(Grid(top))
    }

    /// Create a `Grid` from strings.
    /// Parameter `grid` must have N rows of N squares joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or squares can not be parsed.
    /// ## Examples
    /// ```
    /// # use wordfeud_movegen::{Grid, Error};
    /// let grid_strings = &[
    /// "3l -- -- -- 3w -- -- 2l -- -- 3w -- -- -- 3l",
    /// "-- 2l -- -- -- 3l -- -- -- 3l -- -- -- 2l --",
    /// "-- -- 2w -- -- -- 2l -- 2l -- -- -- 2w -- --",
    /// "-- -- -- 3l -- -- -- 2w -- -- -- 3l -- -- --",
    /// "3w -- -- -- 2w -- 2l -- 2l -- 2w -- -- -- 3w",
    /// "-- 3l -- -- -- 3l -- -- -- 3l -- -- -- 3l --",
    /// "-- -- 2l -- 2l -- -- -- -- -- 2l -- 2l -- --",
    /// "2l -- -- 2w -- -- -- ss -- -- -- 2w -- -- 2l",
    /// "-- -- 2l -- 2l -- -- -- -- -- 2l -- 2l -- --",
    /// "-- 3l -- -- -- 3l -- -- -- 3l -- -- -- 3l --",
    /// "3w -- -- -- 2w -- 2l -- 2l -- 2w -- -- -- 3w",
    /// "-- -- -- 3l -- -- -- 2w -- -- -- 3l -- -- --",
    /// "-- -- 2w -- -- -- 2l -- 2l -- -- -- 2w -- --",
    /// "-- 2l -- -- -- 3l -- -- -- 3l -- -- -- 2l --",
    /// "3l -- -- -- 3w -- -- 2l -- -- 3w -- -- -- 3l",
    /// ];
    /// let grid = Grid::from_strings(grid_strings)?;
    /// assert_eq!(grid, Grid::default());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        let n = grid.len();
        check_dim(n)?;
        let rows = grid
            .iter()
            .map(|row| parse_row(row.as_ref(), n))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Grid(rows))
    }

    /// The number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Get the grid as a vec of N strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Square::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }
}
