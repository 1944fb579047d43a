use super::{
    codes::{Code, EMPTY, LETTER_MASK},
    item::Item,
    tile::Tile,
};
use crate::error::Error;
use std::convert::TryFrom;

/// A square on the board that is either empty or holds a [`Tile`](crate::Tile)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cell(Option<Tile>);

impl Item for Cell {
    fn code(&self) -> Code {
        self.0.map_or(EMPTY, |tile| tile.code())
    }
}

impl Cell {
    /// An empty square
    pub const EMPTY: Self = Self(None);

    fn new(code: Code) -> Cell {
        if code == EMPTY {
            Cell(None)
        } else {
            Cell(Some(Tile::new(code)))
        }
    }

    /// Create new `Cell` holding `tile`
    pub fn from_tile(tile: Tile) -> Cell {
        Cell(Some(tile))
    }

    /// Get the contained tile or None
    pub fn tile(&self) -> Option<Tile> {
        self.0
    }

    /// Check if the square is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Remove the wildcard flag from the contained `Tile`.
    pub fn to_letter(self) -> Cell {
        Cell::new(self.code() & LETTER_MASK)
    }
}

impl TryFrom<Code> for Cell {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            EMPTY | 1..=31 | 65..=95 => Ok(Self::new(code)),
            _ => Err(Self::Error::InvalidTileCode(code)),
        }
    }
}

impl From<Cell> for Code {
    fn from(cell: Cell) -> Code {
        cell.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_letter() {
        let cell = Cell::new(65);
        assert_eq!(cell.code(), 65);
        assert_eq!(cell.to_letter().code(), 1);
        assert!(Cell::EMPTY.to_letter().is_empty());
    }

    #[test]
    fn test_blank_is_not_a_cell() {
        assert!(Cell::try_from(0x40).is_err());
    }
}
