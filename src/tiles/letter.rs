use super::codes::{Code, Label, BLANK, LETTER_MASK, UNINIT};
use super::{Item, Tile};
use crate::error::Error;
use std::convert::TryFrom;
use std::num::NonZeroU8;

/// A letter on the rack.
///
/// Either a regular letter or a `blank` ("*") that can be played as any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Letter(pub(super) NonZeroU8);

impl Default for Letter {
    fn default() -> Self {
        Self::new(UNINIT)
    }
}

impl Item for Letter {
    fn code(&self) -> Code {
        self.0.get()
    }
}

impl Letter {
    fn new(code: Code) -> Letter {
        Letter(NonZeroU8::new(code).expect("letter code can't be 0"))
    }

    /// The rack letter that was spent on `tile`: a blank for wildcard tiles.
    pub fn from_tile(tile: Tile) -> Letter {
        if tile.is_wildcard() {
            Letter::blank()
        } else {
            Letter::new(tile.label())
        }
    }

    /// Return new blank
    pub fn blank() -> Letter {
        Letter::new(BLANK)
    }

    /// Check if letter is `blank`
    pub fn is_blank(&self) -> bool {
        self.code() == BLANK
    }

    /// Get label for letter. A blank has label 0.
    pub fn label(&self) -> Label {
        self.code() & LETTER_MASK
    }
}

impl TryFrom<Code> for Letter {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            1..=31 | BLANK => Ok(Self::new(code)),
            _ => Err(Self::Error::InvalidLetterCode(code)),
        }
    }
}

impl From<Letter> for Code {
    fn from(letter: Letter) -> Code {
        letter.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_from_tile() {
        let tile = Tile::try_from(3).unwrap();
        assert_eq!(Letter::from_tile(tile).code(), 3);
        let wildcard = Tile::wildcard_from_letter(3);
        assert!(Letter::from_tile(wildcard).is_blank());
    }

    #[test]
    fn test_invalid_letter() {
        assert!(Letter::try_from(0).is_err());
        assert!(Letter::try_from(65).is_err());
        assert!(Letter::try_from(BLANK).is_ok());
    }
}
