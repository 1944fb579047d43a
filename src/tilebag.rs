use crate::board::Board;
use crate::tiles::{Code, Item, Letter, Letters, BLANK};
use crate::tilesets::{TileSet, BLANK_COUNT};
use crate::Error;
use multiset::HashMultiSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::convert::TryFrom;
use std::iter::{repeat, FromIterator};
use std::ops::{Deref, Sub};

/// Keeps track of the tiles: a multiset of letter codes, blanks as [`BLANK`].
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Code>);

impl Deref for TileBag {
    type Target = HashMultiSet<Code>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl FromIterator<Code> for TileBag {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        let mut bag = HashMultiSet::new();
        for code in iter {
            bag.insert(code);
        }
        Self(bag)
    }
}

/// The full bag of a game in this language
impl From<&TileSet> for TileBag {
    fn from(tileset: &TileSet) -> Self {
        let mut bag = HashMultiSet::new();
        for (label, count, _points) in tileset.tiles() {
            if count > 0 {
                bag.insert_times(label, count as usize);
            }
        }
        bag.insert_times(BLANK, BLANK_COUNT as usize);
        Self(bag)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self(HashMultiSet::new())
    }
}

impl TileBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tiles on the board plus the tiles in `rack`.
    /// A wildcard tile on the board was a blank in the bag.
    pub fn used(board: &Board, rack: &Letters) -> TileBag {
        board
            .horizontal()
            .iter()
            .flat_map(|&row| row.into_iter())
            .filter_map(|cell| cell.tile())
            .map(|tile| Letter::from_tile(tile).code())
            .chain(rack.codes())
            .collect()
    }

    /// The tiles we have not seen: the full bag of the board's language, minus the
    /// tiles on the board and in `rack`. These are in the bag or on the opponent's rack.
    /// ## Example
    /// ```
    /// use wordfeud_movegen::{Board, Letters, TileBag};
    /// let mut board = Board::default();
    /// board.play_word("rust", 7, 7, true)?;
    /// let rack: Letters = board.encode("abc*")?;
    /// let unseen = TileBag::unseen(&board, &rack);
    /// assert_eq!(unseen.len(), 104 - 4 - 4);
    /// # Ok::<(), wordfeud_movegen::Error>(())
    /// ```
    pub fn unseen(board: &Board, rack: &Letters) -> TileBag {
        TileBag::from(board.tileset()) - TileBag::used(board, rack)
    }

    /// The codes in the bag, in ascending order.
    pub fn codes(&self) -> Vec<Code> {
        let mut codes: Vec<Code> = self
            .0
            .distinct_elements()
            .flat_map(|&code| repeat(code).take(self.0.count_of(&code)))
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Draw a random rack of `n` tiles, or all tiles if the bag holds less than `n`.
    /// The bag is not changed.
    /// ## Errors
    /// If `n` tiles do not fit in [`Letters`].
    pub fn draw<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Letters, Error> {
        let drawn: Vec<Code> = self.codes().choose_multiple(rng, n).copied().collect();
        Letters::try_from(drawn)
    }
}
