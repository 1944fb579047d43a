use super::{list::ItemList, list::Items, Cell, Letter, List, Tile};

/// A collection of [`Tile`](crate::Tile): a word as it lies on the board.
pub type Word = ItemList<Tile>;

/// A collection of [`Cell`](crate::Cell): one row or column of the board.
pub type Row = ItemList<Cell>;

/// A collection of [`Letter`](crate::Letter): the rack.
pub type Letters = ItemList<Letter>;

impl Letters {
    /// A rack holding a single blank
    pub fn blank() -> Letters {
        let mut letters = Letters::new();
        letters.push(Letter::blank());
        letters
    }

    /// Return a copy without the letter at `pos`.
    pub fn remove(&self, pos: usize) -> Letters {
        let mut letters = *self;
        letters.0.remove(pos);
        letters
    }
}

impl Row {
    /// A row of `len` empty squares
    pub fn empty(len: usize) -> Row {
        (0..len).map(|_| Cell::EMPTY).collect()
    }

    /// check if row is a single empty square
    pub fn is_empty_cell(&self) -> bool {
        self.len() == 1 && self[0].is_empty()
    }

    /// Returns the beginning and the end of the word at position `i`, given that
    /// a tile would be placed in `i`: scan back to the previous empty square and forward
    /// to the next empty square, both exclusive.
    ///
    /// Panics if `i` is not inside the row.
    pub fn start_end(&self, i: usize) -> (usize, usize) {
        let start = self.0[..i]
            .iter()
            .rposition(Cell::is_empty)
            .map_or(0, |p| p + 1);

        let end = self.0[i + 1..]
            .iter()
            .position(Cell::is_empty)
            .map_or(self.len(), |p| p + i + 1);

        assert!(start < end, "malformed row: start {} >= end {}", start, end);
        (start, end)
    }

    /// Return the word fragment around index `i`, with wildcard flags removed.
    pub(crate) fn surrounding_word(&self, i: usize) -> Row {
        let (start, end) = self.start_end(i);
        let inner: Items<Cell> = self.0[start..end]
            .iter()
            .map(|cell| cell.to_letter())
            .collect();
        ItemList(inner)
    }

    /// Return self[start..end] with every empty square filled by `tile`.
    pub(crate) fn fill(&self, start: usize, end: usize, tile: Tile) -> Word {
        debug_assert!(start < end);
        self.0[start..end]
            .iter()
            .map(|cell| cell.tile().unwrap_or(tile))
            .collect()
    }

    /// Append the empty sentinel square the search kernel expects.
    pub(crate) fn with_sentinel(&self) -> Row {
        let mut row = *self;
        row.push(Cell::EMPTY);
        row
    }
}
