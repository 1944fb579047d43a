use crate::grid::{Grid, Square};
use crate::movegen::Move;
use crate::tiles::{Codec, Item, ItemList, List, Row, Tile, Word};
use crate::tilesets::{Language, TileSet};
use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// Points for playing 7 or more tiles in one move
pub const BINGO_BONUS: u32 = 40;

/// Number of new tiles that earns the [`BINGO_BONUS`]
pub const BINGO_TILES: usize = 7;

/// A new tile of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub tile: Tile,
}

/// Represents the state of a `wordfeud` board.
/// * A grid of N x N squares with possible letter/word bonus,
/// * The tile distribution for the language used (number of letters, and value of each letter),
/// * The tiles on the board, both as rows and as columns.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    horizontal: Vec<Row>,
    vertical: Vec<Row>,
    tileset: TileSet,
}

/// Display the board state as N lines of N squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .horizontal
            .iter()
            .map(|&row| self.decode(row))
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Language::EN)
    }
}

impl Board {
    /// Create a new empty `wordfeud ` board, with the standard 15x15 grid.
    /// The [`language`](crate::Language) is used to specify the tile distribution used in the game.
    /// See [Wordfeud Help](https://wordfeud.com/wf/help/): Tile Distribution.
    /// Currently supported:
    /// - `EN` (english),
    /// - `NL` (dutch),
    /// - `SE` (swedish)
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use wordfeud_movegen::{Board, Language};
    ///
    /// let board = Board::new(Language::NL);
    /// assert_eq!(board.dim(), 15);
    ///```
    /// Additional builder functions can be used to set the grid and state of the board.
    /// See also:
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    /// - [`with_quarter_board`](Board::with_quarter_board)
    #[must_use]
    pub fn new(language: Language) -> Board {
        Board::from_parts(Grid::default(), TileSet::new(language))
    }

    fn from_parts(grid: Grid, tileset: TileSet) -> Board {
        let n = grid.dim();
        let empty = vec![Row::empty(n); n];
        Board {
            grid,
            horizontal: empty.clone(),
            vertical: empty,
            tileset,
        }
    }

    /// Replace the grid, and returns the modified board. The board state is reset.
    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Board {
        self.set_grid(grid);
        self
    }

    /// Replace the grid. The board state is reset to an empty board of the new size.
    pub fn set_grid(&mut self, grid: Grid) {
        *self = Board::from_parts(grid, self.tileset.clone());
    }

    /// Use a grid expanded from a quarter board, see [`Grid::expand_quarter_board`].
    /// ## Errors
    /// If the quarter board can not be parsed.
    pub fn with_quarter_board<S: AsRef<str>>(self, quarter: &[S]) -> Result<Board, Error> {
        Ok(self.with_grid(Grid::expand_quarter_board(quarter)?))
    }

    /// Set board squares from string representation, see [`Grid::from_strings`].
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board squares.
    pub fn with_grid_from_strings<S: AsRef<str>>(self, grid: &[S]) -> Result<Board, Error> {
        Ok(self.with_grid(Grid::from_strings(grid)?))
    }

    /// Parse board state from a list of strings.
    /// The list must contain N rows of N characters.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    ///
    /// ## Examples
    /// ```
    /// use wordfeud_movegen::Board;
    /// let state = &[
    /// "    t     c   f",
    /// "    e    he   o",
    /// "    r   bis g k",
    /// "    u  bol te v",
    /// "    gepof dimme",
    /// "      la vree e",
    /// "    qua   ene  ",
    /// "      Spoelen  ",
    /// "     s a   n   ",
    /// "     c d we    ",
    /// "     hadden    ",
    /// "    nu o   y   ",
    /// "  wrat siJzen  ",
    /// "    k     os   ",
    /// "   zerk   g    ",
    /// ];
    /// let board = Board::default().with_state_from_strings(state)?;
    /// assert!(board.is_occupied(4, 0));
    /// # Ok::<(), wordfeud_movegen::Error>(())
    /// ```
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Set the board state from a list of strings.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        let state = self.state_from_strings(rows)?;
        self.set_state(&state)
    }

    /// Parse a list of strings to rows, without changing the board.
    /// ## Errors
    /// If a string can not be encoded as a row of squares.
    pub fn state_from_strings<S: AsRef<str>>(&self, rows: &[S]) -> Result<Vec<Row>, Error> {
        rows.iter()
            .map(|row| Row::try_from(self.codec().encode(row.as_ref())?))
            .collect()
    }

    /// Set board state from a list of rows, and update the columns.
    /// This is the only place where the tiles on the board change.
    /// ## Errors
    /// If `rows` does not have N rows of N squares.
    pub fn set_state(&mut self, rows: &[Row]) -> Result<(), Error> {
        let n = self.dim();
        if rows.len() != n {
            return Err(Error::InvalidRowCount {
                found: rows.len(),
                expected: n,
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(Error::InvalidRowLength {
                row: self.decode(*row),
                len: row.len(),
                expected: n,
            });
        }
        self.horizontal = rows.to_vec();
        for (x, column) in self.vertical.iter_mut().enumerate() {
            *column = rows.iter().map(|row| row[x]).collect();
        }
        Ok(())
    }

    /// The number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    /// Index of the centre row and column
    pub fn center(&self) -> usize {
        self.dim() / 2
    }

    /// Check if the square at x, y is occupied.
    ///
    /// ## Examples
    /// ```
    /// # use wordfeud_movegen::{Board, Error};
    /// let mut board = Board::default();
    /// board.play_word("aardvark", 7, 7, true)?;
    /// assert!(board.is_occupied(7, 7));
    /// assert!(!board.is_occupied(7, 8));
    /// assert!(!board.is_occupied(15, 7));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.tile_at(x, y).is_some()
    }

    /// True if there are no tiles on the board: the next move is the first.
    pub fn is_empty(&self) -> bool {
        self.horizontal
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// Return tile at x, y or None if the square is empty or outside the grid.
    pub fn tile_at(&self, x: usize, y: usize) -> Option<Tile> {
        self.horizontal.get(y)?.0.get(x)?.tile()
    }

    /// Return the rows of the board
    pub fn horizontal(&self) -> &[Row] {
        &self.horizontal
    }

    /// Return the columns of the board
    pub fn vertical(&self) -> &[Row] {
        &self.vertical
    }

    /// Return row `i` if `horizontal`, else column `i`.
    pub fn line(&self, horizontal: bool, i: usize) -> Row {
        if horizontal {
            self.horizontal[i]
        } else {
            self.vertical[i]
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    pub fn codec(&self) -> &Codec {
        self.tileset.codec()
    }

    /// Encode a string with the codec of our tileset.
    /// ## Errors
    /// If the string can not be encoded.
    pub fn encode<T: Item>(&self, word: &str) -> Result<ItemList<T>, Error> {
        ItemList::<T>::try_from(self.codec().encode(word)?)
    }

    /// Decode `items` with the codec of our tileset.
    pub fn decode<T: Item>(&self, items: ItemList<T>) -> String {
        self.codec().decode(&items.codes()).join("")
    }

    fn check_fits(&self, x: usize, y: usize, horizontal: bool, len: usize) -> Result<(), Error> {
        let n = self.dim();
        let (dx, dy) = if horizontal { (1, 0) } else { (0, 1) };
        if x >= n || y >= n || x + len * dx > n || y + len * dy > n {
            return Err(Error::TilePlacementError {
                x,
                y,
                horizontal,
                len,
            });
        }
        Ok(())
    }

    /// Return the new tiles needed to have `word` at x, y in the given direction.
    /// Letters of `word` that are already on the board are not included.
    /// ## Errors
    /// - If the placed `word` does not fit on the board.
    /// - If a different letter is already on the board where a letter of `word` goes.
    pub fn placements(
        &self,
        word: &Word,
        x: usize,
        y: usize,
        horizontal: bool,
    ) -> Result<Vec<Placement>, Error> {
        self.check_fits(x, y, horizontal, word.len())?;
        let (dx, dy) = if horizontal { (1, 0) } else { (0, 1) };
        let (mut x, mut y) = (x, y);
        let mut placements = Vec::new();
        for &tile in word.iter() {
            match self.horizontal[y][x].tile() {
                None => placements.push(Placement { x, y, tile }),
                Some(on_board) if on_board.label() == tile.label() => {}
                Some(_) => return Err(Error::TileReplaceError { x, y }),
            }
            x += dx;
            y += dy;
        }
        Ok(placements)
    }

    /// Play `word` at x, y on the board in given direction.
    /// Upper case letters in `word` are played as wildcard tiles.
    /// Returns the placed tiles, in the order of use.
    /// ## Errors
    /// - If `word` cannot be encoded to a [`Word`](crate::Word).
    /// - If the placed `word` does not fit on the board.
    /// - If a letter would replace a different letter on the board.
    /// ## Examples
    /// ```
    /// # use wordfeud_movegen::{Board, Error};
    /// let mut board = Board::default();
    /// let placed = board.play_word("aardvark", 7, 7, true)?;
    /// assert_eq!(placed.len(), 8);
    /// let placed = board.play_word("ark", 12, 7, false)?;
    /// assert_eq!(placed.len(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn play_word(
        &mut self,
        word: &str,
        x: usize,
        y: usize,
        horizontal: bool,
    ) -> Result<Vec<Placement>, Error> {
        let word: Word = self.encode(word)?;
        self.play_tiles(&word, x, y, horizontal)
    }

    /// Play a generated move on the board. Returns the placed tiles.
    /// ## Errors
    /// If the move does not fit the current board.
    pub fn play_move(&mut self, mv: &Move) -> Result<Vec<Placement>, Error> {
        self.play_tiles(&mv.word, mv.x, mv.y, mv.horizontal)
    }

    fn play_tiles(
        &mut self,
        word: &Word,
        x: usize,
        y: usize,
        horizontal: bool,
    ) -> Result<Vec<Placement>, Error> {
        let placements = self.placements(word, x, y, horizontal)?;
        let mut rows = self.horizontal.clone();
        for p in &placements {
            rows[p.y][p.x] = p.tile.into_cell();
        }
        self.set_state(&rows)?;
        Ok(placements)
    }

    /// Returns the the surrounding characters that would need to form a valid
    /// word in order to fill each position in the i'th row (or column) of the board.
    /// Wildcard tiles are returned as ordinary letters.
    pub fn surrounding_words(&self, horizontal: bool, i: usize) -> Vec<Row> {
        let crossing_rows = if horizontal {
            &self.vertical
        } else {
            &self.horizontal
        };
        crossing_rows
            .iter()
            .map(|row| row.surrounding_word(i))
            .collect()
    }

    /// Calculates the score of `word` placed at `x`, `y`, `horizontal` that has
    /// not yet been played on the board.
    /// If `include_crossing_words` is `true` the points for words that are created or extended
    /// in the crossing direction are included in the points. `include_crossing_words` should be
    /// set to `true` for normal use.
    /// ## Errors
    /// - If the placed `word` would cross the right or bottom border.
    /// ## Examples
    /// ```
    /// # use wordfeud_movegen::{Board, Word, Error};
    /// let board = Board::default();
    /// let word: Word = board.encode("wordfeud")?;
    /// let points = board.calc_word_points(&word, 7, 7, true, true)?;
    /// assert_eq!(points, 78);
    /// # Ok::<(), Error>(())
    /// ```
    /// In this example, the values of the letters are: `w`:4 `o`:1, `r`:1, `d`:2, `f`:4, `e`:1, `u`:2.
    /// The `f` is on 2x word bonus, and the last `d` is on 2x letter bonus. The total value of the
    /// word is `2 x (4 + 1 + 1 + 2 + 4 + 1 + 2 + (2 x 2)) = 2 x 19 = 38`. Because more than 7
    /// tiles are played we get an extra "bingo" bonus of 40 points.
    pub fn calc_word_points(
        &self,
        word: &Word,
        x: usize,
        y: usize,
        horizontal: bool,
        include_crossing_words: bool,
    ) -> Result<u32, Error> {
        self.check_fits(x, y, horizontal, word.len())?;
        Ok(self.calc_word_points_unchecked(word, x, y, horizontal, include_crossing_words))
    }

    pub(crate) fn calc_word_points_unchecked(
        &self,
        word: &Word,
        x0: usize,
        y0: usize,
        horizontal: bool,
        include_crossing_words: bool,
    ) -> u32 {
        let mut word_multiplier = 1;
        let mut word_points = 0;
        let mut tiles_used = 0;
        let mut total_points = 0;
        let (mut x, mut y) = (x0, y0);
        let (dx, dy) = if horizontal { (1, 0) } else { (0, 1) };

        for &tile in word.iter() {
            let letter_points = match self.horizontal[y][x].tile() {
                Some(on_board) => self.tileset.points(on_board.code()),
                None => {
                    tiles_used += 1;
                    let mut letter_points = self.tileset.points(tile.code());
                    match self.grid[y][x] {
                        Square::LetterBonus(n) => letter_points *= n,
                        Square::WordBonus(n) => word_multiplier *= n,
                        Square::NoBonus | Square::Start => {}
                    }
                    if include_crossing_words {
                        let (crow, ci) = if horizontal {
                            (self.vertical[x], y)
                        } else {
                            (self.horizontal[y], x)
                        };
                        let (s, e) = crow.start_end(ci);
                        if e - s > 1 {
                            let (cx, cy) = if horizontal { (x, s) } else { (s, y) };
                            let cword = crow.fill(s, e, tile);
                            total_points +=
                                self.calc_word_points_unchecked(&cword, cx, cy, !horizontal, false);
                        }
                    }
                    letter_points
                }
            };
            word_points += letter_points;
            x += dx;
            y += dy;
        }
        total_points += word_points * word_multiplier;
        if tiles_used >= BINGO_TILES {
            total_points += BINGO_BONUS;
        }
        total_points
    }
}
