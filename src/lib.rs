//! A wordfeud move generator for Rust.
//! <br>
//! This crate finds every legal word placement on a wordfeud board for a given rack, and
//! scores it. A single dictionary can hold several word lists at once: each list gets its
//! own bit (a [`Variant`]), and move generation uses the lists selected by a variant mask.
//! With the default `rayon` feature, lines of the board are searched in parallel.
//!
//! # How to use `wordfeud_movegen`
//! Create a board for a language, load one or more word lists, set the tiles on the board
//! and ask for the moves of a rack. A word list must be in utf-8 and contain one word per
//! line. Upper case letters in the board state are wildcard tiles, a `*` in the rack is a
//! blank.
//!
//! # Basic usage
//!  ```
//! use wordfeud_movegen::{Board, Wordlist};
//!
//! let mut board = Board::default();
//! let mut wordlist = Wordlist::new(board.codec());
//! let variant = wordlist.add_words("rust words", &["rust", "rest"])?;
//! let results = board.calc_all_word_scores("rusta", &wordlist, variant)?;
//! assert_eq!(results.len(), 8);
//! for m in results {
//!     println!("{} {} {} {} {}", m.x, m.y, m.horizontal, board.decode(m.word), m.score);
//! }
//! board.play_word("rust", 7, 7, true)?;
//! println!("{}", board);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! The dictionary is a trie in one node arena. Every node has a bitmask of the word
//! lists that pass through it, so a search for one list skips the subtrees of others.
//! For each row and column, the letters that fit each empty square are found by matching
//! the crossing word fragment against the trie; these cross checks are memoized per
//! fragment. The search itself is an iterator with an explicit work stack.
mod board;
mod error;
mod grid;
mod labelset;
mod movegen;
mod tilebag;
mod tiles;
mod tilesets;
mod wordlist;

pub use board::{Board, Placement, BINGO_BONUS, BINGO_TILES};
pub use error::Error;
pub use grid::{Grid, Square, DEFAULT_QUARTER_BOARD};
pub use labelset::LabelSet;
pub use movegen::{CrossChecks, Move, MoveEnumerator};
pub use tilebag::TileBag;
pub use tiles::{
    Cell, Code, Codec, Item, ItemList, Label, Letter, Letters, List, Row, Tile, Word, BLANK, DIM,
    EMPTY, LETTER_MASK,
};
pub use tilesets::{Language, TileSet, BLANK_COUNT};
pub use wordlist::{LetterSet, Matches, RowData, Variant, Words, Wordlist, MAX_VARIANTS};
