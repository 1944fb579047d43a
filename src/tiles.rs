//! Basic types for working with wordfeud tiles.
mod cell;
mod codec;
mod codes;
mod item;
mod items;
mod letter;
mod list;
mod tile;

/// Capacity of every code list: the longest row plus the trailing sentinel square.
pub const DIM: usize = 32;
pub use cell::Cell;
pub use codec::Codec;
pub use codes::{Code, Label, BLANK, EMPTY, LETTER_MASK};
pub use item::Item;
pub use items::{Letters, Row, Word};
pub use letter::Letter;
pub use list::{ItemList, List};
pub use tile::Tile;
