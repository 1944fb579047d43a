/// Code 1..31 for a letter in the alphabet (a..z plus language specific)
pub type Label = u8;

/// Code used to represent a `Tile`, `Letter` or `Cell`. See [`Codec`](crate::Codec).
pub type Code = u8;

/// code for an empty square
pub const EMPTY: Code = 0;

/// code for an unassigned blank tile (`*` on the rack)
pub const BLANK: Code = 0x40;

/// Mask to get the label 0..31 from a code
pub const LETTER_MASK: Code = 0b1_1111;

/// bitflag for a blank tile that was assigned a letter
pub const IS_WILDCARD: Code = 0x40;

/// Placeholder for list slots that are not in use
pub(super) const UNINIT: Code = 0x7f;
