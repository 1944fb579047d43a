use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// All bits of the variant mask are in use
    #[error("Cannot load more than {0} wordlists")]
    TooManyWordlists(usize),

    /// Error serializing a compiled wordlist
    #[cfg(feature = "bincode")]
    #[error("Wordlist could not be serialized to {0}")]
    WordlistSerializeError(String),

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordlistDeserializeError(String),

    /// The string is longer than the longest supported row
    #[error("Encoder: string too long {0}")]
    EncodeStringTooLong(String),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// Code is not valid for `Tile` or `Cell`
    #[error("Invalid code for tile {0}")]
    InvalidTileCode(u8),

    /// Code is not valid for `Letter`
    #[error("Invalid code for letter {0}")]
    InvalidLetterCode(u8),

    /// Boards must be square with an odd dimension that fits in a `Row`
    #[error("Invalid board size {0}")]
    InvalidBoardSize(usize),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {found} (expect {expected})")]
    InvalidRowCount { found: usize, expected: usize },

    /// A row has the wrong number of squares
    #[error("Invalid row \"{row}\": length {len}, expect {expected}")]
    InvalidRowLength {
        row: String,
        len: usize,
        expected: usize,
    },

    /// Error parsing bonus square
    #[error("Invalid grid bonus square: \"{0}\"")]
    GridParseError(String),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at x={x}, y={y} does not fit")]
    TilePlacementError {
        x: usize,
        y: usize,
        horizontal: bool,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at x:{x}, y:{y}")]
    TileReplaceError { x: usize, y: usize },
}
