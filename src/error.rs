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

    /// Error (de)serializing a bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary file {0} could not be (de)serialized")]
    DictionarySerializeError(String),

    /// Index does not refer to a tile on the board
    #[error("Tile index {index} out of range (board has {size} tiles)")]
    IndexOutOfRange { index: usize, size: usize },

    /// Attempt to use a tile twice in one path
    #[error("Tile {index} is already part of the path")]
    TileAlreadyVisited { index: usize },

    /// Attempt to extend a path with a tile that is not a neighbor of the last tile
    #[error("Tile {to} is not adjacent to tile {from}")]
    NotAdjacent { from: usize, to: usize },

    /// A grid needs a left and a right edge column
    #[error("Invalid grid width {0} (expect at least 2)")]
    InvalidGridWidth(usize),

    /// Parsing a grid layout needs at least one row
    #[error("Invalid number of rows {0}")]
    InvalidRowCount(usize),

    /// All rows of a grid layout need the same number of cells
    #[error("Invalid row \"{0}\": length {1}, expect {2}")]
    InvalidRowLength(String, usize, usize),

    /// Error parsing position class cell
    #[error("Invalid grid cell: \"{0}\"")]
    GridParseError(String),

    /// Number of letters does not match the number of tiles
    #[error("Invalid number of letters {found} (expect {expected})")]
    InvalidLetterCount { expected: usize, found: usize },

    /// Tiles only hold alphabetic letters
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// An alphabet needs at least one letter to sample from
    #[error("Alphabet is empty")]
    EmptyAlphabet,
}
