//! A boggle library for Rust.
//! <br>
//! This crate answers the questions of a game of boggle: is the path of tiles
//! selected by the player a word, can it still become one, and which words
//! are hidden on the board.
//! It can use the `rayon` crate to search the board in parallel.
//!
//! # How to use `boggle_solver`
//! Start by creating a board, then specify the dictionary to be used, and the letters on the tiles.
//! By default a standard 4x4 board is used, but you can specify your own [`Grid`].
//! A dictionary file must be in utf-8 and contain one word per line.
//! If the dictionary can not be loaded the game still works, but no word will ever be valid.
//!
//! The board keeps no game state: the path of the player is a [`Path`], and the words scored so
//! far are kept in [`ScoredWords`]. Each tap on a tile is classified as a [`Step`].
//!
//! # Basic usage
//!  ```
//! # use boggle_solver::{Board, Path, ScoredWords, Step, Error};
//! let board = Board::default()
//!     .with_dictionary_from_words(&["rust", "rusty", "trust"])
//!     .with_letters_from_str("rust yzzz zzzz zzzz")?;
//! let mut path = Path::new();
//! let mut scored = ScoredWords::new();
//! for &i in &[0, 1, 2] {
//!     assert!(matches!(board.tap(&mut path, i, &mut scored)?, Step::Continue { .. }));
//! }
//! let step = board.tap(&mut path, 3, &mut scored)?;
//! assert_eq!(step, Step::Scored { word: String::from("RUST"), points: 1 });
//! assert_eq!(board.enumerate_all(), vec!["RUST"]);
//! println!("{}", board);
//! # Ok::<(), Error>(())
//! ```
mod alphabet;
mod board;
mod dictionary;
mod error;
mod grid;
mod score;

pub use crate::alphabet::Alphabet;
pub use crate::board::{Board, Path, Step};
pub use crate::dictionary::{Dictionary, Node};
pub use crate::error::Error;
pub use crate::grid::{Grid, Neighbors, PositionClass, Topology};
pub use crate::score::{points, ScoredWords, MIN_WORD_LEN};
