mod reveal;

use crate::alphabet::{parse_letters, Alphabet};
use crate::grid::{Grid, Topology};
use crate::score::{points, ScoredWords, MIN_WORD_LEN};
use crate::{Dictionary, Error};
use log::trace;
use rand::Rng;
use std::fmt;
use std::ops::Deref;

/// Letter of a tile that has not been assigned yet. It never matches a word.
const UNSET: char = '?';

/// The outcome of extending a path with one tile.
///
/// Every variant carries the word spelled by the extended path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The word is a prefix of some dictionary word: keep going.
    Continue { word: String },
    /// A new word was found, worth `points`.
    Scored { word: String, points: u32 },
    /// A valid word that was scored before, worth nothing.
    /// The path stays open unless it is also a dead end.
    AlreadyScored { word: String, dead_end: bool },
    /// No neighbor of the last tile can extend the word to a valid prefix.
    DeadEnd { word: String },
    /// The word is not a prefix of any dictionary word.
    Invalid { word: String },
}

impl Step {
    /// The word spelled by the path.
    pub fn word(&self) -> &str {
        match self {
            Step::Continue { word }
            | Step::Scored { word, .. }
            | Step::AlreadyScored { word, .. }
            | Step::DeadEnd { word }
            | Step::Invalid { word } => word,
        }
    }

    /// Points earned by this step.
    pub fn points(&self) -> u32 {
        match self {
            Step::Scored { points, .. } => *points,
            _ => 0,
        }
    }

    /// True if the path is finished after this step, and a new path should be started.
    pub fn ends_path(&self) -> bool {
        match self {
            Step::Continue { .. } => false,
            Step::AlreadyScored { dead_end, .. } => *dead_end,
            Step::Scored { .. } | Step::DeadEnd { .. } | Step::Invalid { .. } => true,
        }
    }
}

/// The tiles selected so far, in order. A tile occurs at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<usize>);

impl Deref for Path {
    type Target = [usize];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Path {
    pub fn new() -> Path {
        Path(Vec::new())
    }

    /// Start a new path.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn push(&mut self, index: usize) {
        self.0.push(index);
    }
}

/// A boggle board: the layout of the tiles, the letter on each tile, and the
/// dictionary of valid words.
///
/// The board answers the questions of the game without keeping any game state:
/// the path selected by the player and the words scored so far are owned by
/// the caller, see [`Path`] and [`ScoredWords`].
#[derive(Debug, Clone)]
pub struct Board<T = Grid> {
    topology: T,
    letters: Vec<char>,
    dictionary: Dictionary,
}

impl Default for Board<Grid> {
    /// A standard 4x4 board with unassigned letters and an empty dictionary.
    fn default() -> Self {
        Board::new(Grid::default())
    }
}

/// Display the letters on the board, one line for each row.
impl fmt::Display for Board<Grid> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .letters
            .chunks(self.topology.width())
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl<T: Topology> Board<T> {
    /// Create a new board with the given tile layout.
    /// All letters are unassigned, and the dictionary is empty.
    ///
    /// Additional builder functions can be used to set the dictionary and letters:
    /// - [`with_dictionary`](Board::with_dictionary)
    /// - [`with_dictionary_from_words`](Board::with_dictionary_from_words)
    /// - [`with_letters_from_str`](Board::with_letters_from_str)
    ///
    /// ## Examples
    /// ```
    /// use boggle_solver::{Board, Grid};
    /// let board = Board::new(Grid::new(5, 5).unwrap());
    /// assert_eq!(board.size(), 25);
    /// ```
    #[must_use]
    pub fn new(topology: T) -> Board<T> {
        let letters = vec![UNSET; topology.size()];
        Board {
            topology,
            letters,
            dictionary: Dictionary::new(),
        }
    }

    /// Specify the dictionary, and return the modified board.
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Board<T> {
        self.dictionary = dictionary;
        self
    }

    /// Specify the dictionary by a list of words, and return the modified board.
    /// ## Example
    /// ```
    /// use boggle_solver::Board;
    /// let board = Board::default().with_dictionary_from_words(&["aardvark", "zebra"]);
    /// assert!(board.dictionary().is_word("zebra"));
    ///```
    pub fn with_dictionary_from_words<I, S>(self, words: I) -> Board<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_dictionary(Dictionary::from_words(words))
    }

    /// Set the letters of the board, and return the modified board.
    /// See [`set_letters`](Board::set_letters).
    /// ## Errors
    /// If the letters are invalid, or their number is not the number of tiles.
    pub fn with_letters_from_str(mut self, letters: &str) -> Result<Board<T>, Error> {
        self.set_letters(letters)?;
        Ok(self)
    }

    /// Set the letters of the board from a string with one letter for each
    /// tile, in index order. Whitespace is ignored, so rows can be separated by
    /// spaces or newlines.
    /// ## Errors
    /// If the letters are invalid, or their number is not the number of tiles.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let mut board = Board::default();
    /// board.set_letters("cats enot ruoy mbes")?;
    /// assert_eq!(board.letter(4), Some('E'));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn set_letters(&mut self, letters: &str) -> Result<(), Error> {
        let letters = parse_letters(letters)?;
        if letters.len() != self.size() {
            return Err(Error::InvalidLetterCount {
                expected: self.size(),
                found: letters.len(),
            });
        }
        self.letters = letters;
        Ok(())
    }

    /// Assign a random letter from the default [`Alphabet`] to every tile.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomize_with(&Alphabet::default(), rng);
    }

    /// Assign a random letter from `alphabet` to every tile.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, alphabet: &Alphabet, rng: &mut R) {
        for letter in self.letters.iter_mut() {
            *letter = alphabet.sample(rng);
        }
    }

    /// The number of tiles.
    pub fn size(&self) -> usize {
        self.letters.len()
    }

    /// Return the letter on tile `index`, or None if outside the board.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Return the letters of all tiles.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Return the tile layout.
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Return reference to our dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.size() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.size(),
            })
        }
    }

    /// Return the word spelled by the tiles in `path`.
    /// ## Errors
    /// If an index is outside the board.
    pub fn word(&self, path: &[usize]) -> Result<String, Error> {
        path.iter()
            .map(|&i| self.check_index(i).map(|_| self.letters[i]))
            .collect()
    }

    /// Classify the extension of `path` with tile `index`, after the player tapped it.
    ///
    /// The word spelled by the extended path is checked in this order:
    /// 1. Not a prefix of any word: [`Step::Invalid`].
    /// 2. A word of at least 3 letters, not in `scored`: [`Step::Scored`].
    /// 3. A word of at least 3 letters, already in `scored`: [`Step::AlreadyScored`].
    /// 4. A [dead end](Board::is_dead_end): [`Step::DeadEnd`].
    /// 5. Otherwise: [`Step::Continue`].
    ///
    /// Neither the board, `path` nor `scored` is modified.
    /// ## Errors
    /// The tap is rejected when it does not legally extend the path:
    /// - [`Error::IndexOutOfRange`] if `index` or a tile in `path` is not on the board.
    /// - [`Error::TileAlreadyVisited`] if `index` is already in `path`.
    /// - [`Error::NotAdjacent`] if `index` is not a neighbor of the last tile in `path`.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, ScoredWords, Step, Error};
    /// let board = Board::default()
    ///     .with_dictionary_from_words(&["cat", "cats", "at"])
    ///     .with_letters_from_str("cats zzzz zzzz zzzz")?;
    /// let scored = ScoredWords::new();
    /// let step = board.step(&[0, 1], 2, &scored)?;
    /// assert_eq!(step, Step::Scored { word: "CAT".to_string(), points: 1 });
    /// # Ok::<(), Error>(())
    /// ```
    pub fn step(&self, path: &[usize], index: usize, scored: &ScoredWords) -> Result<Step, Error> {
        self.check_index(index)?;
        let mut word = self.word(path)?;
        if path.contains(&index) {
            return Err(Error::TileAlreadyVisited { index });
        }
        if let Some(&last) = path.last() {
            if !self.topology.is_adjacent(last, index) {
                return Err(Error::NotAdjacent {
                    from: last,
                    to: index,
                });
            }
        }
        word.push(self.letters[index]);

        let step = if !self.dictionary.is_prefix(&word) {
            Step::Invalid { word }
        } else if word.chars().count() >= MIN_WORD_LEN && self.dictionary.is_word(&word) {
            if scored.contains(&word) {
                let dead_end = self.is_dead_end_after(path, index, &word);
                Step::AlreadyScored { word, dead_end }
            } else {
                let points = points(word.chars().count());
                Step::Scored { word, points }
            }
        } else if self.is_dead_end_after(path, index, &word) {
            Step::DeadEnd { word }
        } else {
            Step::Continue { word }
        };
        trace!("step {:?} + {} -> {:?}", path, index, step);
        Ok(step)
    }

    /// Extend `path` with tile `index`, and apply the resulting [`Step`]:
    /// points for a new word are recorded in `scored`, and the path is cleared
    /// when the step ends it. Otherwise `index` is added to the path.
    /// ## Errors
    /// See [`step`](Board::step). On error, `path` and `scored` are unchanged.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Path, ScoredWords, Error};
    /// let board = Board::default()
    ///     .with_dictionary_from_words(&["cat", "cats", "at"])
    ///     .with_letters_from_str("cats zzzz zzzz zzzz")?;
    /// let mut path = Path::new();
    /// let mut scored = ScoredWords::new();
    /// for &i in &[0, 1, 2] {
    ///     board.tap(&mut path, i, &mut scored)?;
    /// }
    /// assert_eq!(scored.score(), 1);
    /// assert!(path.is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn tap(
        &self,
        path: &mut Path,
        index: usize,
        scored: &mut ScoredWords,
    ) -> Result<Step, Error> {
        let step = self.step(path, index, scored)?;
        scored.record(&step);
        if step.ends_path() {
            path.clear();
        } else {
            path.push(index);
        }
        Ok(step)
    }

    /// Returns true if no unvisited neighbor of the last tile in `path` extends
    /// the word of `path` to a valid prefix.
    ///
    /// This looks only one tile ahead: a path that is not a dead end may still
    /// never reach a word. A path with less than 2 tiles is never a dead end,
    /// and neither is a path with tiles outside the board.
    pub fn is_dead_end(&self, path: &[usize]) -> bool {
        match (path.split_last(), self.word(path)) {
            (Some((&last, rest)), Ok(word)) if !rest.is_empty() => {
                self.is_dead_end_after(rest, last, &word)
            }
            _ => false,
        }
    }

    /// Dead end test for `path` extended with `last`, spelling `word`.
    fn is_dead_end_after(&self, path: &[usize], last: usize, word: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        let node = match self.dictionary.get(word) {
            Some(node) => node,
            None => return true,
        };
        !self
            .topology
            .neighbors(last)
            .into_iter()
            .filter(|n| !path.contains(n))
            .any(|n| node.child(self.letters[n]).is_some())
    }
}
