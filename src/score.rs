use crate::board::Step;
use std::collections::HashSet;

/// Words shorter than this never score.
pub const MIN_WORD_LEN: usize = 3;

/// Return the points for a word of `len` letters.
/// ## Examples
/// ```
/// use boggle_solver::points;
/// assert_eq!(points(4), 1);
/// assert_eq!(points(6), 3);
/// assert_eq!(points(8), 8);
/// ```
pub fn points(len: usize) -> u32 {
    match len {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 8,
    }
}

/// The words scored during one game, and the running score.
///
/// Owned by the caller and passed to [`Board::step`](crate::Board::step), so the
/// board can tell a new word from one that was already scored.
#[derive(Debug, Clone, Default)]
pub struct ScoredWords {
    words: Vec<String>,
    seen: HashSet<String>,
    score: u32,
}

impl ScoredWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `word` was already scored. Words are compared in upper case.
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(&word.to_uppercase())
    }

    /// Record the outcome of a step, and return the points added.
    /// Only [`Step::Scored`] adds a word and points; any other step is ignored.
    pub fn record(&mut self, step: &Step) -> u32 {
        match step {
            Step::Scored { word, points } => {
                if self.seen.insert(word.to_uppercase()) {
                    self.words.push(word.clone());
                    self.score += points;
                    *points
                } else {
                    0
                }
            }
            _ => 0,
        }
    }

    /// The total score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The scored words, in the order they were scored.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Forget all words and reset the score, to start a new game.
    pub fn clear(&mut self) {
        self.words.clear();
        self.seen.clear();
        self.score = 0;
    }
}
