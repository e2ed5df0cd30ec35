use super::Board;
use crate::dictionary::Node;
use crate::grid::Topology;
use crate::score::MIN_WORD_LEN;

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::Instant;

/// Depth first search for all words that start at one tile.
///
/// `visited` and `prefix` are owned by the search, and restored when a
/// branch returns, so each starting tile gets a fresh, independent state.
struct Search<'a, T> {
    board: &'a Board<T>,
    visited: Vec<bool>,
    prefix: String,
    found: BTreeSet<String>,
}

impl<'a, T: Topology> Search<'a, T> {
    fn new(board: &'a Board<T>) -> Self {
        Search {
            board,
            visited: vec![false; board.size()],
            prefix: String::new(),
            found: BTreeSet::new(),
        }
    }

    /// Visit tile `index`, coming from the dictionary node of the current prefix.
    fn visit(&mut self, index: usize, node: &'a Node) {
        if self.visited[index] {
            return;
        }
        let letter = self.board.letters[index];
        // prune: the prefix with this letter starts no word
        let node = match node.child(letter) {
            Some(node) => node,
            None => return,
        };
        self.visited[index] = true;
        self.prefix.push(letter);
        if node.is_terminal() {
            self.found.insert(self.prefix.clone());
        }
        for next in self.board.topology.neighbors(index) {
            self.visit(next, node);
        }
        self.prefix.pop();
        self.visited[index] = false;
    }
}

impl<T: Topology> Board<T> {
    /// Return all words, of any length, spelled by a path that starts at tile `index`.
    fn words_from(&self, index: usize) -> BTreeSet<String> {
        let mut search = Search::new(self);
        search.visit(index, self.dictionary.root());
        search.found
    }

    #[cfg(feature = "rayon")]
    fn words_from_all(&self) -> BTreeSet<String> {
        (0..self.size())
            .into_par_iter()
            .map(|i| self.words_from(i))
            .reduce(BTreeSet::new, |mut a, mut b| {
                a.append(&mut b);
                a
            })
    }

    #[cfg(not(feature = "rayon"))]
    fn words_from_all(&self) -> BTreeSet<String> {
        (0..self.size()).flat_map(|i| self.words_from(i)).collect()
    }

    /// Find every word on the board that scores: all dictionary words of at
    /// least 3 letters spelled by a path of adjacent tiles, each tile used
    /// at most once.
    ///
    /// The words are returned without duplicates, longest first. Words of
    /// equal length are sorted alphabetically.
    /// With the `rayon` feature, the tiles are searched in parallel.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::default()
    ///     .with_dictionary_from_words(&["cat", "cats", "at", "act", "tac"])
    ///     .with_letters_from_str("cats zzzz zzzz zzzz")?;
    /// assert_eq!(board.enumerate_all(), vec!["CATS", "CAT", "TAC"]);
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn enumerate_all(&self) -> Vec<String> {
        let t0 = Instant::now();
        let mut words = self
            .words_from_all()
            .into_iter()
            .filter(|word| word.chars().count() >= MIN_WORD_LEN)
            .collect::<Vec<String>>();
        // stable sort keeps the alphabetical order of the set for equal lengths
        words.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
        debug!(
            "Found {} words on {} tiles in {:?}",
            words.len(),
            self.size(),
            t0.elapsed()
        );
        words
    }
}

#[cfg(test)]
mod tests {
    use crate::{Alphabet, Board, Error, Grid, ScoredWords};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &[
        "cat", "cats", "at", "act", "tac", "sat", "ate", "eat", "tea", "seat", "east", "eats",
        "set", "tee", "teas", "stat", "taste", "state", "states",
    ];

    #[test]
    fn test_enumerate_all() -> Result<()> {
        let board = Board::default()
            .with_dictionary_from_words(WORDS)
            .with_letters_from_str("cats zzzz zzzz zzzz")?;
        assert_eq!(board.enumerate_all(), vec!["CATS", "CAT", "TAC"]);
        Ok(())
    }

    #[test]
    fn test_enumerate_properties() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(2021);
        let alphabet = Alphabet::new("aaceesstt")?;
        let mut board = Board::default().with_dictionary_from_words(WORDS);
        for _ in 0..20 {
            board.randomize_with(&alphabet, &mut rng);
            let words = board.enumerate_all();
            let unique: HashSet<&String> = words.iter().collect();
            assert_eq!(unique.len(), words.len(), "duplicates in {:?}", words);
            for word in &words {
                assert!(word.len() > 2);
                assert!(board.dictionary().is_word(word));
            }
            for pair in words.windows(2) {
                assert!(pair[0].len() >= pair[1].len());
            }
        }
        Ok(())
    }

    #[test]
    fn test_tiles_used_once() -> Result<()> {
        // 9 tiles can spell 9 a's, but never 10
        let board = Board::new(Grid::new(3, 3)?)
            .with_dictionary_from_words(&["aaa", "aaaaaaaaa", "aaaaaaaaaa"])
            .with_letters_from_str("aaa aaa aaa")?;
        assert_eq!(board.enumerate_all(), vec!["AAAAAAAAA", "AAA"]);
        Ok(())
    }

    #[test]
    fn test_enumerate_matches_step() -> Result<()> {
        // every word found can be played, and scores
        let board = Board::default()
            .with_dictionary_from_words(WORDS)
            .with_letters_from_str("stat eaze zzzz zzzz")?;
        let words = board.enumerate_all();
        assert!(words.contains(&String::from("STATE")));
        assert!(words.contains(&String::from("SEAT")));
        let scored = ScoredWords::new();
        // S(0) T(1) A(2) T(3) E(7)
        let step = board.step(&[0, 1, 2, 3], 7, &scored)?;
        assert_eq!(step.word(), "STATE");
        assert_eq!(step.points(), 2);
        Ok(())
    }

    #[test]
    fn test_empty_dictionary() -> Result<()> {
        let board = Board::default().with_letters_from_str("cats eats seat tate")?;
        assert!(board.enumerate_all().is_empty());
        Ok(())
    }

    #[test]
    fn test_unset_letters() {
        let board = Board::default().with_dictionary_from_words(WORDS);
        assert!(board.enumerate_all().is_empty());
    }
}
