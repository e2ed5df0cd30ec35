mod trie;

pub use self::trie::Trie;
use crate::Error;
use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;

/// A node of the dictionary trie, used to walk the dictionary one letter at a time.
pub type Node = Trie;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the valid words.
///
/// Words are normalized to upper case on insertion and on every query, so
/// the word list and the tiles on the board may use any case.
/// The dictionary is built once and is not modified during a game.
pub struct Dictionary {
    root: Trie,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    pub wordfile: String,
    word_count: usize,
    node_count: usize,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} nodes from '{}'>",
            self.word_count, self.node_count, self.wordfile
        )
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a word or query: surrounding whitespace removed, upper case.
fn normalize(word: &str) -> impl Iterator<Item = char> + '_ {
    word.trim().chars().flat_map(char::to_uppercase)
}

impl Dictionary {
    /// Return an empty dictionary. No word is valid, and only `""` is a prefix.
    pub fn new() -> Dictionary {
        Dictionary {
            root: Trie::new(),
            wordfile: String::new(),
            word_count: 0,
            node_count: 1,
        }
    }

    /// Build a dictionary from a list of words.
    /// ## Examples
    /// ```
    /// use boggle_solver::Dictionary;
    /// let dictionary = Dictionary::from_words(&["cat", "cats", "at"]);
    /// assert!(dictionary.is_word("CAT"));
    /// assert!(dictionary.is_prefix("ca"));
    /// assert!(!dictionary.is_word("ca"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Build a dictionary from the contents of a wordfile, with one word per line.
    pub fn from_text(text: &str) -> Dictionary {
        Dictionary::from_words(text.lines())
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the wordfile can not be read.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::from_text(&text);
        dictionary.wordfile = String::from(wordfile);
        info!("Loaded {}", dictionary);
        Ok(dictionary)
    }

    /// Read the dictionary from a file, like [`from_file`](Dictionary::from_file),
    /// but return an empty dictionary if the file can not be read.
    ///
    /// With an empty dictionary the game still works: no path will ever form a word.
    /// ## Examples
    /// ```
    /// use boggle_solver::Dictionary;
    /// let dictionary = Dictionary::from_file_or_empty("no/such/wordfile.txt");
    /// assert_eq!(dictionary.word_count(), 0);
    /// assert!(!dictionary.is_word("cat"));
    /// ```
    pub fn from_file_or_empty(wordfile: &str) -> Dictionary {
        Dictionary::from_file(wordfile).unwrap_or_else(|err| {
            warn!("{}, continuing with an empty dictionary", err);
            Dictionary::new()
        })
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DictionarySerializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        info!("Loaded {}", dictionary);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the dictionary to a bincoded file, to be read back with
    /// [`deserialize_from`](Dictionary::deserialize_from).
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::DictionarySerializeError(String::from(path)))
    }

    /// Add `word` to the dictionary. Inserting a word twice has no effect.
    /// Empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        let key: Vec<char> = normalize(word).collect();
        if key.is_empty() {
            return;
        }
        if self.root.walk(key.iter().copied()).map_or(false, Trie::is_terminal) {
            return;
        }
        self.node_count += self.root.insert(key);
        self.word_count += 1;
    }

    /// The root node, to walk the dictionary letter by letter.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Return the node reached by `prefix`, or None if `prefix` is not a prefix.
    pub fn get(&self, prefix: &str) -> Option<&Node> {
        self.root.walk(normalize(prefix))
    }

    /// Returns true if `word` is in the dictionary. The empty string is never a word.
    pub fn is_word(&self, word: &str) -> bool {
        self.get(word).map_or(false, Node::is_terminal)
    }

    /// Returns true if `prefix` is the start of at least one word.
    /// The empty string is a prefix of every word, even in an empty dictionary.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.get(prefix).is_some()
    }

    /// The number of words in the dictionary
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
