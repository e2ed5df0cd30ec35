#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A node in the prefix tree.
///
/// Children are kept sorted by character, so a lookup is a binary search.
/// The path from the root to a node with `terminal` set spells a complete word.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trie {
    children: Vec<(char, Box<Trie>)>,
    terminal: bool,
}

impl<'a> Trie {
    pub fn new() -> Trie {
        Trie {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn bf_iter(&'a self) -> BFIter<'a> {
        BFIter::new(self)
    }

    /// Iterate over `(label, child)` pairs in character order.
    pub fn children(&'a self) -> impl Iterator<Item = (char, &'a Trie)> {
        self.children.iter().map(|(c, t)| (*c, t.as_ref()))
    }

    /// True if the path to this node spells a word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    /// Get the child for `label` if present.
    pub fn child(&self, label: char) -> Option<&Trie> {
        self.children
            .binary_search_by(|(c, _)| c.cmp(&label))
            .ok()
            .map(|pos| self.children[pos].1.as_ref())
    }

    /// Walk down from this node along `key`. Returns `None` as soon as a
    /// character has no child.
    pub fn walk<I: IntoIterator<Item = char>>(&self, key: I) -> Option<&Trie> {
        let mut t = self;
        for c in key {
            t = t.child(c)?;
        }
        Some(t)
    }

    /// Insert `key`, creating nodes as needed. Returns the number of nodes created.
    pub fn insert<I: IntoIterator<Item = char>>(&mut self, key: I) -> usize {
        let mut t = self;
        let mut created = 0;
        for c in key {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c, Box::new(Trie::new())));
                    created += 1;
                    pos
                }
            };
            t = &mut *{ t }.children[pos].1;
        }
        t.terminal = true;
        created
    }
}

pub struct BFIter<'a> {
    queue: VecDeque<&'a Trie>,
}

impl<'a> BFIter<'a> {
    fn new(t: &'a Trie) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(t);
        BFIter { queue }
    }
}

impl<'a> Iterator for BFIter<'a> {
    type Item = &'a Trie;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|node| {
            for (_, t) in &node.children {
                self.queue.push_back(t);
            }
            node
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie() {
        let mut t = Trie::new();
        let keys = &["to", "tea", "ten", "i", "in", "inn", "we"];
        let keys_not = &["te", "inno", "web", "hoge", ""];
        for key in keys {
            t.insert(key.chars());
        }

        for key in keys {
            let node = t.walk(key.chars());
            assert!(
                node.map_or(false, Trie::is_terminal),
                "t should have key '{}'",
                key
            );
        }
        for key in keys_not {
            let node = t.walk(key.chars());
            assert!(
                !node.map_or(false, Trie::is_terminal),
                "t should not have key '{}'",
                key
            );
        }
    }

    #[test]
    fn test_children_sorted() {
        let mut t = Trie::new();
        for key in &["c", "a", "b", "a"] {
            t.insert(key.chars());
        }
        let labels: Vec<char> = t.children().map(|(c, _)| c).collect();
        assert_eq!(labels, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_insert_twice() {
        let mut t = Trie::new();
        assert_eq!(t.insert("cat".chars()), 3);
        assert_eq!(t.insert("cat".chars()), 0);
        assert_eq!(t.insert("cats".chars()), 1);
        // root + c + a + t + s
        assert_eq!(t.bf_iter().count(), 5);
    }
}
