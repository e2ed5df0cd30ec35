use crate::Error;
use rand::seq::SliceRandom;
use rand::Rng;

/// Letter distribution of the 25 dice of a big boggle set, six faces each.
const DICE: &str = "aaafrs aaeeee aafirs adennn aeeeem aeegmu aegmnn afirsy \
                    bjkqxz ccenst ceiilt ceilpt ceipst ddhnot dhhlor dhlnor \
                    dhlnor eiiitt emottt ensssu fiprsy gorrvw iprrry nootuw ooottu";

/// A weighted alphabet to draw random tile letters from.
///
/// Letters are stored as a flat list, so the weight of a letter is the number
/// of times it occurs in the list. The default alphabet is derived from the
/// faces of the big boggle dice, which approximates english letter frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            letters: DICE
                .chars()
                .filter(|c| c.is_alphabetic())
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        }
    }
}

impl Alphabet {
    /// Create an alphabet from `letters`. Whitespace is ignored, and a letter
    /// that occurs n times has weight n.
    /// ## Errors
    /// - If `letters` contains a character that is not alphabetic.
    /// - If `letters` contains no letters at all.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Alphabet, Error};
    /// let alphabet = Alphabet::new("aaab")?;
    /// assert_eq!(alphabet.weight('A'), 3);
    /// assert_eq!(alphabet.weight('b'), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(letters: &str) -> Result<Alphabet, Error> {
        let letters = parse_letters(letters)?;
        if letters.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(Alphabet { letters })
    }

    /// The total weight of all letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Return the weight of `letter`, or 0 if not in the alphabet.
    pub fn weight(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.letters.iter().filter(|&&c| c == letter).count()
    }

    /// Draw a random letter, with probability proportional to its weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        // `new` and `default` never create an empty alphabet
        *self.letters.choose(rng).unwrap_or(&'E')
    }
}

/// Parse tile letters: whitespace is skipped, letters are upper cased.
pub(crate) fn parse_letters(letters: &str) -> Result<Vec<char>, Error> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if c.is_alphabetic() {
                Ok(c.to_uppercase().next().unwrap_or(c))
            } else {
                Err(Error::InvalidLetter(c))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 25 * 6);
        assert_eq!(alphabet.weight('e'), 19);
        assert_eq!(alphabet.weight('q'), 1);
        assert_eq!(alphabet.weight('!'), 0);
    }

    #[test]
    fn test_sample() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(42);
        let alphabet = Alphabet::new("ab")?;
        let mut counts = [0; 2];
        for _ in 0..1000 {
            match alphabet.sample(&mut rng) {
                'A' => counts[0] += 1,
                'B' => counts[1] += 1,
                c => panic!("unexpected letter {}", c),
            }
        }
        assert!(counts[0] > 400 && counts[1] > 400, "{:?}", counts);
        Ok(())
    }

    #[test]
    fn test_weighted_sample() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = Alphabet::new("aaaaaaaaab")?;
        let a_count = (0..1000)
            .filter(|_| alphabet.sample(&mut rng) == 'A')
            .count();
        assert!(a_count > 800, "{}", a_count);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidLetter('1')")]
    fn test_invalid_letter() {
        Alphabet::new("ab1").unwrap();
    }

    #[test]
    #[should_panic(expected = "EmptyAlphabet")]
    fn test_empty() {
        Alphabet::new("  ").unwrap();
    }
}
