use crate::results::*;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// Contains all the possible words for a Wordle game.
///
/// Every word has the same length, and only contains lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case. Words that aren't `word_length` letters long, or that contain anything other than
    /// ASCII letters, are skipped, as are repeats.
    pub fn from_reader<R: BufRead>(word_reader: R, word_length: usize) -> Result<Self, WordleError> {
        let lines = word_reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(WordBank::from_iterator(lines, word_length))
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Words are filtered the same way as in [`WordBank::from_reader`].
    ///
    /// ```
    /// use wordle_overlap_solver::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["Abbey", "keeps", "no", "abbey", "fo'c'sle"], 5);
    ///
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(&*bank[0], "abbey");
    /// ```
    pub fn from_iterator<S, I>(words: I, word_length: usize) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut all_words = Vec::new();
        let mut num_skipped = 0;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if word.len() != word_length || !word.bytes().all(|letter| letter.is_ascii_alphabetic())
            {
                num_skipped += 1;
                continue;
            }
            let word: Arc<str> = Arc::from(word.to_ascii_lowercase().as_str());
            if seen.insert(Arc::clone(&word)) {
                all_words.push(word);
            }
        }
        if num_skipped > 0 {
            debug!(
                "Skipped {} words that were not {} ASCII letters long",
                num_skipped, word_length
            );
        }
        WordBank {
            all_words,
            word_length,
        }
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns true iff this word bank is empty.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the word bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Picks a word uniformly at random, or `None` if the bank is empty.
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Arc<str>> {
        self.all_words.choose(rng)
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Counts the number of words that contain each letter.
///
/// A word with a repeated letter is only counted once for that letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCounter {
    num_words: u32,
    num_words_by_letter: [u32; NUM_LETTERS],
}

impl WordCounter {
    /// Creates a new word counter based on the given word list.
    pub fn new<S: AsRef<str>>(words: &[S]) -> WordCounter {
        let mut counter = WordCounter {
            num_words: 0,
            num_words_by_letter: [0; NUM_LETTERS],
        };
        for word in words {
            counter.add(word.as_ref());
        }
        counter
    }

    /// Adds the given word to the counter.
    pub fn add(&mut self, word: &str) {
        self.num_words += 1;
        for index in WordCounter::unique_letter_indices(word) {
            self.num_words_by_letter[index] += 1;
        }
    }

    /// Removes the given word from the counter.
    ///
    /// The word should have been added before. Counts are clamped at zero, so removing a word
    /// that was never added can leave the other counts too high, but never underflows.
    pub fn remove(&mut self, word: &str) {
        self.num_words = self.num_words.saturating_sub(1);
        for index in WordCounter::unique_letter_indices(word) {
            let count = &mut self.num_words_by_letter[index];
            *count = count.saturating_sub(1);
        }
    }

    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: char) -> u32 {
        if !letter.is_ascii_lowercase() {
            return 0;
        }
        self.num_words_by_letter[letter_index(letter as u8)]
    }

    /// The number of words counted.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    fn unique_letter_indices(word: &str) -> impl Iterator<Item = usize> + '_ {
        let mut seen = [false; NUM_LETTERS];
        word.bytes()
            .filter(|letter| letter.is_ascii_lowercase())
            .map(letter_index)
            .filter(move |index| !std::mem::replace(&mut seen[*index], true))
    }
}
