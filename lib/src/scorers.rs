use crate::data::WordCounter;
use std::sync::Arc;

/// Gives words a score, where the maximum score indicates the best guess.
pub trait WordScorer {
    /// Updates the scorer with the latest guess and the words that were just ruled out.
    fn update(&mut self, latest_guess: &str, removed_words: &[Arc<str>]);
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &str) -> i64;
}

/// Scores words by the number of possible words that share each letter (in any location),
/// summed across each unique letter in the word.
///
/// This prefers words made of letters that are common among the remaining possibilities. It is
/// a greedy heuristic, so it does not always find the word in the fewest guesses.
///
/// ```
/// use wordle_overlap_solver::scorers::{LetterOverlapScorer, WordScorer};
///
/// let scorer = LetterOverlapScorer::new(&["abbey", "kebab", "opens"]);
///
/// // a: 2, b: 2, e: 3, y: 1
/// assert_eq!(scorer.score_word("abbey"), 8);
/// ```
#[derive(Debug, Clone)]
pub struct LetterOverlapScorer {
    counter: WordCounter,
}

impl LetterOverlapScorer {
    /// Constructs a `LetterOverlapScorer` for the given possible words.
    pub fn new<S: AsRef<str>>(possible_words: &[S]) -> LetterOverlapScorer {
        LetterOverlapScorer {
            counter: WordCounter::new(possible_words),
        }
    }
}

impl WordScorer for LetterOverlapScorer {
    fn update(&mut self, _latest_guess: &str, removed_words: &[Arc<str>]) {
        for word in removed_words {
            self.counter.remove(word);
        }
    }

    fn score_word(&self, word: &str) -> i64 {
        let mut sum = 0;
        for (index, letter) in word.char_indices() {
            if word[..index].contains(letter) {
                continue;
            }
            sum += self.counter.num_words_with_letter(letter) as i64;
        }
        sum
    }
}

/// Sorts the given words from highest to lowest score.
///
/// Words with equal scores keep their relative order from `words`.
pub fn rank_words<S: WordScorer + ?Sized>(scorer: &S, words: &[Arc<str>]) -> Vec<Arc<str>> {
    let mut scored: Vec<(i64, &Arc<str>)> = words
        .iter()
        .map(|word| (scorer.score_word(word), word))
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.cmp(a));
    scored.into_iter().map(|(_, word)| Arc::clone(word)).collect()
}
