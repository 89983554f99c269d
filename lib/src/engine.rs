use crate::game::Game;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use crate::scorers::*;
use log::{debug, trace};
use std::result::Result;
use std::sync::Arc;

/// How the [`CandidateFilter`] rules out words after each guess. Both strategies keep exactly
/// the same words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterStrategy {
    /// Merges every guess into one set of restrictions, and checks words against all of them.
    #[default]
    TrackLetters,
    /// Builds restrictions from the latest guess alone, and checks the remaining words against
    /// those.
    RefilterFromFeedback,
}

/// Tracks the words that are still consistent with every guess made so far.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    strategy: FilterStrategy,
    restrictions: WordRestrictions,
    candidates: Vec<Arc<str>>,
}

impl CandidateFilter {
    /// Creates a filter over the given words. Only words with `word_length` lowercase ASCII
    /// letters are kept.
    pub fn new(words: &[Arc<str>], word_length: usize, strategy: FilterStrategy) -> Self {
        CandidateFilter {
            strategy,
            restrictions: WordRestrictions::new(word_length),
            candidates: words
                .iter()
                .filter(|word| word.len() == word_length && is_valid_word(word))
                .map(Arc::clone)
                .collect(),
        }
    }

    /// The words that may still be the objective, in their original order.
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    /// The restrictions gathered from every guess so far.
    pub fn restrictions(&self) -> &WordRestrictions {
        &self.restrictions
    }

    pub fn strategy(&self) -> FilterStrategy {
        self.strategy
    }

    /// Removes every word that is inconsistent with the given guess, along with the guessed word
    /// itself. Returns the removed words.
    ///
    /// Fails with [`WordleError::LengthMismatch`] if the guess has a different length than the
    /// candidates, or with [`WordleError::InvalidResults`] if it contradicts earlier guesses. The
    /// filter is unchanged on failure.
    pub fn update(&mut self, guess: &Guess) -> Result<Vec<Arc<str>>, WordleError> {
        if guess.len() != self.restrictions.word_length() {
            return Err(WordleError::LengthMismatch {
                expected: self.restrictions.word_length(),
                actual: guess.len(),
            });
        }
        let latest = WordRestrictions::from_guess(guess)?;
        self.restrictions.merge(&latest)?;
        let restrictions = match self.strategy {
            FilterStrategy::TrackLetters => &self.restrictions,
            FilterStrategy::RefilterFromFeedback => &latest,
        };

        let guessed_word = guess.word();
        let mut removed = Vec::new();
        let num_before = self.candidates.len();
        self.candidates.retain(|word| {
            if **word != *guessed_word && restrictions.is_satisfied_by(word) {
                return true;
            }
            removed.push(Arc::clone(word));
            false
        });
        trace!(
            "Guess {} narrowed {} candidates down to {}",
            guessed_word,
            num_before,
            self.candidates.len()
        );
        Ok(removed)
    }
}

/// Selects guesses, and learns from their results.
pub trait Guesser {
    /// Updates this guesser with information about a guess.
    fn update(&mut self, result: &Guess) -> Result<(), WordleError>;

    /// Selects a new guess, or `None` if no possible words remain.
    fn select_next_guess(&self) -> Option<Arc<str>>;

    /// Provides read access to the remaining set of possible words in this guesser.
    fn possible_words(&self) -> &[Arc<str>];
}

/// Selects the next guess that maximizes the score according to the given scorer.
///
/// ```
/// use std::sync::Arc;
/// use wordle_overlap_solver::*;
/// use wordle_overlap_solver::scorers::LetterOverlapScorer;
///
/// let bank = WordBank::from_iterator(["abc", "abd", "xyz"], 3);
/// let guesser = MaxScoreGuesser::new(
///     CandidateFilter::new(&bank, 3, FilterStrategy::TrackLetters),
///     LetterOverlapScorer::new(&*bank));
///
/// assert_eq!(guesser.select_next_guess(), Some(Arc::from("abc")));
/// ```
#[derive(Debug, Clone)]
pub struct MaxScoreGuesser<T: WordScorer> {
    filter: CandidateFilter,
    scorer: T,
    ranked_words: Vec<Arc<str>>,
}

impl<T: WordScorer> MaxScoreGuesser<T> {
    /// Constructs a new `MaxScoreGuesser` that guesses from the filter's candidates. The scorer
    /// should be built from the same candidates.
    pub fn new(filter: CandidateFilter, scorer: T) -> MaxScoreGuesser<T> {
        let ranked_words = rank_words(&scorer, filter.candidates());
        MaxScoreGuesser {
            filter,
            scorer,
            ranked_words,
        }
    }

    /// Returns the words that may still be the objective, best guess first.
    pub fn ranked_words(&self) -> &[Arc<str>] {
        &self.ranked_words
    }

    /// Returns up to `n` of the best guesses, best first.
    pub fn select_top_n_guesses(&self, n: usize) -> Vec<Arc<str>> {
        self.ranked_words.iter().take(n).map(Arc::clone).collect()
    }

    pub fn filter(&self) -> &CandidateFilter {
        &self.filter
    }
}

impl<T: WordScorer> Guesser for MaxScoreGuesser<T> {
    fn update(&mut self, result: &Guess) -> Result<(), WordleError> {
        let removed = self.filter.update(result)?;
        self.scorer.update(&result.word(), &removed);
        self.ranked_words = rank_words(&self.scorer, self.filter.candidates());
        Ok(())
    }

    fn select_next_guess(&self) -> Option<Arc<str>> {
        self.ranked_words.first().map(Arc::clone)
    }

    fn possible_words(&self) -> &[Arc<str>] {
        self.filter.candidates()
    }
}

/// The default guesser: candidates ranked by letter overlap.
pub type LetterOverlapGuesser = MaxScoreGuesser<LetterOverlapScorer>;

impl LetterOverlapGuesser {
    /// Builds a letter overlap guesser over the words of the given length.
    pub fn from_words(
        words: &[Arc<str>],
        word_length: usize,
        strategy: FilterStrategy,
    ) -> LetterOverlapGuesser {
        let filter = CandidateFilter::new(words, word_length, strategy);
        let scorer = LetterOverlapScorer::new(filter.candidates());
        MaxScoreGuesser::new(filter, scorer)
    }
}

/// A solved game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The objective word.
    pub word: Arc<str>,
    /// Every guess that was made, in order. The last guess is the objective word.
    pub guesses: Vec<Guess>,
}

/// Plays a [`Game`] to the end, guessing with a [`Guesser`].
///
/// ```
/// use wordle_overlap_solver::*;
///
/// let bank = WordBank::from_iterator(["alpha", "allot", "begot", "below", "endow", "ingot"], 5);
/// let solver = Solver::new(Game::new("endow").unwrap(), &bank).unwrap();
///
/// let solution = solver.solve().unwrap();
///
/// assert_eq!(&*solution.word, "endow");
/// assert!(solution.guesses.last().unwrap().is_correct());
/// ```
#[derive(Debug)]
pub struct Solver<G: Guesser = LetterOverlapGuesser> {
    game: Game,
    guesser: G,
    max_guesses: Option<usize>,
}

impl Solver<LetterOverlapGuesser> {
    /// Creates a solver that guesses from the given words, using
    /// [`FilterStrategy::TrackLetters`].
    pub fn new(game: Game, words: &[Arc<str>]) -> Result<Self, WordleError> {
        Solver::with_strategy(game, words, FilterStrategy::TrackLetters)
    }

    /// Creates a solver that guesses from the given words, using the given filter strategy.
    ///
    /// Words that don't have the same length as the game's word are ignored. The number of
    /// guesses is limited to the number of remaining words.
    pub fn with_strategy(
        game: Game,
        words: &[Arc<str>],
        strategy: FilterStrategy,
    ) -> Result<Self, WordleError> {
        let guesser = LetterOverlapGuesser::from_words(words, game.word_length(), strategy);
        let max_guesses = guesser.filter().candidates().len();
        Ok(Solver::with_guesser(game, guesser)?.max_guesses(max_guesses))
    }
}

impl<G: Guesser> Solver<G> {
    /// Creates a solver from any guesser. The game must not have any guesses yet.
    pub fn with_guesser(game: Game, guesser: G) -> Result<Self, WordleError> {
        if !game.guesses().is_empty() {
            return Err(WordleError::SolverPrecondition(game.guesses().len()));
        }
        Ok(Solver {
            game,
            guesser,
            max_guesses: None,
        })
    }

    /// Limits the number of guesses the solver may make.
    pub fn max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = Some(max_guesses);
        self
    }

    /// Guesses until the word is found.
    ///
    /// Fails with [`WordleError::Exhausted`] if every possible word is ruled out first, or with
    /// [`WordleError::GuessLimit`] if the maximum number of guesses is reached.
    pub fn solve(mut self) -> Result<Solution, WordleError> {
        loop {
            let num_guesses = self.game.guesses().len();
            let guess = self
                .guesser
                .select_next_guess()
                .ok_or(WordleError::Exhausted(num_guesses))?;
            if self.max_guesses.is_some_and(|max| num_guesses >= max) {
                return Err(WordleError::GuessLimit(num_guesses));
            }
            debug!(
                "Remaining words: {}. Total guesses: {}. Guess: {:?}",
                self.guesser.possible_words().len(),
                num_guesses,
                guess
            );

            let result = self.game.guess(&guess)?;
            if result.is_correct() {
                return Ok(Solution {
                    word: guess,
                    guesses: self.game.into_guesses(),
                });
            }
            self.guesser.update(&result)?;
        }
    }
}
