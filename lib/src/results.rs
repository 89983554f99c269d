#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::io;
use std::result::Result;
use thiserror::Error;

/// The number of distinct letters a word may contain.
pub const NUM_LETTERS: usize = 26;

/// The outcome for a letter at a specific location.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The letter is not in the word, or every instance of it is already accounted for.
    Absent,
    /// The letter is in the word, but not at this location.
    PresentWrongSpot,
    /// The letter is in the word at this location.
    PresentCorrectSpot,
}

impl Outcome {
    /// Returns the tile used to display this outcome.
    pub fn to_tile(self) -> char {
        match self {
            Outcome::Absent => '⬛',
            Outcome::PresentWrongSpot => '🟨',
            Outcome::PresentCorrectSpot => '🟩',
        }
    }
}

/// A guessed letter along with its outcome.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterResult {
    pub letter: char,
    pub outcome: Outcome,
}

impl LetterResult {
    pub fn new(letter: char, outcome: Outcome) -> LetterResult {
        LetterResult { letter, outcome }
    }
}

/// The result of a single word guess.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Guess {
    /// The result of each letter, provided in the same letter order as in the guess.
    pub letters: Vec<LetterResult>,
}

impl Guess {
    /// Returns the guessed word.
    pub fn word(&self) -> String {
        self.letters.iter().map(|lr| lr.letter).collect()
    }

    /// Returns `true` iff every letter was in the correct spot.
    ///
    /// An empty guess is never correct.
    pub fn is_correct(&self) -> bool {
        !self.letters.is_empty()
            && self
                .letters
                .iter()
                .all(|lr| lr.outcome == Outcome::PresentCorrectSpot)
    }

    /// Returns the outcomes only, in letter order.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.letters.iter().map(|lr| lr.outcome)
    }

    /// Returns the number of letters in this guess.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.word())?;
        for lr in &self.letters {
            write!(f, "{}", lr.outcome.to_tile())?;
        }
        Ok(())
    }
}

/// Indicates that an error occurred while playing or solving a game.
#[derive(Error, Debug)]
pub enum WordleError {
    /// The guess has a different length than the word to guess.
    #[error("the guess has {actual} letters, but the word to guess has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A guess was made after the word was already found.
    #[error("the word was already guessed")]
    AlreadyFinished,
    /// A solver was given a game that already has guesses. Contains the number of guesses.
    #[error("the game has already been played ({0} guesses)")]
    SolverPrecondition(usize),
    /// No candidate words remain. Contains the number of guesses made so far.
    #[error("no candidate words remain after {0} guesses")]
    Exhausted(usize),
    /// The solver reached its maximum number of guesses without finding the word.
    #[error("the word was not found within {0} guesses")]
    GuessLimit(usize),
    /// The word is empty or contains something other than lowercase ASCII letters.
    #[error("{0:?} is not a word of lowercase ASCII letters")]
    InvalidWord(String),
    /// The results contradict themselves or earlier results, or contain unsupported letters.
    #[error("the results are invalid or inconsistent with earlier results")]
    InvalidResults,
    /// The word list could not be read.
    #[error("unable to read words")]
    Io(#[from] io::Error),
}

/// Returns `true` iff the word is non-empty and only contains lowercase ASCII letters.
pub(crate) fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|letter| letter.is_ascii_lowercase())
}

pub(crate) fn validate_word(word: &str) -> Result<(), WordleError> {
    if is_valid_word(word) {
        return Ok(());
    }
    Err(WordleError::InvalidWord(word.to_string()))
}

/// Index of a lowercase ASCII letter in the alphabet. Callers must check the letter first.
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Exact matches are found first. The remaining letters of the objective are then handed out
/// from left to right, so a repeated letter is only marked present as many times as it appears
/// in the objective.
///
/// ```
/// use wordle_overlap_solver::*;
///
/// let result = get_result_for_guess("abbey", "algae").unwrap();
///
/// assert_eq!(
///     result.outcomes().collect::<Vec<Outcome>>(),
///     vec![
///         Outcome::PresentCorrectSpot,
///         Outcome::Absent,
///         Outcome::Absent,
///         Outcome::Absent,
///         Outcome::PresentWrongSpot,
///     ]
/// );
/// ```
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<Guess, WordleError> {
    if objective.len() != guess.len() {
        return Err(WordleError::LengthMismatch {
            expected: objective.len(),
            actual: guess.len(),
        });
    }
    validate_word(objective)?;
    validate_word(guess)?;

    let objective = objective.as_bytes();
    let guess = guess.as_bytes();
    let mut outcomes = vec![Outcome::Absent; guess.len()];
    let mut unmatched_counts = [0usize; NUM_LETTERS];
    for (index, (&objective_letter, &guess_letter)) in objective.iter().zip(guess).enumerate() {
        if objective_letter == guess_letter {
            outcomes[index] = Outcome::PresentCorrectSpot;
        } else {
            unmatched_counts[letter_index(objective_letter)] += 1;
        }
    }
    for (outcome, &guess_letter) in outcomes.iter_mut().zip(guess) {
        if *outcome == Outcome::PresentCorrectSpot {
            continue;
        }
        let remaining = &mut unmatched_counts[letter_index(guess_letter)];
        if *remaining > 0 {
            *remaining -= 1;
            *outcome = Outcome::PresentWrongSpot;
        }
    }

    Ok(Guess {
        letters: guess
            .iter()
            .zip(outcomes)
            .map(|(&letter, outcome)| LetterResult::new(letter as char, outcome))
            .collect(),
    })
}
