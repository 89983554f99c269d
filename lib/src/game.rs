use crate::results::*;
use std::result::Result;

/// A single game of Wordle: holds the secret word and judges guesses against it.
///
/// ```
/// use wordle_overlap_solver::*;
///
/// let mut game = Game::new("danny").unwrap();
/// let guess = game.guess("nanny").unwrap();
///
/// assert!(!guess.is_correct());
/// assert_eq!(game.guesses().len(), 1);
/// assert!(game.guess("danny").unwrap().is_correct());
/// assert!(game.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    secret: Box<str>,
    guesses: Vec<Guess>,
    finished: bool,
}

impl Game {
    /// Starts a game with the given secret word. The word is trimmed and converted to lower case.
    pub fn new(secret: &str) -> Result<Game, WordleError> {
        let secret = secret.trim().to_lowercase();
        validate_word(&secret)?;
        Ok(Game {
            secret: secret.into_boxed_str(),
            guesses: Vec::new(),
            finished: false,
        })
    }

    /// Judges the given word against the secret, and records the result.
    pub fn guess(&mut self, word: &str) -> Result<Guess, WordleError> {
        if word.len() != self.secret.len() {
            return Err(WordleError::LengthMismatch {
                expected: self.secret.len(),
                actual: word.len(),
            });
        }
        if self.finished {
            return Err(WordleError::AlreadyFinished);
        }

        let guess = get_result_for_guess(&self.secret, word)?;
        self.finished = guess.is_correct();
        self.guesses.push(guess.clone());
        Ok(guess)
    }

    /// All guesses made so far, in the order they were made.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Whether the secret has been guessed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The length of the secret word.
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    pub(crate) fn into_guesses(self) -> Vec<Guess> {
        self.guesses
    }
}
