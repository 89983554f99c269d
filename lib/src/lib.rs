//! Plays and solves Wordle-style puzzles.
//!
//! A [`Game`] judges guesses against a secret word, following the official rules for repeated
//! letters. A [`Solver`] plays a game to the end: it guesses the remaining word whose letters are
//! most common among the remaining words, then rules out every word that is inconsistent with the
//! result, until the word is found.

mod benchmark;
mod data;
mod engine;
mod game;
mod restrictions;
mod results;
pub mod scorers;

pub use benchmark::*;
pub use data::WordBank;
pub use engine::*;
pub use game::Game;
pub use results::*;

/// Building blocks used by the solver, for callers that want to filter or count words directly.
pub mod details {
    pub use crate::data::WordCounter;
    pub use crate::restrictions::LetterSet;
    pub use crate::restrictions::WordRestrictions;
}
