use crate::data::WordBank;
use crate::engine::*;
use crate::game::Game;
use crate::results::WordleError;
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::result::Result;
use std::sync::Arc;

/// The outcome of solving every word in a word bank.
#[derive(Debug)]
pub struct BenchmarkReport {
    /// Maps a number of guesses to the number of games that were solved in that many guesses.
    pub num_games_per_round: BTreeMap<usize, usize>,
    /// Words that could not be solved, along with the reason.
    pub failures: Vec<(Arc<str>, WordleError)>,
}

impl BenchmarkReport {
    /// The number of games that were solved.
    pub fn num_solved(&self) -> usize {
        self.num_games_per_round.values().sum()
    }

    /// The average number of guesses per solved game, or `None` if nothing was solved.
    pub fn average(&self) -> Option<f64> {
        let num_solved = self.num_solved();
        if num_solved == 0 {
            return None;
        }
        let total_guesses: usize = self
            .num_games_per_round
            .iter()
            .map(|(num_guesses, num_games)| num_guesses * num_games)
            .sum();
        Some(total_guesses as f64 / num_solved as f64)
    }

    /// The standard deviation of the number of guesses per solved game.
    pub fn std_dev(&self) -> Option<f64> {
        let average = self.average()?;
        let variance = self
            .num_games_per_round
            .iter()
            .map(|(num_guesses, num_games)| {
                (*num_guesses as f64 - average).powi(2) * *num_games as f64
            })
            .sum::<f64>()
            / self.num_solved() as f64;
        Some(variance.sqrt())
    }
}

/// Solves the game for every word in the bank, using the bank as the list of possible words.
///
/// Each game may use up to `max_guesses` guesses, or the number of words in the bank if `None`.
/// Games are independent, so they are played in parallel.
pub fn solve_every_word(
    bank: &WordBank,
    strategy: FilterStrategy,
    max_guesses: Option<usize>,
) -> BenchmarkReport {
    info!("Solving {} words", bank.len());
    let results: Vec<(Arc<str>, Result<usize, WordleError>)> = bank
        .par_iter()
        .map(|word| (Arc::clone(word), solve_one(word, bank, strategy, max_guesses)))
        .collect();

    let mut report = BenchmarkReport {
        num_games_per_round: BTreeMap::new(),
        failures: Vec::new(),
    };
    for (word, result) in results {
        match result {
            Ok(num_guesses) => *report.num_games_per_round.entry(num_guesses).or_insert(0) += 1,
            Err(error) => report.failures.push((word, error)),
        }
    }
    info!(
        "Solved {} words, failed on {}",
        report.num_solved(),
        report.failures.len()
    );
    report
}

fn solve_one(
    word: &str,
    bank: &WordBank,
    strategy: FilterStrategy,
    max_guesses: Option<usize>,
) -> Result<usize, WordleError> {
    let mut solver = Solver::with_strategy(Game::new(word)?, bank, strategy)?;
    if let Some(max_guesses) = max_guesses {
        solver = solver.max_guesses(max_guesses);
    }
    Ok(solver.solve()?.guesses.len())
}
