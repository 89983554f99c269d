use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use std::error::Error;
use std::fs::File;
use std::io;
use std::time::Instant;
use wordle_overlap_solver::*;

/// Simple program to run a Wordle game in reverse, where the computer guesses the word.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Length of the words to play with. Ignored when a word is given to `single`.
    #[clap(short = 'l', long, default_value_t = 5)]
    word_length: usize,

    /// How the solver rules out words after each guess.
    #[clap(long, value_enum, default_value_t = Strategy::TrackLetters)]
    strategy: Strategy,

    /// Maximum number of guesses per game. Defaults to the number of words in the words file.
    #[clap(long)]
    max_guesses: Option<usize>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    /// Check words against the letters learned from every guess.
    TrackLetters,
    /// Check the remaining words against the latest guess only.
    RefilterFromFeedback,
}

impl From<Strategy> for FilterStrategy {
    fn from(strategy: Strategy) -> FilterStrategy {
        match strategy {
            Strategy::TrackLetters => FilterStrategy::TrackLetters,
            Strategy::RefilterFromFeedback => FilterStrategy::RefilterFromFeedback,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against every word in the given words file.
    Benchmark,
    /// Run a single game with the given word, or a random word from the words file.
    Single { word: Option<String> },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start_time = Instant::now();
    let args = Args::parse();
    info!("File: {}", args.words_file);

    let word_length = match &args.command {
        Command::Single { word: Some(word) } => word.trim().len(),
        _ => args.word_length,
    };
    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader, word_length)?;
    println!(
        "There are {} possible words of length {}.",
        word_bank.len(),
        word_length
    );

    match args.command {
        Command::Benchmark => run_benchmark(&word_bank, args.strategy.into(), args.max_guesses),
        Command::Single { word } => {
            play_single_game(word, &word_bank, args.strategy.into(), args.max_guesses)?
        }
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_benchmark(word_bank: &WordBank, strategy: FilterStrategy, max_guesses: Option<usize>) {
    let report = solve_every_word(word_bank, strategy, max_guesses);
    println!("Solved {} words. Results:", report.num_solved());

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_guesses, num_games) in report.num_games_per_round.iter() {
        println!("|{}|{}|", num_guesses, num_games);
    }

    if let (Some(average), Some(std_dev)) = (report.average(), report.std_dev()) {
        println!(
            "\n**Average number of guesses:** {:.2} +/- {:.2}",
            average, std_dev
        );
    }

    for (word, err) in report.failures.iter() {
        warn!("Failed to solve {}: {}", word, err);
    }
}

fn play_single_game(
    word: Option<String>,
    word_bank: &WordBank,
    strategy: FilterStrategy,
    max_guesses: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let word = match word {
        Some(word) => word,
        None => match word_bank.choose_random(&mut rand::thread_rng()) {
            Some(word) => word.to_string(),
            None => return Err("the words file has no words of the requested length".into()),
        },
    };
    println!("Solving for: {}", word);

    let mut solver = Solver::with_strategy(Game::new(&word)?, word_bank, strategy)?;
    if let Some(max_guesses) = max_guesses {
        solver = solver.max_guesses(max_guesses);
    }

    match solver.solve() {
        Ok(solution) => {
            println!("Solved it! It took me {} guesses.", solution.guesses.len());
            for guess in solution.guesses.iter() {
                println!("\t{}", guess);
            }
        }
        Err(WordleError::GuessLimit(num_guesses)) => {
            println!("I still couldn't solve it after {} guesses :(", num_guesses);
        }
        Err(WordleError::Exhausted(_)) => {
            eprintln!("Error: given word not in the word list.");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
