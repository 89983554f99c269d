#[macro_use]
extern crate assert_matches;

use wordle_overlap_solver::*;

use wordle_overlap_solver::Outcome::Absent as A;
use wordle_overlap_solver::Outcome::PresentCorrectSpot as C;
use wordle_overlap_solver::Outcome::PresentWrongSpot as W;

fn outcomes(objective: &str, guess: &str) -> Vec<Outcome> {
    get_result_for_guess(objective, guess)
        .unwrap()
        .outcomes()
        .collect()
}

#[test]
fn get_result_for_guess_correct() {
    let result = get_result_for_guess("abcb", "abcb");

    assert_matches!(result, Ok(Guess { letters: _ }));
    let result = result.unwrap();
    assert_eq!(result.word(), "abcb");
    assert!(result.is_correct());
    assert_eq!(result.outcomes().collect::<Vec<_>>(), vec![C; 4]);
}

#[test]
fn get_result_for_guess_partial() {
    assert_eq!(outcomes("mesas", "sassy"), vec![W, W, C, A, A]);
    assert_eq!(outcomes("abba", "babb"), vec![W, W, C, A]);
    assert_eq!(outcomes("abcb", "bcce"), vec![W, A, C, A]);
}

#[test]
fn get_result_for_guess_keeps_letters() {
    let result = get_result_for_guess("abbey", "abbte").unwrap();

    assert_eq!(
        result.letters,
        vec![
            LetterResult::new('a', C),
            LetterResult::new('b', C),
            LetterResult::new('b', C),
            LetterResult::new('t', A),
            LetterResult::new('e', W),
        ]
    );
    assert!(!result.is_correct());
}

#[test]
fn get_result_for_guess_surplus_letters_are_absent() {
    assert_eq!(outcomes("danny", "nnnnn"), vec![A, A, C, C, A]);
    assert_eq!(outcomes("abbey", "algae"), vec![C, A, A, A, W]);
    assert_eq!(outcomes("abbey", "keeps"), vec![A, W, A, A, A]);
    assert_eq!(outcomes("abbey", "orbit"), vec![A, A, C, A, A]);
    assert_eq!(outcomes("abbey", "orbbt"), vec![A, A, C, W, A]);
    assert_eq!(outcomes("abbey", "abate"), vec![C, C, A, A, W]);
    assert_eq!(outcomes("abbey", "abbey"), vec![C; 5]);
}

#[test]
fn get_result_for_guess_wrong_spot_allocated_left_to_right() {
    assert_eq!(outcomes("abbey", "opens"), vec![A, A, W, A, A]);
    assert_eq!(outcomes("abbey", "babes"), vec![W, W, C, C, A]);
    assert_eq!(outcomes("abbey", "kebab"), vec![A, W, C, W, W]);
    assert_eq!(outcomes("abbey", "abyss"), vec![C, C, W, A, A]);
}

#[test]
fn get_result_for_guess_none_match() {
    assert_eq!(outcomes("abcb", "defg"), vec![A; 4]);
}

#[test]
fn get_result_for_guess_is_correct_iff_equal() {
    let words = ["abbey", "algae", "keeps", "babes", "kebab", "danny", "nanny"];
    for objective in words {
        for guess in words {
            assert_eq!(
                get_result_for_guess(objective, guess).unwrap().is_correct(),
                objective == guess,
                "objective: {}, guess: {}",
                objective,
                guess
            );
        }
    }
}

#[test]
fn get_result_for_guess_never_marks_more_letters_than_objective_has() {
    let words = ["abbey", "algae", "keeps", "babes", "kebab", "danny", "nnnnn", "eerie"];
    for objective in words {
        for guess in words {
            let result = get_result_for_guess(objective, guess).unwrap();
            for letter in 'a'..='z' {
                let num_marked = result
                    .letters
                    .iter()
                    .filter(|lr| lr.letter == letter && lr.outcome != A)
                    .count();
                let num_in_objective = objective.chars().filter(|c| *c == letter).count();
                assert!(
                    num_marked <= num_in_objective,
                    "objective: {}, guess: {}, letter: {}",
                    objective,
                    guess,
                    letter
                );
            }
        }
    }
}

#[test]
fn get_result_for_guess_long_words() {
    let objective = "a".repeat(256);

    assert_eq!(
        outcomes(&objective, &"b".repeat(256)),
        vec![A; 256]
    );
    assert!(get_result_for_guess(&objective, &objective)
        .unwrap()
        .is_correct());

    let mut guess = "b".repeat(299);
    guess.push('a');
    let result = get_result_for_guess(&"a".repeat(300), &guess).unwrap();
    assert_eq!(result.outcomes().filter(|outcome| *outcome == C).count(), 1);
    assert_eq!(result.outcomes().filter(|outcome| *outcome == W).count(), 0);
}

#[test]
fn get_result_for_guess_invalid_guess() {
    assert_matches!(
        get_result_for_guess("goal", "guess"),
        Err(WordleError::LengthMismatch {
            expected: 4,
            actual: 5
        })
    );
    assert_matches!(
        get_result_for_guess("goal", "GOAL"),
        Err(WordleError::InvalidWord(_))
    );
}

#[test]
fn guess_display_shows_tiles() {
    let result = get_result_for_guess("abbey", "algae").unwrap();

    assert_eq!(result.to_string(), "algae 🟩⬛⬛⬛🟨");
}

#[test]
fn empty_guess_is_not_correct() {
    assert!(!Guess::default().is_correct());
}
