use crate::results::*;
use std::fmt;
use std::result::Result;

/// A set of lowercase ASCII letters, stored as one bit per letter.
///
/// Anything other than a lowercase ASCII letter is never in the set, and is ignored by
/// [`LetterSet::only`], [`LetterSet::insert`] and [`LetterSet::remove`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    const ALL_BITS: u32 = (1 << NUM_LETTERS) - 1;

    /// A set containing every letter from `a` to `z`.
    pub fn all() -> LetterSet {
        LetterSet(LetterSet::ALL_BITS)
    }

    /// A set containing no letters.
    pub fn empty() -> LetterSet {
        LetterSet(0)
    }

    /// A set containing only the given letter.
    pub fn only(letter: u8) -> LetterSet {
        LetterSet(LetterSet::bit(letter))
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0 & LetterSet::bit(letter) != 0
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= LetterSet::bit(letter);
    }

    pub fn remove(&mut self, letter: u8) {
        self.0 &= !LetterSet::bit(letter);
    }

    /// Returns the letters present in both sets.
    pub fn intersection(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 & other.0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn bit(letter: u8) -> u32 {
        if !letter.is_ascii_lowercase() {
            return 0;
        }
        1 << letter_index(letter)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries((b'a'..=b'z').filter(|letter| self.contains(*letter)).map(char::from))
            .finish()
    }
}

/// Defines letter restrictions that a word must adhere to.
///
/// These track which letters may still appear at each location, along with the minimum and
/// maximum number of times each letter may appear in the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRestrictions {
    allowed_here: Vec<LetterSet>,
    min_counts: [usize; NUM_LETTERS],
    max_counts: [usize; NUM_LETTERS],
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object for the given word length with all letters unknown.
    pub fn new(word_length: usize) -> WordRestrictions {
        WordRestrictions {
            allowed_here: vec![LetterSet::all(); word_length],
            min_counts: [0; NUM_LETTERS],
            max_counts: [word_length; NUM_LETTERS],
        }
    }

    /// Returns the restrictions imposed by the given guess.
    pub fn from_guess(guess: &Guess) -> Result<WordRestrictions, WordleError> {
        let mut restrictions = WordRestrictions::new(guess.len());
        restrictions.update(guess)?;
        Ok(restrictions)
    }

    /// The length of words that can satisfy these restrictions.
    pub fn word_length(&self) -> usize {
        self.allowed_here.len()
    }

    /// The letters that may still appear at the given location.
    pub fn allowed_at(&self, location: usize) -> LetterSet {
        self.allowed_here[location]
    }

    /// The minimum number of times the letter must appear. Zero for anything that isn't a
    /// lowercase ASCII letter.
    pub fn min_count(&self, letter: u8) -> usize {
        if !letter.is_ascii_lowercase() {
            return 0;
        }
        self.min_counts[letter_index(letter)]
    }

    /// The maximum number of times the letter may appear. Zero for anything that isn't a
    /// lowercase ASCII letter.
    pub fn max_count(&self, letter: u8) -> usize {
        if !letter.is_ascii_lowercase() {
            return 0;
        }
        self.max_counts[letter_index(letter)]
    }

    /// Adds restrictions arising from the given guess.
    ///
    /// Letters are considered together with every other occurrence of the same letter in the
    /// guess, so repeated letters combine into count requirements.
    ///
    /// Fails with [`WordleError::LengthMismatch`] if the guess has a different length, or with
    /// [`WordleError::InvalidResults`] if it has unsupported letters or contradicts the existing
    /// restrictions. The restrictions are unchanged on failure.
    pub fn update(&mut self, guess: &Guess) -> Result<(), WordleError> {
        if guess.len() != self.word_length() {
            return Err(WordleError::LengthMismatch {
                expected: self.word_length(),
                actual: guess.len(),
            });
        }
        if !guess.letters.iter().all(|lr| lr.letter.is_ascii_lowercase()) {
            return Err(WordleError::InvalidResults);
        }

        let mut updated = self.clone();
        updated.apply(guess);
        updated.check_consistent()?;
        *self = updated;
        Ok(())
    }

    /// Adds the given restrictions to this restriction.
    ///
    /// Merging is idempotent: merging the same restrictions again changes nothing. The
    /// restrictions are unchanged on failure.
    pub fn merge(&mut self, other: &WordRestrictions) -> Result<(), WordleError> {
        if other.word_length() != self.word_length() {
            return Err(WordleError::LengthMismatch {
                expected: self.word_length(),
                actual: other.word_length(),
            });
        }
        let mut merged = self.clone();
        for (allowed, other_allowed) in merged.allowed_here.iter_mut().zip(&other.allowed_here) {
            *allowed = allowed.intersection(other_allowed);
        }
        for index in 0..NUM_LETTERS {
            merged.min_counts[index] = merged.min_counts[index].max(other.min_counts[index]);
            merged.max_counts[index] = merged.max_counts[index].min(other.max_counts[index]);
        }
        merged.check_consistent()?;
        *self = merged;
        Ok(())
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        if word.len() != self.word_length() {
            return false;
        }
        let mut counts = [0usize; NUM_LETTERS];
        for (allowed, letter) in self.allowed_here.iter().zip(word.bytes()) {
            if !allowed.contains(letter) {
                return false;
            }
            counts[letter_index(letter)] += 1;
        }
        counts
            .iter()
            .zip(self.min_counts.iter().zip(&self.max_counts))
            .all(|(count, (min, max))| min <= count && count <= max)
    }

    fn apply(&mut self, guess: &Guess) {
        // The number of times each letter was marked present, in any spot.
        let mut present_counts = [0usize; NUM_LETTERS];
        let mut absent = LetterSet::empty();
        for lr in &guess.letters {
            let letter = lr.letter as u8;
            match lr.outcome {
                Outcome::Absent => absent.insert(letter),
                _ => present_counts[letter_index(letter)] += 1,
            }
        }

        for (location, lr) in guess.letters.iter().enumerate() {
            let letter = lr.letter as u8;
            match lr.outcome {
                Outcome::PresentCorrectSpot => {
                    self.allowed_here[location] =
                        self.allowed_here[location].intersection(&LetterSet::only(letter));
                }
                Outcome::PresentWrongSpot => self.allowed_here[location].remove(letter),
                Outcome::Absent => {
                    if present_counts[letter_index(letter)] == 0 {
                        for allowed in &mut self.allowed_here {
                            allowed.remove(letter);
                        }
                    } else {
                        self.allowed_here[location].remove(letter);
                    }
                }
            }
        }

        for letter in b'a'..=b'z' {
            let index = letter_index(letter);
            let count = present_counts[index];
            self.min_counts[index] = self.min_counts[index].max(count);
            if absent.contains(letter) {
                // An absent mark means every copy in the word was already accounted for.
                self.max_counts[index] = self.max_counts[index].min(count);
            }
        }
    }

    /// Fails if no word could satisfy these restrictions, as far as can be told without
    /// enumerating words.
    fn check_consistent(&self) -> Result<(), WordleError> {
        if self.allowed_here.iter().any(LetterSet::is_empty) {
            return Err(WordleError::InvalidResults);
        }
        let mut total_min_count = 0;
        for letter in b'a'..=b'z' {
            let index = letter_index(letter);
            let (min, max) = (self.min_counts[index], self.max_counts[index]);
            let num_allowed = self
                .allowed_here
                .iter()
                .filter(|allowed| allowed.contains(letter))
                .count();
            let num_fixed = self
                .allowed_here
                .iter()
                .filter(|allowed| **allowed == LetterSet::only(letter))
                .count();
            if min > max || min > num_allowed || num_fixed > max {
                return Err(WordleError::InvalidResults);
            }
            total_min_count += min;
        }
        if total_min_count > self.word_length() {
            return Err(WordleError::InvalidResults);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn guess(word: &str, outcomes: &[Outcome]) -> Guess {
        Guess {
            letters: word
                .chars()
                .zip(outcomes)
                .map(|(letter, outcome)| LetterResult::new(letter, *outcome))
                .collect(),
        }
    }

    use crate::results::Outcome::Absent as A;
    use crate::results::Outcome::PresentCorrectSpot as C;
    use crate::results::Outcome::PresentWrongSpot as W;

    #[test]
    fn letter_set_all_and_empty() {
        assert_eq!(LetterSet::all().len(), 26);
        assert!(LetterSet::all().contains(b'a'));
        assert!(LetterSet::all().contains(b'z'));
        assert!(LetterSet::empty().is_empty());
        assert!(!LetterSet::empty().contains(b'q'));
    }

    #[test]
    fn letter_set_insert_remove() {
        let mut set = LetterSet::only(b'c');

        set.insert(b'x');
        set.remove(b'c');
        set.remove(b'c');

        assert_eq!(set, LetterSet::only(b'x'));
        assert_eq!(format!("{:?}", set), "{'x'}");
    }

    #[test]
    fn letter_set_rejects_non_letters() {
        assert!(!LetterSet::all().contains(b'A'));
        assert!(!LetterSet::all().contains(b'-'));
    }

    #[test]
    fn letter_set_ignores_non_letters() {
        let mut set = LetterSet::only(b'A');
        assert!(set.is_empty());

        set.insert(b'-');
        set.insert(b'{');
        assert!(set.is_empty());

        let mut all = LetterSet::all();
        all.remove(b'Z');
        assert_eq!(all, LetterSet::all());
    }

    #[test]
    fn word_restrictions_counts_for_non_letters() -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_guess(&guess("abcd", &[W, A, A, A]))?;

        assert_eq!(restrictions.min_count(b'A'), 0);
        assert_eq!(restrictions.max_count(b'A'), 0);
        assert_eq!(restrictions.max_count(b'0'), 0);
        assert_eq!(restrictions.min_count(b'a'), 1);
        Ok(())
    }

    #[test]
    fn word_restrictions_is_satisfied_by_no_restrictions() {
        let restrictions = WordRestrictions::new(4);

        assert!(restrictions.is_satisfied_by("abcd"));
        assert!(restrictions.is_satisfied_by("zzzz"));

        // Wrong length
        assert_eq!(restrictions.is_satisfied_by(""), false);
        assert_eq!(restrictions.is_satisfied_by("abcde"), false);
        // Unsupported letters
        assert_eq!(restrictions.is_satisfied_by("ABCD"), false);
    }

    #[test]
    fn word_restrictions_absent_letter_removed_everywhere() -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_guess(&guess("abcd", &[A, A, A, A]))?;

        for location in 0..4 {
            assert_eq!(restrictions.allowed_at(location).len(), 22);
        }
        assert_eq!(restrictions.max_count(b'a'), 0);
        assert!(restrictions.is_satisfied_by("efgh"));
        assert_eq!(restrictions.is_satisfied_by("efga"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_correct_spot() -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_guess(&guess("abcd", &[C, A, A, A]))?;

        assert_eq!(restrictions.allowed_at(0), LetterSet::only(b'a'));
        assert!(restrictions.is_satisfied_by("aefg"));
        assert_eq!(restrictions.is_satisfied_by("eafg"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_wrong_spot_requires_elsewhere() -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_guess(&guess("abcd", &[W, A, A, A]))?;

        assert_eq!(restrictions.min_count(b'a'), 1);
        assert!(restrictions.is_satisfied_by("eafg"));
        assert_eq!(restrictions.is_satisfied_by("aefg"), false);
        assert_eq!(restrictions.is_satisfied_by("efgh"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_repeated_wrong_spot_requires_min_count() -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_guess(&guess("aazz", &[W, W, A, A]))?;

        assert_eq!(restrictions.min_count(b'a'), 2);
        assert!(restrictions.is_satisfied_by("xyaa"));
        assert_eq!(restrictions.is_satisfied_by("xyax"), false);
        assert_eq!(restrictions.is_satisfied_by("ayax"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_absent_duplicate_sets_max_count() -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_guess(&guess("abbc", &[W, A, C, A]))?;

        assert_eq!(restrictions.min_count(b'b'), 1);
        assert_eq!(restrictions.max_count(b'b'), 1);
        assert!(restrictions.is_satisfied_by("edba"));
        assert!(restrictions.is_satisfied_by("daba"));

        assert_eq!(restrictions.is_satisfied_by("bdba"), false);
        assert_eq!(restrictions.is_satisfied_by("dcba"), false);
        assert_eq!(restrictions.is_satisfied_by("adbd"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_is_satisfied_by_with_min_count() -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_guess(&guess("abbc", &[W, W, C, A]))?;

        assert!(restrictions.is_satisfied_by("beba"));
        assert!(restrictions.is_satisfied_by("dabb"));

        assert_eq!(restrictions.is_satisfied_by("edba"), false);
        assert_eq!(restrictions.is_satisfied_by("ebbd"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_long_word_counts() -> Result<(), WordleError> {
        let word = "a".repeat(300);
        let outcomes = vec![C; 300];

        let restrictions = WordRestrictions::from_guess(&guess(&word, &outcomes))?;

        assert_eq!(restrictions.min_count(b'a'), 300);
        assert_eq!(restrictions.max_count(b'a'), 300);
        assert!(restrictions.is_satisfied_by(&word));
        Ok(())
    }

    #[test]
    fn word_restrictions_update_wrong_length() {
        let mut restrictions = WordRestrictions::new(5);

        assert_matches!(
            restrictions.update(&guess("abcd", &[A, A, A, A])),
            Err(WordleError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(restrictions, WordRestrictions::new(5));
    }

    #[test]
    fn word_restrictions_update_unsupported_letters() {
        let mut restrictions = WordRestrictions::new(4);

        assert_matches!(
            restrictions.update(&guess("aBcd", &[A, A, A, A])),
            Err(WordleError::InvalidResults)
        );
        assert_eq!(restrictions, WordRestrictions::new(4));
    }

    #[test]
    fn word_restrictions_update_contradiction() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::from_guess(&guess("abcd", &[A, A, A, A]))?;
        let before = restrictions.clone();

        // 'a' was already ruled out.
        assert_matches!(
            restrictions.update(&guess("aefg", &[C, A, A, A])),
            Err(WordleError::InvalidResults)
        );
        // Three 'e's are present, but only one spot is left for them.
        assert_matches!(
            restrictions.update(&guess("eeeg", &[W, W, W, A])),
            Err(WordleError::InvalidResults)
        );
        assert_eq!(restrictions, before);
        Ok(())
    }

    #[test]
    fn word_restrictions_merge() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::from_guess(&guess("bade", &[C, C, A, C]))?;
        let other_restrictions = WordRestrictions::from_guess(&guess("abbc", &[W, W, C, A]))?;

        restrictions.merge(&other_restrictions)?;

        assert!(restrictions.is_satisfied_by("babe"));
        assert_eq!(restrictions.is_satisfied_by("baee"), false);
        assert_eq!(restrictions.is_satisfied_by("bade"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_merge_is_idempotent() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::from_guess(&guess("abbc", &[W, A, C, A]))?;
        let once = restrictions.clone();

        restrictions.merge(&once)?;
        assert_eq!(restrictions, once);

        restrictions.merge(&once)?;
        assert_eq!(restrictions, once);
        Ok(())
    }

    #[test]
    fn word_restrictions_empty_then_merge() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(4);
        let other_restrictions = WordRestrictions::from_guess(&guess("abbc", &[W, W, C, A]))?;

        restrictions.merge(&other_restrictions)?;

        assert_eq!(restrictions, other_restrictions);
        Ok(())
    }

    #[test]
    fn word_restrictions_merge_wrong_length() {
        let mut restrictions = WordRestrictions::new(5);

        assert_matches!(
            restrictions.merge(&WordRestrictions::new(4)),
            Err(WordleError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(restrictions, WordRestrictions::new(5));
    }

    #[test]
    fn word_restrictions_merge_contradiction() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::from_guess(&guess("abcd", &[C, A, A, A]))?;
        let other_restrictions = WordRestrictions::from_guess(&guess("efga", &[A, A, A, A]))?;
        let before = restrictions.clone();

        assert_matches!(
            restrictions.merge(&other_restrictions),
            Err(WordleError::InvalidResults)
        );
        assert_eq!(restrictions, before);
        Ok(())
    }
}
