//! Spelling suggestions on top of any [`Set`].
//!
//! This module provides [`WordChecker`], which answers whether a word is
//! known and proposes known words one edit away from an unknown one. It only
//! needs `contains` from the set it is bound to, so it works the same over an
//! [`AvlSet`](crate::set::AvlSet) or a [`ChainedHashSet`].
//!
//! Words are expected to be case-normalized by the caller; the default
//! alphabet is the uppercase Latin letters.
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::{ChainedHashSet, Set};
//! use setwise::word_checker::WordChecker;
//!
//! let mut words = ChainedHashSet::new();
//! for word in ["CAT", "CART", "AT", "COT", "C"] {
//!     words.add(word.to_string());
//! }
//!
//! let checker = WordChecker::new(&words);
//! assert!(checker.word_exists("CAT"));
//! assert!(!checker.word_exists("CAAT"));
//!
//! // Both deletions of an "A" produce "CAT"; it is reported once.
//! assert_eq!(checker.find_suggestions("CAAT"), vec!["CAT", "CART"]);
//! ```

mod candidates;

use crate::set::{ChainedHashSet, Set};

/// The letters tried by insertion and replacement unless another alphabet
/// is given.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Checks words against a borrowed set and suggests near misses.
///
/// The checker does not own the set; it only borrows it for its lifetime.
pub struct WordChecker<'a, S: ?Sized> {
    words: &'a S,
    alphabet: Vec<char>,
}

impl<'a, S: Set<String> + ?Sized> WordChecker<'a, S> {
    /// Binds a checker to `words`, using [`ALPHABET`].
    #[must_use]
    pub fn new(words: &'a S) -> Self {
        Self::with_alphabet(words, ALPHABET)
    }

    /// Binds a checker to `words`, trying the characters of `alphabet` when
    /// inserting or replacing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{AvlSet, Set};
    /// use setwise::word_checker::WordChecker;
    ///
    /// let mut words = AvlSet::new();
    /// words.add("BÄR".to_string());
    ///
    /// let checker = WordChecker::with_alphabet(&words, "ÄÖÜ");
    /// assert_eq!(checker.find_suggestions("BAR"), vec!["BÄR".to_string()]);
    /// ```
    #[must_use]
    pub fn with_alphabet(words: &'a S, alphabet: &str) -> Self {
        Self {
            words,
            alphabet: alphabet.chars().collect(),
        }
    }

    /// Returns `true` if `word` is in the bound set.
    pub fn word_exists(&self, word: &str) -> bool {
        self.words.contains(&word.to_owned())
    }

    /// Returns the known words one edit away from `word`.
    ///
    /// Candidates are produced in this order, and each one is kept only if
    /// the set contains it:
    ///
    /// 1. swapping each pair of adjacent characters
    /// 2. inserting each alphabet letter at every position
    /// 3. deleting each character
    /// 4. replacing each character with each alphabet letter
    /// 5. splitting into two non-empty known words, reported as `"left right"`
    ///
    /// Every suggestion appears once, at the position it was first found.
    /// Replacing a character with itself is one of the candidates, so a word
    /// that is already known is suggested back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{AvlSet, Set};
    /// use setwise::word_checker::WordChecker;
    ///
    /// let mut words = AvlSet::new();
    /// for word in ["ACT", "CART", "AT", "COT", "C"] {
    ///     words.add(word.to_string());
    /// }
    ///
    /// let checker = WordChecker::new(&words);
    /// assert_eq!(
    ///     checker.find_suggestions("CAT"),
    ///     vec!["ACT", "CART", "AT", "COT", "C AT"]
    /// );
    /// ```
    pub fn find_suggestions(&self, word: &str) -> Vec<String> {
        let word: Vec<char> = word.chars().collect();
        let mut suggestions = Suggestions::default();

        candidates::swaps(&word)
            .chain(candidates::insertions(&word, &self.alphabet))
            .chain(candidates::deletions(&word))
            .chain(candidates::replacements(&word, &self.alphabet))
            .filter(|candidate| self.words.contains(candidate))
            .for_each(|candidate| suggestions.push(candidate));

        candidates::splits(&word)
            .filter(|(left, right)| self.words.contains(left) && self.words.contains(right))
            .for_each(|(left, right)| suggestions.push(format!("{left} {right}")));

        suggestions.into_vec()
    }
}

/// Suggestions in discovery order, without repeats.
#[derive(Default)]
struct Suggestions {
    found: Vec<String>,
    seen: ChainedHashSet<String>,
}

impl Suggestions {
    fn push(&mut self, suggestion: String) {
        if self.seen.insert(suggestion.clone()) {
            self.found.push(suggestion);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.found
    }
}
