#![cfg(all(feature = "word-checker", feature = "avl"))]
//! Unit tests for WordChecker.

use rstest::rstest;
use setwise::set::{AvlSet, ChainedHashSet, Set};
use setwise::word_checker::{ALPHABET, WordChecker};

fn hash_dictionary(words: &[&str]) -> ChainedHashSet<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

fn tree_dictionary(words: &[&str]) -> AvlSet<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

// =============================================================================
// word_exists Tests
// =============================================================================

#[rstest]
#[case("CAT", true)]
#[case("DOG", true)]
#[case("COW", false)]
#[case("cat", false)]
#[case("", false)]
fn test_word_exists(#[case] word: &str, #[case] expected: bool) {
    let words = hash_dictionary(&["CAT", "DOG"]);
    let checker = WordChecker::new(&words);
    assert_eq!(checker.word_exists(word), expected);
}

#[rstest]
fn test_checker_sees_the_set_it_borrows() {
    let mut words = tree_dictionary(&["CAT"]);
    {
        let checker = WordChecker::new(&words);
        assert!(!checker.word_exists("DOG"));
    }
    words.add("DOG".to_string());
    let checker = WordChecker::new(&words);
    assert!(checker.word_exists("DOG"));
}

// =============================================================================
// Candidate Kind Tests
// =============================================================================

#[rstest]
#[case::swap("TEH", &["THE"], &["THE"])]
#[case::insertion("CT", &["CAT"], &["CAT"])]
#[case::deletion("CAAT", &["CAT"], &["CAT"])]
#[case::replacement("CAR", &["CAT"], &["CAT"])]
#[case::split("THEDOG", &["THE", "DOG"], &["THE DOG"])]
fn test_each_candidate_kind(
    #[case] word: &str,
    #[case] dictionary: &[&str],
    #[case] expected: &[&str],
) {
    let words = hash_dictionary(dictionary);
    let checker = WordChecker::new(&words);
    assert_eq!(checker.find_suggestions(word), expected);
}

#[rstest]
fn test_split_needs_both_halves() {
    let words = hash_dictionary(&["THE"]);
    let checker = WordChecker::new(&words);
    assert!(checker.find_suggestions("THEDOG").is_empty());
}

#[rstest]
fn test_insertion_at_end() {
    let words = hash_dictionary(&["THEDOGS", "THE", "DOG"]);
    let checker = WordChecker::new(&words);
    assert_eq!(checker.find_suggestions("THEDOG"), vec!["THEDOGS", "THE DOG"]);
}

// =============================================================================
// Ordering and Deduplication Tests
// =============================================================================

#[rstest]
fn test_suggestions_follow_generation_order() {
    let words = hash_dictionary(&["THE", "TEN", "TEA", "EH", "TE"]);
    let checker = WordChecker::new(&words);
    assert_eq!(
        checker.find_suggestions("TEH"),
        vec!["THE", "EH", "TE", "TEA", "TEN"]
    );
}

#[rstest]
fn test_suggestion_found_twice_is_reported_once() {
    let words = hash_dictionary(&["CAT", "CART", "AT", "COT", "C"]);
    let checker = WordChecker::new(&words);
    assert_eq!(checker.find_suggestions("CAAT"), vec!["CAT", "CART"]);
}

#[rstest]
fn test_known_word_is_suggested_back() {
    let words = hash_dictionary(&["HELLO", "JELLO", "HELL"]);
    let checker = WordChecker::new(&words);
    assert_eq!(
        checker.find_suggestions("HELLO"),
        vec!["HELLO", "HELL", "JELLO"]
    );
}

#[rstest]
fn test_single_letter_word() {
    let words = hash_dictionary(&["A", "B", "AA"]);
    let checker = WordChecker::new(&words);
    assert_eq!(checker.find_suggestions("A"), vec!["AA", "A", "B"]);
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[rstest]
fn test_empty_word_only_tries_single_letters() {
    let words = hash_dictionary(&["A", "I", "AB", ""]);
    let checker = WordChecker::new(&words);
    assert_eq!(checker.find_suggestions(""), vec!["A", "I"]);
}

#[rstest]
fn test_empty_dictionary() {
    let words = hash_dictionary(&[]);
    let checker = WordChecker::new(&words);
    assert!(checker.find_suggestions("ANYTHING").is_empty());
}

#[rstest]
fn test_lowercase_input_finds_nothing_with_default_alphabet() {
    let words = hash_dictionary(&["CAT"]);
    let checker = WordChecker::new(&words);
    assert!(checker.find_suggestions("cat").is_empty());
}

#[rstest]
fn test_custom_alphabet() {
    let words = hash_dictionary(&["cat"]);
    let checker = WordChecker::with_alphabet(&words, "abcdefghijklmnopqrstuvwxyz");
    assert_eq!(checker.find_suggestions("cot"), vec!["cat"]);
}

#[rstest]
fn test_default_alphabet() {
    assert_eq!(ALPHABET.chars().count(), 26);
    assert!(ALPHABET.chars().all(|letter| letter.is_ascii_uppercase()));
}

// =============================================================================
// Backend Independence Tests
// =============================================================================

#[rstest]
#[case("CAT")]
#[case("TEH")]
#[case("CAAT")]
#[case("THEDOG")]
#[case("")]
fn test_backends_agree(#[case] word: &str) {
    let dictionary = ["CAT", "ACT", "CART", "AT", "THE", "DOG", "TE", "EH", "A"];
    let tree = tree_dictionary(&dictionary);
    let table = hash_dictionary(&dictionary);

    assert_eq!(
        WordChecker::new(&tree).find_suggestions(word),
        WordChecker::new(&table).find_suggestions(word)
    );
}

#[rstest]
fn test_checker_over_boxed_trait_object() {
    let words: Box<dyn Set<String>> = Box::new(tree_dictionary(&["COT"]));
    let checker = WordChecker::new(words.as_ref());
    assert_eq!(checker.find_suggestions("CAT"), vec!["COT"]);
}
