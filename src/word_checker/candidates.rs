//! Edit-distance-1 candidate generators.
//!
//! Each generator borrows the word as a slice of `char`s and lazily yields
//! the candidates in a fixed order.

/// Swaps every pair of adjacent characters, left to right.
pub(crate) fn swaps(word: &[char]) -> impl Iterator<Item = String> + '_ {
    (1..word.len()).map(move |index| {
        let mut candidate = word.to_vec();
        candidate.swap(index - 1, index);
        candidate.into_iter().collect()
    })
}

/// Inserts every alphabet letter at each of the `word.len() + 1` positions.
pub(crate) fn insertions<'a>(
    word: &'a [char],
    alphabet: &'a [char],
) -> impl Iterator<Item = String> + 'a {
    (0..=word.len()).flat_map(move |position| {
        alphabet.iter().map(move |&letter| {
            let mut candidate = word.to_vec();
            candidate.insert(position, letter);
            candidate.into_iter().collect()
        })
    })
}

/// Removes each character in turn.
pub(crate) fn deletions(word: &[char]) -> impl Iterator<Item = String> + '_ {
    (0..word.len()).map(move |position| {
        word.iter()
            .enumerate()
            .filter(|&(index, _)| index != position)
            .map(|(_, &character)| character)
            .collect()
    })
}

/// Replaces each character with every alphabet letter.
pub(crate) fn replacements<'a>(
    word: &'a [char],
    alphabet: &'a [char],
) -> impl Iterator<Item = String> + 'a {
    (0..word.len()).flat_map(move |position| {
        alphabet.iter().map(move |&letter| {
            let mut candidate = word.to_vec();
            candidate[position] = letter;
            candidate.into_iter().collect()
        })
    })
}

/// Splits the word into two non-empty halves at every internal boundary.
pub(crate) fn splits(word: &[char]) -> impl Iterator<Item = (String, String)> + '_ {
    (1..word.len()).map(move |boundary| {
        let (left, right) = word.split_at(boundary);
        (left.iter().collect(), right.iter().collect())
    })
}
