//! Narrow a word list down to the words still possible under a set of clues.
use crate::feedback::{Clue, Mark};

/// Whether `word` is consistent with `clue`. Comparison ignores ASCII case;
/// a word of a different length never matches.
pub fn matches(word: &str, clue: &Clue) -> bool {
    let chars: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    if chars.len() != clue.len() {
        return false;
    }
    for (i, (letter, mark)) in clue.iter().enumerate() {
        let ok = match mark {
            Mark::Correct => chars[i] == letter,
            Mark::Present => chars[i] != letter && chars.contains(&letter),
            // a gray repeat of a green/yellow letter only rules out this spot
            Mark::Absent if clue.confirms(letter) => chars[i] != letter,
            Mark::Absent => !chars.contains(&letter),
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Words satisfying every clue, in word-list order.
pub fn filter_words<'a>(words: &'a [String], clues: &[Clue]) -> Vec<&'a str> {
    words
        .iter()
        .map(String::as_str)
        .filter(|w| clues.iter().all(|c| matches(w, c)))
        .collect()
}
