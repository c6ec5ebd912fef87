//! The word list: trimmed, non-blank lines in their original order.
//!
//! [`WordList`] can only be built through [`WordList::push_line`],
//! [`WordList::from_contents`] or a checked conversion from `Vec<String>`, so
//! every element is guaranteed to be non-empty and already trimmed. Duplicates
//! are kept.
use std::ops::Deref;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WordListError {
    #[error("entry {0} is blank")]
    BlankEntry(usize),
    #[error("entry {index} has surrounding whitespace: {value:?}")]
    Untrimmed { index: usize, value: String },
}

/// Whitespace for trimming: Unicode `White_Space` plus the ASCII
/// separators U+001C..=U+001F.
fn is_trim_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim a line and drop it if nothing is left.
pub fn normalize_line(line: &str) -> Option<&str> {
    let trimmed = line.trim_matches(is_trim_char);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList(Vec<String>);

impl WordList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Normalize `line` and append it if it is not blank. Returns whether the
    /// line was kept.
    pub fn push_line(&mut self, line: &str) -> bool {
        match normalize_line(line) {
            Some(word) => {
                self.0.push(word.to_string());
                true
            }
            None => false,
        }
    }

    /// Trim-and-filter pass over in-memory text. `\n`, `\r\n` and a lone `\r`
    /// all end a line.
    pub fn from_contents(contents: &str) -> Self {
        let mut list = Self::new();
        for line in contents.split(['\n', '\r']) {
            list.push_line(line);
        }
        list
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for WordList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = WordListError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        for (index, w) in words.iter().enumerate() {
            match normalize_line(w) {
                None => return Err(WordListError::BlankEntry(index)),
                Some(t) if t.len() != w.len() => {
                    return Err(WordListError::Untrimmed {
                        index,
                        value: w.clone(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(Self(words))
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.0
    }
}
