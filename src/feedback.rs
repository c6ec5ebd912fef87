//! Wordle feedback model: per-letter marks and the clue they form with a
//! guessed word.
//!
//! A clue is written `GUESS=FEEDBACK`, e.g. `crane=BYBBG`, where each
//! feedback letter is `G` (green, right letter in the right place), `Y`
//! (yellow, letter elsewhere in the word) or `B` (gray, letter not in the
//! word). Guess letters are stored upper-case.
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'B' => Some(Self::Absent),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClueError {
    #[error("guess is empty")]
    EmptyGuess,
    #[error("expected GUESS=FEEDBACK, got {0:?}")]
    MissingFeedback(String),
    #[error("guess letter {0:?} is not an ASCII letter")]
    NonAlphabetic(char),
    #[error("feedback mark {0:?} is not one of G, Y, B")]
    InvalidMark(char),
    #[error("guess has {guess} letters but feedback has {feedback} marks")]
    LengthMismatch { guess: usize, feedback: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    letters: Vec<char>,
    marks: Vec<Mark>,
}

impl Clue {
    pub fn new(guess: &str, feedback: &str) -> Result<Self, ClueError> {
        let guess = guess.trim();
        let feedback = feedback.trim();
        if guess.is_empty() {
            return Err(ClueError::EmptyGuess);
        }
        let letters = guess
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase())
                } else {
                    Err(ClueError::NonAlphabetic(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let marks = feedback
            .chars()
            .map(|c| Mark::from_char(c).ok_or(ClueError::InvalidMark(c)))
            .collect::<Result<Vec<_>, _>>()?;
        if letters.len() != marks.len() {
            return Err(ClueError::LengthMismatch {
                guess: letters.len(),
                feedback: marks.len(),
            });
        }
        Ok(Self { letters, marks })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// `(letter, mark)` pairs by position.
    pub fn iter(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        self.letters.iter().copied().zip(self.marks.iter().copied())
    }

    /// Whether this clue marks `letter` green or yellow somewhere.
    pub fn confirms(&self, letter: char) -> bool {
        self.iter().any(|(l, m)| l == letter && m != Mark::Absent)
    }
}

impl FromStr for Clue {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once('=')
            .ok_or_else(|| ClueError::MissingFeedback(s.to_string()))?;
        Self::new(guess, feedback)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for l in &self.letters {
            write!(f, "{l}")?;
        }
        f.write_str("=")?;
        for m in &self.marks {
            write!(f, "{}", m.as_char())?;
        }
        Ok(())
    }
}
