//! Converter: orchestrates reading a text file, trimming and filtering its
//! lines into a [`WordList`], and writing that list out as JSON.
//!
//! Typical usage:
//!
//! ```no_run
//! use wordle_helper::converter::convert;
//! # fn main() -> Result<(), wordle_helper::converter::ConvertError> {
//! let done = convert("words.txt", "words.json")?;
//! println!("{} words", done.stats.words_written);
//! # Ok(())
//! # }
//! ```
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::export::{ExportError, save_words_json};
use crate::io::{ReadError, iter_lines};
use crate::words::WordList;

/// Source path used when none is given.
pub const DEFAULT_SOURCE: &str = "words.txt";
/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "words.json";

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8 (line {line})", path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts collected while reading the source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub words_written: usize,
}

/// Result of a successful [`convert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub words: WordList,
    pub stats: ConversionStats,
}

/// Read `source` into a word list. The file handle is closed before
/// returning, on success and on error.
pub fn read_word_list<P: AsRef<Path>>(
    source: P,
) -> Result<(WordList, ConversionStats), ConvertError> {
    let source = source.as_ref();
    let lines = iter_lines(source).map_err(|e| ConvertError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut words = WordList::new();
    let mut stats = ConversionStats::default();
    for line in lines {
        let line = line.map_err(|e| match e {
            ReadError::Io(e) => ConvertError::Read {
                path: source.to_path_buf(),
                source: e,
            },
            ReadError::Decode { line, source: err } => ConvertError::Decode {
                path: source.to_path_buf(),
                line,
                source: err,
            },
        })?;
        stats.lines_read += 1;
        if !words.push_line(&line) {
            stats.blank_lines += 1;
        }
    }
    stats.words_written = words.len();
    debug!(
        "read {}: lines={}, blank={}, words={}",
        source.display(),
        stats.lines_read,
        stats.blank_lines,
        stats.words_written
    );
    Ok((words, stats))
}

/// Convert the text file at `source` into a JSON array at `output`.
///
/// Nothing is written unless the whole source was read and decoded; the
/// output is replaced atomically. If `output` is a symlink its target is
/// replaced and the link kept. A read-only `output` fails with
/// [`ConvertError::Write`] and is left as it was.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output: Q,
) -> Result<Conversion, ConvertError> {
    let (words, stats) = read_word_list(&source)?;
    let output = output.as_ref();
    save_words_json(&words, output).map_err(|e| match e {
        ExportError::Io { path, source } => ConvertError::Write { path, source },
        ExportError::Serialize(err) => ConvertError::Write {
            path: output.to_path_buf(),
            source: err.into(),
        },
    })?;
    info!(
        "wrote {} words from {} to {}",
        stats.words_written,
        source.as_ref().display(),
        output.display()
    );
    Ok(Conversion { words, stats })
}
