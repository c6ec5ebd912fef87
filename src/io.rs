use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub type LineIter = Box<dyn Iterator<Item = Result<String, ReadError>> + Send + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line} is not valid UTF-8: {source}")]
    Decode {
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Open `path` and iterate its lines lazily. Opening is the only fallible
/// step here; read and decode failures surface through the iterator.
pub fn iter_lines<P: AsRef<Path>>(path: P) -> io::Result<LineIter> {
    let file = File::open(path)?;
    Ok(Box::new(UniversalLines::new(BufReader::new(file))))
}

/// Line iterator with universal-newline splitting: `\n`, `\r\n` and a lone
/// `\r` all end a line. Decoding is strict; the iterator stops after the
/// first error.
pub struct UniversalLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    line: usize,
    done: bool,
}

impl<R: BufRead> UniversalLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            line: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = Result<String, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
            self.line += 1;
            let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
            let text = match std::str::from_utf8(bytes) {
                Ok(s) => s,
                Err(source) => {
                    self.done = true;
                    return Some(Err(ReadError::Decode {
                        line: self.line,
                        source,
                    }));
                }
            };
            // CRLF: the '\r' belongs to the terminator, not to a second line
            let text = text.strip_suffix('\r').unwrap_or(text);
            self.pending.extend(text.split('\r').map(str::to_string));
        }
    }
}
