pub mod converter;
pub mod export;
pub mod feedback;
pub mod filter;
pub mod io;
pub mod report;
pub mod words;

pub mod prelude {
    pub use crate::converter::{ConvertError, convert};
    pub use crate::feedback::{Clue, Mark};
    pub use crate::words::WordList;
}
