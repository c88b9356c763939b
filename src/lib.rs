//! Layered character readers for the lexical front-end of a C/C++ amalgamation
//! tool.
//!
//! Three levels share one cursor protocol:
//! * [`RawReader`] maps `\r` and `\r\n` to `\n`
//! * [`EscapeReader`] additionally deletes backslash-newline splices
//! * [`CodeReader`] deletes splices and rejects any other backslash
//!
//! A reader of any level can adopt the cursor of another with
//! [`Reader::adopt`], so a scanner can change dialect mid-stream.

pub mod error;
pub mod read;
pub mod scan;
pub mod source;

pub use error::TokenizeError;
pub use read::{CharStream, Chars, Splicing};
pub use scan::Loc;
pub use source::{
    file::SourceText,
    newline::Raw,
    nlsplice::{Code, Escape},
    reader::{CodeReader, Dialect, EscapeReader, RawReader, Reader},
};
