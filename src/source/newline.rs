use crate::{error::TokenizeError, read::Splicing};

use super::{file::SourceText, reader::Dialect};

/// End-of-line indicators are mapped to a single new-line character: a lone
/// `\r` and a `\r\n` pair both read as `\n`. Nothing else is interpreted.
///
/// Returns the logical character starting at raw `offset` and the raw offset
/// just past it, or `None` at end of input.
pub(crate) fn normalized_at(src: &SourceText, offset: usize) -> Option<(char, usize)> {
    match src.get(offset)? {
        '\r' if src.get(offset + 1) == Some('\n') => Some(('\n', offset + 2)),
        '\r' => Some(('\n', offset + 1)),
        ch => Some((ch, offset + 1)),
    }
}

/// Normalizes line endings only. Backslashes, including those that start a
/// splice, are produced as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw;

impl Dialect for Raw {
    const SPLICING: Splicing = Splicing::Off;

    fn resolve(src: &SourceText, offset: usize) -> Result<Option<(char, usize)>, TokenizeError> {
        Ok(normalized_at(src, offset))
    }
}
