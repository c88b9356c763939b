use std::rc::Rc;

use thiserror::Error;

use crate::scan::Loc;

/// Lexical failure raised while reading code.
///
/// Exhaustion is never reported through this type; readers signal the end of
/// input with `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A backslash outside of a literal that does not start a line splice.
    #[error("{name}:{loc}: stray '\\' in program (offset {offset})")]
    StrayBackslash {
        name: Rc<str>,
        offset: usize,
        loc: Loc,
    },
}

impl TokenizeError {
    /// Raw offset of the offending character.
    pub fn offset(&self) -> usize {
        match self {
            Self::StrayBackslash { offset, .. } => *offset,
        }
    }

    pub fn loc(&self) -> Loc {
        match self {
            Self::StrayBackslash { loc, .. } => *loc,
        }
    }
}
