use std::fmt::Display;

/// Line and column of a raw source offset, both 1-based.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Loc {
    line: usize,
    col: usize,
}

impl Loc {
    pub(crate) fn init() -> Self {
        Loc { line: 1, col: 1 }
    }

    pub fn new(line: usize, col: usize) -> Self {
        Loc { line, col }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Location after consuming `ch`. `\r` starts a new line on its own; the
    /// `\n` of a `\r\n` pair must be skipped by the caller.
    pub(crate) fn next(&self, ch: char) -> Self {
        if ch == '\n' || ch == '\r' {
            Self {
                line: self.line + 1,
                col: 1,
            }
        } else {
            Self {
                line: self.line,
                col: self.col + 1,
            }
        }
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
