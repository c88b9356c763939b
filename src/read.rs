use crate::{
    error::TokenizeError,
    source::{
        file::SourceText,
        reader::{CodeReader, EscapeReader, RawReader},
    },
};

/// Pull interface shared by every reader level.
///
/// A scanner that switches lexical context at runtime holds a
/// `Box<dyn CharStream>` and replaces it with [`Splicing::adopt`].
pub trait CharStream {
    /// Consumes the next logical character. `Ok(None)` means the stream is
    /// exhausted, and stays exhausted.
    fn advance(&mut self) -> Result<Option<char>, TokenizeError>;

    /// The character [`advance`](Self::advance) would produce, without moving.
    fn lookahead(&self) -> Result<Option<char>, TokenizeError>;

    /// Character produced by the advance before the last one.
    fn prev(&self) -> Option<char>;

    /// Character produced by the last advance.
    fn curr(&self) -> Option<char>;

    /// Raw offset the next advance starts scanning from.
    fn offset(&self) -> usize;

    fn source(&self) -> &SourceText;

    fn splicing(&self) -> Splicing;

    /// Independent copy positioned identically to `self`.
    fn boxed_copy(&self) -> Box<dyn CharStream>;

    fn chars(&mut self) -> Chars<'_, Self>
    where
        Self: Sized,
    {
        Chars::new(self)
    }
}

impl CharStream for Box<dyn CharStream> {
    fn advance(&mut self) -> Result<Option<char>, TokenizeError> {
        (**self).advance()
    }

    fn lookahead(&self) -> Result<Option<char>, TokenizeError> {
        (**self).lookahead()
    }

    fn prev(&self) -> Option<char> {
        (**self).prev()
    }

    fn curr(&self) -> Option<char> {
        (**self).curr()
    }

    fn offset(&self) -> usize {
        (**self).offset()
    }

    fn source(&self) -> &SourceText {
        (**self).source()
    }

    fn splicing(&self) -> Splicing {
        (**self).splicing()
    }

    fn boxed_copy(&self) -> Box<dyn CharStream> {
        (**self).boxed_copy()
    }
}

/// How backslash-newline pairs are treated by a reader level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Splicing {
    /// Line endings are normalized, splices are left in place.
    Off,
    /// Splices are removed, other backslashes pass through.
    Silent,
    /// Splices are removed, any other backslash is an error.
    Strict,
}

impl Splicing {
    pub fn open(self, src: &SourceText) -> Box<dyn CharStream> {
        match self {
            Self::Off => Box::new(RawReader::new(src)),
            Self::Silent => Box::new(EscapeReader::new(src)),
            Self::Strict => Box::new(CodeReader::new(src)),
        }
    }

    /// Reads the rest of `other` under this policy, starting at its cursor.
    pub fn adopt(self, other: &dyn CharStream) -> Box<dyn CharStream> {
        match self {
            Self::Off => Box::new(RawReader::adopt(other)),
            Self::Silent => Box::new(EscapeReader::adopt(other)),
            Self::Strict => Box::new(CodeReader::adopt(other)),
        }
    }
}

/// Iterator over the remaining characters of a stream. Yields at most one
/// error, after which it is fused.
pub struct Chars<'s, S: ?Sized> {
    stream: &'s mut S,
    is_err: bool,
}

impl<'s, S: CharStream + ?Sized> Chars<'s, S> {
    pub fn new(stream: &'s mut S) -> Self {
        Self {
            stream,
            is_err: false,
        }
    }
}

impl<'s, S: CharStream + ?Sized> Iterator for Chars<'s, S> {
    type Item = Result<char, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_err {
            None
        } else {
            match self.stream.advance() {
                Ok(next) => next.map(Ok),
                Err(err) => {
                    self.is_err = true;
                    Some(Err(err))
                }
            }
        }
    }
}
