use std::{fmt::Debug, marker::PhantomData};

use crate::{
    error::TokenizeError,
    read::{CharStream, Splicing},
    scan::Loc,
};

use super::{
    file::SourceText,
    newline::Raw,
    nlsplice::{Code, Escape},
};

/// Transformation rules of one reader level.
pub trait Dialect: Debug + Clone + Copy + 'static {
    const SPLICING: Splicing;

    /// Resolves the next logical character starting at raw `offset`, returning it
    /// with the raw offset just past it. Must not depend on anything but its
    /// arguments: lookahead and advance both call it.
    fn resolve(src: &SourceText, offset: usize) -> Result<Option<(char, usize)>, TokenizeError>;
}

/// Line endings normalized, splices kept.
pub type RawReader = Reader<Raw>;
/// Splices removed, stray backslashes kept.
pub type EscapeReader = Reader<Escape>;
/// Splices removed, stray backslashes rejected.
pub type CodeReader = Reader<Code>;

/// Pull reader over a [`SourceText`] under the rules of dialect `D`.
///
/// The reader owns its cursor and its `prev`/`curr` pair; the text itself is
/// shared. Cloning yields an independent reader at the same position.
#[derive(Debug, Clone)]
pub struct Reader<D> {
    src: SourceText,
    offset: usize,
    prev: Option<char>,
    curr: Option<char>,
    dialect: PhantomData<D>,
}

impl<D: Dialect> Reader<D> {
    fn at(src: SourceText, offset: usize) -> Self {
        Self {
            src,
            offset,
            prev: None,
            curr: None,
            dialect: PhantomData,
        }
    }

    pub fn new(src: &SourceText) -> Self {
        Self::at(src.clone(), 0)
    }

    pub fn inline(input: &str) -> Self {
        Self::at(SourceText::inline(input), 0)
    }

    /// Continues from the cursor of `other`, reinterpreting the remaining text
    /// under this reader's rules. Characters `other` already produced are not
    /// replayed, and `prev`/`curr` start out empty.
    pub fn adopt<S: CharStream + ?Sized>(other: &S) -> Self {
        log::debug!(
            "{}: {:?} reader adopts {:?} cursor at offset {}",
            other.source().name(),
            D::SPLICING,
            other.splicing(),
            other.offset()
        );
        Self::at(other.source().clone(), other.offset())
    }

    pub fn advance(&mut self) -> Result<Option<char>, TokenizeError> {
        match D::resolve(&self.src, self.offset)? {
            Some((ch, next)) => {
                log::trace!(
                    "{}: {:?} consumed {:?} from raw {}..{}",
                    self.src.name(),
                    D::SPLICING,
                    ch,
                    self.offset,
                    next
                );
                self.offset = next;
                self.prev = self.curr.replace(ch);
                Ok(Some(ch))
            }
            None => Ok(None),
        }
    }

    pub fn lookahead(&self) -> Result<Option<char>, TokenizeError> {
        D::resolve(&self.src, self.offset).map(|next| next.map(|(ch, _)| ch))
    }

    pub fn prev(&self) -> Option<char> {
        self.prev
    }

    pub fn curr(&self) -> Option<char> {
        self.curr
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Location of the raw cursor.
    pub fn loc(&self) -> Loc {
        self.src.location(self.offset)
    }

    pub fn source(&self) -> &SourceText {
        &self.src
    }
}

impl<D: Dialect, E: Dialect> From<&Reader<E>> for Reader<D> {
    fn from(other: &Reader<E>) -> Self {
        Self::adopt(other)
    }
}

impl<D: Dialect> CharStream for Reader<D> {
    fn advance(&mut self) -> Result<Option<char>, TokenizeError> {
        Reader::advance(self)
    }

    fn lookahead(&self) -> Result<Option<char>, TokenizeError> {
        Reader::lookahead(self)
    }

    fn prev(&self) -> Option<char> {
        self.prev
    }

    fn curr(&self) -> Option<char> {
        self.curr
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn source(&self) -> &SourceText {
        &self.src
    }

    fn splicing(&self) -> Splicing {
        D::SPLICING
    }

    fn boxed_copy(&self) -> Box<dyn CharStream> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CodeReader, EscapeReader, RawReader};
    use crate::{error::TokenizeError, read::CharStream, scan::Loc};

    fn remaining<S: CharStream>(mut reader: S) -> Result<String, TokenizeError> {
        reader.chars().collect()
    }

    #[test]
    fn starts_empty() {
        let reader = CodeReader::inline("ab");
        assert_eq!(None, reader.prev());
        assert_eq!(None, reader.curr());
        assert_eq!(0, reader.offset());
    }

    #[test]
    fn tracks_prev_and_curr() -> Result<(), TokenizeError> {
        let mut reader = RawReader::inline("ab");
        assert_eq!(Some('a'), reader.advance()?);
        assert_eq!((None, Some('a')), (reader.prev(), reader.curr()));
        assert_eq!(Some('b'), reader.advance()?);
        assert_eq!((Some('a'), Some('b')), (reader.prev(), reader.curr()));
        assert_eq!(None, reader.advance()?);
        assert_eq!((Some('a'), Some('b')), (reader.prev(), reader.curr()));
        assert_eq!(None, reader.advance()?);
        Ok(())
    }

    #[test]
    fn lookahead_does_not_move() -> Result<(), TokenizeError> {
        let mut reader = EscapeReader::inline("\\\na\\\n\\\nb");
        assert_eq!(Some('a'), reader.lookahead()?);
        assert_eq!(Some('a'), reader.lookahead()?);
        assert_eq!(0, reader.offset());
        assert_eq!(None, reader.curr());
        assert_eq!(Some('a'), reader.advance()?);
        assert_eq!(Some('b'), reader.lookahead()?);
        assert_eq!(Some('b'), reader.advance()?);
        assert_eq!(None, reader.lookahead()?);
        assert_eq!(Some('b'), reader.curr());
        Ok(())
    }

    #[test]
    fn splice_chain_is_consumed_with_the_next_char() -> Result<(), TokenizeError> {
        let mut reader = CodeReader::inline("\\\n\\\r\nab");
        assert_eq!(Some('a'), reader.lookahead()?);
        assert_eq!(0, reader.offset());
        assert_eq!(Some('a'), reader.advance()?);
        assert_eq!(6, reader.offset());
        assert_eq!(Some('b'), reader.advance()?);
        assert_eq!(7, reader.offset());
        Ok(())
    }

    #[test]
    fn code_rejects_on_lookahead_and_stays_put() -> Result<(), TokenizeError> {
        let mut reader = CodeReader::inline("a\\b");
        assert_eq!(Some('a'), reader.advance()?);
        let err = reader.lookahead().unwrap_err();
        assert_eq!(1, err.offset());
        assert_eq!(Err(err.clone()), reader.advance());
        assert_eq!(Err(err), reader.advance());
        assert_eq!(Some('a'), reader.curr());
        assert_eq!(1, reader.offset());
        Ok(())
    }

    #[test]
    fn copies_are_independent() -> Result<(), TokenizeError> {
        let mut first = CodeReader::inline("abc");
        first.advance()?;
        let mut second = first.clone();
        second.advance()?;
        assert_eq!(Some('a'), first.curr());
        assert_eq!(Some('b'), second.curr());
        first.advance()?;
        first.advance()?;
        assert_eq!(Some('c'), first.curr());
        assert_eq!(Some('b'), second.curr());
        assert_eq!("c", remaining(second)?);
        Ok(())
    }

    #[test]
    fn adopt_from_each_level() -> Result<(), TokenizeError> {
        let mut code = CodeReader::inline("a\\\r\\b\\\nc");
        assert_eq!(Some('a'), code.advance()?);

        let mut escape = EscapeReader::from(&code);
        assert_eq!(None, escape.curr());
        assert_eq!(Some('\\'), escape.advance()?);
        assert_eq!(Some('b'), escape.advance()?);

        let raw = RawReader::adopt(&escape);
        assert_eq!("\\\nc", remaining(raw)?);

        // the original is untouched
        assert_eq!(Some('a'), code.curr());
        assert_eq!(1, code.offset());
        Ok(())
    }

    #[test]
    fn loc_follows_raw_cursor() -> Result<(), TokenizeError> {
        let mut reader = EscapeReader::inline("a\\\r\nb");
        reader.advance()?;
        reader.advance()?;
        assert_eq!(Some('b'), reader.curr());
        assert_eq!(Loc::new(2, 2), reader.loc());
        Ok(())
    }
}
