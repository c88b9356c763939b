use crate::{error::TokenizeError, read::Splicing};

use super::{file::SourceText, newline::normalized_at, reader::Dialect};

/// Each instance of a backslash character (\) immediately followed by a new-line
/// character is deleted, splicing physical source lines to form logical source lines.
///
/// Returns the raw offset of the first character at or after `offset` that does
/// not begin a splice. Consecutive splices are all skipped.
pub(crate) fn skip_splices(src: &SourceText, mut offset: usize) -> usize {
    while let Some(('\\', next)) = normalized_at(src, offset) {
        match normalized_at(src, next) {
            Some(('\n', after)) => offset = after,
            _ => break,
        }
    }
    offset
}

/// Removes line splices; any other backslash is an ordinary character, as it is
/// inside string and character literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape;

impl Dialect for Escape {
    const SPLICING: Splicing = Splicing::Silent;

    fn resolve(src: &SourceText, offset: usize) -> Result<Option<(char, usize)>, TokenizeError> {
        Ok(normalized_at(src, skip_splices(src, offset)))
    }
}

/// Removes line splices and rejects every other backslash. Outside of literals
/// a backslash is only legal as the first half of a splice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code;

impl Dialect for Code {
    const SPLICING: Splicing = Splicing::Strict;

    fn resolve(src: &SourceText, offset: usize) -> Result<Option<(char, usize)>, TokenizeError> {
        let offset = skip_splices(src, offset);
        match normalized_at(src, offset) {
            // skip_splices stopped here, so no new-line follows
            Some(('\\', _)) => Err(stray_backslash(src, offset)),
            next => Ok(next),
        }
    }
}

fn stray_backslash(src: &SourceText, offset: usize) -> TokenizeError {
    let loc = src.location(offset);
    log::debug!("{}:{}: stray backslash at offset {}", src.name(), loc, offset);
    TokenizeError::StrayBackslash {
        name: src.shared_name(),
        offset,
        loc,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{skip_splices, Code, Escape};
    use crate::{
        error::TokenizeError,
        scan::Loc,
        source::{file::SourceText, reader::Dialect},
    };

    #[test]
    fn skips_chained_splices() {
        let src = SourceText::inline("\\\n\\\r\n\\\rx");
        assert_eq!(7, skip_splices(&src, 0));
        assert_eq!(7, skip_splices(&src, 2));
        assert_eq!(7, skip_splices(&src, 7));
    }

    #[test]
    fn stops_at_escaped_backslash() {
        let src = SourceText::inline("\\\\\n");
        assert_eq!(0, skip_splices(&src, 0));
        assert_eq!(3, skip_splices(&src, 1));
    }

    #[test]
    fn trailing_backslash() {
        let src = SourceText::inline("a\\");
        assert_eq!(Ok(Some(('\\', 2))), Escape::resolve(&src, 1));
        assert_eq!(
            Err(TokenizeError::StrayBackslash {
                name: "<inline>".into(),
                offset: 1,
                loc: Loc::new(1, 2),
            }),
            Code::resolve(&src, 1)
        );
    }

    #[test]
    fn code_error_points_past_splices() {
        let src = SourceText::inline("x\\\r\n\\y");
        let err = Code::resolve(&src, 1).unwrap_err();
        assert_eq!(4, err.offset());
        assert_eq!(Loc::new(2, 1), err.loc());
        assert_eq!("<inline>:2:1: stray '\\' in program (offset 4)", err.to_string());
    }
}
