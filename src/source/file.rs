use std::{
    fmt::{Debug, Display},
    rc::Rc,
};

use crate::scan::Loc;

/// Immutable characters of one physical source file.
///
/// Cloning shares the underlying buffer, so every reader chained from the same
/// text (copies and adopted readers alike) points at one allocation.
#[derive(Clone, Eq)]
pub struct SourceText {
    name: Rc<str>,
    src: Rc<[char]>,
}

impl PartialEq for SourceText {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.src == other.src
    }
}

impl Debug for SourceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceText")
            .field("name", &self.name)
            .field("src", &String::from_iter(self.src.iter()))
            .finish()
    }
}

const NAME_INLINE: &str = "<inline>";

impl SourceText {
    pub fn named(name: &str, input: &str) -> Self {
        Self {
            name: Rc::from(name),
            src: input.chars().collect(),
        }
    }

    pub fn inline(input: &str) -> Self {
        Self::named(NAME_INLINE, input)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Rc<str> {
        self.name.clone()
    }

    pub fn get(&self, offset: usize) -> Option<char> {
        self.src.get(offset).copied()
    }

    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// Line and column of a raw offset. Offsets past the end resolve to the
    /// position just after the last character.
    pub fn location(&self, offset: usize) -> Loc {
        let end = offset.min(self.src.len());
        let mut loc = Loc::init();
        let mut i = 0;
        while i < end {
            let ch = self.src[i];
            loc = loc.next(ch);
            i += 1;
            // \r\n counts once
            if ch == '\r' && i < end && self.src[i] == '\n' {
                i += 1;
            }
        }
        loc
    }
}

impl Display for SourceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_iter(self.src.iter()))
    }
}
