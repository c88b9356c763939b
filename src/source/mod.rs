pub mod file;
pub mod newline;
pub mod nlsplice;
pub mod reader;

// 1. Physical source file multibyte characters are mapped, in an implementation
// defined manner, to the source character set (introducing new-line characters for
// end-of-line indicators) if necessary.

// 2. Each instance of a backslash character (\) immediately followed by a new-line
// character is deleted, splicing physical source lines to form logical source lines.

// Readers stop at phase 2. Comments, literals and preprocessing tokens are left
// to the scanner pulling from them, which picks a reader level per context:
// `CodeReader` for ordinary code, `EscapeReader` inside literals, and
// `RawReader` where nothing may be interpreted.
