//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token spanning a byte range of the current file

/// Creates a Token instance covering `$start..$end` in the lexer's file.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(lexer, TokenKind::Def, start, lexer.pos);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($lexer:expr, $kind:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            span: Span {
                start: Position($crate::lexer::lexer::offset($start), Rc::clone(&$lexer.file)),
                end: Position($crate::lexer::lexer::offset($end), Rc::clone(&$lexer.file)),
            },
        }
    };
}
