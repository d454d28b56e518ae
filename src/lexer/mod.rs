//! Lexical analysis module.
//!
//! Converts a [`SourceBuffer`](crate::source::source::SourceBuffer) into a
//! stream of tokens. It handles:
//!
//! - Byte classification for picking a scanning rule
//! - Recognition of the `def` and `extern` keywords, identifiers and numbers
//! - `#` line comments and whitespace
//! - Passing any other byte through as a single-byte token

pub mod chars;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
