//! Loading source files into memory.
//!
//! A [`source::SourceBuffer`] owns the full contents of one source plus a
//! trailing NUL byte. The lexer scans it in place.

pub mod source;
