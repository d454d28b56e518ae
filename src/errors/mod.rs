//! Error types and error handling for the lexer.
//!
//! Every failure the library can report is an [`errors::Error`]: an
//! [`errors::ErrorImpl`] kind plus the source position it refers to.
//! Load failures point at offset 0 of the requested path.

pub mod errors;
