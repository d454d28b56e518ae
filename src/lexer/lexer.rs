use std::rc::Rc;

use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    source::source::SourceBuffer,
    Position, Span, MK_TOKEN,
};

use super::{
    chars::{is_alpha, is_newline, is_numeric, is_whitespace},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Consumes `len` matched bytes at the lexer position. `None` drops the match.
pub type PatternHandler = fn(&mut Lexer, usize) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    starts: fn(u8) -> bool,
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Tried in order; the first pattern whose `starts` accepts the current byte wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { starts: |c| is_whitespace(c) || is_newline(c), regex: Regex::new(r"^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { starts: |c| c == b'#', regex: Regex::new(r"^#(?-u:[^\r\n])*").unwrap(), handler: skip_handler },
        RegexPattern { starts: is_numeric, regex: Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { starts: is_alpha, regex: Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
    ];
}

/// Pull-based tokenizer over a [`SourceBuffer`].
///
/// Relies on the buffer's trailing NUL: the byte at `len` is always readable,
/// so `at()` never goes out of bounds while `pos <= len`.
pub struct Lexer<'a> {
    source: &'a [u8],
    len: usize,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Lexer<'a> {
        Lexer {
            source: buffer.as_bytes_with_nul(),
            len: buffer.len(),
            pos: 0,
            file: Rc::clone(buffer.file()),
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> u8 {
        self.source[self.pos]
    }

    pub fn remainder(&self) -> &'a [u8] {
        &self.source[self.pos..self.len]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.len
    }

    pub fn current_position(&self) -> Position {
        Position(offset(self.pos), Rc::clone(&self.file))
    }

    /// Scans the next token. Once the input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                return Ok(MK_TOKEN!(self, TokenKind::Eof, self.len, self.len));
            }

            let c = self.at();

            let Some(pattern) = PATTERNS.iter().find(|pattern| (pattern.starts)(c)) else {
                return Ok(self.char_token(c));
            };

            let Some(matched) = pattern.regex.find(self.remainder()) else {
                return Ok(self.char_token(c));
            };

            if let Some(token) = (pattern.handler)(self, matched.end())? {
                trace!("{}", token);
                return Ok(token);
            }
        }
    }

    fn char_token(&mut self, c: u8) -> Token {
        let start = self.pos;
        self.advance_n(1);

        let token = MK_TOKEN!(self, TokenKind::Char(c), start, self.pos);
        trace!("{}", token);
        token
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    /// Yields tokens up to and including `Eof`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = !matches!(&result, Ok(token) if token.kind != TokenKind::Eof);

        Some(result)
    }
}

/// Offsets past `u32::MAX` saturate; the loader refuses such sources.
pub fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    lexer.advance_n(len);
    Ok(None)
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    let start = lexer.pos;
    let matched = &lexer.remainder()[..len];

    let value = std::str::from_utf8(matched)
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: String::from_utf8_lossy(matched).into_owned(),
                },
                lexer.current_position(),
            )
        })?;

    lexer.advance_n(len);
    Ok(Some(MK_TOKEN!(lexer, TokenKind::Number(value), start, lexer.pos)))
}

fn symbol_handler(lexer: &mut Lexer, len: usize) -> Result<Option<Token>, Error> {
    let start = lexer.pos;
    let value = &lexer.remainder()[..len];

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value) {
        kind.clone()
    } else {
        // Only ASCII letters and digits reach this handler.
        TokenKind::Identifier(String::from_utf8_lossy(value).into_owned())
    };

    lexer.advance_n(len);
    Ok(Some(MK_TOKEN!(lexer, kind, start, lexer.pos)))
}

/// Tokenizes the whole buffer. The result always ends with a single `Eof`.
pub fn tokenize_buffer(buffer: &SourceBuffer) -> Result<Vec<Token>, Error> {
    Lexer::new(buffer).collect()
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_buffer(&SourceBuffer::new(source, file))
}
