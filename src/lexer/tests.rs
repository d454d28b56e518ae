//! Unit tests for the lexer module.
//!
//! Covers byte classification, keywords and identifiers, numeric literals,
//! comments, unknown bytes and token spans.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{
    chars::{is_alpha, is_alphanumeric, is_newline, is_numeric, is_whitespace},
    lexer::{tokenize, tokenize_buffer, Lexer},
    tokens::TokenKind,
};
use crate::source::source::SourceBuffer;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.kal".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

// === Classifiers ===

#[test]
fn test_whitespace_excludes_newline() {
    assert!(is_whitespace(b' '));
    assert!(is_whitespace(b'\t'));
    assert!(!is_whitespace(b'\n'));
    assert!(!is_whitespace(b'\r'));
    assert!(is_newline(b'\n'));
    assert!(is_newline(b'\r'));
}

#[test]
fn test_classifiers_over_every_byte() {
    for c in 0..=u8::MAX {
        let classes = [is_whitespace(c), is_alpha(c), is_numeric(c)]
            .iter()
            .filter(|class| **class)
            .count();

        assert!(classes <= 1, "byte {:#04x} is in {} classes", c, classes);
        assert_eq!(is_alphanumeric(c), is_alpha(c) || is_numeric(c));
        assert_eq!(is_alpha(c), c.is_ascii_alphabetic());
        assert_eq!(is_numeric(c), (b'0'..=b'9').contains(&c));
    }
}

// === Keywords and identifiers ===

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("def extern"),
        vec![TokenKind::Def, TokenKind::Extern, TokenKind::Eof]
    );
}

#[test]
fn test_keywords_match_whole_words() {
    assert_eq!(
        kinds("define externs def1 Def"),
        vec![
            ident("define"),
            ident("externs"),
            ident("def1"),
            ident("Def"),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    assert_eq!(
        kinds("foo bar2 CamelCase x"),
        vec![
            ident("foo"),
            ident("bar2"),
            ident("CamelCase"),
            ident("x"),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_underscore_is_not_an_identifier_byte() {
    assert_eq!(
        kinds("foo_bar"),
        vec![
            ident("foo"),
            TokenKind::Char(b'_'),
            ident("bar"),
            TokenKind::Eof
        ]
    );
}

// === Numbers ===

#[test]
fn test_tokenize_numbers() {
    assert_eq!(
        kinds("42 2.75 0 100.5"),
        vec![
            TokenKind::Number(42.0),
            TokenKind::Number(2.75),
            TokenKind::Number(0.0),
            TokenKind::Number(100.5),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_number_edge_dots() {
    assert_eq!(
        kinds("1. .5 1.2.3"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Char(b'.'),
            TokenKind::Char(b'.'),
            TokenKind::Number(5.0),
            TokenKind::Number(1.2),
            TokenKind::Char(b'.'),
            TokenKind::Number(3.0),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_number_then_identifier() {
    assert_eq!(
        kinds("2x"),
        vec![TokenKind::Number(2.0), ident("x"), TokenKind::Eof]
    );
}

#[test]
fn test_huge_number_is_infinite() {
    let source = "9".repeat(400);
    assert_eq!(kinds(&source), vec![TokenKind::Number(f64::INFINITY), TokenKind::Eof]);
}

// === Comments, whitespace and unknown bytes ===

#[test]
fn test_comments_and_line_breaks_are_skipped() {
    assert_eq!(
        kinds("# leading comment\r\ndef # trailing\n\n\textern"),
        vec![TokenKind::Def, TokenKind::Extern, TokenKind::Eof]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(kinds("x # no newline"), vec![ident("x"), TokenKind::Eof]);
}

#[test]
fn test_operators_are_char_tokens() {
    assert_eq!(
        kinds("fib(x-1)+fib(x-2) < 3;"),
        vec![
            ident("fib"),
            TokenKind::Char(b'('),
            ident("x"),
            TokenKind::Char(b'-'),
            TokenKind::Number(1.0),
            TokenKind::Char(b')'),
            TokenKind::Char(b'+'),
            ident("fib"),
            TokenKind::Char(b'('),
            ident("x"),
            TokenKind::Char(b'-'),
            TokenKind::Number(2.0),
            TokenKind::Char(b')'),
            TokenKind::Char(b'<'),
            TokenKind::Number(3.0),
            TokenKind::Char(b';'),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_non_ascii_and_control_bytes() {
    let buffer = SourceBuffer::new(vec![b'a', 0x00, 0x0b, 0xc3, 0xa9], None);
    let kinds: Vec<TokenKind> = tokenize_buffer(&buffer)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            ident("a"),
            TokenKind::Char(0x00),
            TokenKind::Char(0x0b),
            TokenKind::Char(0xc3),
            TokenKind::Char(0xa9),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \t\n# only a comment"), vec![TokenKind::Eof]);
}

// === Spans and the pull interface ===

#[test]
fn test_token_spans() {
    let tokens = tokenize("def  foo(1.5)".to_string(), None).unwrap();
    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.span.start.0, token.span.end.0))
        .collect();

    assert_eq!(spans, vec![(0, 3), (5, 8), (8, 9), (9, 12), (12, 13), (13, 13)]);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_next_token_repeats_eof() {
    let buffer = SourceBuffer::new("x", None);
    let mut lexer = Lexer::new(&buffer);

    assert_eq!(lexer.next_token().unwrap().kind, ident("x"));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    assert!(lexer.at_eof());
}

#[test]
fn test_current_position_tracks_cursor() {
    let buffer = SourceBuffer::new("def 12", Some("pos.kal".to_string()));
    let mut lexer = Lexer::new(&buffer);

    assert_eq!(lexer.current_position().0, 0);
    lexer.next_token().unwrap();
    assert_eq!(lexer.current_position().0, 3);

    let number = lexer.next_token().unwrap();
    assert_eq!(number.kind, TokenKind::Number(12.0));
    assert_eq!(lexer.current_position().0, 6);
    assert_eq!(lexer.current_position().1.as_str(), "pos.kal");
}

#[test]
fn test_iterator_stops_after_eof() {
    let buffer = SourceBuffer::new("extern sin(a)", None);
    let lexer = Lexer::new(&buffer);

    let tokens: Vec<_> = lexer.collect();
    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[5].as_ref().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_token_accessors() {
    assert_eq!(ident("foo").identifier(), Some("foo"));
    assert_eq!(TokenKind::Def.identifier(), None);
    assert_eq!(TokenKind::Number(2.5).number(), Some(2.5));
    assert_eq!(TokenKind::Char(b'1').number(), None);
    assert!(TokenKind::Def.is_keyword());
    assert!(TokenKind::Extern.is_keyword());
    assert!(!ident("def1").is_keyword());
}

#[test]
fn test_token_display() {
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::Def.to_string(), "def");
    assert_eq!(ident("fib").to_string(), "Identifier(fib)");
    assert_eq!(TokenKind::Number(40.5).to_string(), "Number(40.5)");
    assert_eq!(TokenKind::Char(b'+').to_string(), "Char('+')");
    assert_eq!(TokenKind::Char(0x07).to_string(), "Char(0x07)");

    let tokens = tokenize("def".to_string(), None).unwrap();
    assert_eq!(tokens[0].to_string(), "0..3  def");
}

proptest! {
    #[test]
    fn spans_are_ordered_and_end_with_eof(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let buffer = SourceBuffer::new(bytes.clone(), None);
        let tokens = tokenize_buffer(&buffer).unwrap();

        let eofs = tokens.iter().filter(|token| token.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(&tokens.last().unwrap().kind, &TokenKind::Eof);

        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start.0 >= last_end);
            prop_assert!(token.span.end.0 >= token.span.start.0);
            prop_assert!(token.span.end.0 as usize <= bytes.len());
            last_end = token.span.end.0;
        }
    }

    #[test]
    fn identifiers_round_trip(name in "[a-zA-Z][a-zA-Z0-9]{0,16}") {
        let result = kinds(&name);
        let expected = match name.as_str() {
            "def" => TokenKind::Def,
            "extern" => TokenKind::Extern,
            _ => TokenKind::Identifier(name.clone()),
        };
        prop_assert_eq!(result, vec![expected, TokenKind::Eof]);
    }
}
