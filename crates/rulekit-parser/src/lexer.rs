//! Rule text lexer
//!
//! Scans left to right with one character of lookahead:
//! - whitespace is skipped
//! - `(` and `)` are single tokens
//! - `'...'` is a string literal, its content trimmed
//! - a letter starts an identifier (letters and digits); `AND`/`OR` in any
//!   case become connectives, anything else a lower-cased field name
//! - an ASCII digit starts a numeral (digits and dots, dot count unchecked)
//! - `>`, `<` and `=` are one comparison token each; `>=` lexes as two tokens
//!
//! Literal tokens carry their coerced [`Value`]; see [`Value::from_literal`].

use crate::error::LexError;
use rulekit_core::{Comparator, Connective, Value};
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LParen,
    RParen,
    /// Lower-cased identifier
    Field(String),
    /// Numeric or quoted literal
    Value(Value),
    /// Single-character comparison operator
    Comparison(Comparator),
    And,
    Or,
}

impl TokenKind {
    /// Connective carried by an `AND`/`OR` token
    pub fn connective(&self) -> Option<Connective> {
        match self {
            TokenKind::And => Some(Connective::And),
            TokenKind::Or => Some(Connective::Or),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
            TokenKind::Field(name) => write!(f, "field '{}'", name),
            TokenKind::Value(value) => write!(f, "value '{}'", value),
            TokenKind::Comparison(c) => write!(f, "'{}'", c),
            TokenKind::And => f.write_str("'AND'"),
            TokenKind::Or => f.write_str("'OR'"),
        }
    }
}

/// Lexical unit with the byte offset it starts at
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Streaming lexer over rule text
///
/// Yields tokens until the input is exhausted or the first error.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            failed: false,
        }
    }

    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        let (offset, ch) = self.chars.next()?;
        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '\'' => return Some(self.string_literal(offset)),
            '>' => TokenKind::Comparison(Comparator::Gt),
            '<' => TokenKind::Comparison(Comparator::Lt),
            '=' => TokenKind::Comparison(Comparator::Eq),
            c if c.is_alphabetic() => {
                let word = self.take_while(offset, c, char::is_alphanumeric);
                match Connective::from_keyword(word) {
                    Some(Connective::And) => TokenKind::And,
                    Some(Connective::Or) => TokenKind::Or,
                    None => TokenKind::Field(word.to_lowercase()),
                }
            }
            c if c.is_ascii_digit() => {
                let numeral = self.take_while(offset, c, |c| c.is_ascii_digit() || c == '.');
                TokenKind::Value(Value::from_literal(numeral))
            }
            other => return Some(Err(LexError::UnexpectedCharacter { ch: other, offset })),
        };

        Some(Ok(Token::new(kind, offset)))
    }

    /// Consume characters matching `pred` after `first`, returning the whole run
    fn take_while(&mut self, start: usize, first: char, pred: impl Fn(char) -> bool) -> &'a str {
        let mut end = start + first.len_utf8();
        while let Some((i, c)) = self.chars.next_if(|&(_, c)| pred(c)) {
            end = i + c.len_utf8();
        }
        &self.input[start..end]
    }

    fn string_literal(&mut self, offset: usize) -> Result<Token, LexError> {
        let start = offset + 1;
        for (i, c) in self.chars.by_ref() {
            if c == '\'' {
                let content = self.input[start..i].trim();
                return Ok(Token::new(
                    TokenKind::Value(Value::from_literal(content)),
                    offset,
                ));
            }
        }
        Err(LexError::UnterminatedString { offset })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_token();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Tokenize rule text
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).collect()
}
