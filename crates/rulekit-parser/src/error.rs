//! Parser error types

use thiserror::Error;

/// Lexer error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// Opening quote without a closing one
    #[error("Unterminated string literal starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// Character outside the rule alphabet
    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
}

/// Parser error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failed before parsing started
    #[error("Tokenization error: {0}")]
    Lex(#[from] LexError),

    /// Nothing to parse
    #[error("Empty expression")]
    EmptyExpression,

    /// Field not followed by a comparison operator
    #[error("Expected comparison operator after field '{field}', found {found}")]
    ExpectedComparison { field: String, found: String },

    /// Comparison operator not followed by a value
    #[error("Expected value after '{field} {comparator}', found {found}")]
    ExpectedValue {
        field: String,
        comparator: String,
        found: String,
    },

    /// Group opened with '(' but not closed
    #[error("Expected closing parenthesis, found {found}")]
    ExpectedClosingParen { found: String },

    /// Token that cannot start an expression
    #[error("Unexpected token {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    /// Input ended where an expression was required
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// A complete expression was followed by more tokens
    #[error("Unexpected tokens remaining after parsing, starting with {found} at offset {offset}")]
    TrailingTokens { found: String, offset: usize },

    /// Nesting exceeded the parser's recursion limit
    #[error("Expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
