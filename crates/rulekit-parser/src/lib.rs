//! rulekit Parser - rule text to AST
//!
//! This crate turns rule text such as `age > 18 AND country = 'US'` into a
//! [`rulekit_core::Node`] tree:
//! - [`lexer`]: text to tokens
//! - [`expression_parser`]: tokens to AST
//! - [`rule`]: the composed entry point and rule text helpers

pub mod error;
pub mod expression_parser;
pub mod lexer;
pub mod rule;

// Re-export main parser types
pub use error::{LexError, ParseError, Result};
pub use expression_parser::ExpressionParser;
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use rule::{clean_expression, combine_expressions, parse_rule};
