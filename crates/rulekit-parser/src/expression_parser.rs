//! Expression parser
//!
//! Builds a [`Node`] tree from lexer tokens.
//!
//! Grammar:
//! ```text
//! expression := primary ( (AND | OR) expression )?
//! primary    := '(' expression ')'
//!             | FIELD COMPARISON VALUE
//! ```
//!
//! There is no precedence between `AND` and `OR`: a connective takes the
//! primary on its left and the whole remaining expression on its right, so
//! `a and b or c` is `AND(a, OR(b, c))`. Every operator node has exactly two
//! children. A parenthesized group chains with a following connective the
//! same way a bare comparison does.

use crate::error::{ParseError, Result};
use crate::lexer::{Token, TokenKind};
use rulekit_core::Node;

/// Maximum expression nesting, counting both parentheses and chained connectives
pub const MAX_DEPTH: usize = 512;

/// Recursive-descent parser with one token of lookahead
pub struct ExpressionParser<'t> {
    tokens: &'t [Token],
    current: usize,
    depth: usize,
}

impl<'t> ExpressionParser<'t> {
    /// Parse a complete token sequence into an AST
    ///
    /// Fails if the tokens do not form an expression or if tokens remain
    /// after the top-level expression.
    pub fn parse(tokens: &'t [Token]) -> Result<Node> {
        if tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let mut parser = Self {
            tokens,
            current: 0,
            depth: 0,
        };
        let node = parser.parse_expression()?;

        if let Some(token) = parser.peek() {
            return Err(ParseError::TrailingTokens {
                found: token.kind.to_string(),
                offset: token.offset,
            });
        }

        Ok(node)
    }

    fn parse_expression(&mut self) -> Result<Node> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }

        let left = self.parse_primary()?;

        let node = match self.peek().and_then(|t| t.kind.connective()) {
            Some(connective) => {
                self.current += 1;
                let right = self.parse_expression()?;
                Node::operator(connective, vec![left, right])
            }
            None => left,
        };

        self.depth -= 1;
        Ok(node)
    }

    fn parse_primary(&mut self) -> Result<Node> {
        let token = self.advance().ok_or(ParseError::UnexpectedEnd)?;

        match &token.kind {
            TokenKind::LParen => {
                let inner = self.parse_expression()?;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    other => Err(ParseError::ExpectedClosingParen {
                        found: describe(other),
                    }),
                }
            }
            TokenKind::Field(field) => self.parse_operand(field.clone()),
            other => Err(ParseError::UnexpectedToken {
                found: other.to_string(),
                offset: token.offset,
            }),
        }
    }

    /// Parse `COMPARISON VALUE` after an already consumed field
    fn parse_operand(&mut self, field: String) -> Result<Node> {
        let comparator = match self.advance() {
            Some(Token {
                kind: TokenKind::Comparison(c),
                ..
            }) => *c,
            other => {
                return Err(ParseError::ExpectedComparison {
                    field,
                    found: describe(other),
                })
            }
        };

        let value = match self.advance() {
            Some(Token {
                kind: TokenKind::Value(v),
                ..
            }) => v.clone(),
            other => {
                return Err(ParseError::ExpectedValue {
                    field,
                    comparator: comparator.to_string(),
                    found: describe(other),
                })
            }
        };

        Ok(Node::Operand {
            field,
            comparator,
            value,
        })
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }
}

fn describe(token: Option<&Token>) -> String {
    match token {
        Some(token) => token.kind.to_string(),
        None => "end of input".to_string(),
    }
}
