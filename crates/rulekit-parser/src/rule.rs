//! Rule text entry points
//!
//! [`parse_rule`] composes the lexer and the parser. The text helpers work
//! on rule text, not on trees: [`combine_expressions`] produces text that is
//! parsed again with [`parse_rule`].

use crate::error::Result;
use crate::expression_parser::ExpressionParser;
use crate::lexer::tokenize;
use rulekit_core::Node;

/// Parse rule text into an AST
pub fn parse_rule(text: &str) -> Result<Node> {
    let tokens = tokenize(text)?;
    log::trace!("Tokenized rule into {} tokens", tokens.len());

    let node = ExpressionParser::parse(&tokens)?;
    log::debug!("Parsed rule: {}", node);
    Ok(node)
}

/// Join rule expressions with `AND`, lower-casing each one.
///
/// The join is purely textual. Because connectives have no precedence, an
/// expression containing a top-level `OR` absorbs everything joined after
/// it: `["a > 1 or b > 2", "c > 3"]` reads as `a > 1 OR (b > 2 AND c > 3)`.
pub fn combine_expressions<S: AsRef<str>>(expressions: &[S]) -> String {
    expressions
        .iter()
        .map(|e| e.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Normalize rule text for storage: lower-case, trim, and collapse runs of
/// whitespace into single spaces
pub fn clean_expression(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
