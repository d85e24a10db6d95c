//! Canonical rule text for AST nodes
//!
//! Operand literals are written so the lexer reads them back as the same
//! kind: text is single-quoted and whole floats keep a fractional digit.
//! A connective takes everything to its right, so only operator children
//! before the last one are parenthesized. Printed text re-parses into the
//! same tree shape with no more nesting than the parser produced.
//!
//! Only trees the parser could have produced print as parseable text:
//! `>=`, `<=` and `!=`, negative numbers and text containing `'` have no
//! lexable spelling.

use super::node::Node;
use crate::types::Value;
use std::fmt;

struct Literal<'a>(&'a Value);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{:.1}", v),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand {
                field,
                comparator,
                value,
            } => write!(f, "{} {} {}", field, comparator, Literal(value)),
            Node::Operator {
                connective,
                children,
            } => {
                let last = children.len().saturating_sub(1);
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", connective)?;
                    }
                    if child.is_operand() || i == last {
                        write!(f, "{}", child)?;
                    } else {
                        write!(f, "({})", child)?;
                    }
                }
                Ok(())
            }
        }
    }
}
