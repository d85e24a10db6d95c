//! Rule AST nodes

use super::operator::{Comparator, Connective};
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Rule AST node
///
/// Serialized with a `type` tag, e.g.
/// `{"type":"operand","field":"age","operator":">","value":18}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Leaf comparison of one record field against one literal
    Operand {
        field: String,
        #[serde(rename = "operator")]
        comparator: Comparator,
        value: Value,
    },

    /// Boolean connective over child nodes
    ///
    /// The parser always builds exactly two children; directly constructed
    /// trees may hold any number.
    Operator {
        #[serde(rename = "operator")]
        connective: Connective,
        children: Vec<Node>,
    },
}

impl Node {
    /// Create an operand node
    pub fn operand(field: impl Into<String>, comparator: Comparator, value: impl Into<Value>) -> Self {
        Node::Operand {
            field: field.into(),
            comparator,
            value: value.into(),
        }
    }

    /// Create an operator node
    pub fn operator(connective: Connective, children: Vec<Node>) -> Self {
        Node::Operator {
            connective,
            children,
        }
    }

    /// Create a binary AND node
    pub fn and(left: Node, right: Node) -> Self {
        Self::operator(Connective::And, vec![left, right])
    }

    /// Create a binary OR node
    pub fn or(left: Node, right: Node) -> Self {
        Self::operator(Connective::Or, vec![left, right])
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Node::Operand { .. })
    }

    /// Field names referenced by this tree, in left-to-right order
    pub fn fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Operand { field, .. } => out.push(field),
            Node::Operator { children, .. } => {
                for child in children {
                    child.collect_fields(out);
                }
            }
        }
    }
}
