//! Abstract Syntax Tree (AST) definitions for rulekit
//!
//! This module contains:
//! - Rule nodes (comparisons and connectives)
//! - Comparison and connective operators
//! - The canonical text formatter

mod format;
pub mod node;
pub mod operator;

pub use node::Node;
pub use operator::{Comparator, Connective};
