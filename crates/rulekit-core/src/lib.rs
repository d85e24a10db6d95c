//! rulekit Core - Core types and definitions for the rulekit expression engine
//!
//! This crate provides the fundamental types shared by the parser, the
//! evaluator and the service layer:
//! - Value types for literals and record data
//! - AST (Abstract Syntax Tree) definitions
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{Comparator, Connective, Node};
pub use error::CoreError;
pub use types::{Record, Value};
