//! rulekit Runtime - evaluates rule trees against data records
//!
//! Evaluation is pure: a [`rulekit_core::Node`] is only read, never changed,
//! so one parsed rule can be evaluated any number of times, from any number
//! of threads, against different records.

pub mod error;
pub mod evaluator;
mod operators;

pub use error::{EvalError, Result};
pub use evaluator::evaluate_rule;
