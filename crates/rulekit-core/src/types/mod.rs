//! Type system for rulekit
//!
//! - Value types shared by literals and record data
//! - Data records

pub mod record;
pub mod value;

pub use record::{record_from_json, Record};
pub use value::Value;
