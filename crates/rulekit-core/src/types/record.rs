//! Data records evaluated against rules

use super::value::{json_kind, Value};
use crate::error::{CoreError, Result};
use std::collections::HashMap;

/// Field name to value mapping supplied per evaluation
pub type Record = HashMap<String, Value>;

/// Build a record from an untyped JSON object.
///
/// Every entry must be a string or a number; anything else is rejected with
/// the name of the offending field.
pub fn record_from_json<I>(entries: I) -> Result<Record>
where
    I: IntoIterator<Item = (String, serde_json::Value)>,
{
    entries
        .into_iter()
        .map(|(field, json)| {
            let kind = json_kind(&json);
            match Value::try_from(json) {
                Ok(value) => Ok((field, value)),
                Err(_) => Err(CoreError::UnsupportedValue { field, kind }),
            }
        })
        .collect()
}
