//! Comparison operator execution

use crate::error::{EvalError, Result};
use rulekit_core::{Comparator, Value};

/// Compare a record value (left) with a rule literal (right)
///
/// Two numbers compare as `f64` with any comparator. As soon as either side
/// is text, both sides compare as lower-cased strings and only `=` and `!=`
/// are allowed.
pub(crate) fn execute_compare(left: &Value, comparator: Comparator, right: &Value) -> Result<bool> {
    if let (Some(l), Some(r)) = (left.as_f64(), right.as_f64()) {
        return Ok(compare_numbers(l, comparator, r));
    }

    if !comparator.applies_to_text() {
        return Err(EvalError::InvalidStringOperator { comparator });
    }

    let equal = left.to_string().to_lowercase() == right.to_string().to_lowercase();
    Ok(match comparator {
        Comparator::Ne => !equal,
        _ => equal,
    })
}

fn compare_numbers(l: f64, comparator: Comparator, r: f64) -> bool {
    match comparator {
        Comparator::Gt => l > r,
        Comparator::Lt => l < r,
        Comparator::Eq => l == r,
        Comparator::Ge => l >= r,
        Comparator::Le => l <= r,
        Comparator::Ne => l != r,
    }
}
