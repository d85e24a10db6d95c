//! Tree-walking rule evaluator

use crate::error::{EvalError, Result};
use crate::operators::execute_compare;
use rulekit_core::{Connective, Node, Record};

/// Evaluate a rule tree against a data record
///
/// Every child of an operator node is evaluated before the connective is
/// applied, so a missing field or an invalid comparison anywhere in the
/// tree is reported even when the verdict would already be known.
pub fn evaluate_rule(node: &Node, record: &Record) -> Result<bool> {
    match node {
        Node::Operator {
            connective,
            children,
        } => {
            let results = children
                .iter()
                .map(|child| evaluate_rule(child, record))
                .collect::<Result<Vec<bool>>>()?;

            let verdict = match connective {
                Connective::And => results.iter().all(|r| *r),
                Connective::Or => results.iter().any(|r| *r),
            };
            tracing::trace!(%connective, ?results, verdict, "Evaluated operator");
            Ok(verdict)
        }
        Node::Operand {
            field,
            comparator,
            value,
        } => {
            let actual = record.get(field).ok_or_else(|| {
                tracing::debug!(field = %field, "Field missing from record");
                EvalError::FieldNotFound(field.clone())
            })?;

            let verdict = execute_compare(actual, *comparator, value)?;
            tracing::trace!(
                field = %field,
                %comparator,
                expected = %value,
                actual = %actual,
                verdict,
                "Evaluated operand"
            );
            Ok(verdict)
        }
    }
}
