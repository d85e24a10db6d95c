//! Operators for rulekit expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators used by operand nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Equal (=)
    #[serde(rename = "=")]
    Eq,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Ge,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    Le,
    /// Not equal (!=)
    #[serde(rename = "!=")]
    Ne,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Eq => "=",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
            Comparator::Ne => "!=",
        }
    }

    /// Returns true if this comparator may be applied to text values
    pub fn applies_to_text(&self) -> bool {
        matches!(self, Comparator::Eq | Comparator::Ne)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Boolean connectives joining sub-expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    /// Every child must be true
    And,
    /// At least one child must be true
    Or,
}

impl Connective {
    pub fn keyword(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }

    /// Case-insensitive keyword lookup
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("and") {
            Some(Connective::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Connective::Or)
        } else {
            None
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator_symbols() {
        assert_eq!(Comparator::Gt.to_string(), ">");
        assert_eq!(Comparator::Ge.to_string(), ">=");
        assert_eq!(Comparator::Ne.symbol(), "!=");
    }

    #[test]
    fn test_comparator_applies_to_text() {
        assert!(Comparator::Eq.applies_to_text());
        assert!(Comparator::Ne.applies_to_text());
        assert!(!Comparator::Gt.applies_to_text());
        assert!(!Comparator::Le.applies_to_text());
    }

    #[test]
    fn test_connective_keyword_is_case_insensitive() {
        assert_eq!(Connective::from_keyword("and"), Some(Connective::And));
        assert_eq!(Connective::from_keyword("AnD"), Some(Connective::And));
        assert_eq!(Connective::from_keyword("OR"), Some(Connective::Or));
        assert_eq!(Connective::from_keyword("nor"), None);
    }

    #[test]
    fn test_operator_serde_names() {
        assert_eq!(serde_json::to_string(&Comparator::Ge).unwrap(), "\">=\"");
        assert_eq!(serde_json::to_string(&Connective::Or).unwrap(), "\"OR\"");

        let c: Comparator = serde_json::from_str("\"!=\"").unwrap();
        assert_eq!(c, Comparator::Ne);
        assert!(serde_json::from_str::<Connective>("\"XOR\"").is_err());
    }
}
