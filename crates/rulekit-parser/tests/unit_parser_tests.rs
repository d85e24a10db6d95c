//! Unit tests for the rule text parser
//!
//! Covers the public entry points: tokenization, parsing, and the rule text
//! helpers.

use rulekit_core::{Comparator, Connective, Node, Value};
use rulekit_parser::*;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_field_names_are_case_insensitive() {
    let upper = parse_rule("Age > 18").unwrap();
    let lower = parse_rule("age > 18").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_text_literal_keeps_case() {
    let node = parse_rule("Status = 'Active'").unwrap();
    assert_eq!(node, Node::operand("status", Comparator::Eq, "Active"));
}

#[test]
fn test_grouping_is_never_flattened() {
    let node = parse_rule("a > 1 and (b > 2 or c > 3)").unwrap();

    let Node::Operator {
        connective,
        children,
    } = node
    else {
        panic!("Expected operator");
    };
    assert_eq!(connective, Connective::And);
    assert_eq!(children.len(), 2);
    assert!(children[0].is_operand());
    assert!(matches!(
        &children[1],
        Node::Operator {
            connective: Connective::Or,
            children,
        } if children.len() == 2
    ));
}

#[test]
fn test_every_operator_node_is_binary() {
    fn check(node: &Node) {
        if let Node::Operator { children, .. } = node {
            assert_eq!(children.len(), 2);
            children.iter().for_each(check);
        }
    }

    let node = parse_rule("a = 1 or b = 2 or c = 3 and (d = 4 or e = 5) and f = 6").unwrap();
    check(&node);
    assert_eq!(node.fields(), vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn test_malformed_numeral_becomes_text() {
    let node = parse_rule("version = 1.2.3").unwrap();
    assert_eq!(
        node,
        Node::operand("version", Comparator::Eq, Value::Text("1.2.3".to_string()))
    );
}

#[test]
fn test_keyword_cannot_be_a_field() {
    let err = parse_rule("and = 1").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn test_malformed_double_operator() {
    let err = parse_rule("age >> 18").unwrap_err();
    assert!(matches!(err, ParseError::ExpectedValue { .. }));
}

#[test]
fn test_multi_char_operators_are_not_parseable() {
    for text in ["age >= 18", "age <= 18"] {
        assert!(parse_rule(text).is_err(), "{} should not parse", text);
    }
    assert!(matches!(
        parse_rule("age != 18").unwrap_err(),
        ParseError::Lex(LexError::UnexpectedCharacter { ch: '!', .. })
    ));
}

// =============================================================================
// Canonical text
// =============================================================================

#[test]
fn test_formatted_tree_reparses_to_same_shape() {
    let trees = vec![
        Node::operand("age", Comparator::Gt, 18),
        Node::operand("price", Comparator::Eq, 19.99),
        Node::operand("limit", Comparator::Lt, 20.0),
        Node::and(
            Node::or(
                Node::operand("age", Comparator::Gt, 18),
                Node::operand("veteran", Comparator::Eq, "true"),
            ),
            Node::operand("country", Comparator::Eq, "us"),
        ),
        Node::or(
            Node::and(
                Node::operand("a", Comparator::Lt, 1),
                Node::operand("b", Comparator::Gt, 2),
            ),
            Node::and(
                Node::operand("c", Comparator::Eq, "x y"),
                Node::operand("d", Comparator::Eq, 0),
            ),
        ),
    ];

    for tree in trees {
        let text = tree.to_string();
        let reparsed = parse_rule(&text).unwrap_or_else(|e| panic!("{}: {}", text, e));
        assert_eq!(reparsed, tree, "round trip through '{}'", text);
    }
}

#[test]
fn test_long_chain_reparses_after_formatting() {
    let text = vec!["a > 1"; 300].join(" and ");
    let node = parse_rule(&text).unwrap();

    let printed = node.to_string();
    assert!(!printed.contains('('));
    assert_eq!(parse_rule(&printed).unwrap(), node);
}

#[test]
fn test_chained_groups_reparse_after_formatting() {
    let text = vec!["(a > 1 or b < 2)"; 200].join(" and ");
    let node = parse_rule(&text).unwrap();
    assert_eq!(parse_rule(&node.to_string()).unwrap(), node);
}

// =============================================================================
// Text helpers
// =============================================================================

#[test]
fn test_cleaned_expression_parses_identically() {
    let raw = "  AGE  >  18   AND\tCountry = 'US' ";
    let cleaned = clean_expression(raw);
    assert_eq!(cleaned, "age > 18 and country = 'us'");

    let a = parse_rule(raw).unwrap();
    let b = parse_rule(&cleaned).unwrap();
    assert_eq!(a.fields(), b.fields());
}

#[test]
fn test_combine_then_parse() {
    let combined = combine_expressions(&["age > 18", "country = 'US'", "score > 700"]);
    assert_eq!(combined, "age > 18 AND country = 'us' AND score > 700");

    let node = parse_rule(&combined).unwrap();
    assert_eq!(
        node,
        Node::and(
            Node::operand("age", Comparator::Gt, 18),
            Node::and(
                Node::operand("country", Comparator::Eq, "us"),
                Node::operand("score", Comparator::Gt, 700),
            ),
        )
    );
}
