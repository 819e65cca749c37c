//! Unit tests for the parser.

use crate::ast::ast::Expression;
use crate::ast::operators::{ComparisonOp, LogicalOp};
use crate::errors::errors::{ErrorKind, FilterError};
use crate::lexer::lexer::tokenize;
use crate::parser::parser::parse;

fn parse_source(source: &str) -> Result<Expression, FilterError> {
    let (tokens, diagnostics) = tokenize(source);
    parse(tokens, diagnostics)
}

fn parse_ok(source: &str) -> Expression {
    match parse_source(source) {
        Ok(expression) => expression,
        Err(error) => panic!("parse of {:?} failed: {}", source, error),
    }
}

#[test]
fn test_parses_comparison() {
    let expression = parse_ok("name = 'John'");
    match &expression {
        Expression::ComparisonExpression(comparison) => {
            assert_eq!(comparison.op, ComparisonOp::Eq);
        }
        other => panic!("expected comparison, got {:?}", other),
    }
    assert_eq!(expression.to_string(), "name = 'John'");
}

#[test]
fn test_parses_every_comparison_operator() {
    let cases = [
        ("a = 1", ComparisonOp::Eq),
        ("a != 1", ComparisonOp::Ne),
        ("a < 1", ComparisonOp::Lt),
        ("a <= 1", ComparisonOp::Lte),
        ("a > 1", ComparisonOp::Gt),
        ("a >= 1", ComparisonOp::Gte),
        ("a in [1]", ComparisonOp::In),
        ("a !in [1]", ComparisonOp::NotIn),
        ("a like 'x%'", ComparisonOp::Like),
        ("a !like 'x%'", ComparisonOp::NotLike),
        ("a ilike 'x%'", ComparisonOp::ILike),
        ("a !ilike 'x%'", ComparisonOp::NotILike),
    ];

    for (source, op) in cases {
        match parse_ok(source) {
            Expression::ComparisonExpression(comparison) => assert_eq!(comparison.op, op),
            other => panic!("expected comparison for {:?}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_and_binds_tighter_than_or() {
    let expression = parse_ok("a = 1 or b = 2 and c = 3");
    match &expression {
        Expression::LogicalExpression(logical) => {
            assert_eq!(logical.op, LogicalOp::Or);
            assert_eq!(logical.items.len(), 2);
            match &logical.items[1] {
                Expression::LogicalExpression(inner) => {
                    assert_eq!(inner.op, LogicalOp::And);
                    assert_eq!(inner.items.len(), 2);
                }
                other => panic!("expected and-chain, got {:?}", other),
            }
        }
        other => panic!("expected or-chain, got {:?}", other),
    }
}

#[test]
fn test_same_operator_logical_chain_flattens() {
    let expression = parse_ok("a = 1 and b = 2 and c = 3 and d = 4");
    match &expression {
        Expression::LogicalExpression(logical) => {
            assert_eq!(logical.op, LogicalOp::And);
            assert_eq!(logical.items.len(), 4);
        }
        other => panic!("expected and-chain, got {:?}", other),
    }
    assert_eq!(expression.to_string(), "a = 1 and b = 2 and c = 3 and d = 4");
}

#[test]
fn test_arithmetic_chain_keeps_preceding_operators() {
    let expression = parse_ok("1 + 2 - 3 + 4");
    match &expression {
        Expression::ArithmeticExpression(chain) => {
            assert_eq!(chain.items.len(), 4);
        }
        other => panic!("expected arithmetic chain, got {:?}", other),
    }
    assert_eq!(expression.to_string(), "1+2-3+4");
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let expression = parse_ok("1 + 2 * 3");
    match &expression {
        Expression::ArithmeticExpression(chain) => {
            assert_eq!(chain.items.len(), 2);
            match &chain.items[1].expression {
                Expression::ArithmeticExpression(inner) => assert_eq!(inner.items.len(), 2),
                other => panic!("expected nested chain, got {:?}", other),
            }
        }
        other => panic!("expected arithmetic chain, got {:?}", other),
    }
    assert_eq!(expression.to_string(), "1+2*3");

    let leading = parse_ok("4 + 2 * 3");
    assert_eq!(leading.to_string(), "4+2*3");
    match leading {
        Expression::ArithmeticExpression(chain) => {
            assert_eq!(chain.items.len(), 2);
            assert_eq!(chain.items[0].expression.to_string(), "4");
        }
        other => panic!("expected arithmetic chain, got {:?}", other),
    }
}

#[test]
fn test_parentheses_are_kept() {
    let expression = parse_ok("(1 + 2) * 3");
    assert_eq!(expression.to_string(), "(1+2)*3");
}

#[test]
fn test_unary_minus_folds_into_number() {
    let expression = parse_ok("a = -5");
    match expression {
        Expression::ComparisonExpression(comparison) => {
            assert_eq!(comparison.right.to_string(), "-5");
        }
        other => panic!("expected comparison, got {:?}", other),
    }
}

#[test]
fn test_polarity_on_non_number_is_an_error() {
    let error = parse_source("a = -'text'").unwrap_err();
    match error {
        FilterError::Parse(diagnostics) => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].get_kind(), &ErrorKind::PolarityOnNonNumber);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_qualified_identifier_path() {
    let expression = parse_ok("address.city = 'Oslo'");
    match expression {
        Expression::ComparisonExpression(comparison) => {
            assert_eq!(comparison.left.to_string(), "address.city");
        }
        other => panic!("expected comparison, got {:?}", other),
    }
}

#[test]
fn test_external_constant_forms() {
    assert_eq!(parse_ok("created <= @now").to_string(), "created <= @now");
    assert_eq!(
        parse_ok("owner = @'current user'").to_string(),
        "owner = @'current user'"
    );
}

#[test]
fn test_empty_array_is_rejected() {
    let error = parse_source("a in []").unwrap_err();
    match error {
        FilterError::Parse(diagnostics) => {
            assert_eq!(diagnostics[0].get_kind(), &ErrorKind::EmptyArray);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_missing_operand_reports_position() {
    let error = parse_source("a = ").unwrap_err();
    match error {
        FilterError::Parse(diagnostics) => {
            assert_eq!(diagnostics.len(), 1);
            let position = diagnostics[0].get_position();
            assert_eq!(position.line, 1);
            assert_eq!(position.column, 4);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_trailing_tokens_are_an_error() {
    let error = parse_source("a = 1 b").unwrap_err();
    match error {
        FilterError::Parse(diagnostics) => {
            assert_eq!(
                diagnostics[0].get_kind(),
                &ErrorKind::UnexpectedToken {
                    token: "b".to_string()
                }
            );
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_lexer_diagnostics_aggregate_with_parser_diagnostics() {
    let error = parse_source("a = # and b = ยง").unwrap_err();
    match error {
        FilterError::Parse(diagnostics) => {
            assert!(diagnostics.len() >= 2);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_date_is_a_validation_error() {
    let error = parse_source("born = '2020-13-01'").unwrap_err();
    match error {
        FilterError::Validation(diagnostic) => {
            assert!(diagnostic.get_kind().is_validation());
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_nesting_depth_is_bounded() {
    let source = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    let error = parse_source(&source).unwrap_err();
    match error {
        FilterError::Parse(diagnostics) => {
            assert!(matches!(
                diagnostics[0].get_kind(),
                ErrorKind::NestingTooDeep { .. }
            ));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_date_units_are_reserved() {
    assert!(parse_source("a = year").is_err());
}

#[test]
fn test_round_trip_is_stable() {
    let sources = [
        "a = 1 and b > 2",
        "price * quantity >= 100 or discounted = true",
        "name like 'Jo%' and age !in [1,2,3]",
        "(a = 1 or b = 2) and c = 3",
        "start >= '2020-01-01T10:30' and finish < '18:00'",
    ];

    for source in sources {
        let first = parse_ok(source).to_string();
        let second = parse_ok(&first).to_string();
        assert_eq!(first, second, "unstable rendering for {:?}", source);
    }
}

#[test]
fn test_negative_zero_round_trips() {
    let first = parse_ok("a = -0.0").to_string();
    assert_eq!(first, "a = 0");

    let second = parse_ok(&first).to_string();
    assert_eq!(first, second);
}
