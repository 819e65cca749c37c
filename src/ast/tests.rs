//! Unit tests for the AST model and its canonical serializer.

use num_bigint::BigInt;

use super::ast::Expression;
use super::expressions::{
    ArithmeticExpression, ArrayExpression, ComparisonExpression, LogicalExpression,
    ParenthesesExpression,
};
use super::literals::{
    BooleanLiteral, DateLiteral, ExternalConstant, NumberLiteral, NumberValue,
    QualifiedIdentifier, StringLiteral, TimeLiteral,
};
use super::operators::{ArithmeticOp, ComparisonOp, LogicalOp};

fn number(value: i64) -> Expression {
    Expression::NumberLiteral(NumberLiteral {
        value: NumberValue::Integer(value),
    })
}

fn field(path: &str) -> Expression {
    Expression::QualifiedIdentifier(QualifiedIdentifier {
        path: path.to_string(),
    })
}

#[test]
fn test_string_literal_reescapes() {
    let literal = StringLiteral {
        value: "O'Brien".to_string(),
    };
    assert_eq!(literal.to_string(), r"'O\'Brien'");

    let backslash = StringLiteral {
        value: r"a\b".to_string(),
    };
    assert_eq!(backslash.to_string(), r"'a\\b'");
}

#[test]
fn test_number_literal_parse_narrows_safe_integers() {
    let literal = NumberLiteral::parse("42").unwrap();
    assert_eq!(literal.value, NumberValue::Integer(42));
}

#[test]
fn test_number_literal_parse_keeps_big_integers() {
    let literal = NumberLiteral::parse("99999999999999999999").unwrap();
    assert_eq!(
        literal.value,
        NumberValue::BigInt("99999999999999999999".parse::<BigInt>().unwrap())
    );
    assert_eq!(literal.to_string(), "99999999999999999999");
}

#[test]
fn test_number_literal_parse_floats() {
    let literal = NumberLiteral::parse("3.14").unwrap();
    assert_eq!(literal.value, NumberValue::Float(3.14));

    let exponent = NumberLiteral::parse("1e3").unwrap();
    assert_eq!(exponent.value, NumberValue::Float(1000.0));
}

#[test]
fn test_number_literal_rejects_garbage() {
    assert!(NumberLiteral::parse("12.3.4").is_err());
}

#[test]
fn test_infinity_prints_as_keyword() {
    let literal = NumberLiteral {
        value: NumberValue::Float(f64::INFINITY),
    };
    assert_eq!(literal.to_string(), "Infinity");

    let negative = literal.negate();
    assert_eq!(negative.to_string(), "-Infinity");
}

#[test]
fn test_negative_zero_prints_unsigned() {
    let literal = NumberLiteral {
        value: NumberValue::Float(-0.0),
    };
    assert_eq!(literal.to_string(), "0");
}

#[test]
fn test_date_literal_validates_calendar() {
    assert!(DateLiteral::date("2020-01-01").is_ok());
    assert!(DateLiteral::date("2020-13-01").is_err());
    assert!(DateLiteral::date("2021-02-29").is_err());
    assert!(DateLiteral::date("2020-02-29").is_ok());
}

#[test]
fn test_datetime_literal_accepts_iso_forms() {
    assert!(DateLiteral::datetime("2020-01-01T10:30").is_ok());
    assert!(DateLiteral::datetime("2020-01-01T10:30:00").is_ok());
    assert!(DateLiteral::datetime("2020-01-01T10:30:00.250").is_ok());
    assert!(DateLiteral::datetime("2020-01-01T10:30:00Z").is_ok());
    assert!(DateLiteral::datetime("2020-01-01T10:30:00+05:00").is_ok());
    assert!(DateLiteral::datetime("2020-13-01T10:30:00").is_err());
}

#[test]
fn test_time_literal_validates_range() {
    assert!(TimeLiteral::time("10:30").is_ok());
    assert!(TimeLiteral::time("10:30:15.5").is_ok());
    assert!(TimeLiteral::time("25:00").is_err());
}

#[test]
fn test_comparison_prints_spaced() {
    let comparison = ComparisonExpression {
        op: ComparisonOp::Eq,
        left: Box::new(field("a")),
        right: Box::new(number(1)),
    };
    assert_eq!(comparison.to_string(), "a = 1");

    let membership = ComparisonExpression {
        op: ComparisonOp::In,
        left: Box::new(field("a")),
        right: Box::new(Expression::ArrayExpression(ArrayExpression {
            items: vec![number(1), number(2), number(3)],
        })),
    };
    assert_eq!(membership.to_string(), "a in [1,2,3]");
}

#[test]
fn test_logical_joins_items() {
    let logical = LogicalExpression {
        op: LogicalOp::And,
        items: vec![
            Expression::ComparisonExpression(ComparisonExpression {
                op: ComparisonOp::Eq,
                left: Box::new(field("a")),
                right: Box::new(number(1)),
            }),
            Expression::ComparisonExpression(ComparisonExpression {
                op: ComparisonOp::Gt,
                left: Box::new(field("b")),
                right: Box::new(number(2)),
            }),
        ],
    };
    assert_eq!(logical.to_string(), "a = 1 and b > 2");
}

#[test]
fn test_arithmetic_prints_each_items_operator() {
    let mut chain = ArithmeticExpression::new(number(1), ArithmeticOp::Add, number(2));
    chain.add_item(ArithmeticOp::Sub, number(3));
    assert_eq!(chain.to_string(), "1+2-3");
}

#[test]
fn test_nested_multiplicative_chain_prints_inline() {
    let inner = ArithmeticExpression::new(number(2), ArithmeticOp::Mul, number(3));
    let chain = ArithmeticExpression::new(
        number(1),
        ArithmeticOp::Add,
        Expression::ArithmeticExpression(inner),
    );
    assert_eq!(chain.to_string(), "1+2*3");
}

#[test]
fn test_parentheses_reprint() {
    let paren = ParenthesesExpression {
        expression: Box::new(number(1)),
    };
    assert_eq!(paren.to_string(), "(1)");
}

#[test]
fn test_external_constant_quotes_non_identifier_names() {
    let plain = ExternalConstant {
        name: "now".to_string(),
    };
    assert_eq!(plain.to_string(), "@now");

    let quoted = ExternalConstant {
        name: "current user".to_string(),
    };
    assert_eq!(quoted.to_string(), "@'current user'");
}

#[test]
fn test_qualified_identifier_segments() {
    let identifier = QualifiedIdentifier {
        path: "a.b.c".to_string(),
    };
    assert_eq!(identifier.to_string(), "a.b.c");
    assert_eq!(identifier.segments().collect::<Vec<&str>>(), ["a", "b", "c"]);
}

#[test]
fn test_serde_shape_is_type_tagged() {
    let expression = Expression::ComparisonExpression(ComparisonExpression {
        op: ComparisonOp::Eq,
        left: Box::new(field("a")),
        right: Box::new(number(1)),
    });

    let json = serde_json::to_value(&expression).unwrap();
    assert_eq!(json["type"], "ComparisonExpression");
    assert_eq!(json["op"], "=");
    assert_eq!(json["left"]["type"], "QualifiedIdentifier");
    assert_eq!(json["left"]["path"], "a");
    assert_eq!(json["right"]["type"], "NumberLiteral");
    assert_eq!(json["right"]["value"], 1);
}

#[test]
fn test_serde_null_and_boolean_literals() {
    let null = serde_json::to_value(Expression::NullLiteral).unwrap();
    assert_eq!(null["type"], "NullLiteral");

    let boolean = serde_json::to_value(Expression::BooleanLiteral(BooleanLiteral {
        value: true,
    }))
    .unwrap();
    assert_eq!(boolean["type"], "BooleanLiteral");
    assert_eq!(boolean["value"], true);
}
