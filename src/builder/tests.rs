//! Unit tests for the fluent builder.

use num_bigint::BigInt;

use crate::errors::errors::{ErrorKind, FilterError};
use crate::lexer::lexer::tokenize;
use crate::parser::parser::parse;

use super::builder::{
    and, array, date, datetime, eq, external, field, gt, ilike, is_in, like, lt, math, ne, not_in,
    null, number, or, paren, time,
};

fn parse_source(source: &str) -> crate::ast::ast::Expression {
    let (tokens, diagnostics) = tokenize(source);
    match parse(tokens, diagnostics) {
        Ok(expression) => expression,
        Err(error) => panic!("parse of {:?} failed: {}", source, error),
    }
}

#[test]
fn test_comparison_builders_render() {
    assert_eq!(eq("name", "John").to_string(), "name = 'John'");
    assert_eq!(ne("a", 1).to_string(), "a != 1");
    assert_eq!(gt("a", 1.5).to_string(), "a > 1.5");
    assert_eq!(lt("a", false).to_string(), "a < false");
    assert_eq!(like("name", "Jo%").to_string(), "name like 'Jo%'");
    assert_eq!(ilike("name", "jo%").to_string(), "name ilike 'jo%'");
}

#[test]
fn test_left_operand_is_a_field_not_a_string() {
    let expression = eq("address.city", "Oslo");
    assert_eq!(expression.to_string(), "address.city = 'Oslo'");
}

#[test]
fn test_membership_builders() {
    assert_eq!(is_in("a", vec![1, 2, 3]).to_string(), "a in [1,2,3]");
    assert_eq!(not_in("a", vec!["x", "y"]).to_string(), "a !in ['x','y']");
}

#[test]
fn test_logical_builders_flatten() {
    let inner = and(vec![eq("a", 1), eq("b", 2)]).unwrap();
    let outer = and(vec![inner, eq("c", 3)]).unwrap();
    assert_eq!(outer.to_string(), "a = 1 and b = 2 and c = 3");

    let mixed = or(vec![eq("a", 1), and(vec![eq("b", 2), eq("c", 3)]).unwrap()]).unwrap();
    assert_eq!(mixed.to_string(), "a = 1 or b = 2 and c = 3");
}

#[test]
fn test_single_operand_logical_unwraps() {
    let expression = and(vec![eq("a", 1)]).unwrap();
    assert_eq!(expression.to_string(), "a = 1");
}

#[test]
fn test_empty_operand_lists_are_rejected() {
    let error = and(vec![]).unwrap_err();
    match error {
        FilterError::Builder(kind) => {
            assert_eq!(kind, ErrorKind::EmptyOperandList { function: "and" });
        }
        other => panic!("expected builder error, got {:?}", other),
    }

    assert!(or(vec![]).is_err());
    assert!(array(vec![]).is_err());
}

#[test]
fn test_temporal_builders_validate() {
    assert_eq!(date("2020-01-01").unwrap().to_string(), "'2020-01-01'");
    assert!(date("2020-13-01").is_err());
    assert!(datetime("2020-01-01T10:30").is_ok());
    assert!(time("25:00").is_err());
}

#[test]
fn test_number_builder_keeps_precision() {
    let big = number("99999999999999999999").unwrap();
    assert_eq!(big.to_string(), "99999999999999999999");
    assert!(number("not a number").is_err());
}

#[test]
fn test_bigint_converts_directly() {
    let value: BigInt = "123456789012345678901234567890".parse().unwrap();
    let expression = eq("a", value);
    assert_eq!(expression.to_string(), "a = 123456789012345678901234567890");
}

#[test]
fn test_math_builder_groups_like_the_parser() {
    assert_eq!(math(1).add(2).mul(3).build().to_string(), "1+2*3");
    assert_eq!(math(1).mul(2).add(3).build().to_string(), "1*2+3");
    assert_eq!(math(1).add(2).mul(3).div(4).sub(5).build().to_string(), "1+2*3/4-5");

    let built = math(field("price")).mul(field("quantity")).build();
    let parsed = parse_source("price*quantity");
    assert_eq!(built, parsed);
}

#[test]
fn test_paren_survives_rendering() {
    let expression = math(paren(math(1).add(2))).mul(3).build();
    assert_eq!(expression.to_string(), "(1+2)*3");
}

#[test]
fn test_builder_output_matches_parser_output() {
    let built = and(vec![
        eq("name", "John"),
        gt("age", 21),
        is_in("city", vec!["Oslo", "Bergen"]),
        lt(field("created"), external("now")),
    ])
    .unwrap();

    let parsed = parse_source("name = 'John' and age > 21 and city in ['Oslo','Bergen'] and created < @now");
    assert_eq!(built, parsed);
    assert_eq!(built.to_string(), parsed.to_string());
}

#[test]
fn test_null_literal() {
    assert_eq!(eq("a", null()).to_string(), "a = null");
}
