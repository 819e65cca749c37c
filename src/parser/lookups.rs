use std::collections::HashMap;

use crate::ast::ast::Expression;
use crate::errors::errors::Diagnostic;
use crate::lexer::tokens::TokenKind;
use crate::parser::expr::{
    parse_arithmetic_expr, parse_array_expr, parse_comparison_expr, parse_external_constant,
    parse_grouping_expr, parse_logical_expr, parse_polarity_expr, parse_primary_expr,
};
use crate::parser::parser::Parser;

/// Operator precedence, weakest binding first. The parse loop only consumes
/// an operator whose power is strictly greater than the level it was entered
/// with, which makes every level left-associative.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Or,
    And,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Diagnostic>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, Diagnostic>;

pub type BPLookup = HashMap<TokenKind, BindingPower>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.led(TokenKind::Or, BindingPower::Or, parse_logical_expr);
    parser.led(TokenKind::And, BindingPower::And, parse_logical_expr);

    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::Less, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::In, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::NotIn, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::Like, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::NotLike, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::ILike, BindingPower::Relational, parse_comparison_expr);
    parser.led(TokenKind::NotILike, BindingPower::Relational, parse_comparison_expr);

    // Arithmetic
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_arithmetic_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_arithmetic_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_arithmetic_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_arithmetic_expr);

    // Literals & symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Date, parse_primary_expr);
    parser.nud(TokenKind::DateTime, parse_primary_expr);
    parser.nud(TokenKind::Time, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Null, parse_primary_expr);
    parser.nud(TokenKind::Infinity, parse_primary_expr);
    parser.nud(TokenKind::At, parse_external_constant);

    // Unary/Prefix
    parser.nud(TokenKind::Plus, parse_polarity_expr);
    parser.nud(TokenKind::Dash, parse_polarity_expr);

    // Grouping
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::OpenBracket, parse_array_expr);
}
