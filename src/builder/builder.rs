use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;

use crate::ast::ast::Expression;
use crate::ast::expressions::{
    ArithmeticExpression, ArrayExpression, ComparisonExpression, LogicalExpression,
    ParenthesesExpression,
};
use crate::ast::literals::{
    BooleanLiteral, DateLiteral, ExternalConstant, NumberLiteral, NumberValue, QualifiedIdentifier,
    StringLiteral, TimeLiteral,
};
use crate::ast::operators::{ArithmeticClass, ArithmeticOp, ComparisonOp, LogicalOp};
use crate::errors::errors::{Diagnostic, ErrorKind, FilterError};
use crate::Position;

/// Left operands of a comparison. Plain strings become field paths here, not
/// string literals; pass an `Expression` for anything else.
pub trait IntoField {
    fn into_field(self) -> Expression;
}

impl IntoField for &str {
    fn into_field(self) -> Expression {
        QualifiedIdentifier {
            path: self.to_string(),
        }
        .into()
    }
}

impl IntoField for String {
    fn into_field(self) -> Expression {
        QualifiedIdentifier { path: self }.into()
    }
}

impl IntoField for Expression {
    fn into_field(self) -> Expression {
        self
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        BooleanLiteral { value }.into()
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        NumberLiteral {
            value: NumberValue::Integer(value as i64),
        }
        .into()
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        NumberLiteral {
            value: NumberValue::Integer(value),
        }
        .into()
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        NumberLiteral {
            value: NumberValue::Float(value),
        }
        .into()
    }
}

impl From<BigInt> for Expression {
    fn from(value: BigInt) -> Self {
        NumberLiteral {
            value: NumberValue::BigInt(value),
        }
        .into()
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        StringLiteral {
            value: value.to_string(),
        }
        .into()
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        StringLiteral { value }.into()
    }
}

impl From<NaiveDate> for Expression {
    fn from(value: NaiveDate) -> Self {
        DateLiteral {
            value: value.format("%Y-%m-%d").to_string(),
        }
        .into()
    }
}

impl From<NaiveDateTime> for Expression {
    fn from(value: NaiveDateTime) -> Self {
        DateLiteral {
            value: value.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
        .into()
    }
}

impl From<NaiveTime> for Expression {
    fn from(value: NaiveTime) -> Self {
        TimeLiteral {
            value: value.format("%H:%M:%S%.f").to_string(),
        }
        .into()
    }
}

impl<T: Into<Expression>> From<Vec<T>> for Expression {
    fn from(items: Vec<T>) -> Self {
        ArrayExpression {
            items: items.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

fn comparison(op: ComparisonOp, left: Expression, right: Expression) -> Expression {
    ComparisonExpression {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
    .into()
}

pub fn eq(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::Eq, left.into_field(), right.into())
}

pub fn ne(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::Ne, left.into_field(), right.into())
}

pub fn gt(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::Gt, left.into_field(), right.into())
}

pub fn gte(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::Gte, left.into_field(), right.into())
}

pub fn lt(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::Lt, left.into_field(), right.into())
}

pub fn lte(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::Lte, left.into_field(), right.into())
}

pub fn is_in(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::In, left.into_field(), right.into())
}

pub fn not_in(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::NotIn, left.into_field(), right.into())
}

pub fn like(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::Like, left.into_field(), right.into())
}

pub fn not_like(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::NotLike, left.into_field(), right.into())
}

pub fn ilike(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::ILike, left.into_field(), right.into())
}

pub fn not_ilike(left: impl IntoField, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOp::NotILike, left.into_field(), right.into())
}

fn logical(
    op: LogicalOp,
    function: &'static str,
    operands: Vec<Expression>,
) -> Result<Expression, FilterError> {
    if operands.is_empty() {
        return Err(FilterError::Builder(ErrorKind::EmptyOperandList {
            function,
        }));
    }
    if operands.len() == 1 {
        let mut operands = operands;
        return Ok(operands.remove(0));
    }

    // Same flattening the parser performs on homogeneous chains
    let mut items = Vec::with_capacity(operands.len());
    for operand in operands {
        match operand {
            Expression::LogicalExpression(chain) if chain.op == op => items.extend(chain.items),
            operand => items.push(operand),
        }
    }

    Ok(LogicalExpression { op, items }.into())
}

pub fn and(operands: Vec<Expression>) -> Result<Expression, FilterError> {
    logical(LogicalOp::And, "and", operands)
}

pub fn or(operands: Vec<Expression>) -> Result<Expression, FilterError> {
    logical(LogicalOp::Or, "or", operands)
}

/// A non-empty bracketed list.
pub fn array(items: Vec<Expression>) -> Result<Expression, FilterError> {
    if items.is_empty() {
        return Err(FilterError::Builder(ErrorKind::EmptyOperandList {
            function: "array",
        }));
    }
    Ok(ArrayExpression { items }.into())
}

/// A dotted field path, kept as written.
pub fn field(path: &str) -> Expression {
    QualifiedIdentifier {
        path: path.to_string(),
    }
    .into()
}

pub fn null() -> Expression {
    Expression::NullLiteral
}

/// An `@name` placeholder resolved by the filter's consumer.
pub fn external(name: &str) -> Expression {
    ExternalConstant {
        name: name.to_string(),
    }
    .into()
}

/// Explicit grouping; the parentheses survive into the canonical text.
pub fn paren(expression: impl Into<Expression>) -> Expression {
    ParenthesesExpression {
        expression: Box::new(expression.into()),
    }
    .into()
}

fn validation(kind: ErrorKind) -> FilterError {
    FilterError::Validation(Diagnostic::new(kind, Position::null()))
}

/// A calendar-validated `'YYYY-MM-DD'` literal from text.
pub fn date(text: &str) -> Result<Expression, FilterError> {
    let literal = DateLiteral::date(text).map_err(validation)?;
    Ok(literal.into())
}

/// A calendar-validated ISO datetime literal from text.
pub fn datetime(text: &str) -> Result<Expression, FilterError> {
    let literal = DateLiteral::datetime(text).map_err(validation)?;
    Ok(literal.into())
}

/// A validated `'HH:MM[:SS[.fff]]'` literal from text.
pub fn time(text: &str) -> Result<Expression, FilterError> {
    let literal = TimeLiteral::time(text).map_err(validation)?;
    Ok(literal.into())
}

/// A number literal from text, with the same narrowing rules as the parser:
/// integers outside the i64 range stay arbitrary-precision.
pub fn number(text: &str) -> Result<Expression, FilterError> {
    let literal = NumberLiteral::parse(text).map_err(validation)?;
    Ok(literal.into())
}

/// Extends an arithmetic expression exactly the way the parser would: `*`
/// and `/` bind tighter than `+` and `-`, so a multiplicative operator
/// grafts onto the last operand of an additive chain instead of wrapping
/// the whole chain.
fn apply(left: Expression, op: ArithmeticOp, right: Expression) -> Expression {
    match left {
        Expression::ArithmeticExpression(mut chain) if chain.class() == op.class() => {
            chain.add_item(op, right);
            chain.into()
        }
        Expression::ArithmeticExpression(mut chain)
            if op.class() == ArithmeticClass::Multiplicative =>
        {
            match chain.items.pop() {
                Some(mut last) => {
                    last.expression = apply(last.expression, op, right);
                    chain.items.push(last);
                    chain.into()
                }
                None => ArithmeticExpression::new(chain.into(), op, right).into(),
            }
        }
        left => ArithmeticExpression::new(left, op, right).into(),
    }
}

/// Fluent arithmetic chains: `math(1).add(2).mul(3)` is `1+2*3`.
pub struct MathBuilder {
    expression: Expression,
}

pub fn math(first: impl Into<Expression>) -> MathBuilder {
    MathBuilder {
        expression: first.into(),
    }
}

impl MathBuilder {
    pub fn add(self, operand: impl Into<Expression>) -> MathBuilder {
        MathBuilder {
            expression: apply(self.expression, ArithmeticOp::Add, operand.into()),
        }
    }

    pub fn sub(self, operand: impl Into<Expression>) -> MathBuilder {
        MathBuilder {
            expression: apply(self.expression, ArithmeticOp::Sub, operand.into()),
        }
    }

    pub fn mul(self, operand: impl Into<Expression>) -> MathBuilder {
        MathBuilder {
            expression: apply(self.expression, ArithmeticOp::Mul, operand.into()),
        }
    }

    pub fn div(self, operand: impl Into<Expression>) -> MathBuilder {
        MathBuilder {
            expression: apply(self.expression, ArithmeticOp::Div, operand.into()),
        }
    }

    pub fn build(self) -> Expression {
        self.expression
    }
}

impl From<MathBuilder> for Expression {
    fn from(builder: MathBuilder) -> Self {
        builder.expression
    }
}
