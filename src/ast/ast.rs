use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{
    expressions::{
        ArithmeticExpression, ArrayExpression, ComparisonExpression, LogicalExpression,
        ParenthesesExpression,
    },
    literals::{
        BooleanLiteral, DateLiteral, ExternalConstant, NumberLiteral, QualifiedIdentifier,
        StringLiteral, TimeLiteral,
    },
};

/// The filter AST node union.
///
/// Nodes are created once (by a parse or a builder call) and never mutated
/// afterwards. The serialized form is internally tagged with `type`, and the
/// `Display` rendering is the canonical filter text: for any tree this crate
/// can produce, parsing the rendering yields an identical rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral,
    DateLiteral(DateLiteral),
    TimeLiteral(TimeLiteral),
    ExternalConstant(ExternalConstant),
    QualifiedIdentifier(QualifiedIdentifier),
    ParenthesesExpression(ParenthesesExpression),
    ArrayExpression(ArrayExpression),
    ArithmeticExpression(ArithmeticExpression),
    ComparisonExpression(ComparisonExpression),
    LogicalExpression(LogicalExpression),
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::StringLiteral(node) => node.fmt(f),
            Expression::NumberLiteral(node) => node.fmt(f),
            Expression::BooleanLiteral(node) => node.fmt(f),
            Expression::NullLiteral => write!(f, "null"),
            Expression::DateLiteral(node) => node.fmt(f),
            Expression::TimeLiteral(node) => node.fmt(f),
            Expression::ExternalConstant(node) => node.fmt(f),
            Expression::QualifiedIdentifier(node) => node.fmt(f),
            Expression::ParenthesesExpression(node) => node.fmt(f),
            Expression::ArrayExpression(node) => node.fmt(f),
            Expression::ArithmeticExpression(node) => node.fmt(f),
            Expression::ComparisonExpression(node) => node.fmt(f),
            Expression::LogicalExpression(node) => node.fmt(f),
        }
    }
}

impl From<StringLiteral> for Expression {
    fn from(node: StringLiteral) -> Self {
        Expression::StringLiteral(node)
    }
}

impl From<NumberLiteral> for Expression {
    fn from(node: NumberLiteral) -> Self {
        Expression::NumberLiteral(node)
    }
}

impl From<BooleanLiteral> for Expression {
    fn from(node: BooleanLiteral) -> Self {
        Expression::BooleanLiteral(node)
    }
}

impl From<DateLiteral> for Expression {
    fn from(node: DateLiteral) -> Self {
        Expression::DateLiteral(node)
    }
}

impl From<TimeLiteral> for Expression {
    fn from(node: TimeLiteral) -> Self {
        Expression::TimeLiteral(node)
    }
}

impl From<ExternalConstant> for Expression {
    fn from(node: ExternalConstant) -> Self {
        Expression::ExternalConstant(node)
    }
}

impl From<QualifiedIdentifier> for Expression {
    fn from(node: QualifiedIdentifier) -> Self {
        Expression::QualifiedIdentifier(node)
    }
}

impl From<ParenthesesExpression> for Expression {
    fn from(node: ParenthesesExpression) -> Self {
        Expression::ParenthesesExpression(node)
    }
}

impl From<ArrayExpression> for Expression {
    fn from(node: ArrayExpression) -> Self {
        Expression::ArrayExpression(node)
    }
}

impl From<ArithmeticExpression> for Expression {
    fn from(node: ArithmeticExpression) -> Self {
        Expression::ArithmeticExpression(node)
    }
}

impl From<ComparisonExpression> for Expression {
    fn from(node: ComparisonExpression) -> Self {
        Expression::ComparisonExpression(node)
    }
}

impl From<LogicalExpression> for Expression {
    fn from(node: LogicalExpression) -> Self {
        Expression::LogicalExpression(node)
    }
}
