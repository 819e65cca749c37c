use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "!in")]
    NotIn,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "!like")]
    NotLike,
    #[serde(rename = "ilike")]
    ILike,
    #[serde(rename = "!ilike")]
    NotILike,
}

impl Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::In => "in",
            ComparisonOp::NotIn => "!in",
            ComparisonOp::Like => "like",
            ComparisonOp::NotLike => "!like",
            ComparisonOp::ILike => "ilike",
            ComparisonOp::NotILike => "!ilike",
        };
        write!(f, "{}", text)
    }
}

/// N-ary logical chain operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    #[serde(rename = "and")]
    And,
    #[serde(rename = "or")]
    Or,
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalOp::And => write!(f, "and"),
            LogicalOp::Or => write!(f, "or"),
        }
    }
}

/// The two precedence classes of arithmetic operators. A chain only ever
/// holds operators of one class; the tighter class nests as a sub-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticClass {
    Additive,
    Multiplicative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl ArithmeticOp {
    pub fn class(&self) -> ArithmeticClass {
        match self {
            ArithmeticOp::Add | ArithmeticOp::Sub => ArithmeticClass::Additive,
            ArithmeticOp::Mul | ArithmeticOp::Div => ArithmeticClass::Multiplicative,
        }
    }

    /// The operator carried by the first item of a chain of this class.
    /// It is never printed and never changes the chain's meaning.
    pub fn neutral(&self) -> ArithmeticOp {
        match self.class() {
            ArithmeticClass::Additive => ArithmeticOp::Add,
            ArithmeticClass::Multiplicative => ArithmeticOp::Mul,
        }
    }
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
            ArithmeticOp::Div => "/",
        };
        write!(f, "{}", text)
    }
}
