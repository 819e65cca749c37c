use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{
    ast::Expression,
    operators::{ArithmeticClass, ArithmeticOp, ComparisonOp, LogicalOp},
};

/// Parentheses Expression
/// Keeps explicit grouping so the canonical text reprints it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesesExpression {
    pub expression: Box<Expression>,
}

impl Display for ParenthesesExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.expression)
    }
}

/// Array Expression
/// A non-empty bracketed item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    pub items: Vec<Expression>,
}

impl Display for ArrayExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self
            .items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "[{}]", items)
    }
}

/// One link of an arithmetic chain: the operator that preceded the operand
/// in the source, and the operand itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticItem {
    pub op: ArithmeticOp,
    pub expression: Expression,
}

/// Arithmetic Expression
/// A flattened, non-empty operator chain of one precedence class. The first
/// item carries the class-neutral operator and prints without it; every
/// other item keeps the operator that immediately preceded it in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticExpression {
    pub items: Vec<ArithmeticItem>,
}

impl ArithmeticExpression {
    pub fn new(left: Expression, op: ArithmeticOp, right: Expression) -> ArithmeticExpression {
        ArithmeticExpression {
            items: vec![
                ArithmeticItem {
                    op: op.neutral(),
                    expression: left,
                },
                ArithmeticItem {
                    op,
                    expression: right,
                },
            ],
        }
    }

    pub fn add_item(&mut self, op: ArithmeticOp, expression: Expression) {
        self.items.push(ArithmeticItem { op, expression });
    }

    /// The precedence class shared by every operator in this chain.
    pub fn class(&self) -> ArithmeticClass {
        // The chain is never empty and never mixes classes
        self.items[self.items.len() - 1].op.class()
    }
}

impl Display for ArithmeticExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index == 0 {
                write!(f, "{}", item.expression)?;
            } else {
                write!(f, "{}{}", item.op, item.expression)?;
            }
        }
        Ok(())
    }
}

/// Comparison Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExpression {
    pub op: ComparisonOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl Display for ComparisonExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

/// Logical Expression
/// An n-ary chain of one operator; same-operator sub-chains are flattened
/// into it at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalExpression {
    pub op: LogicalOp,
    pub items: Vec<Expression>,
}

impl LogicalExpression {
    pub fn add_item(&mut self, expression: Expression) {
        self.items.push(expression);
    }
}

impl Display for LogicalExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = format!(" {} ", self.op);
        let items = self
            .items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<String>>()
            .join(&separator);
        write!(f, "{}", items)
    }
}
