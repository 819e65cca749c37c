//! Parser module for building the filter Abstract Syntax Tree.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a filter AST. It uses a Pratt parser with proper operator precedence and
//! handles:
//!
//! - Literal coercion (numbers, strings, calendar-validated dates/times)
//! - Qualified identifiers and external constants
//! - Parenthesized, array and unary-prefixed terms
//! - Flattening of homogeneous logical and arithmetic operator chains
//! - Diagnostic accumulation and a recursion-depth guard
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
