#![allow(clippy::module_inception)]

use crate::ast::ast::Expression;
use crate::errors::errors::{Diagnostic, FilterError};

pub mod ast;
pub mod builder;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the filter text: 1-based line, 0-based column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn null() -> Self {
        Position { line: 1, column: 0 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses a filter expression into its AST root.
///
/// Lexer and syntax diagnostics accumulate over the whole call and surface
/// together as one [`FilterError::Parse`]; a lexically valid literal with an
/// invalid value (bad calendar date, malformed time) aborts immediately as
/// [`FilterError::Validation`]. A tree is only returned when the diagnostic
/// list is empty.
pub fn parse_filter(source: &str) -> Result<Expression, FilterError> {
    let (tokens, diagnostics) = lexer::lexer::tokenize(source);
    parser::parser::parse(tokens, diagnostics)
}

pub fn display_error(source: &str, diagnostic: &Diagnostic) {
    /*
        Error: message
           |
         2 | name = #
           | -------^
    */

    let position = diagnostic.get_position();
    let line_text = source
        .lines()
        .nth(position.line as usize - 1)
        .unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("Error: {}", diagnostic.get_kind());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_position_display() {
        let position = super::Position { line: 3, column: 7 };
        assert_eq!(position.to_string(), "3:7");
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("   a = 1");
        assert_eq!(text, "a = 1");
        assert_eq!(removed, 3);
    }
}
