use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Failure classes: lexer faults, grammar violations, well-formed literals
/// with invalid values, and builder misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lex,
    Syntax,
    Validation,
    Builder,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    // Lexer
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,

    // Parser
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("array must contain at least one element")]
    EmptyArray,
    #[error("polarity operator requires a numeric operand")]
    PolarityOnNonNumber,
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },

    // Literal values
    #[error("invalid number: {text:?}")]
    InvalidNumber { text: String },
    #[error("invalid date: {text:?}")]
    InvalidDate { text: String },
    #[error("invalid datetime: {text:?}")]
    InvalidDateTime { text: String },
    #[error("invalid time: {text:?}")]
    InvalidTime { text: String },

    // Builder
    #[error("{function} requires at least one operand")]
    EmptyOperandList { function: &'static str },
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::UnrecognisedCharacter { .. } | ErrorKind::UnterminatedString => {
                ErrorCategory::Lex
            }
            ErrorKind::UnexpectedToken { .. }
            | ErrorKind::ExpectedToken { .. }
            | ErrorKind::EmptyArray
            | ErrorKind::PolarityOnNonNumber
            | ErrorKind::NestingTooDeep { .. } => ErrorCategory::Syntax,
            ErrorKind::InvalidNumber { .. }
            | ErrorKind::InvalidDate { .. }
            | ErrorKind::InvalidDateTime { .. }
            | ErrorKind::InvalidTime { .. } => ErrorCategory::Validation,
            ErrorKind::EmptyOperandList { .. } => ErrorCategory::Builder,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

/// One lexer or parser finding, pinned to a source position.
///
/// Diagnostics are collected over a whole parse call instead of being thrown
/// at the failure point, so a single call can report every problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: ErrorKind,
    position: Position,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Diagnostic { kind, position }
    }

    pub fn get_kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

fn join_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect::<Vec<String>>()
        .join("; ")
}

/// The error surface of the crate.
///
/// `Parse` aggregates every lex/syntax diagnostic of one `parse_filter` call;
/// `Validation` is raised immediately when a well-formed literal carries an
/// invalid value; `Builder` is raised immediately on builder misuse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("filter parse failed: {}", join_diagnostics(.0))]
    Parse(Vec<Diagnostic>),
    #[error("{0}")]
    Validation(Diagnostic),
    #[error("{}", .0)]
    Builder(ErrorKind),
}

impl FilterError {
    /// The individual diagnostics behind this error, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            FilterError::Parse(diagnostics) => diagnostics,
            FilterError::Validation(diagnostic) => std::slice::from_ref(diagnostic),
            FilterError::Builder(_) => &[],
        }
    }
}
