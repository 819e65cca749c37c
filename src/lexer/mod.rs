//! Lexical analysis module for the filter compiler.
//!
//! This module contains the lexer (tokenizer) that converts filter text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of filter text using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Quoted date/datetime/time literal classification
//! - Token position tracking for error reporting
//! - Diagnostic accumulation instead of fail-on-first-error

pub mod lexer;
pub mod tokens;
