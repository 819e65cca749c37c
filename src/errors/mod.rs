//! Error types and error handling for the filter compiler.
//!
//! This module defines the error types used across lexing, parsing and the
//! builder API. It includes:
//!
//! - Diagnostic structures with source position information
//! - Specific error variants for each failure class
//! - The aggregated error returned by `parse_filter`
//! - Error formatting and display functionality

pub mod errors;
