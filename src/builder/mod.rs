//! Fluent construction of filter trees without going through the parser.
//!
//! Builder output is structurally identical to what the parser produces for
//! the same filter text, so built trees round-trip through `to_string` and
//! `parse_filter` unchanged.

pub mod builder;

#[cfg(test)]
mod tests;
