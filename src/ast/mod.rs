/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the filter AST structure
///
/// Submodules:
/// - ast: The Expression node union and its canonical serializer
/// - literals: Leaf nodes (strings, numbers, dates, identifiers, constants)
/// - expressions: Composite nodes (parentheses, arrays, chains, comparisons)
/// - operators: Comparison/logical/arithmetic operator definitions
pub mod ast;
pub mod expressions;
pub mod literals;
pub mod operators;

#[cfg(test)]
mod tests;
