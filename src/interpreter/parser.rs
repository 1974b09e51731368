/// Parser state and entry points.
///
/// Defines the `Parser` struct, the `ParseResult` alias and the top-level
/// `parse` and `parse_expression` rules.
pub mod core;

/// Binary operator rules.
///
/// Implements the left-associative additive, multiplicative and
/// power-and-root precedence levels.
pub mod binary;

/// Unary and primary rules.
///
/// Handles prefix `+` and `-`, number literals and parenthesized
/// sub-expressions.
pub mod unary;
