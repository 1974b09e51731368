/// Tree walking and node dispatch.
///
/// Contains the entry point that reduces a syntax tree to a number and the
/// evaluation of number literals.
pub mod core;

/// Unary operator evaluation.
///
/// Applies prefix `+` and `-` to an evaluated operand.
pub mod unary;

/// Binary operator evaluation.
///
/// Applies the seven arithmetic operators to two evaluated operands.
pub mod binary;
