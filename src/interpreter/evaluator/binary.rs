use crate::interpreter::lexer::Operator;

/// Applies a binary operator to two evaluated operands.
///
/// All operators follow IEEE-754 double semantics and never fail: division by
/// zero gives an infinity or NaN, `%` is the truncated remainder carrying the
/// sign of the dividend, and `√` computes `a ** (1 / b)`. The root is taken
/// with that formula as is, so a negative radicand yields NaN even for odd
/// `b`.
///
/// # Example
/// ```
/// use calcengine::interpreter::{evaluator::binary::eval_binary, lexer::Operator};
///
/// assert_eq!(eval_binary(Operator::Remainder, -5.0, 3.0), -2.0);
/// assert_eq!(eval_binary(Operator::Root, 27.0, 3.0), 27_f64.powf(1.0 / 3.0));
/// ```
#[must_use]
pub fn eval_binary(operator: Operator, left: f64, right: f64) -> f64 {
    match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => left / right,
        Operator::Remainder => left % right,
        Operator::Power => left.powf(right),
        Operator::Root => left.powf(1.0 / right),
    }
}
