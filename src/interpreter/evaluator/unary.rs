use crate::{error::EvalError, interpreter::{evaluator::core::EvalResult, lexer::Operator}};

/// Applies a prefix operator to an evaluated operand.
///
/// `+` is the identity and `-` negates. The parser only builds unary nodes
/// for these two, but trees can be built by hand, so any other operator is
/// rejected.
///
/// # Example
/// ```
/// use calcengine::interpreter::{evaluator::unary::eval_unary, lexer::Operator};
///
/// assert_eq!(eval_unary(Operator::Subtract, 5.0).unwrap(), -5.0);
/// assert!(eval_unary(Operator::Power, 5.0).is_err());
/// ```
pub fn eval_unary(operator: Operator, value: f64) -> EvalResult<f64> {
    match operator {
        Operator::Add => Ok(value),
        Operator::Subtract => Ok(-value),
        operator => Err(EvalError::UnrecognizedUnaryOperator { operator }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_sign_of_zero() {
        assert!(eval_unary(Operator::Subtract, 0.0).unwrap().is_sign_negative());
        assert!(eval_unary(Operator::Add, 0.0).unwrap().is_sign_positive());
    }

    #[test]
    fn negation_keeps_nan() {
        assert!(eval_unary(Operator::Subtract, f64::NAN).unwrap().is_nan());
    }
}
