use tracing::trace;

use crate::{
    ast::Node,
    error::EvalError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
    util::num::parse_literal,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a syntax tree and returns its value.
///
/// This is the main entry point for evaluation. It dispatches on the node
/// variant: statements and parenthesized groups pass their child's value
/// through, literals are parsed, and operator nodes evaluate their operands
/// before applying the operator. Evaluation has no side effects, so the same
/// tree always evaluates to the same value.
///
/// # Example
/// ```
/// use calcengine::{
///     ast::Node,
///     interpreter::{evaluator::core::evaluate_ast, lexer::Operator},
/// };
///
/// let tree = Node::binary(Operator::Remainder, Node::number("7"), Node::number("4"));
/// assert_eq!(evaluate_ast(&tree).unwrap(), 3.0);
/// ```
pub fn evaluate_ast(node: &Node) -> EvalResult<f64> {
    let value = match node {
        Node::ExpressionStatement { expression } | Node::Expression { expression } => {
            evaluate_ast(expression)?
        },
        Node::NumberLiteral { value } => parse_literal(value)?,
        Node::UnaryExpression { operator, expression } => {
            eval_unary(*operator, evaluate_ast(expression)?)?
        },
        Node::BinaryExpression { operator, left, right } => {
            eval_binary(*operator, evaluate_ast(left)?, evaluate_ast(right)?)
        },
    };

    trace!(%node, value, "evaluated node");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::Operator;

    #[test]
    fn groups_pass_values_through() {
        let tree = Node::statement(Node::group(Node::group(Node::number("2.5"))));
        assert_eq!(evaluate_ast(&tree).unwrap(), 2.5);
    }

    #[test]
    fn evaluates_operands_before_operator() {
        let tree = Node::binary(Operator::Subtract,
                                Node::binary(Operator::Multiply, Node::number("4"), Node::number("5")),
                                Node::unary(Operator::Subtract, Node::number("1")));
        assert_eq!(evaluate_ast(&tree).unwrap(), 21.0);
    }

    #[test]
    fn invalid_literal_is_an_error() {
        let tree = Node::statement(Node::number("1e5"));
        assert_eq!(evaluate_ast(&tree),
                   Err(EvalError::InvalidNumber { literal: "1e5".to_string() }));
    }

    #[test]
    fn non_sign_unary_operator_is_an_error() {
        let tree = Node::unary(Operator::Multiply, Node::number("1"));
        assert_eq!(evaluate_ast(&tree),
                   Err(EvalError::UnrecognizedUnaryOperator { operator: Operator::Multiply }));
    }

    #[test]
    fn errors_in_operands_propagate() {
        let tree = Node::binary(Operator::Add,
                                Node::number("1"),
                                Node::unary(Operator::Root, Node::number("2")));
        assert!(evaluate_ast(&tree).is_err());
    }
}
