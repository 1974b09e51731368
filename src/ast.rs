use std::fmt;

use crate::interpreter::lexer::Operator;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The parser builds exactly one `ExpressionStatement` per parse, whose
/// descendants are the remaining variants. Every child is boxed and always
/// present, so a tree handed to the evaluator is complete by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The root of a parsed expression.
    ExpressionStatement {
        /// The parsed expression.
        expression: Box<Self>,
    },
    /// A parenthesized sub-expression, kept as its own node so the tree
    /// mirrors the grouping written in the source.
    Expression {
        /// The expression between the parentheses.
        expression: Box<Self>,
    },
    /// A numeric literal, stored as written and parsed when evaluated.
    NumberLiteral {
        /// Literal text such as `42`, `.5` or `5.`.
        value: String,
    },
    /// A prefix operation such as `-x`.
    UnaryExpression {
        /// The prefix operator. The parser only produces `+` and `-`.
        operator:   Operator,
        /// The operand expression.
        expression: Box<Self>,
    },
    /// A binary operation such as `a * b`.
    BinaryExpression {
        /// The operator.
        operator: Operator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Node {
    /// Wraps `expression` as the root of a tree.
    #[must_use]
    pub fn statement(expression: Self) -> Self {
        Self::ExpressionStatement { expression: Box::new(expression) }
    }

    /// Wraps `expression` as a parenthesized group.
    #[must_use]
    pub fn group(expression: Self) -> Self {
        Self::Expression { expression: Box::new(expression) }
    }

    /// Builds a number literal node from its source text.
    #[must_use]
    pub fn number(value: impl Into<String>) -> Self {
        Self::NumberLiteral { value: value.into() }
    }

    /// Builds a prefix operation node.
    #[must_use]
    pub fn unary(operator: Operator, expression: Self) -> Self {
        Self::UnaryExpression { operator,
                                expression: Box::new(expression) }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(operator: Operator, left: Self, right: Self) -> Self {
        Self::BinaryExpression { operator,
                                 left: Box::new(left),
                                 right: Box::new(right) }
    }
}

/// Renders the tree back into expression text.
///
/// Operands and binary operators are separated by single spaces, prefix
/// operators are attached to their operand and parenthesized groups keep
/// their parentheses. Rendering a parsed expression and parsing the result
/// again yields the same tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpressionStatement { expression } => write!(f, "{expression}"),
            Self::Expression { expression } => write!(f, "({expression})"),
            Self::NumberLiteral { value } => write!(f, "{value}"),
            Self::UnaryExpression { operator, expression } => write!(f, "{operator}{expression}"),
            Self::BinaryExpression { operator, left, right } => {
                write!(f, "{left} {operator} {right}")
            },
        }
    }
}
