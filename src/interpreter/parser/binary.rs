use crate::{
    ast::Node,
    interpreter::{
        lexer::{Operator, Token},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub fn parse_additive(&mut self) -> ParseResult<Node> {
        self.parse_left_fold(&[Operator::Add, Operator::Subtract], Self::parse_multiplicative)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*`, `/` and `%`.
    ///
    /// The rule is: `multiplicative := pow_root (("*" | "/" | "%") pow_root)*`
    pub fn parse_multiplicative(&mut self) -> ParseResult<Node> {
        self.parse_left_fold(&[Operator::Multiply, Operator::Divide, Operator::Remainder],
                             Self::parse_pow_root)
    }

    /// Parses exponentiation and nth-root expressions.
    ///
    /// Both operators share one level and fold to the left, so `2 ** 3 ** 2`
    /// parses as `(2 ** 3) ** 2` and `64 √ 2 √ 3` as `(64 √ 2) √ 3`.
    ///
    /// The rule is: `pow_root := unary (("**" | "√") unary)*`
    pub fn parse_pow_root(&mut self) -> ParseResult<Node> {
        self.parse_left_fold(&[Operator::Power, Operator::Root], Self::parse_unary)
    }

    /// Parses `operand (op operand)*` for the given operators, folding
    /// repeated operators to the left.
    fn parse_left_fold(&mut self,
                       operators: &[Operator],
                       mut operand: impl FnMut(&mut Self) -> ParseResult<Node>)
                       -> ParseResult<Node> {
        let mut left = operand(self)?;

        while let Token::Operator(op) = self.lexer.peek()?
              && operators.contains(&op)
        {
            self.lexer.next_token()?;
            let right = operand(self)?;
            left = Node::binary(op, left, right);
        }

        Ok(left)
    }
}
