use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Operator, Token},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a unary expression.
    ///
    /// Supports prefix `+` and `-`. Unary operators are right-associative, so
    /// an input like `-+x` is parsed as `-(+x)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-") unary
    ///            | primary
    /// ```
    pub fn parse_unary(&mut self) -> ParseResult<Node> {
        if let Token::Operator(op @ (Operator::Add | Operator::Subtract)) = self.lexer.peek()? {
            self.lexer.next_token()?;
            let expression = self.parse_unary()?;
            return Ok(Node::unary(op, expression));
        }

        self.parse_primary()
    }

    /// Parses a primary (atomic) expression: a number literal or a
    /// parenthesized sub-expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the input ends here.
    /// - `ExpectedClosingParen` if a group is not closed.
    /// - `UnexpectedToken` for any other token.
    pub fn parse_primary(&mut self) -> ParseResult<Node> {
        match self.lexer.peek()? {
            Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput.into()),
            Token::LParen => self.parse_grouping(),
            Token::NumberLiteral => {
                self.lexer.next_token()?;
                let value = self.lexer.literal().unwrap_or_default();
                Ok(Node::number(value))
            },
            token => Err(ParseError::UnexpectedToken { token: token.to_string() }.into()),
        }
    }

    fn parse_grouping(&mut self) -> ParseResult<Node> {
        self.lexer.next_token()?;
        let expression = self.parse_expression()?;

        match self.lexer.next_token()? {
            Token::RParen => Ok(Node::group(expression)),
            found => Err(ParseError::ExpectedClosingParen { found: found.to_string() }.into()),
        }
    }
}
