use crate::{ast::Node, error::Error, interpreter::lexer::Lexer};

/// Result type used by the parser.
///
/// Parse rules pull tokens from the lexer as they go, so a rule can fail with
/// either a lexing or a parsing error.
pub type ParseResult<T> = Result<T, Error>;

/// A recursive-descent parser over an owned [`Lexer`].
///
/// Each grammar rule is a method taking no arguments; rules call each other
/// from the lowest precedence level to the highest:
///
/// ```text
///     expression := additive
///     additive   := mult (("+" | "-") mult)*
///     mult       := pow_root (("*" | "/" | "%") pow_root)*
///     pow_root   := unary (("**" | "√") unary)*
///     unary      := ("+" | "-") unary | primary
///     primary    := NUMBER | "(" expression ")"
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    pub(crate) lexer: Lexer,
}

impl Parser {
    /// Creates a parser that reads tokens from `lexer`.
    #[must_use]
    pub const fn new(lexer: Lexer) -> Self {
        Self { lexer }
    }

    /// Parses one expression and wraps it in an
    /// [`Node::ExpressionStatement`].
    ///
    /// Parsing stops as soon as a complete expression has been read; any
    /// tokens after it are left unread.
    ///
    /// # Example
    /// ```
    /// use calcengine::{
    ///     ast::Node,
    ///     interpreter::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let tree = Parser::new(Lexer::new("42")).parse().unwrap();
    /// assert_eq!(tree, Node::statement(Node::number("42")));
    /// ```
    pub fn parse(&mut self) -> ParseResult<Node> {
        let expression = self.parse_expression()?;
        Ok(Node::statement(expression))
    }

    /// Parses a full expression, starting at the lowest precedence level.
    ///
    /// Grammar: `expression := additive`
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_additive()
    }
}
