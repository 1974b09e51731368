use std::{collections::VecDeque, fmt};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// One of the fixed set of arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Division (`/`)
    Divide,
    /// Multiplication (`*`)
    Multiply,
    /// Exponentiation (`**`)
    Power,
    /// Subtraction or negation (`-`)
    Subtract,
    /// Addition or identity (`+`)
    Add,
    /// Nth root (`√`)
    Root,
    /// Truncated remainder (`%`)
    Remainder,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 7] = [Self::Divide,
                                Self::Multiply,
                                Self::Power,
                                Self::Subtract,
                                Self::Add,
                                Self::Root,
                                Self::Remainder];

    /// Returns the source text of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Divide => "/",
            Self::Multiply => "*",
            Self::Power => "**",
            Self::Subtract => "-",
            Self::Add => "+",
            Self::Root => "√",
            Self::Remainder => "%",
        }
    }

    /// Looks up the operator spelled exactly `symbol`.
    ///
    /// # Example
    /// ```
    /// use calcengine::interpreter::lexer::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("**"), Some(Operator::Power));
    /// assert_eq!(Operator::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

lazy_static! {
    /// Length in characters of the longest operator.
    static ref LONGEST_OPERATOR_LEN: usize = Operator::ALL.iter()
                                                          .map(|op| op.symbol().chars().count())
                                                          .max()
                                                          .unwrap_or(1);

    /// First characters of every operator.
    static ref OPERATOR_STARTS: Vec<char> = {
        let mut starts = Vec::new();
        for c in Operator::ALL.iter().filter_map(|op| op.symbol().chars().next()) {
            if !starts.contains(&c) {
                starts.push(c);
            }
        }
        starts
    };

    /// Alternation of all operators, longest first so `**` wins over `*`.
    static ref OPERATOR_PATTERN: Regex = {
        let mut symbols: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        symbols.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        let alternation = symbols.into_iter().map(regex::escape).collect::<Vec<_>>().join("|");
        Regex::new(&format!("^(?:{alternation})")).expect("operator pattern is built from literal symbols")
    };
}

/// A lexical token.
///
/// Number literals are reported by the `NumberLiteral` marker only; the text
/// of the literal is read back through [`Lexer::literal`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// An arithmetic operator.
    Operator(Operator),
    /// A number literal; see [`Lexer::literal`].
    NumberLiteral,
    /// Whitespace was skipped. Never returned by [`Lexer::peek`],
    /// [`Lexer::lookahead`] or [`Lexer::next_token`].
    Whitespace,
    /// The input is exhausted.
    EndOfInput,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LParen => write!(f, "\"(\""),
            Self::RParen => write!(f, "\")\""),
            Self::Operator(op) => write!(f, "\"{op}\""),
            Self::NumberLiteral => write!(f, "number"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// An on-demand tokenizer with arbitrary lookahead.
///
/// Tokens are produced one at a time as the parser asks for them. Tokens
/// lexed ahead of time by [`Lexer::lookahead`] are kept in a stash together
/// with their literal text and handed out in order by [`Lexer::next_token`].
#[derive(Debug, Clone)]
pub struct Lexer {
    input:    Vec<char>,
    position: usize,
    current:  Option<char>,
    stash:    VecDeque<(Token, Option<String>)>,
    literal:  Option<String>,
    lexed:    Option<String>,
}

impl Lexer {
    /// Creates a lexer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let input: Vec<char> = input.chars().collect();
        let current = input.first().copied();

        Self { input,
               position: 0,
               current,
               stash: VecDeque::new(),
               literal: None,
               lexed: None }
    }

    /// Returns the character index of the scanner.
    ///
    /// Tokens already stashed by a lookahead have been scanned, so this may
    /// be past the next token handed out.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the text of the most recently consumed number literal.
    ///
    /// # Example
    /// ```
    /// use calcengine::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12.5 + 3");
    /// assert_eq!(lexer.next_token().unwrap(), Token::NumberLiteral);
    /// assert_eq!(lexer.literal(), Some("12.5"));
    /// ```
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Moves one character forward and returns the new current character.
    ///
    /// Returns `None`, and keeps returning it, once the input is exhausted.
    pub fn advance(&mut self) -> Option<char> {
        if self.position < self.input.len() {
            self.position += 1;
        }
        self.current = self.input.get(self.position).copied();
        self.current
    }

    /// Returns the token `index` positions ahead without consuming it.
    ///
    /// `lookahead(1)` is the token the next call to [`Lexer::next_token`]
    /// returns. Tokens scanned to answer this are stashed so they are only
    /// lexed once. An `index` of zero is treated as one.
    pub fn lookahead(&mut self, index: usize) -> LexResult<Token> {
        let index = index.max(1);

        while self.stash.len() < index {
            let token = self.lex_significant()?;
            let literal = (token == Token::NumberLiteral).then(|| self.lexed.clone())
                                                          .flatten();
            self.stash.push_back((token, literal));
        }

        Ok(self.stash[index - 1].0)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> LexResult<Token> {
        self.lookahead(1)
    }

    /// Consumes and returns the next token.
    ///
    /// Whitespace is skipped. Once the input is exhausted every call returns
    /// [`Token::EndOfInput`].
    pub fn next_token(&mut self) -> LexResult<Token> {
        let (token, literal) = match self.stash.pop_front() {
            Some(entry) => entry,
            None => {
                let token = self.lex_significant()?;
                (token, self.lexed.clone())
            },
        };

        if token == Token::NumberLiteral {
            self.literal = literal;
        }

        Ok(token)
    }

    /// Scans exactly one token starting at the current character.
    ///
    /// Returns [`Token::Whitespace`] after skipping a single whitespace
    /// character and [`Token::EndOfInput`] at the end of the input.
    pub fn lex(&mut self) -> LexResult<Token> {
        let Some(c) = self.current else {
            return Ok(Token::EndOfInput);
        };

        if c.is_whitespace() {
            self.advance();
            return Ok(Token::Whitespace);
        }

        let position = self.position;
        let token = match self.lex_paren().or_else(|| self.lex_number()) {
            Some(token) => Some(token),
            None => self.lex_operator()?,
        };

        let token = token.ok_or(LexError::UnrecognizedCharacter { character: c,
                                                                  position })?;
        trace!(%token, position, "lexed token");
        Ok(token)
    }

    fn lex_significant(&mut self) -> LexResult<Token> {
        loop {
            let token = self.lex()?;
            if token != Token::Whitespace {
                return Ok(token);
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn lex_paren(&mut self) -> Option<Token> {
        let token = match self.current? {
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return None,
        };
        self.advance();
        Some(token)
    }

    fn lex_number(&mut self) -> Option<Token> {
        let starts_number = match self.current? {
            c if c.is_ascii_digit() => true,
            '.' => self.peek_char().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        if !starts_number {
            return None;
        }

        // A leading dot only opens the literal; one more dot may follow.
        let mut text = String::new();
        if self.current == Some('.') {
            text.push('.');
            self.advance();
        }
        self.take_digits(&mut text);

        if self.current == Some('.') {
            text.push('.');
            self.advance();
            self.take_digits(&mut text);
        }

        self.lexed = Some(text);
        Some(Token::NumberLiteral)
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(c) = self.current
              && c.is_ascii_digit()
        {
            text.push(c);
            self.advance();
        }
    }

    fn lex_operator(&mut self) -> LexResult<Option<Token>> {
        let Some(c) = self.current else {
            return Ok(None);
        };
        if !OPERATOR_STARTS.contains(&c) {
            return Ok(None);
        }

        let end = (self.position + *LONGEST_OPERATOR_LEN).min(self.input.len());
        let candidate: String = self.input[self.position..end].iter().collect();

        let operator = OPERATOR_PATTERN.find(&candidate)
                                       .and_then(|m| Operator::from_symbol(m.as_str()))
                                       .ok_or(LexError::IncompleteOperator { position:
                                                                                 self.position, })?;

        for _ in operator.symbol().chars() {
            self.advance();
        }

        Ok(Some(Token::Operator(operator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token == Token::EndOfInput {
                return out;
            }
            out.push(token);
        }
    }

    fn literals(input: &str) -> Vec<String> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            match lexer.next_token().unwrap() {
                Token::EndOfInput => return out,
                Token::NumberLiteral => out.push(lexer.literal().unwrap().to_string()),
                _ => {},
            }
        }
    }

    #[test]
    fn advance_stops_at_end() {
        let mut lexer = Lexer::new("ab");
        assert_eq!(lexer.advance(), Some('b'));
        assert_eq!(lexer.advance(), None);
        assert_eq!(lexer.advance(), None);
        assert_eq!(lexer.position(), 2);
    }

    #[test]
    fn lex_reports_whitespace_and_end() {
        let mut lexer = Lexer::new(" 1");
        assert_eq!(lexer.lex().unwrap(), Token::Whitespace);
        assert_eq!(lexer.lex().unwrap(), Token::NumberLiteral);
        assert_eq!(lexer.lex().unwrap(), Token::EndOfInput);
        assert_eq!(lexer.lex().unwrap(), Token::EndOfInput);
    }

    #[test]
    fn splits_simple_expression() {
        assert_eq!(tokens("5 + 7 - 45"),
                   vec![Token::NumberLiteral,
                        Token::Operator(Operator::Add),
                        Token::NumberLiteral,
                        Token::Operator(Operator::Subtract),
                        Token::NumberLiteral]);
        assert_eq!(literals("5 + 7 - 45"), vec!["5", "7", "45"]);
    }

    #[test]
    fn prefers_longest_operator() {
        assert_eq!(tokens("2**3*4"),
                   vec![Token::NumberLiteral,
                        Token::Operator(Operator::Power),
                        Token::NumberLiteral,
                        Token::Operator(Operator::Multiply),
                        Token::NumberLiteral]);
        assert_eq!(tokens("***"),
                   vec![Token::Operator(Operator::Power), Token::Operator(Operator::Multiply)]);
    }

    #[test]
    fn lexes_every_operator() {
        for op in Operator::ALL {
            assert_eq!(tokens(op.symbol()), vec![Token::Operator(op)]);
        }
    }

    #[test]
    fn lexes_root_and_parens() {
        assert_eq!(tokens("(9)√(2)"),
                   vec![Token::LParen,
                        Token::NumberLiteral,
                        Token::RParen,
                        Token::Operator(Operator::Root),
                        Token::LParen,
                        Token::NumberLiteral,
                        Token::RParen]);
    }

    #[test]
    fn number_literal_forms() {
        assert_eq!(literals(".5 5. 5.5"), vec![".5", "5.", "5.5"]);
        assert_eq!(literals("5.5.5"), vec!["5.5", ".5"]);
        assert_eq!(literals(".5.3"), vec![".5.3"]);
        assert_eq!(literals(".5.3.1"), vec![".5.3", ".1"]);
        assert_eq!(literals(".5. * 2"), vec![".5.", "2"]);
        assert_eq!(tokens("(.5.3) * 2"),
                   vec![Token::LParen,
                        Token::NumberLiteral,
                        Token::RParen,
                        Token::Operator(Operator::Multiply),
                        Token::NumberLiteral]);
    }

    #[test]
    fn lone_dot_is_unrecognized() {
        let mut lexer = Lexer::new("1 + .");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token(),
                   Err(LexError::UnrecognizedCharacter { character: '.',
                                                         position:  4, }));
    }

    #[test]
    fn reports_unrecognized_character_position() {
        let mut lexer = Lexer::new("1 $ 2");
        assert_eq!(lexer.next_token().unwrap(), Token::NumberLiteral);
        assert_eq!(lexer.next_token(),
                   Err(LexError::UnrecognizedCharacter { character: '$',
                                                         position:  2, }));
    }

    #[test]
    fn lookahead_does_not_consume() {
        let mut lexer = Lexer::new("1 + 2");
        assert_eq!(lexer.lookahead(3).unwrap(), Token::NumberLiteral);
        assert_eq!(lexer.lookahead(2).unwrap(), Token::Operator(Operator::Add));
        assert_eq!(lexer.peek().unwrap(), Token::NumberLiteral);
        assert_eq!(lexer.lookahead(4).unwrap(), Token::EndOfInput);

        assert_eq!(lexer.next_token().unwrap(), Token::NumberLiteral);
        assert_eq!(lexer.literal(), Some("1"));
        assert_eq!(lexer.next_token().unwrap(), Token::Operator(Operator::Add));
        assert_eq!(lexer.next_token().unwrap(), Token::NumberLiteral);
        assert_eq!(lexer.literal(), Some("2"));
        assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
        assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
    }

    #[test]
    fn whitespace_only_input_is_end() {
        let mut lexer = Lexer::new(" \t\n ");
        assert_eq!(lexer.peek().unwrap(), Token::EndOfInput);
        assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
    }

    #[test]
    fn operator_starts_are_unique() {
        let mut sorted = OPERATOR_STARTS.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), OPERATOR_STARTS.len());
        assert_eq!(*LONGEST_OPERATOR_LEN, 2);
    }
}
