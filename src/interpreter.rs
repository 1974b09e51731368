/// The evaluator module reduces syntax trees to numbers.
///
/// The evaluator walks the tree produced by the parser and computes a single
/// `f64`. It holds no state between calls.
///
/// # Responsibilities
/// - Evaluates every node variant.
/// - Applies the arithmetic operators with IEEE-754 semantics.
/// - Reports literals and operators that cannot be evaluated.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw input one character at a time and produces
/// parentheses, operators and number-literal markers on demand, with
/// lookahead for the parser.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Skips whitespace.
/// - Reports characters that are not part of the grammar.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser pulls tokens from the lexer and constructs a tree by recursive
/// descent, one method per precedence level.
///
/// # Responsibilities
/// - Encodes operator precedence and associativity in the tree shape.
/// - Validates operands and parentheses, stopping at the first error.
pub mod parser;
