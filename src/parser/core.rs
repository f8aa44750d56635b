use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    lexer::Token,
    parser::binary::parse_additive,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// This function stops at the first token it cannot use, which is what the
/// grouping constructs need. Callers that require the whole token sequence
/// to be consumed must check for leftover tokens themselves; the crate-level
/// [`crate::parse_expression`] does exactly that.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
