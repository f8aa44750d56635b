use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    lexer::Token,
    parser::{
        core::{ParseResult, parse_expression},
        utils::is_known_function,
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-`, and it binds to exactly one thing: an
/// immediately following bare numeric literal. `-5` is accepted; `-(2 + 3)`,
/// `-sin(2)` and `--5` are all rejected with
/// [`ParseError::InvalidNegation`], because the grammar restricts the
/// operand of negation to a number token, not a sub-expression.
///
/// If no `-` is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" NUMBER
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryNegate`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        match tokens.peek() {
            Some((Token::Number(value), _)) => {
                let value = *value;
                tokens.next();
                Ok(Expr::UnaryNegate { operand: Box::new(Expr::Number(value)) })
            },
            _ => Err(ParseError::InvalidNegation { position }),
        }
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - function calls
/// - parenthesized expressions
/// - absolute-value expressions (`|expr|`)
///
/// This function does not handle the unary `-`; that happens one level up in
/// [`parse_unary`]. It dispatches to specialized parsing functions depending
/// on the leading token. Any token that cannot start a primary expression,
/// and a token stream that ends where an operand is required, both mean a
/// binary operator was left without an operand.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | function_call
///              | "(" expression ")"
///              | "|" expression "|"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, _)) = tokens.peek() else {
        return Err(ParseError::MissingOperand);
    };

    match token {
        Token::Number(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number(value))
        },
        Token::Identifier(_) => parse_function_call(tokens),
        Token::LParen => parse_grouping(tokens),
        Token::Pipe => parse_absolute_value(tokens),
        _ => Err(ParseError::MissingOperand),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. A missing closer yields
/// [`ParseError::UnbalancedDelimiter`] at the opener's position.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::UnbalancedDelimiter { position }),
    }
}

/// Parses an absolute-value expression of the form `| expression |`.
///
/// The function consumes the opening `|`, parses an expression, and expects
/// a closing `|`. Missing closing bars produce
/// [`ParseError::UnbalancedDelimiter`] at the opener's position.
///
/// The bars are pure syntax: the result is a `FunctionCall` node named
/// `abs`, identical in shape to what `abs(expression)` produces.
///
/// Grammar: `absolute := "|" expression "|"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `|`.
///
/// # Returns
/// An [`Expr::FunctionCall`] node calling `abs`.
fn parse_absolute_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::Pipe, _)) => Ok(Expr::FunctionCall { name:     "abs".to_string(),
                                                          argument: Box::new(expr), }),
        _ => Err(ParseError::UnbalancedDelimiter { position }),
    }
}

/// Parses a function call.
///
/// Expected form: `name ( expression )`
///
/// The name must be one of the recognized functions; anything else fails
/// with [`ParseError::UnknownFunction`]. The call takes exactly one argument
/// expression. An immediately closing `)` and a second argument expression
/// after the first both fail with [`ParseError::InvalidFunctionArity`].
///
/// Grammar: `function_call := IDENTIFIER "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// An [`Expr::FunctionCall`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is not a recognized function name,
/// - the name is not followed by `(`,
/// - the call does not contain exactly one argument expression,
/// - the argument fails to parse,
/// - the closing `)` is missing.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(name), position)) => (name.clone(), *position),
        _ => unreachable!(),
    };

    if !is_known_function(&name) {
        return Err(ParseError::UnknownFunction { name, position });
    }

    let paren_position = match tokens.peek() {
        Some((Token::LParen, paren_position)) => *paren_position,
        _ => return Err(ParseError::ExpectedOpenParen { name, position }),
    };
    tokens.next();

    if let Some((Token::RParen, close_position)) = tokens.peek() {
        return Err(ParseError::InvalidFunctionArity { name,
                                                      position: *close_position, });
    }

    let argument = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::FunctionCall { name,
                                                            argument: Box::new(argument), }),
        Some((_, extra_position)) => Err(ParseError::InvalidFunctionArity { name,
                                                                            position: *extra_position, }),
        None => Err(ParseError::UnbalancedDelimiter { position: paren_position }),
    }
}
