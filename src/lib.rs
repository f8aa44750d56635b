//! # eqnp
//!
//! eqnp parses textual mathematical equations into syntax trees.
//! It tokenizes and parses expressions with standard operator precedence,
//! grouping, absolute-value bars, and single-argument function calls,
//! producing a tree that later stages can simplify, differentiate,
//! integrate, or solve.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ParseError, lexer::tokenize};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of an equation as a tree. The tree is built by
/// the parser and handed to the caller, who owns it from then on.
///
/// # Responsibilities
/// - Defines expression node types for all grammar constructs.
/// - Provides structural equality, hashing, and textual rendering.
pub mod ast;
/// Provides unified error types for lexing and parsing.
///
/// This module defines all errors that can be raised while tokenizing or
/// parsing an equation string. Errors carry the byte position of the
/// offending input where one exists, and every variant names the specific
/// violation.
///
/// # Responsibilities
/// - Defines error enums for both failure modes (lexer, parser).
/// - Supports integration with standard error handling traits.
pub mod error;
/// The lexer module tokenizes an equation string for further parsing.
///
/// The lexer (tokenizer) reads the raw input text and produces a sequence
/// of tokens, each corresponding to a meaningful element such as a number,
/// identifier, operator, or delimiter. This is the first stage of parsing.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte positions.
/// - Handles numeric literals, identifiers, operators, and delimiters.
/// - Reports lexical errors for invalid characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST that represents the structure of the expression,
/// honoring precedence, associativity, and grouping.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes via recursive descent.
/// - Validates the grammar, reporting errors with position info.
/// - Validates function names against the recognized set.
pub mod parser;

pub use crate::ast::Expr;

/// Parses an equation string into its syntax tree.
///
/// This is the sole entry point of the crate. The input is tokenized, the
/// token sequence is parsed through the precedence hierarchy, and the
/// function then requires every token to have been consumed; leftover
/// tokens fail the parse. Each call is independent and touches no shared
/// state, so concurrent calls from different threads are safe by
/// construction.
///
/// # Errors
/// Returns a [`ParseError`] naming the specific violation if the input
/// cannot be tokenized or parsed. There is no recovery and no partial
/// result: on failure the caller receives the error instead of a tree.
///
/// # Examples
/// ```
/// use eqnp::parse_expression;
///
/// let expr = parse_expression("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
///
/// // Absolute-value bars are sugar for the abs function.
/// assert_eq!(parse_expression("|5|"), parse_expression("abs(5)"));
///
/// // A malformed expression produces a typed error instead of a tree.
/// assert!(parse_expression("1 +").is_err());
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parser::core::parse_expression(&mut iter)?;

    if let Some((_, position)) = iter.peek() {
        return Err(ParseError::TrailingInput { position: *position });
    }

    Ok(expr)
}
