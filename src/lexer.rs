use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all tokens recognized in an equation string.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2e10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; function names such as `sin`.
    ///
    /// The lexer does not know which names denote recognized functions.
    /// That distinction belongs to the parser, so the two stages stay
    /// independently testable.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `|`
    #[token("|")]
    Pipe,
    /// Spaces, tabs, and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes an equation string into `(Token, position)` pairs, where the
/// position is the byte offset of the token's first character in `source`.
///
/// Whitespace separates tokens and is otherwise ignored. Tokenizing is a
/// pure function of `source`: calling it twice yields identical sequences,
/// and no state is shared between calls.
///
/// # Errors
/// Returns `LexError::UnexpectedCharacter` for any character that does not
/// start a recognized token.
///
/// ## Example
/// ```
/// use eqnp::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 0), (Token::Plus, 2), (Token::Number(2.0), 4)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { character,
                                                       position: lexer.span().start });
        }
    }

    Ok(tokens)
}
