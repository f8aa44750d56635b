use crate::error::LexError;

#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while parsing an equation string.
///
/// Every failure is terminal for the parse call that raised it. The parser
/// never recovers, retries, or returns a partially built tree.
pub enum ParseError {
    /// The input could not be tokenized.
    Lex(LexError),
    /// A binary operator is missing its left or right operand.
    MissingOperand,
    /// A `(` or `|` grouping was opened but never closed.
    UnbalancedDelimiter {
        /// Byte offset of the opening delimiter.
        position: usize,
    },
    /// A function name was not followed by `(`.
    ExpectedOpenParen {
        /// The function name.
        name:     String,
        /// Byte offset of the function name.
        position: usize,
    },
    /// A function call did not contain exactly one argument expression.
    InvalidFunctionArity {
        /// The function name.
        name:     String,
        /// Byte offset of the token that broke the single-argument form.
        position: usize,
    },
    /// A unary `-` was followed by something other than a bare numeric
    /// literal.
    InvalidNegation {
        /// Byte offset of the `-`.
        position: usize,
    },
    /// An identifier was used where a function name is expected, but it is
    /// not a recognized function.
    UnknownFunction {
        /// The unrecognized name.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// The input contained no tokens at all.
    EmptyExpression,
    /// Found extra tokens after a complete expression.
    TrailingInput {
        /// Byte offset of the first leftover token.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),

            Self::MissingOperand => {
                write!(f, "Error: A binary operator is missing one of its operands.")
            },

            Self::UnbalancedDelimiter { position } => write!(f,
                                                             "Error at position {position}: The grouping opened here is never closed."),

            Self::ExpectedOpenParen { name, position } => write!(f,
                                                                 "Error at position {position}: Expected '(' after function name '{name}'."),

            Self::InvalidFunctionArity { name, position } => write!(f,
                                                                    "Error at position {position}: Function '{name}' takes exactly one argument."),

            Self::InvalidNegation { position } => write!(f,
                                                         "Error at position {position}: Unary '-' may only negate a numeric literal."),

            Self::UnknownFunction { name, position } => {
                write!(f, "Error at position {position}: Unknown function '{name}'.")
            },

            Self::EmptyExpression => write!(f, "Error: The expression is empty."),

            Self::TrailingInput { position } => write!(f,
                                                       "Error at position {position}: Extra tokens after expression. Check your input."),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}
