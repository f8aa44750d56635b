/// Names of the functions the parser recognizes.
///
/// `abs` is also reachable through the absolute-value bar syntax `|...|`.
pub const FUNCTION_NAMES: [&str; 7] = ["abs", "sin", "cos", "tan", "csc", "sec", "cot"];

/// Returns whether `name` is a function the parser recognizes.
///
/// The lexer hands every identifier through untouched; this check runs at
/// parse time, where an unrecognized name becomes
/// [`crate::error::ParseError::UnknownFunction`].
///
/// ## Example
/// ```
/// use eqnp::parser::utils::is_known_function;
///
/// assert!(is_known_function("cos"));
/// assert!(!is_known_function("sqrt"));
/// ```
#[must_use]
pub fn is_known_function(name: &str) -> bool {
    FUNCTION_NAMES.contains(&name)
}
