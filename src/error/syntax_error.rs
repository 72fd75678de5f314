use thiserror::Error;

/// Represents all errors that can occur while converting tokens to RPN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A closing parenthesis had no opening partner, or an opening
    /// parenthesis was never closed.
    #[error("Mismatched parentheses.")]
    MismatchedParentheses,
    /// An argument separator appeared outside of any parenthesised group.
    #[error("Misplaced comma or mismatched parentheses.")]
    MisplacedComma,
}
