use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning raw expression text into tokens: characters that
/// belong to no token class and numeric literals that do not describe a finite
/// number.
pub mod lex_error;
/// Matrix errors.
///
/// Shape violations and singular inputs reported by the matrix toolkit.
pub mod matrix_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while running an RPN sequence
/// on the value stack: math-domain violations, unresolved variables and
/// malformed postfix input.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the shunting-yard parser for unbalanced parentheses and argument
/// separators that appear outside of a function call.
pub mod syntax_error;

pub use lex_error::LexError;
pub use matrix_error::MatrixError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure of the expression pipeline.
///
/// Each stage keeps its own error type; this enum lets
/// [`evaluate_expression`](crate::evaluate_expression) propagate all of them
/// with `?` while callers can still match on the stage that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token sequence.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The evaluator failed on the RPN sequence.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
