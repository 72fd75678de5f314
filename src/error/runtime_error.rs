use thiserror::Error;

/// Represents all errors that can occur during RPN evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An operator or function received operands outside of its domain,
    /// e.g. the factorial of a negative number.
    #[error("Domain error: {details}.")]
    Domain {
        /// Human readable cause.
        details: String,
    },
    /// A variable token named something the context does not bind.
    #[error("Unknown variable: {name}.")]
    UnknownVariable {
        /// The name exactly as written in the expression.
        name: String,
    },
    /// The value stack did not end up with exactly one element, or an
    /// operator found fewer operands than its arity.
    #[error("Invalid expression: {details}.")]
    InvalidExpression {
        /// What went wrong with the stack.
        details: String,
    },
}

impl RuntimeError {
    /// Shorthand for a [`RuntimeError::Domain`] error.
    pub fn domain(details: impl Into<String>) -> Self {
        Self::Domain { details: details.into() }
    }
}
