use thiserror::Error;

/// Represents all errors raised by the matrix toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible with the requested operation, or a
    /// grid is empty or ragged.
    #[error("Dimension error: {details}.")]
    Dimension {
        /// Details describing the shape mismatch.
        details: String,
    },
    /// Gauss-Jordan elimination found no usable pivot in a column.
    #[error("Matrix is singular (no pivot in column {column}).")]
    Singular {
        /// Zero-based column where elimination stopped.
        column: usize,
    },
    /// A matrix literal could not be read.
    #[error("Invalid matrix literal: {details}.")]
    InvalidLiteral {
        /// What was wrong with the literal.
        details: String,
    },
}

impl MatrixError {
    /// Shorthand for a [`MatrixError::Dimension`] error.
    pub fn dimension(details: impl Into<String>) -> Self {
        Self::Dimension { details: details.into() }
    }
}
