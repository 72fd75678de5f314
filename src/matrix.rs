/// Element-wise arithmetic, products and transposition.
pub mod arithmetic;
/// The `Matrix` type, constructors, parsing and display.
pub mod core;
/// Determinant by cofactor expansion.
pub mod determinant;
/// Gauss-Jordan inverse with partial pivoting.
pub mod inverse;

pub use arithmetic::{add_matrices, multiply_matrices, subtract_matrices, transpose};
pub use core::{Matrix, MatrixResult, create_matrix, format_matrix};
pub use determinant::determinant;
pub use inverse::{PIVOT_EPSILON, inverse};
