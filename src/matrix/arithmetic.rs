use log::debug;

use crate::{
    error::MatrixError,
    matrix::core::{Matrix, MatrixResult},
};

/// Builds the error for two operands whose shapes do not fit.
fn dim_mismatch(operation: &str, left: &Matrix, right: &Matrix) -> MatrixError {
    let (lr, lc) = left.shape();
    let (rr, rc) = right.shape();
    MatrixError::dimension(format!("cannot {operation} a {lr}x{lc} and a {rr}x{rc} matrix"))
}

/// Applies `op` cell by cell to two matrices of identical shape.
fn elementwise(operation: &str,
               left: &Matrix,
               right: &Matrix,
               op: impl Fn(f64, f64) -> f64)
               -> MatrixResult<Matrix> {
    if left.shape() != right.shape() {
        return Err(dim_mismatch(operation, left, right));
    }
    let (rows, cols) = left.shape();
    Ok(Matrix::from_fn(rows, cols, |r, c| op(left[(r, c)], right[(r, c)])))
}

/// Element-wise sum of two matrices of identical shape.
///
/// # Errors
/// `Dimension` if the shapes differ.
///
/// # Example
/// ```
/// use calcengine::matrix::{Matrix, add_matrices};
///
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
///
/// assert_eq!(add_matrices(&a, &a).unwrap().rows(), &[vec![2.0, 4.0]]);
/// assert!(add_matrices(&a, &b).is_err());
/// ```
pub fn add_matrices(left: &Matrix, right: &Matrix) -> MatrixResult<Matrix> {
    elementwise("add", left, right, |a, b| a + b)
}

/// Element-wise difference of two matrices of identical shape.
///
/// # Errors
/// `Dimension` if the shapes differ.
pub fn subtract_matrices(left: &Matrix, right: &Matrix) -> MatrixResult<Matrix> {
    elementwise("subtract", left, right, |a, b| a - b)
}

/// Matrix product `left · right`.
///
/// Each result cell is the dot product of a row of `left` and a column of
/// `right`, accumulated in index order.
///
/// # Errors
/// `Dimension` if the column count of `left` differs from the row count of
/// `right`.
///
/// # Example
/// ```
/// use calcengine::matrix::{Matrix, multiply_matrices};
///
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let v = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
///
/// let product = multiply_matrices(&a, &v).unwrap();
/// assert_eq!(product.rows(), &[vec![5.0], vec![11.0]]);
/// ```
pub fn multiply_matrices(left: &Matrix, right: &Matrix) -> MatrixResult<Matrix> {
    if left.col_count() != right.row_count() {
        return Err(dim_mismatch("multiply", left, right));
    }
    debug!("multiplying {:?} by {:?}", left.shape(), right.shape());

    let inner = left.col_count();
    Ok(Matrix::from_fn(left.row_count(), right.col_count(), |r, c| {
        (0..inner).fold(0.0, |sum, k| sum + left[(r, k)] * right[(k, c)])
    }))
}

/// Swaps rows and columns.
///
/// ```
/// use calcengine::matrix::{Matrix, transpose};
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
/// assert_eq!(transpose(&m).rows(), &[vec![1.0], vec![2.0], vec![3.0]]);
/// ```
#[must_use]
pub fn transpose(matrix: &Matrix) -> Matrix {
    let (rows, cols) = matrix.shape();
    Matrix::from_fn(cols, rows, |r, c| matrix[(c, r)])
}
