use log::{debug, trace};

use crate::{
    error::MatrixError,
    matrix::core::{Matrix, MatrixResult},
};

/// Pivots with a smaller magnitude than this are treated as zero.
pub const PIVOT_EPSILON: f64 = 1e-12;

/// Inverse of a square matrix by Gauss-Jordan elimination on `[A | I]`.
///
/// For every column the row with the largest magnitude at or below the
/// diagonal is swapped into the pivot position before elimination (partial
/// pivoting). The pivot row is normalised and the column is cleared in
/// every other row, so once all columns are processed the left half is the
/// identity and the right half is the inverse.
///
/// The augmented buffer is private to the call; `matrix` is not modified.
///
/// # Errors
/// - `Dimension` if the matrix is not square.
/// - `Singular` if a pivot's magnitude is below [`PIVOT_EPSILON`].
///
/// # Example
/// ```
/// use calcengine::matrix::{Matrix, inverse};
///
/// let m = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
/// let inv = inverse(&m).unwrap();
/// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!((inv[(1, 0)] + 0.2).abs() < 1e-12);
///
/// let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
/// assert!(inverse(&singular).is_err());
/// ```
pub fn inverse(matrix: &Matrix) -> MatrixResult<Matrix> {
    if !matrix.is_square() {
        let (rows, cols) = matrix.shape();
        return Err(MatrixError::dimension(format!("inverse is defined for square matrices, found {rows}x{cols}")));
    }
    let n = matrix.row_count();
    debug!("inverting a {n}x{n} matrix");

    let mut augmented: Vec<Vec<f64>> =
        matrix.rows()
              .iter()
              .enumerate()
              .map(|(i, row)| {
                  row.iter()
                     .copied()
                     .chain((0..n).map(|j| if i == j { 1.0 } else { 0.0 }))
                     .collect()
              })
              .collect();

    for col in 0..n {
        let pivot_row = (col..n).fold(col, |best, row| {
                                    if augmented[row][col].abs() > augmented[best][col].abs() {
                                        row
                                    } else {
                                        best
                                    }
                                });
        let pivot = augmented[pivot_row][col];
        trace!("column {col}: pivot {pivot} from row {pivot_row}");
        if pivot.abs() < PIVOT_EPSILON {
            return Err(MatrixError::Singular { column: col });
        }
        augmented.swap(col, pivot_row);

        for value in &mut augmented[col] {
            *value /= pivot;
        }

        let pivot_values = augmented[col].clone();
        for (row, values) in augmented.iter_mut().enumerate() {
            if row == col {
                continue;
            }
            let factor = values[col];
            if factor == 0.0 {
                continue;
            }
            for (value, pivot_value) in values.iter_mut().zip(&pivot_values) {
                *value -= factor * pivot_value;
            }
        }
    }

    let inverse_rows = augmented.into_iter().map(|row| row[n..].to_vec()).collect();
    Ok(Matrix::from_rows_unchecked(inverse_rows))
}
