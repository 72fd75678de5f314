use crate::{
    error::MatrixError,
    matrix::core::{Matrix, MatrixResult},
};

/// Determinant of a square matrix.
///
/// `1×1` and `2×2` are computed directly. Larger matrices use cofactor
/// expansion along the first row,
/// `det(A) = Σ_c (-1)^c · a[0][c] · det(minor(0, c))`.
///
/// Cofactor expansion costs `O(n!)`. It is meant for the small matrices a
/// calculator handles (up to 4×4 in practice); anything much larger should
/// go through an LU decomposition instead.
///
/// # Errors
/// `Dimension` if the matrix is not square.
///
/// # Example
/// ```
/// use calcengine::matrix::{Matrix, determinant};
///
/// let m = Matrix::from_rows(vec![vec![2.0, 0.0, 1.0],
///                                vec![1.0, 3.0, 2.0],
///                                vec![1.0, 1.0, 2.0]]).unwrap();
/// assert_eq!(determinant(&m).unwrap(), 6.0);
///
/// let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
/// assert_eq!(determinant(&singular).unwrap(), 0.0);
/// ```
pub fn determinant(matrix: &Matrix) -> MatrixResult<f64> {
    if !matrix.is_square() {
        let (rows, cols) = matrix.shape();
        return Err(MatrixError::dimension(format!("determinant is defined for square matrices, found {rows}x{cols}")));
    }
    Ok(cofactor_expansion(matrix.rows()))
}

// TODO: switch to LU decomposition once matrices above 8x8 are accepted.
fn cofactor_expansion(rows: &[Vec<f64>]) -> f64 {
    match rows {
        [row] => row[0],
        [top, bottom] => top[0] * bottom[1] - top[1] * bottom[0],
        _ => {
            let (top, rest) = (&rows[0], &rows[1..]);
            top.iter()
               .enumerate()
               .map(|(col, value)| {
                   let minor: Vec<Vec<f64>> = rest.iter()
                                                  .map(|row| {
                                                      row.iter()
                                                         .enumerate()
                                                         .filter(|(c, _)| *c != col)
                                                         .map(|(_, v)| *v)
                                                         .collect()
                                                  })
                                                  .collect();
                   let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                   sign * value * cofactor_expansion(&minor)
               })
               .sum()
        },
    }
}
