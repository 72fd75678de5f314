use std::{ops::Index, str::FromStr};

use crate::{error::MatrixError, format::format_number};

/// Result type used by the matrix toolkit.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// A rectangular grid of numbers, stored row by row.
///
/// Every constructor checks that the grid has at least one row, at least one
/// column, and rows of identical length. Operations can therefore rely on
/// the shape without checking it again, and return new matrices instead of
/// mutating their operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// `Dimension` if there are no rows, no columns, or rows of different
    /// lengths.
    ///
    /// # Example
    /// ```
    /// use calcengine::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let Some(first) = rows.first() else {
            return Err(MatrixError::dimension("a matrix needs at least one row"));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(MatrixError::dimension("a matrix needs at least one column"));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MatrixError::dimension(format!("row {index} has {} column(s), expected {cols}",
                                                      row.len())));
        }
        Ok(Self { rows })
    }

    /// A `rows × cols` matrix with every cell set to `fill`.
    ///
    /// # Errors
    /// `Dimension` if either size is zero.
    pub fn filled(rows: usize, cols: usize, fill: f64) -> MatrixResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::dimension(format!("cannot create a {rows}x{cols} matrix")));
        }
        Ok(Self { rows: vec![vec![fill; cols]; rows] })
    }

    /// The `n × n` identity matrix.
    ///
    /// # Errors
    /// `Dimension` if `n` is zero.
    pub fn identity(n: usize) -> MatrixResult<Self> {
        let mut matrix = Self::filled(n, n, 0.0)?;
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Ok(matrix)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows[0].len()
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.col_count())
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.row_count() == self.col_count()
    }

    /// Cell at `row`, `col`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    /// Builds a `rows × cols` matrix whose cell `(r, c)` is `f(r, c)`.
    pub(crate) fn from_fn(rows: usize,
                          cols: usize,
                          mut f: impl FnMut(usize, usize) -> f64)
                          -> Self {
        Self { rows: (0..rows).map(|r| (0..cols).map(|c| f(r, c)).collect())
                              .collect() }
    }

    /// Wraps rows that are already known to be rectangular and non-empty.
    pub(crate) const fn from_rows_unchecked(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    /// Parses a literal such as `1,2;3,4`: rows separated by `;`, cells by
    /// `,`. Surrounding whitespace is ignored.
    ///
    /// ```
    /// use calcengine::matrix::Matrix;
    ///
    /// let m: Matrix = "1, 2; 3, 4".parse().unwrap();
    /// assert_eq!(m.rows(), &[vec![1.0, 2.0], vec![3.0, 4.0]]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.split(';')
                    .map(|row| {
                        row.split(',')
                           .map(|cell| {
                               let cell = cell.trim();
                               cell.parse::<f64>().map_err(|_| MatrixError::InvalidLiteral {
                                   details: format!("'{cell}' is not a number"),
                               })
                           })
                           .collect::<MatrixResult<Vec<f64>>>()
                    })
                    .collect::<MatrixResult<Vec<Vec<f64>>>>()?;
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_matrix(self))
    }
}

/// Creates a `rows × cols` matrix filled with `fill`.
///
/// # Errors
/// `Dimension` if either size is zero.
///
/// # Example
/// ```
/// use calcengine::matrix::create_matrix;
///
/// let m = create_matrix(2, 3, 0.0).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// ```
pub fn create_matrix(rows: usize, cols: usize, fill: f64) -> MatrixResult<Matrix> {
    Matrix::filled(rows, cols, fill)
}

/// Renders a matrix as lines of tab separated cells, each cell formatted by
/// [`format_number`].
///
/// # Example
/// ```
/// use calcengine::matrix::{Matrix, format_matrix};
///
/// let m = Matrix::from_rows(vec![vec![1.0, 0.5], vec![-2.0, 1e12]]).unwrap();
/// assert_eq!(format_matrix(&m), "1\t0.5\n-2\t1.000000e+12");
/// ```
#[must_use]
pub fn format_matrix(matrix: &Matrix) -> String {
    matrix.rows()
          .iter()
          .map(|row| {
              row.iter()
                 .map(|value| format_number(*value))
                 .collect::<Vec<_>>()
                 .join("\t")
          })
          .collect::<Vec<_>>()
          .join("\n")
}
