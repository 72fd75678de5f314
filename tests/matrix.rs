use calcengine::{
    error::MatrixError,
    matrix::{
        Matrix, add_matrices, create_matrix, determinant, format_matrix, inverse,
        multiply_matrices, subtract_matrices, transpose,
    },
};

fn matrix(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap_or_else(|e| panic!("Invalid matrix {rows:?}: {e}"))
}

fn assert_identity(m: &Matrix, tolerance: f64) {
    let (rows, cols) = m.shape();
    assert_eq!(rows, cols, "{m:?} is not square");
    for r in 0..rows {
        for c in 0..cols {
            let expected = if r == c { 1.0 } else { 0.0 };
            assert!((m[(r, c)] - expected).abs() < tolerance,
                    "cell ({r}, {c}) is {}, expected {expected}",
                    m[(r, c)]);
        }
    }
}

fn is_dimension_error<T: std::fmt::Debug>(result: Result<T, MatrixError>) -> bool {
    matches!(result, Err(MatrixError::Dimension { .. }))
}

#[test]
fn create_matrix_fills_every_cell() {
    let m = create_matrix(2, 3, 1.5).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert!(m.rows().iter().flatten().all(|value| *value == 1.5));

    assert!(is_dimension_error(create_matrix(0, 3, 0.0)));
    assert!(is_dimension_error(create_matrix(3, 0, 0.0)));
}

#[test]
fn cell_access() {
    let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);

    assert_eq!(m.get(1, 0), Some(3.0));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.get(0, 2), None);
    assert_eq!(m.clone().into_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn from_rows_rejects_ragged_and_empty_grids() {
    assert!(is_dimension_error(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]])));
    assert!(is_dimension_error(Matrix::from_rows(vec![])));
    assert!(is_dimension_error(Matrix::from_rows(vec![vec![]])));
}

#[test]
fn element_wise_arithmetic() {
    let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = matrix(&[&[5.0, 6.0], &[7.0, 8.0]]);

    assert_eq!(add_matrices(&a, &b).unwrap(), matrix(&[&[6.0, 8.0], &[10.0, 12.0]]));
    assert_eq!(subtract_matrices(&b, &a).unwrap(), matrix(&[&[4.0, 4.0], &[4.0, 4.0]]));
}

#[test]
fn element_wise_arithmetic_checks_shapes() {
    let row = matrix(&[&[1.0, 2.0]]);
    let column = matrix(&[&[1.0], &[2.0]]);

    assert!(is_dimension_error(add_matrices(&row, &column)));
    assert!(is_dimension_error(subtract_matrices(&row, &column)));
}

#[test]
fn matrix_product() {
    let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let b = matrix(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);

    assert_eq!(multiply_matrices(&a, &b).unwrap(),
               matrix(&[&[58.0, 64.0], &[139.0, 154.0]]));
    assert_eq!(multiply_matrices(&b, &a).unwrap().shape(), (3, 3));
    assert!(is_dimension_error(multiply_matrices(&a, &a)));
}

#[test]
fn transpose_swaps_shape() {
    let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = transpose(&a);
    assert_eq!(t, matrix(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
    assert_eq!(transpose(&t), a);
}

#[test]
fn determinant_small_cases() {
    assert_eq!(determinant(&matrix(&[&[-3.5]])).unwrap(), -3.5);
    assert_eq!(determinant(&matrix(&[&[1.0, 2.0], &[3.0, 4.0]])).unwrap(), -2.0);
    assert_eq!(determinant(&matrix(&[&[6.0, 1.0, 1.0], &[4.0, -2.0, 5.0], &[2.0, 8.0, 7.0]])).unwrap(),
               -306.0);
    assert_eq!(determinant(&matrix(&[&[1.0, 0.0, 2.0, -1.0],
                                     &[3.0, 0.0, 0.0, 5.0],
                                     &[2.0, 1.0, 4.0, -3.0],
                                     &[1.0, 0.0, 5.0, 0.0]])).unwrap(),
               30.0);
}

#[test]
fn determinant_of_identity_is_one() {
    for n in 1..=6 {
        assert_eq!(determinant(&Matrix::identity(n).unwrap()).unwrap(), 1.0, "n = {n}");
    }
}

#[test]
fn determinant_requires_square_matrix() {
    assert!(is_dimension_error(determinant(&matrix(&[&[1.0, 2.0]]))));
}

#[test]
fn singular_matrix() {
    let singular = matrix(&[&[1.0, 2.0], &[2.0, 4.0]]);

    assert_eq!(determinant(&singular).unwrap(), 0.0);
    assert_eq!(inverse(&singular), Err(MatrixError::Singular { column: 1 }));
    assert_eq!(inverse(&matrix(&[&[0.0]])), Err(MatrixError::Singular { column: 0 }));
}

#[test]
fn inverse_of_known_matrix() {
    let m = matrix(&[&[4.0, 7.0], &[2.0, 6.0]]);
    let inv = inverse(&m).unwrap();
    let expected = [[0.6, -0.7], [-0.2, 0.4]];

    for (r, row) in expected.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            assert!((inv[(r, c)] - value).abs() < 1e-12);
        }
    }
}

#[test]
fn inverse_needs_pivoting() {
    // A zero in the top-left corner fails without a row swap.
    let m = matrix(&[&[0.0, 1.0, 2.0], &[1.0, 0.0, 3.0], &[4.0, -3.0, 8.0]]);
    let inv = inverse(&m).unwrap();

    assert_identity(&multiply_matrices(&m, &inv).unwrap(), 1e-9);
    assert_identity(&multiply_matrices(&inv, &m).unwrap(), 1e-9);
}

#[test]
fn inverse_leaves_input_untouched() {
    let m = matrix(&[&[2.0, 1.0], &[1.0, 3.0]]);
    let before = m.clone();
    let _ = inverse(&m).unwrap();
    assert_eq!(m, before);
}

#[test]
fn inverse_requires_square_matrix() {
    assert!(is_dimension_error(inverse(&matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]))));
}

#[test]
fn format_matrix_uses_tabs_and_newlines() {
    let m = matrix(&[&[1.0, 2.5], &[1.0 / 3.0, f64::NAN]]);
    assert_eq!(format_matrix(&m), "1\t2.5\n0.3333333333\tError");
    assert_eq!(m.to_string(), format_matrix(&m));
}

#[test]
fn parse_matrix_literals() {
    let m: Matrix = "1,2;3,4".parse().unwrap();
    assert_eq!(m, matrix(&[&[1.0, 2.0], &[3.0, 4.0]]));

    let m: Matrix = " -1.5 , 2 ".parse().unwrap();
    assert_eq!(m, matrix(&[&[-1.5, 2.0]]));

    assert!(is_dimension_error("1,2;3".parse::<Matrix>()));
    assert!(matches!("1,a".parse::<Matrix>(), Err(MatrixError::InvalidLiteral { .. })));
}
