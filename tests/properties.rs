//! Property-based tests for the expression engine, the matrix toolkit and
//! the statistics summary.

use calcengine::{
    Context, compute_statistics, evaluate_expression, format_number,
    interpreter::lexer::tokenize,
    matrix::{Matrix, determinant, inverse, multiply_matrices},
};
use proptest::prelude::*;

/// Square matrices whose diagonal dominates each row, which keeps them
/// invertible and well conditioned.
fn dominant_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..6).prop_flat_map(|n| {
                   prop::collection::vec(-1.0f64..1.0, n * n).prop_map(move |cells| {
                       let rows = cells.chunks(n)
                                       .enumerate()
                                       .map(|(i, chunk)| {
                                           let mut row = chunk.to_vec();
                                           row[i] = if row[i] < 0.0 { -(n as f64) - 1.0 } else { n as f64 + 1.0 };
                                           row
                                       })
                                       .collect();
                       Matrix::from_rows(rows).unwrap()
                   })
               })
}

// ── Expressions ──────────────────────────────────────────────────────

proptest! {
    /// Integer arithmetic with mixed precedence and negative operands
    /// agrees with native arithmetic.
    #[test]
    fn integer_arithmetic_matches_native(a in -1000i32..1000,
                                         b in -1000i32..1000,
                                         c in -1000i32..1000,
                                         d in -1000i32..1000) {
        let text = format!("{a}+{b}*{c}-{d}");
        let value = evaluate_expression(&text, &Context::new()).unwrap();
        let expected = f64::from(a) + f64::from(b) * f64::from(c) - f64::from(d);
        prop_assert_eq!(value, expected, "{}", text);
    }

    /// `a^b^c` groups as `a^(b^c)`.
    #[test]
    fn power_is_right_associative(a in 1u8..4, b in 0u8..3, c in 0u8..3) {
        let text = format!("{a}^{b}^{c}");
        let value = evaluate_expression(&text, &Context::new()).unwrap();
        let expected = f64::from(a).powf(f64::from(b).powf(f64::from(c)));
        prop_assert_eq!(value, expected, "{}", text);
    }

    /// Variables resolve to whatever the context binds.
    #[test]
    fn bound_variable_round_trips(value in -1e6f64..1e6) {
        let context = Context::new().with_variable("x", value);
        prop_assert_eq!(evaluate_expression("x", &context).unwrap(), value);
        prop_assert_eq!(evaluate_expression("2x", &context).unwrap(), 2.0 * value);
    }

    /// The tokenizer reports errors instead of panicking.
    #[test]
    fn tokenize_never_panics(text in "\\PC*") {
        let _ = tokenize(&text);
    }

    /// Evaluation never panics, whatever the input.
    #[test]
    fn evaluate_never_panics(text in "[0-9a-z+*/^!(),. -]{0,24}") {
        let _ = evaluate_expression(&text, &Context::new());
    }
}

// ── Formatting ───────────────────────────────────────────────────────

proptest! {
    /// Exactly the non-finite values render as `Error`.
    #[test]
    fn format_error_iff_non_finite(value in any::<f64>()) {
        prop_assert_eq!(format_number(value) == "Error", !value.is_finite());
    }

    /// Plain output parses back within the rounding step.
    #[test]
    fn plain_format_parses_back(value in -1e8f64..1e8) {
        prop_assume!(value.abs() > 1e-4);
        let parsed: f64 = format_number(value).parse().unwrap();
        prop_assert!((parsed - value).abs() <= 1e-10 * value.abs().max(1.0));
    }
}

// ── Matrices ─────────────────────────────────────────────────────────

proptest! {
    /// `A · A⁻¹ = I` for well-conditioned matrices.
    #[test]
    fn inverse_round_trips(m in dominant_matrix()) {
        let inv = inverse(&m).unwrap();
        let product = multiply_matrices(&m, &inv).unwrap();
        let n = m.row_count();

        for r in 0..n {
            for c in 0..n {
                let expected = if r == c { 1.0 } else { 0.0 };
                prop_assert!((product[(r, c)] - expected).abs() < 1e-9,
                    "cell ({}, {}) = {}", r, c, product[(r, c)]);
            }
        }
    }

    /// `det(A⁻¹) = 1 / det(A)`.
    #[test]
    fn inverse_determinant_is_reciprocal(m in dominant_matrix()) {
        let det = determinant(&m).unwrap();
        let inv_det = determinant(&inverse(&m).unwrap()).unwrap();
        prop_assert!((det * inv_det - 1.0).abs() < 1e-9);
    }

    /// Identity matrices have determinant 1.
    #[test]
    fn identity_determinant_is_one(n in 1usize..7) {
        prop_assert_eq!(determinant(&Matrix::identity(n).unwrap()).unwrap(), 1.0);
    }
}

// ── Statistics ───────────────────────────────────────────────────────

proptest! {
    /// Location measures lie within the sample range and spreads are
    /// non-negative.
    #[test]
    fn statistics_are_ordered(values in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let stats = compute_statistics(&values).unwrap();
        let slack = 1e-6;

        prop_assert_eq!(stats.count, values.len());
        prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
        prop_assert!(stats.min - slack <= stats.mean && stats.mean <= stats.max + slack);
        prop_assert!(stats.variance >= 0.0);
        prop_assert!(stats.sample_variance >= stats.variance);
        prop_assert!((stats.std_dev * stats.std_dev - stats.variance).abs() <= 1e-6 * stats.variance.max(1.0));
    }
}
