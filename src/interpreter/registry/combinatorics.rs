use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_u64_checked, u64_to_f64},
};

/// How far a factorial operand may stray from an integer and still count as
/// one, e.g. `(0.1*30)!`.
pub const FACTORIAL_TOLERANCE: f64 = 1e-9;

/// The largest `n` whose factorial is finite in `f64`; everything above
/// overflows to infinity.
const MAX_FINITE_FACTORIAL: u64 = 170;

/// Computes `n!` for a non-negative integer operand.
///
/// Operands within [`FACTORIAL_TOLERANCE`] of an integer are snapped to it.
/// Results that overflow `f64` are returned as `inf` rather than an error.
///
/// # Example
/// ```
/// use calcengine::interpreter::registry::combinatorics::factorial;
///
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert_eq!(factorial(6.0).unwrap(), 720.0);
/// assert!(factorial(2.5).is_err());
/// assert!(factorial(400.0).unwrap().is_infinite());
/// ```
pub fn factorial(value: f64) -> EvalResult<f64> {
    if !value.is_finite() {
        return Err(RuntimeError::domain("factorial of a non-finite value"));
    }
    let Some(n) = f64_to_u64_checked(value, FACTORIAL_TOLERANCE) else {
        return Err(RuntimeError::domain(format!("factorial is defined for non-negative integers, but found {value}")));
    };
    Ok(factorial_u64(n))
}

fn factorial_u64(n: u64) -> f64 {
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }
    (2..=n).fold(1.0, |acc, i| acc * u64_to_f64(i))
}

/// Validates the `(n, r)` operands shared by `nPr` and `nCr`.
///
/// Both must be exact non-negative integers with `r <= n`.
fn check_selection(name: &str, n: f64, r: f64) -> EvalResult<(u64, u64)> {
    let invalid = || RuntimeError::domain(format!("{name} is defined for integers with n ≥ r ≥ 0, but found {name}({n}, {r})"));

    let n = f64_to_u64_checked(n, 0.0).ok_or_else(invalid)?;
    let r = f64_to_u64_checked(r, 0.0).ok_or_else(invalid)?;
    if r > n {
        return Err(invalid());
    }
    Ok((n, r))
}

/// Number of ordered selections of `r` items out of `n`, `n! / (n - r)!`.
///
/// # Example
/// ```
/// use calcengine::interpreter::registry::combinatorics::permutations;
///
/// assert_eq!(permutations(5.0, 2.0).unwrap(), 20.0);
/// assert!(permutations(2.0, 5.0).is_err());
/// ```
pub fn permutations(n: f64, r: f64) -> EvalResult<f64> {
    let (n, r) = check_selection("nPr", n, r)?;

    let mut result = 1.0;
    for term in (n - r + 1)..=n {
        result *= u64_to_f64(term);
        if result.is_infinite() {
            break;
        }
    }
    Ok(result)
}

/// Binomial coefficient, `n! / (r! (n - r)!)`.
///
/// Computed multiplicatively over the shorter side so intermediate values
/// stay small.
///
/// # Example
/// ```
/// use calcengine::interpreter::registry::combinatorics::combinations;
///
/// assert_eq!(combinations(5.0, 2.0).unwrap(), 10.0);
/// assert_eq!(combinations(10.0, 0.0).unwrap(), 1.0);
/// assert!(combinations(4.0, 1.5).is_err());
/// ```
pub fn combinations(n: f64, r: f64) -> EvalResult<f64> {
    let (n, r) = check_selection("nCr", n, r)?;
    let k = r.min(n - r);

    let mut result = 1.0;
    for i in 1..=k {
        result = result * u64_to_f64(n - k + i) / u64_to_f64(i);
        if result.is_infinite() {
            break;
        }
    }
    Ok(result.round())
}
