/// Magnitude from which values switch to scientific notation.
pub const SCIENTIFIC_UPPER: f64 = 1e9;
/// Magnitude at or below which non-zero values switch to scientific notation.
pub const SCIENTIFIC_LOWER: f64 = 1e-4;

/// Renders a number for display.
///
/// - `NaN` and infinities render as `Error`.
/// - Values with magnitude `>= 1e9`, or non-zero with magnitude `<= 1e-4`,
///   render in scientific notation with 6 fractional digits, e.g.
///   `1.234568e+11`.
/// - Everything else is rounded to 10 decimal places and printed without
///   trailing zeros.
///
/// The output never depends on the host locale.
///
/// # Example
/// ```
/// use calcengine::format::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(3.14159265358979), "3.1415926536");
/// assert_eq!(format_number(987654321.0), "987654321");
/// assert_eq!(format_number(123456789012.0), "1.234568e+11");
/// assert_eq!(format_number(0.00001), "1.000000e-5");
/// assert_eq!(format_number(f64::NAN), "Error");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "Error".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER || (magnitude > 0.0 && magnitude <= SCIENTIFIC_LOWER) {
        return format_scientific(value);
    }

    // Round on the decimal digits so integers below 1e9 print exactly.
    let fixed = format!("{value:.10}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// `mantissa e sign exponent`, with an explicit `+` on non-negative
/// exponents.
fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}
