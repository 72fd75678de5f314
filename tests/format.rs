use calcengine::{Context, evaluate_expression, format_number};

fn format_expression(text: &str) -> String {
    let value = evaluate_expression(text, &Context::new()).unwrap_or_else(|e| panic!("Evaluation of {text:?} failed: {e}"));
    format_number(value)
}

#[test]
fn integers_have_no_fraction() {
    assert_eq!(format_number(14.0), "14");
    assert_eq!(format_number(-3.0), "-3");
    assert_eq!(format_number(999_999_999.0), "999999999");
}

#[test]
fn large_plain_values_keep_their_digits() {
    assert_eq!(format_number(987_654_321.0), "987654321");
    assert_eq!(format_number(-987_654_321.0), "-987654321");
    assert_eq!(format_number(123_456_789.5), "123456789.5");
    assert_eq!(format_number(900_000_000.25), "900000000.25");
    assert_eq!(format_expression("987654321+0"), "987654321");
}

#[test]
fn fractions_round_to_ten_places() {
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(0.00011), "0.00011");
    assert_eq!(format_number(2.0_f64.sqrt()), "1.4142135624");
    assert_eq!(format_expression("1/3"), "0.3333333333");
    assert_eq!(format_expression("0.1+0.2"), "0.3");
}

#[test]
fn zero_has_no_sign() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_expression("-0"), "0");
}

#[test]
fn large_values_use_scientific_notation() {
    assert_eq!(format_number(1e9), "1.000000e+9");
    assert_eq!(format_number(123_456_789_012.0), "1.234568e+11");
    assert_eq!(format_number(-2.5e12), "-2.500000e+12");
    assert_eq!(format_expression("20!"), "2.432902e+18");
}

#[test]
fn small_values_use_scientific_notation() {
    assert_eq!(format_number(0.0001), "1.000000e-4");
    assert_eq!(format_number(0.00001), "1.000000e-5");
    assert_eq!(format_number(-3.2e-7), "-3.200000e-7");
}

#[test]
fn non_finite_values_are_errors() {
    assert_eq!(format_number(f64::NAN), "Error");
    assert_eq!(format_number(f64::INFINITY), "Error");
    assert_eq!(format_number(f64::NEG_INFINITY), "Error");
    assert_eq!(format_expression("1/0"), "Error");
    assert_eq!(format_expression("sqrt(-1)"), "Error");
}
