use calcengine::{Statistics, compute_statistics};

fn stats(values: &[f64]) -> Statistics {
    compute_statistics(values).unwrap_or_else(|| panic!("No statistics for {values:?}"))
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}");
}

#[test]
fn odd_sample() {
    let s = stats(&[1.0, 2.0, 3.0, 4.0, 5.0]);

    assert_eq!(s.count, 5);
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 5.0);
    assert_eq!(s.sum, 15.0);
    assert_eq!(s.mean, 3.0);
    assert_eq!(s.median, 3.0);
    assert_close(s.variance, 2.0);
    assert_close(s.std_dev, 2.0_f64.sqrt());
    assert_close(s.sample_variance, 2.5);
    assert_close(s.sample_std_dev, 2.5_f64.sqrt());
}

#[test]
fn even_sample_uses_middle_pair() {
    let s = stats(&[4.0, 1.0, 3.0, 2.0]);

    assert_eq!(s.median, 2.5);
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 4.0);
    assert_eq!(s.sum, 10.0);
    assert_eq!(s.mean, 2.5);
}

#[test]
fn unsorted_input_is_not_reordered() {
    let values = [9.0, -1.0, 4.0];
    let s = stats(&values);

    assert_eq!(s.median, 4.0);
    assert_eq!(values, [9.0, -1.0, 4.0]);
}

#[test]
fn single_value() {
    let s = stats(&[42.0]);

    assert_eq!(s.count, 1);
    assert_eq!(s.min, 42.0);
    assert_eq!(s.max, 42.0);
    assert_eq!(s.median, 42.0);
    assert_eq!(s.variance, 0.0);
    assert_eq!(s.sample_variance, 0.0);
    assert_eq!(s.sample_std_dev, 0.0);
}

#[test]
fn negative_values() {
    let s = stats(&[-2.0, -4.0, -6.0]);

    assert_eq!(s.min, -6.0);
    assert_eq!(s.max, -2.0);
    assert_eq!(s.mean, -4.0);
    assert_eq!(s.median, -4.0);
    assert_close(s.variance, 8.0 / 3.0);
    assert_close(s.sample_variance, 4.0);
}

#[test]
fn constant_sample_has_no_spread() {
    let s = stats(&[7.5; 6]);

    assert_eq!(s.mean, 7.5);
    assert_eq!(s.variance, 0.0);
    assert_eq!(s.std_dev, 0.0);
}

#[test]
fn empty_sample() {
    assert_eq!(compute_statistics(&[]), None);
}
