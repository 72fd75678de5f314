use log::debug;

use crate::util::num::usize_to_f64;

/// Descriptive statistics of a non-empty sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub count:           usize,
    pub min:             f64,
    pub max:             f64,
    pub sum:             f64,
    pub mean:            f64,
    /// Middle value, or the mean of the two middle values for even counts.
    pub median:          f64,
    /// Population variance, dividing by `n`.
    pub variance:        f64,
    /// Population standard deviation.
    pub std_dev:         f64,
    /// Sample variance, dividing by `n - 1`; `0` for a single value.
    pub sample_variance: f64,
    /// Sample standard deviation.
    pub sample_std_dev:  f64,
}

/// Computes descriptive statistics of `values`.
///
/// Returns `None` for an empty slice. Values are sorted on a copy; the input
/// is left untouched.
///
/// # Example
/// ```
/// use calcengine::statistics::compute_statistics;
///
/// let stats = compute_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
///
/// assert_eq!(stats.mean, 3.0);
/// assert_eq!(stats.median, 3.0);
/// assert!((stats.std_dev - 1.4142).abs() < 1e-4);
/// assert!((stats.sample_std_dev - 1.5811).abs() < 1e-4);
///
/// assert!(compute_statistics(&[]).is_none());
/// ```
#[must_use]
pub fn compute_statistics(values: &[f64]) -> Option<Statistics> {
    if values.is_empty() {
        return None;
    }
    debug!("computing statistics over {} value(s)", values.len());

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = values.len();
    let n = usize_to_f64(count);
    let sum: f64 = values.iter().sum();
    let mean = sum / n;

    let middle = count / 2;
    let median = if count % 2 == 0 {
        f64::midpoint(sorted[middle - 1], sorted[middle])
    } else {
        sorted[middle]
    };

    let squared_deviations: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    let variance = squared_deviations / n;
    let sample_variance = if count > 1 {
        squared_deviations / usize_to_f64(count - 1)
    } else {
        0.0
    };

    Some(Statistics { count,
                      min: sorted[0],
                      max: sorted[count - 1],
                      sum,
                      mean,
                      median,
                      variance,
                      std_dev: variance.sqrt(),
                      sample_variance,
                      sample_std_dev: sample_variance.sqrt() })
}
