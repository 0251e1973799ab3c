//! Small numeric helpers shared by the indicator math and the risk assessment.
//!
//! Every function is total: empty input yields a documented neutral value
//! instead of NaN.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (divisor = n, not n - 1).
pub fn population_std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let variance = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Largest value in the slice, or `None` when empty.
pub fn highest(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

/// Smallest value in the slice, or `None` when empty.
pub fn lowest(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}

/// Simple period-over-period returns: `(x[i] - x[i-1]) / x[i-1]`.
/// Pairs with a zero base are skipped.
pub fn simple_returns(data: &[f64]) -> Vec<f64> {
    data.windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_std_dev_uses_n_divisor() {
        // mean 5, squared deviations sum 32, n = 8 -> variance 4
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&data), 2.0);
    }

    #[test]
    fn test_std_dev_of_constant_is_zero() {
        assert_eq!(population_std_dev(&[7.0; 10]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_highest_lowest() {
        let data = [3.0, 9.0, -1.0, 4.0];
        assert_eq!(highest(&data), Some(9.0));
        assert_eq!(lowest(&data), Some(-1.0));
        assert_eq!(highest(&[]), None);
    }

    #[test]
    fn test_simple_returns() {
        let r = simple_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0], 0.1);
        assert_relative_eq!(r[1], -0.1);
    }
}
