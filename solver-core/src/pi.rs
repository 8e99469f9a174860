use crate::error::ConfigError;
use crate::par;

/// Midpoint-rule estimate of `pi = integral over [0, 1] of 4 / (1 + x^2)`.
pub fn estimate_pi(intervals: i64) -> Result<f64, ConfigError> {
    if intervals <= 0 {
        return Err(ConfigError::NonPositiveIntervals(intervals));
    }
    let count = intervals as usize;
    let width = 1.0 / count as f64;

    let sum = par::sum_over(count, |k| {
        let x = (k as f64 + 0.5) * width;
        4.0 / (1.0 + x * x)
    });
    Ok(sum * width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn converges_to_pi() {
        let coarse = estimate_pi(10).unwrap();
        let fine = estimate_pi(100_000).unwrap();
        assert!((coarse - PI).abs() < 1e-2);
        assert!((fine - PI).abs() < 1e-9);
        assert!((fine - PI).abs() < (coarse - PI).abs());
    }

    #[test]
    fn single_interval_uses_midpoint() {
        assert_eq!(estimate_pi(1).unwrap(), 4.0 / 1.25);
    }

    #[test]
    fn rejects_non_positive_counts() {
        assert_eq!(estimate_pi(0), Err(ConfigError::NonPositiveIntervals(0)));
        assert_eq!(estimate_pi(-7), Err(ConfigError::NonPositiveIntervals(-7)));
    }
}
