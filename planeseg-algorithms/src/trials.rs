//! Adaptive RANSAC trial-count estimation

/// Number of trials needed so that, with probability `confidence`, at
/// least one trial samples a triple made entirely of inliers, given the
/// best inlier ratio seen so far:
///
/// ```text
/// trials = log(1 - confidence) / log(1 - (inliers / total)^3)
/// ```
///
/// rounded to the nearest integer and clamped to `cap`. The exponent 3 is
/// the minimal sample size for a plane.
///
/// With zero inliers (or an empty cloud) the denominator is log(1) = 0;
/// that case returns `cap` instead of dividing. An inlier ratio of 1
/// yields 0 — callers that loop do-while style still run at least one
/// trial.
pub fn required_trials(
    confidence: f64,
    inlier_count: usize,
    total_points: usize,
    cap: usize,
) -> usize {
    if inlier_count == 0 || total_points == 0 {
        return cap;
    }

    let ratio = inlier_count as f64 / total_points as f64;
    let denominator = (1.0 - ratio.powi(3)).ln();
    if denominator == 0.0 {
        // ratio^3 underflowed to zero; behave as if there were no inliers
        return cap;
    }

    // The 0.5 is for rounding.
    let trials = 0.5 + (1.0 - confidence).ln() / denominator;
    (trials as usize).min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP: usize = 10_000;

    #[test]
    fn test_zero_inliers_returns_cap() {
        assert_eq!(required_trials(0.9, 0, 100, CAP), CAP);
    }

    #[test]
    fn test_empty_cloud_returns_cap() {
        assert_eq!(required_trials(0.9, 0, 0, CAP), CAP);
    }

    #[test]
    fn test_all_inliers_needs_no_further_trials() {
        assert_eq!(required_trials(0.9, 100, 100, CAP), 0);
    }

    #[test]
    fn test_known_value() {
        // w = 0.5, w^3 = 0.125: log(0.1) / log(0.875) = 17.24..., rounds to 17
        assert_eq!(required_trials(0.9, 50, 100, CAP), 17);
    }

    #[test]
    fn test_monotonically_non_increasing_in_inlier_count() {
        let mut previous = required_trials(0.9, 1, 1000, CAP);
        for inliers in 2..=1000 {
            let current = required_trials(0.9, inliers, 1000, CAP);
            assert!(
                current <= previous,
                "trials increased at {} inliers: {} > {}",
                inliers,
                current,
                previous
            );
            previous = current;
        }
    }

    #[test]
    fn test_higher_confidence_needs_more_trials() {
        assert!(required_trials(0.99, 30, 100, CAP) >= required_trials(0.9, 30, 100, CAP));
    }

    #[test]
    fn test_clamped_to_cap() {
        // One inlier in a large cloud would need astronomically many trials
        assert_eq!(required_trials(0.9, 1, 1_000_000, CAP), CAP);
    }
}
