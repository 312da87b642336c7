//! Movie rating arithmetic.
//!
//! A movie's `rate` is the plain, unweighted mean of every review rate it
//! holds. It is recomputed from the full set of existing rates each time a
//! review is added, so no running state is kept beyond the reviews
//! themselves.

/// Mean after appending `new_rate` to `existing`:
/// `(sum(existing) + new_rate) / (existing.len() + 1)`
pub fn running_mean(existing: &[f64], new_rate: f64) -> f64 {
    let total: f64 = existing.iter().sum::<f64>() + new_rate;
    total / (existing.len() + 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_review_sets_the_rate() {
        assert_eq!(running_mean(&[], 4.0), 4.0);
    }

    #[test]
    fn two_and_four_average_to_three() {
        let first = running_mean(&[], 2.0);
        assert_eq!(first, 2.0);
        assert_eq!(running_mean(&[2.0], 4.0), 3.0);
    }

    #[test]
    fn matches_mean_of_all_rates() {
        let existing = [1.0, 5.0, 3.5, 2.0];
        let expected = (1.0 + 5.0 + 3.5 + 2.0 + 4.5) / 5.0;
        assert!((running_mean(&existing, 4.5) - expected).abs() < f64::EPSILON);
    }
}
