//! Tests for the Bernoulli distribution

#[cfg(test)]
mod tests {
    use pmodels::{Bernoulli, Distribution, DistributionError};

    // Tests both outcomes of a biased trial
    // Verified by swapping the outcome arms
    #[test]
    fn test_bernoulli_outcomes() {
        let bernoulli = Bernoulli::new(0.3).unwrap();
        assert!((bernoulli.p(1).unwrap() - 0.3).abs() < f64::EPSILON);
        assert!((bernoulli.p(0).unwrap() - 0.7).abs() < f64::EPSILON);
        assert!((bernoulli.success() - 0.3).abs() < f64::EPSILON);
        assert!((bernoulli.failure() - 0.7).abs() < f64::EPSILON);
    }

    // Tests outcomes other than 0 and 1 are rejected
    // Verified by returning zero for other outcomes
    #[test]
    fn test_bernoulli_rejects_other_outcomes() {
        let bernoulli = Bernoulli::new(0.5).unwrap();
        for x in [-1, 2, 10] {
            match bernoulli.p(x) {
                Err(DistributionError::InvalidOutcome {
                    distribution,
                    outcome,
                    ..
                }) => {
                    assert_eq!(distribution, "Bernoulli");
                    assert_eq!(outcome, x);
                }
                other => unreachable!("Expected InvalidOutcome, got {other:?}"),
            }
        }
    }

    // Tests construction rejects probabilities outside [0, 1]
    // Verified by using an exclusive upper bound
    #[test]
    fn test_bernoulli_parameter_validation() {
        assert!(Bernoulli::new(-0.1).is_err());
        assert!(Bernoulli::new(1.1).is_err());
        assert!(Bernoulli::new(f64::NAN).is_err());
        assert!(Bernoulli::new(f64::INFINITY).is_err());
        assert!(Bernoulli::new(0.0).is_ok());
        assert!(Bernoulli::new(1.0).is_ok());
    }

    // Tests degenerate trials put all mass on one outcome
    // Verified by computing failure as the index
    #[test]
    fn test_bernoulli_degenerate() {
        let never = Bernoulli::new(0.0).unwrap();
        assert!((never.p(0).unwrap() - 1.0).abs() < f64::EPSILON);
        assert!(never.p(1).unwrap().abs() < f64::EPSILON);

        let always = Bernoulli::new(1.0).unwrap();
        assert!(always.p(0).unwrap().abs() < f64::EPSILON);
        assert!((always.p(1).unwrap() - 1.0).abs() < f64::EPSILON);
    }

    // Tests mean and variance closed forms
    // Verified by omitting the failure factor from the variance
    #[test]
    fn test_bernoulli_moments() {
        let bernoulli = Bernoulli::new(0.3).unwrap();
        assert!((bernoulli.mean() - 0.3).abs() < 1e-12);
        assert!((bernoulli.variance() - 0.21).abs() < 1e-12);
    }

    // Tests the descriptive rendering
    // Verified by changing the format string
    #[test]
    fn test_bernoulli_display() {
        assert_eq!(Bernoulli::new(0.3).unwrap().to_string(), "Bernoulli(0.3)");
    }
}
