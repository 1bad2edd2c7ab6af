//! Tests for treating the distribution family through one trait object

#[cfg(test)]
mod tests {
    use pmodels::{
        Bernoulli, Binomial, Distribution, DistributionError, Geometric, Poisson, Result, Uniform,
    };
    use std::fmt;

    fn family() -> Vec<Box<dyn Distribution>> {
        vec![
            Box::new(Bernoulli::new(0.3).unwrap()),
            Box::new(Binomial::new(4, 0.5).unwrap()),
            Box::new(Geometric::new(0.25).unwrap()),
            Box::new(Poisson::new(2.0).unwrap()),
            Box::new(Uniform::new(5, 1).unwrap()),
        ]
    }

    // Tests each distribution is reachable through the trait object
    // Verified by changing a distribution name
    #[test]
    fn test_family_names_and_rendering() {
        let rendered: Vec<String> = family().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Bernoulli(0.3)", "B(4, 0.5)", "G(0.25)", "Po(2)", "U(1, 5)"]
        );

        let names: Vec<&str> = family().iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec!["Bernoulli", "Binomial", "Geometric", "Poisson", "Uniform"]
        );
    }

    // Tests the mass at x = 1 dispatches to each implementation
    // Verified by routing every distribution to the Bernoulli mass
    #[test]
    fn test_family_mass_dispatch() {
        let expected = [0.3, 0.25, 0.25, 2.0 * (-2.0_f64).exp(), 0.2];
        for (distribution, want) in family().iter().zip(expected) {
            let got = distribution.p(1).unwrap();
            assert!((got - want).abs() < 1e-12, "{distribution}: {got} vs {want}");
        }
    }

    // Tests only the geometric distribution overrides the cumulative function
    // Verified by making the default return zero
    #[test]
    fn test_family_cdf_support() {
        for distribution in family() {
            let result = distribution.cdf(1);
            if distribution.name() == "Geometric" {
                assert!(result.is_ok());
            } else {
                assert!(matches!(
                    result,
                    Err(DistributionError::Unsupported { operation: "cdf", .. })
                ));
            }
        }
    }

    struct Degenerate;

    impl fmt::Display for Degenerate {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Degenerate")
        }
    }

    impl Distribution for Degenerate {
        fn name(&self) -> &'static str {
            "Degenerate"
        }

        fn p(&self, x: i64) -> Result<f64> {
            Ok(if x == 0 { 1.0 } else { 0.0 })
        }

        fn mean(&self) -> f64 {
            0.0
        }

        fn variance(&self) -> f64 {
            0.0
        }
    }

    // Tests the default cumulative function names the implementing distribution
    // Verified by hardcoding the name in the default
    #[test]
    fn test_default_cdf_is_unsupported() {
        let error = Degenerate.cdf(0).unwrap_err();
        assert_eq!(error.to_string(), "Degenerate does not support cdf");
        assert!((Degenerate.p(0).unwrap() - 1.0).abs() < f64::EPSILON);
        assert!(Degenerate.mean().abs() < f64::EPSILON);
        assert!(Degenerate.variance().abs() < f64::EPSILON);
    }

    // Tests distributions can be shared across threads
    // Verified by adding a non-Sync field
    #[test]
    fn test_family_is_thread_safe() {
        let binomial = Binomial::new(10, 0.3).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|x| std::thread::spawn(move || binomial.p(x).unwrap()))
            .collect();
        for (x, handle) in handles.into_iter().enumerate() {
            let threaded = handle.join().unwrap();
            assert!((threaded - binomial.p(x as i64).unwrap()).abs() < f64::EPSILON);
        }
    }
}
