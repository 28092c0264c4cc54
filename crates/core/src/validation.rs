use crate::error::{DesignError, Result};

/// Returns the common value of a constant vector, or `None` for an empty
/// vector (which determines nothing). A simple random sample is
/// equi-probability by definition, so any vector with two distinct values
/// is an inconsistent design.
pub fn constant_value(quantity: &'static str, values: &[f64]) -> Result<Option<f64>> {
    let Some((&first, rest)) = values.split_first() else {
        return Ok(None);
    };

    if rest.iter().any(|&value| value != first) {
        return Err(DesignError::InconsistentDesign {
            quantity,
            message: "must be constant across all sampled units".to_string(),
        });
    }

    Ok(Some(first))
}

pub fn ensure_length(quantity: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(DesignError::DimensionMismatch {
            quantity,
            expected,
            actual,
        });
    }

    Ok(())
}

pub fn ensure_positive(quantity: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DesignError::InconsistentDesign {
            quantity,
            message: format!("must be a positive, finite value, got {value}"),
        });
    }

    Ok(())
}

pub fn ensure_non_negative(quantity: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DesignError::InconsistentDesign {
            quantity,
            message: format!("must be a non-negative, finite value, got {value}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_value_accepts_uniform_vector() {
        assert_eq!(constant_value("weights", &[2.0, 2.0, 2.0]).unwrap(), Some(2.0));
    }

    #[test]
    fn constant_value_of_empty_vector_is_none() {
        assert_eq!(constant_value("weights", &[]).unwrap(), None);
    }

    #[test]
    fn constant_value_rejects_mixed_vector() {
        let error = constant_value("probs", &[0.1, 0.1, 0.2]).unwrap_err();
        assert!(matches!(
            error,
            DesignError::InconsistentDesign { quantity: "probs", .. }
        ));
    }

    #[test]
    fn ensure_length_reports_both_sizes() {
        let error = ensure_length("weights", 3, 5).unwrap_err();
        assert_eq!(
            error,
            DesignError::DimensionMismatch {
                quantity: "weights",
                expected: 5,
                actual: 3,
            }
        );
    }

    #[test]
    fn ensure_positive_rejects_zero_and_nan() {
        assert!(ensure_positive("weights", 0.0).is_err());
        assert!(ensure_positive("weights", f64::NAN).is_err());
        assert!(ensure_positive("weights", 1.5).is_ok());
    }

    #[test]
    fn ensure_non_negative_allows_zero() {
        assert!(ensure_non_negative("popsize", 0.0).is_ok());
        assert!(ensure_non_negative("popsize", -1.0).is_err());
    }
}
