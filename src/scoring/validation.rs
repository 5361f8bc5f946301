use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(default) = config.unknown_ingredient_default {
        if !default.is_finite() || default < 0.0 {
            errors.push(format!(
                "scoring.unknown_ingredient_default: must be a non-negative number, got {}",
                default
            ));
        }
    }

    if let Some(max) = config.max_per_item {
        if !max.is_finite() || max <= 0.0 {
            errors.push(format!(
                "scoring.max_per_item: must be positive, got {}",
                max
            ));
        }
    }

    if let Some(ref thresholds) = config.thresholds {
        let bands = [
            ("healthy", thresholds.healthy),
            ("neutral", thresholds.neutral),
            ("unhealthy", thresholds.unhealthy),
        ];
        for (field, value) in bands {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                errors.push(format!(
                    "scoring.thresholds.{}: must be between 0 and 100, got {}",
                    field, value
                ));
            }
        }
        if !(thresholds.healthy > thresholds.neutral && thresholds.neutral > thresholds.unhealthy) {
            errors.push(
                "scoring.thresholds: must be strictly descending (healthy > neutral > unhealthy)"
                    .to_string(),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CategoryThresholds;

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = ScoringConfig {
            unknown_ingredient_default: None,
            max_per_item: None,
            thresholds: None,
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_non_positive_max_per_item() {
        let config = ScoringConfig {
            max_per_item: Some(0.0),
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.max_per_item"));
    }

    #[test]
    fn test_negative_unknown_default() {
        let config = ScoringConfig {
            unknown_ingredient_default: Some(-1.0),
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.unknown_ingredient_default"));
    }

    #[test]
    fn test_threshold_ordering() {
        let config = ScoringConfig {
            thresholds: Some(CategoryThresholds {
                healthy: 46.0,
                neutral: 71.0,
                unhealthy: 21.0,
            }),
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("strictly descending"));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = ScoringConfig {
            thresholds: Some(CategoryThresholds {
                healthy: 150.0,
                neutral: 46.0,
                unhealthy: 21.0,
            }),
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.thresholds.healthy"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            unknown_ingredient_default: Some(-1.0),
            max_per_item: Some(-5.0),
            thresholds: None,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
