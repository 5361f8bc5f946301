use serde::{Deserialize, Serialize};

/// Score contributed by an ingredient missing from the table.
pub const DEFAULT_UNKNOWN_SCORE: f64 = 0.0;

/// Maximum per-ingredient score in the table's scale. A list that scores
/// this on every ingredient normalizes to 100.
pub const DEFAULT_MAX_PER_ITEM: f64 = 5.0;

/// Main scoring configuration.
///
/// Defines how an ingredient list is turned into a 0-100 health score. Each
/// field is optional and falls back to the defaults above.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   unknown_ingredient_default: 1.0
///   max_per_item: 5
///   thresholds:
///     healthy: 71
///     neutral: 46
///     unhealthy: 21
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Score for ingredients not found in the table (default: 0.0).
    /// Set to 1.0 to give unknown ingredients a small baseline instead of
    /// counting them as worthless.
    #[serde(default)]
    pub unknown_ingredient_default: Option<f64>,

    /// Per-ingredient score ceiling used for normalization (default: 5.0).
    /// The normalized score is `(sum / (count * max_per_item)) * 100`.
    #[serde(default)]
    pub max_per_item: Option<f64>,

    /// Category band boundaries (default: 71/46/21).
    #[serde(default)]
    pub thresholds: Option<CategoryThresholds>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            unknown_ingredient_default: Some(DEFAULT_UNKNOWN_SCORE),
            max_per_item: Some(DEFAULT_MAX_PER_ITEM),
            thresholds: Some(CategoryThresholds::default()),
        }
    }
}

/// Category band boundaries.
///
/// Each field is the lowest score (inclusive) that still lands in that band;
/// anything below `unhealthy` is "Slow Poison". Bands must be strictly
/// descending: `healthy > neutral > unhealthy`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategoryThresholds {
    /// Lowest score rated Healthy (default: 71)
    #[serde(default = "default_healthy")]
    pub healthy: f64,

    /// Lowest score rated Neutral (default: 46)
    #[serde(default = "default_neutral")]
    pub neutral: f64,

    /// Lowest score rated Unhealthy (default: 21)
    #[serde(default = "default_unhealthy")]
    pub unhealthy: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            healthy: default_healthy(),
            neutral: default_neutral(),
            unhealthy: default_unhealthy(),
        }
    }
}

fn default_healthy() -> f64 {
    71.0
}

fn default_neutral() -> f64 {
    46.0
}

fn default_unhealthy() -> f64 {
    21.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.unknown_ingredient_default, Some(0.0));
        assert_eq!(config.max_per_item, Some(5.0));
        assert_eq!(config.thresholds, Some(CategoryThresholds::default()));
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = CategoryThresholds::default();
        assert_eq!(thresholds.healthy, 71.0);
        assert_eq!(thresholds.neutral, 46.0);
        assert_eq!(thresholds.unhealthy, 21.0);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
unknown_ingredient_default: 1.0
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.unknown_ingredient_default, Some(1.0));
        assert!(config.max_per_item.is_none());
        assert!(config.thresholds.is_none());
    }

    #[test]
    fn test_full_scoring_config_parse() {
        let yaml = r#"
unknown_ingredient_default: 1.0
max_per_item: 10
thresholds:
  healthy: 80
  neutral: 50
  unhealthy: 25
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.unknown_ingredient_default, Some(1.0));
        assert_eq!(config.max_per_item, Some(10.0));

        let thresholds = config.thresholds.unwrap();
        assert_eq!(thresholds.healthy, 80.0);
        assert_eq!(thresholds.neutral, 50.0);
        assert_eq!(thresholds.unhealthy, 25.0);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let yaml = "{}";
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.unknown_ingredient_default.is_none());
        assert!(config.max_per_item.is_none());
        assert!(config.thresholds.is_none());
    }

    #[test]
    fn test_partial_thresholds_fill_defaults() {
        let yaml = r#"
thresholds:
  healthy: 90
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let thresholds = config.thresholds.unwrap();
        assert_eq!(thresholds.healthy, 90.0);
        assert_eq!(thresholds.neutral, 46.0);
        assert_eq!(thresholds.unhealthy, 21.0);
    }
}
