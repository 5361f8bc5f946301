use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Path to the ingredient score table (csv, json, or yaml).
    #[serde(default)]
    pub table: Option<PathBuf>,

    /// Product database used by `snackscore lookup`.
    #[serde(default)]
    pub product_db: Option<ProductDbConfig>,

    /// Scoring overrides; missing fields use the built-in defaults.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProductDbConfig {
    pub endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
table: /var/lib/snackscore/scores.csv
product_db:
  endpoint: https://world.openfoodfacts.org/api/v2
scoring:
  unknown_ingredient_default: 1.0
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(
            config.table.as_deref(),
            Some(std::path::Path::new("/var/lib/snackscore/scores.csv"))
        );
        assert_eq!(
            config.product_db.unwrap().endpoint,
            "https://world.openfoodfacts.org/api/v2"
        );
        assert_eq!(
            config.scoring.unwrap().unknown_ingredient_default,
            Some(1.0)
        );
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.table.is_none());
        assert!(config.product_db.is_none());
        assert!(config.scoring.is_none());
    }
}
