use std::fmt;

use super::config::{CategoryThresholds, ScoringConfig, DEFAULT_MAX_PER_ITEM, DEFAULT_UNKNOWN_SCORE};
use crate::ingredients::normalize;
use crate::table::ScoreTable;

/// Qualitative rating derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Healthy,
    Neutral,
    Unhealthy,
    SlowPoison,
}

impl Category {
    /// Derive the category for a clamped score. Band lower bounds are
    /// inclusive: a score exactly on a threshold lands in the higher band.
    pub fn from_score(score: f64, thresholds: &CategoryThresholds) -> Self {
        if score >= thresholds.healthy {
            Category::Healthy
        } else if score >= thresholds.neutral {
            Category::Neutral
        } else if score >= thresholds.unhealthy {
            Category::Unhealthy
        } else {
            Category::SlowPoison
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Healthy => "Healthy",
            Category::Neutral => "Neutral",
            Category::Unhealthy => "Unhealthy",
            Category::SlowPoison => "Slow Poison",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ingredient's contribution to the total.
#[derive(Debug, Clone)]
pub struct IngredientContribution {
    pub name: String, // normalized name used for the lookup
    pub score: f64,   // table score, or the unknown-ingredient default
    pub known: bool,  // false when the table had no entry
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Normalized score, always within [0, 100].
    pub score: f64,
    pub category: Category,
    pub breakdown: Vec<IngredientContribution>,
}

/// Score an ingredient list against a table.
///
/// Each name is normalized the same way the table's keys were, summed with
/// table scores (or the configured default for unknown names), normalized to
/// `(sum / (count * max_per_item)) * 100`, and clamped to [0, 100]. An empty
/// list scores exactly 0. Pure and deterministic; never fails.
pub fn calculate_score(
    ingredients: &[String],
    table: &ScoreTable,
    config: &ScoringConfig,
) -> ScoreResult {
    let unknown_default = config
        .unknown_ingredient_default
        .unwrap_or(DEFAULT_UNKNOWN_SCORE);
    let max_per_item = config.max_per_item.unwrap_or(DEFAULT_MAX_PER_ITEM);
    let thresholds = config.thresholds.unwrap_or_default();

    let mut sum = 0.0;
    let mut breakdown = Vec::with_capacity(ingredients.len());
    for raw in ingredients {
        let name = normalize(raw);
        let (score, known) = match table.get(&name) {
            Some(score) => (score, true),
            None => (unknown_default, false),
        };
        sum += score;
        breakdown.push(IngredientContribution { name, score, known });
    }

    let score = if ingredients.is_empty() {
        0.0
    } else {
        let count = ingredients.len() as f64;
        ((sum / (count * max_per_item)) * 100.0).clamp(0.0, 100.0)
    };

    ScoreResult {
        score,
        category: Category::from_score(score, &thresholds),
        breakdown,
    }
}
