use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Category, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal, trimming a trailing .0 ("53.3", "100")
pub fn format_score(score: f64) -> String {
    let formatted = format!("{:.1}", score);
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

fn format_category(category: Category, use_colors: bool) -> String {
    if !use_colors {
        return category.to_string();
    }
    match category {
        Category::Healthy => category.green().to_string(),
        Category::Neutral => category.yellow().to_string(),
        Category::Unhealthy => category.red().to_string(),
        Category::SlowPoison => category.red().bold().to_string(),
    }
}

/// Format the result line: "{score} / 100  {category}"
pub fn format_result(result: &ScoreResult, use_colors: bool) -> String {
    let score = format_score(result.score);
    if use_colors {
        format!(
            "{} / 100  {}",
            score.bold(),
            format_category(result.category, true)
        )
    } else {
        format!(
            "{} / 100  {}",
            score,
            format_category(result.category, false)
        )
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate an ingredient name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format per-ingredient contribution lines, one per ingredient in query
/// order. Ingredients missing from the table are marked, so a surprising
/// total is explainable.
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    if result.breakdown.is_empty() {
        return "No ingredients.".to_string();
    }

    let longest_name = result
        .breakdown
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);

    // Scores and the not-in-table note need ~20 columns.
    let name_width = match get_terminal_width() {
        Some(width) if width > 40 => longest_name.min(width - 20),
        Some(_) => 20,
        None => longest_name,
    };

    result
        .breakdown
        .iter()
        .map(|contribution| {
            let name = truncate_name(&contribution.name, name_width);
            let score = format_score(contribution.score);
            let line = format!("  {:<name_width$}  {:>5}", name, score);
            if contribution.known {
                line
            } else if use_colors {
                format!("{} {}", line, "(not in table)".dimmed())
            } else {
                format!("{} (not in table)", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a result as tab-separated values for scripting
/// Columns: score, category, ingredient count (no headers, no colors)
pub fn format_tsv(result: &ScoreResult) -> String {
    format!(
        "{}\t{}\t{}",
        format_score(result.score),
        result.category,
        result.breakdown.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::IngredientContribution;

    fn sample_result() -> ScoreResult {
        ScoreResult {
            score: 53.333,
            category: Category::Neutral,
            breakdown: vec![
                IngredientContribution {
                    name: "sugar".to_string(),
                    score: 1.0,
                    known: true,
                },
                IngredientContribution {
                    name: "unknown_x".to_string(),
                    score: 0.0,
                    known: false,
                },
            ],
        }
    }

    #[test]
    fn test_format_score_trims_trailing_zero() {
        assert_eq!(format_score(100.0), "100");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(53.333), "53.3");
    }

    #[test]
    fn test_format_result_plain() {
        let formatted = format_result(&sample_result(), false);
        assert_eq!(formatted, "53.3 / 100  Neutral");
    }

    #[test]
    fn test_format_breakdown_marks_unknown() {
        let formatted = format_breakdown(&sample_result(), false);
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("sugar"));
        assert!(!lines[0].contains("not in table"));
        assert!(lines[1].contains("unknown_x"));
        assert!(lines[1].contains("(not in table)"));
    }

    #[test]
    fn test_format_breakdown_empty() {
        let result = ScoreResult {
            score: 0.0,
            category: Category::SlowPoison,
            breakdown: vec![],
        };
        assert_eq!(format_breakdown(&result, false), "No ingredients.");
    }

    #[test]
    fn test_format_tsv() {
        assert_eq!(format_tsv(&sample_result()), "53.3\tNeutral\t2");
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("sugar", 10), "sugar");
        assert_eq!(truncate_name("high fructose corn syrup", 10), "high fr...");
    }
}
