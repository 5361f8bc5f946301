use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::ingredients::normalize;

/// Failure to build a score table from its source resource.
///
/// All variants are fatal at startup: the table must be fully materialized
/// before any scoring happens, and there is no retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("score table not found at {path}")]
    NotFound { path: String },

    #[error("failed to read score table at {path}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("unsupported score table format '{extension}' (expected csv, json, or yaml)")]
    UnsupportedFormat { extension: String },

    #[error("score table {path} is missing required column '{column}'")]
    MissingColumn { path: String, column: &'static str },

    #[error("invalid score '{value}' on line {line} of {path}")]
    InvalidScore {
        path: String,
        line: usize,
        value: String,
    },

    #[error("failed to parse score table {path}: {message}")]
    Malformed { path: String, message: String },
}

/// Immutable mapping from normalized ingredient name to its score.
///
/// Built once at startup and read-only afterward; scoring calls share it by
/// reference. Keys are unique after normalization; when the source contains
/// duplicate names after folding, the last row wins.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    scores: HashMap<String, f64>,
}

impl ScoreTable {
    /// Build a table from (name, score) rows. Names are normalized on
    /// insertion; later rows overwrite earlier ones with the same folded name.
    pub fn from_rows<N: Into<String>>(rows: impl IntoIterator<Item = (N, f64)>) -> Self {
        let mut scores = HashMap::new();
        for (name, score) in rows {
            let key = normalize(&name.into());
            if key.is_empty() {
                continue;
            }
            scores.insert(key, score);
        }
        ScoreTable { scores }
    }

    /// Load a table from a tabular resource, dispatching on file extension.
    ///
    /// Supported formats:
    /// - `.csv`: header row naming an `ingredient` and a `score` column
    ///   (any order, extra columns ignored), one `name,score` row per line
    /// - `.json`: a `{"name": score, ...}` object
    /// - `.yaml` / `.yml`: the same mapping as YAML
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let display = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound {
                path: display.clone(),
            },
            _ => LoadError::Unreadable {
                path: display.clone(),
                source: e,
            },
        })?;

        match extension.as_str() {
            "csv" => parse_csv(&content, &display),
            "json" => {
                let map: HashMap<String, f64> =
                    serde_json::from_str(&content).map_err(|e| LoadError::Malformed {
                        path: display,
                        message: e.to_string(),
                    })?;
                Ok(ScoreTable::from_rows(map))
            }
            "yaml" | "yml" => {
                let map: HashMap<String, f64> =
                    serde_saphyr::from_str(&content).map_err(|e| LoadError::Malformed {
                        path: display,
                        message: e.to_string(),
                    })?;
                Ok(ScoreTable::from_rows(map))
            }
            _ => Err(LoadError::UnsupportedFormat { extension }),
        }
    }

    /// Look up an ingredient's score. The name is normalized first, so
    /// lookups are case- and whitespace-insensitive.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.scores.get(&normalize(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn parse_csv(content: &str, path: &str) -> Result<ScoreTable, LoadError> {
    let mut lines = content.lines().enumerate();

    // First non-empty line is the header.
    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => {
                return Err(LoadError::MissingColumn {
                    path: path.to_string(),
                    column: "ingredient",
                })
            }
        }
    };

    let columns: Vec<String> = header.split(',').map(|c| c.trim().to_lowercase()).collect();
    let name_idx = columns
        .iter()
        .position(|c| c == "ingredient")
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_string(),
            column: "ingredient",
        })?;
    let score_idx = columns
        .iter()
        .position(|c| c == "score")
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_string(),
            column: "score",
        })?;

    let mut rows = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        let name = fields.get(name_idx).map(|f| f.trim()).unwrap_or("");
        let value = fields.get(score_idx).map(|f| f.trim()).unwrap_or("");
        if name.is_empty() {
            continue;
        }
        let score: f64 = value.parse().map_err(|_| LoadError::InvalidScore {
            path: path.to_string(),
            line: idx + 1,
            value: value.to_string(),
        })?;
        rows.push((name.to_string(), score));
    }

    Ok(ScoreTable::from_rows(rows))
}
