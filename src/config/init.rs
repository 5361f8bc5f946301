use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{ensure_config_dir, get_config_dir, get_config_path, Config, ProductDbConfig};
use crate::product::DEFAULT_ENDPOINT;
use crate::scoring::ScoringConfig;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Starter score table written when none exists yet. Scores are 0-5.
const SAMPLE_TABLE: &str = "\
ingredient,score
water,5
oats,5
almonds,4
olive oil,4
honey,3
salt,2
sugar,1
high fructose corn syrup,0
";

/// Create a starter config file and, optionally, a sample score table.
///
/// If `config_path_override` is Some, writes the config there instead of the
/// default path.
pub fn run_init(config_path_override: Option<PathBuf>) -> Result<()> {
    println!("snackscore setup");
    println!();

    let config_path = config_path_override.unwrap_or_else(get_config_path);
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            println!("Leaving existing config untouched.");
            return Ok(());
        }
    }

    ensure_config_dir()?;

    let default_table = get_config_dir().join("scores.csv");
    let table_input =
        prompt_with_default("Score table path", &default_table.display().to_string())?;
    let table_path = PathBuf::from(table_input);

    if !table_path.exists() {
        let write_sample = prompt_yes_no("No table found there. Write a sample table?", true)?;
        if write_sample {
            if let Some(parent) = table_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create table directory at {}", parent.display())
                    })?;
                }
            }
            fs::write(&table_path, SAMPLE_TABLE).with_context(|| {
                format!("Failed to write sample table to {}", table_path.display())
            })?;
            println!("Wrote sample table to {}", table_path.display());
        }
    }

    let unknown_input =
        prompt_with_default("Score for ingredients missing from the table", "0")?;
    let unknown_default: f64 = unknown_input.parse().with_context(|| {
        format!(
            "'{}' is not a number; expected something like 0 or 1",
            unknown_input
        )
    })?;

    let config = Config {
        table: Some(table_path),
        product_db: Some(ProductDbConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }),
        scoring: Some(ScoringConfig {
            unknown_ingredient_default: Some(unknown_default),
            ..Default::default()
        }),
    };

    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize config")?;
    fs::write(&config_path, yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Wrote {}", config_path.display());
    println!("Try: snackscore score \"sugar, salt, water\"");
    Ok(())
}
