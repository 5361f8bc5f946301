use clap::{Parser, Subcommand};
use std::path::PathBuf;

use snackscore::scoring::{calculate_score, ScoreResult};
use snackscore::table::ScoreTable;

const EXIT_NETWORK: i32 = 2;
const EXIT_NO_DATA: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a list of ingredient names
    Score {
        /// Ingredient names; a single argument containing commas is split
        /// as a captured payload ("sugar, salt, water")
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Path to the score table (overrides the configured path)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Show per-ingredient contributions
        #[arg(short, long)]
        breakdown: bool,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Look up a product by barcode and score its ingredient list
    Lookup {
        /// Product barcode (EAN/UPC digits)
        barcode: String,

        /// Path to the score table (overrides the configured path)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Show per-ingredient contributions
        #[arg(short, long)]
        breakdown: bool,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Create a starter config and sample score table
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "snackscore")]
#[command(about = "Ingredient health scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/snackscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let config_path = cli.config.clone().map(PathBuf::from);

    if let Commands::Init = cli.command {
        if let Err(e) = snackscore::config::run_init(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        return;
    }

    // Load config
    let config = match snackscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = snackscore::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match cli.command {
        Commands::Score {
            ingredients,
            table,
            breakdown,
            tsv,
        } => {
            let table = load_table(table.or(config.table), cli.verbose);
            let query = build_query(&ingredients);
            let result = calculate_score(&query, &table, &effective_scoring);
            print_result(&result, breakdown, tsv);
        }
        Commands::Lookup {
            barcode,
            table,
            breakdown,
            tsv,
        } => {
            let table = load_table(table.or(config.table), cli.verbose);
            let endpoint = config
                .product_db
                .as_ref()
                .map(|db| db.endpoint.as_str())
                .unwrap_or(snackscore::product::DEFAULT_ENDPOINT);

            let client = match snackscore::product::create_client() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Lookup error: {}", e);
                    std::process::exit(EXIT_NETWORK);
                }
            };

            if cli.verbose {
                eprintln!("Looking up barcode {} at {}", barcode, endpoint);
            }

            let ingredients_text =
                match snackscore::product::lookup_ingredients(&client, endpoint, &barcode).await {
                    Ok(Some(text)) => text,
                    Ok(None) => {
                        eprintln!("No ingredient list available for barcode {}", barcode);
                        std::process::exit(EXIT_NO_DATA);
                    }
                    Err(e) => {
                        eprintln!("Lookup failed: {}", e);
                        eprintln!("No ingredient list available for barcode {}", barcode);
                        std::process::exit(EXIT_NETWORK);
                    }
                };

            if cli.verbose {
                eprintln!("Ingredients: {}", ingredients_text);
            }

            let query = snackscore::ingredients::split_list(&ingredients_text);
            if query.is_empty() {
                eprintln!("No ingredient list available for barcode {}", barcode);
                std::process::exit(EXIT_NO_DATA);
            }

            let result = calculate_score(&query, &table, &effective_scoring);
            print_result(&result, breakdown, tsv);
        }
        Commands::Init => unreachable!("handled before config loading"),
    }
}

/// Treat `score "sugar, salt, water"` as a captured comma-separated payload;
/// otherwise each argument is one ingredient name.
fn build_query(args: &[String]) -> Vec<String> {
    if args.len() == 1 && args[0].contains(',') {
        snackscore::ingredients::split_list(&args[0])
    } else {
        args.to_vec()
    }
}

fn load_table(path: Option<PathBuf>, verbose: bool) -> ScoreTable {
    let Some(path) = path else {
        eprintln!("No score table configured.");
        eprintln!("Pass --table <path> or run `snackscore init` to create one.");
        std::process::exit(EXIT_CONFIG);
    };

    match ScoreTable::load(&path) {
        Ok(table) => {
            if verbose {
                eprintln!("Loaded {} ingredients from {}", table.len(), path.display());
            }
            table
        }
        Err(e) => {
            eprintln!("Score table error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn print_result(result: &ScoreResult, breakdown: bool, tsv: bool) {
    if tsv {
        println!("{}", snackscore::output::format_tsv(result));
        return;
    }

    let use_colors = snackscore::output::should_use_colors();
    println!("{}", snackscore::output::format_result(result, use_colors));
    if breakdown {
        println!("{}", snackscore::output::format_breakdown(result, use_colors));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_splits_single_payload() {
        let args = vec!["sugar, salt, water".to_string()];
        assert_eq!(build_query(&args), vec!["sugar", "salt", "water"]);
    }

    #[test]
    fn test_build_query_keeps_separate_args() {
        let args = vec!["sugar".to_string(), "salt".to_string()];
        assert_eq!(build_query(&args), vec!["sugar", "salt"]);
    }
}
