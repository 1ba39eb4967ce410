//! Command-line interface parsing for the Subbreed CLI
//!
//! This module handles parsing of CLI arguments using clap, including
//! output format selection and the cache bypass flag.

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// A breed argument was empty or only whitespace
    #[error("breed names must not be empty")]
    EmptyBreed,
}

/// Subbreed CLI - look up dog sub-breeds from the dog.ceo API
#[derive(Parser, Debug)]
#[command(name = "subbreed")]
#[command(about = "Look up dog sub-breeds from the dog.ceo API")]
#[command(version)]
pub struct Cli {
    /// Breed names to look up, in order
    ///
    /// Names are matched case-insensitively; repeated names are served
    /// from the cache after the first lookup.
    #[arg(required = true, value_name = "BREED")]
    pub breeds: Vec<String>,

    /// Print results as a JSON object mapping each breed to its sub-breeds
    #[arg(long)]
    pub json: bool,

    /// Query the API directly instead of going through the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Print the number of upstream API calls to stderr when done
    #[arg(long)]
    pub stats: bool,
}

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one sub-breed per line
    Text,
    /// A single JSON object on stdout
    Json,
}

/// Lookup plan derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Breeds to look up, normalized to lowercase, in the order given
    pub breeds: Vec<String>,
    /// How to print the results
    pub output: OutputFormat,
    /// Whether lookups go through the caching layer
    pub use_cache: bool,
    /// Whether to print the upstream call count when done
    pub print_stats: bool,
}

/// Normalizes a breed argument for use in dog.ceo paths.
///
/// Trims surrounding whitespace and lowercases the name, since dog.ceo
/// breed paths are lowercase.
///
/// # Arguments
/// * `s` - The raw breed argument from the command line
///
/// # Returns
/// * `Ok(String)` with the normalized name
/// * `Err(CliError::EmptyBreed)` if nothing remains after trimming
pub fn normalize_breed(s: &str) -> Result<String, CliError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyBreed);
    }
    Ok(trimmed.to_lowercase())
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(RunConfig)` with normalized breeds and resolved flags
    /// * `Err(CliError)` if any breed argument is empty
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let breeds = cli
            .breeds
            .iter()
            .map(|breed| normalize_breed(breed))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            breeds,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            use_cache: !cli.no_cache,
            print_stats: cli.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_breed_lowercases() {
        assert_eq!(normalize_breed("Bulldog").unwrap(), "bulldog");
        assert_eq!(normalize_breed("HOUND").unwrap(), "hound");
    }

    #[test]
    fn test_normalize_breed_trims_whitespace() {
        assert_eq!(normalize_breed("  bulldog  ").unwrap(), "bulldog");
    }

    #[test]
    fn test_normalize_breed_rejects_empty() {
        assert!(normalize_breed("").is_err());
        assert!(normalize_breed("   ").is_err());
    }

    #[test]
    fn test_cli_parse_single_breed() {
        let cli = Cli::parse_from(["subbreed", "bulldog"]);
        assert_eq!(cli.breeds, vec!["bulldog"]);
        assert!(!cli.json);
        assert!(!cli.no_cache);
        assert!(!cli.stats);
    }

    #[test]
    fn test_cli_parse_multiple_breeds_keeps_order() {
        let cli = Cli::parse_from(["subbreed", "hound", "bulldog", "hound"]);
        assert_eq!(cli.breeds, vec!["hound", "bulldog", "hound"]);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(["subbreed", "--json", "--no-cache", "--stats", "bulldog"]);
        assert!(cli.json);
        assert!(cli.no_cache);
        assert!(cli.stats);
    }

    #[test]
    fn test_cli_requires_at_least_one_breed() {
        let result = Cli::try_parse_from(["subbreed"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_config_defaults_to_cached_text_output() {
        let cli = Cli::parse_from(["subbreed", "bulldog"]);
        let config = RunConfig::from_cli(&cli).unwrap();

        assert_eq!(config.breeds, vec!["bulldog"]);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.use_cache);
        assert!(!config.print_stats);
    }

    #[test]
    fn test_run_config_normalizes_breeds() {
        let cli = Cli::parse_from(["subbreed", "Bulldog", " HOUND "]);
        let config = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(config.breeds, vec!["bulldog", "hound"]);
    }

    #[test]
    fn test_run_config_resolves_flags() {
        let cli = Cli::parse_from(["subbreed", "--json", "--no-cache", "--stats", "bulldog"]);
        let config = RunConfig::from_cli(&cli).unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.use_cache);
        assert!(config.print_stats);
    }

    #[test]
    fn test_run_config_rejects_blank_breed() {
        let cli = Cli::parse_from(["subbreed", "bulldog", "  "]);
        let result = RunConfig::from_cli(&cli);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must not be empty"));
    }
}
