//! Subbreed CLI - look up dog sub-breeds from the dog.ceo API
//!
//! Queries the dog.ceo API for the sub-breeds of each requested breed,
//! serving repeated lookups from an in-memory cache unless disabled.

mod cache;
mod cli;
mod data;

use std::process::ExitCode;

use clap::Parser;

use cache::BreedCache;
use cli::{Cli, OutputFormat, RunConfig};
use data::{BreedNotFoundError, BreedProvider, DogApiClient};

/// Prints one breed's sub-breeds as plain text
///
/// With a header (used when several breeds were requested) the sub-breeds
/// are indented under a `breed:` line.
fn print_text(breed: &str, sub_breeds: &[String], with_header: bool) {
    let indent = if with_header { "  " } else { "" };
    if with_header {
        println!("{}:", breed);
    }
    if sub_breeds.is_empty() {
        println!("{}(no sub-breeds)", indent);
    } else {
        for name in sub_breeds {
            println!("{}{}", indent, name);
        }
    }
}

/// Looks up each breed in order and prints the results
///
/// Text output is printed as results arrive; JSON output is collected and
/// printed as one object once every lookup has succeeded. Stops at the
/// first failed lookup.
async fn lookup_all<P: BreedProvider>(
    provider: &P,
    config: &RunConfig,
) -> Result<(), BreedNotFoundError> {
    match config.output {
        OutputFormat::Text => {
            let with_headers = config.breeds.len() > 1;
            for breed in &config.breeds {
                let sub_breeds = provider.sub_breeds(breed).await?;
                print_text(breed, &sub_breeds, with_headers);
            }
        }
        OutputFormat::Json => {
            let mut results = serde_json::Map::new();
            for breed in &config.breeds {
                let sub_breeds = provider.sub_breeds(breed).await?;
                results.insert(breed.clone(), serde_json::json!(sub_breeds));
            }
            println!("{}", serde_json::Value::Object(results));
        }
    }
    Ok(())
}

/// Builds the provider stack and runs the requested lookups
async fn run(config: &RunConfig) -> Result<(), BreedNotFoundError> {
    let client = DogApiClient::new();

    if config.use_cache {
        let provider = BreedCache::new(client);
        let outcome = lookup_all(&provider, config).await;
        if config.print_stats {
            eprintln!("upstream calls: {}", provider.calls_made());
        }
        outcome
    } else {
        let outcome = lookup_all(&client, config).await;
        if config.print_stats && outcome.is_ok() {
            // Without the cache every lookup went upstream.
            eprintln!("upstream calls: {}", config.breeds.len());
        }
        outcome
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match RunConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
