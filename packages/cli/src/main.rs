#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the address resolution engine.
//!
//! Resolves free-text addresses from arguments or stdin and prints
//! one JSON object per input line.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use warn_map_resolver::{AddressResolver, Gazetteer};

#[derive(Parser)]
#[command(
    name = "warn_map_resolve",
    about = "Resolve free-text WARN addresses into street/municipality/ZIP"
)]
struct Cli {
    /// Path to the Census-style place gazetteer file
    #[arg(long)]
    gazetteer: Option<PathBuf>,
    /// Two-digit state FIPS code used as the jurisdiction hint
    /// (e.g., "44" for RI, "06" for CA)
    #[arg(long)]
    state: Option<String>,
    /// Addresses to resolve; reads one address per stdin line when empty
    addresses: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let gazetteer = match &cli.gazetteer {
        Some(path) => match Gazetteer::load(path) {
            Ok(gazetteer) => {
                log::info!("Loaded gazetteer: {} jurisdiction(s)", gazetteer.len());
                gazetteer
            }
            Err(e) => {
                log::warn!(
                    "Failed to load gazetteer from {}: {e}; continuing with fallback heuristics only",
                    path.display()
                );
                Gazetteer::empty()
            }
        },
        None => Gazetteer::empty(),
    };

    let resolver = AddressResolver::new(gazetteer);
    let state = cli.state.as_deref();

    if cli.addresses.is_empty() {
        for line in io::stdin().lock().lines() {
            print_resolved(&resolver, &line?, state)?;
        }
    } else {
        for address in &cli.addresses {
            print_resolved(&resolver, address, state)?;
        }
    }

    Ok(())
}

fn print_resolved(
    resolver: &AddressResolver,
    address: &str,
    state: Option<&str>,
) -> Result<(), serde_json::Error> {
    let resolved = resolver.resolve(address, state);
    println!("{}", serde_json::to_string(&resolved)?);
    Ok(())
}
