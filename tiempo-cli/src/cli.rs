use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tiempo_core::{Config, ProviderId, SearchMode, location, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tiempo", version, about = "Weather forecasts from the Tiempo API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search locations whose name contains the query.
    Search {
        /// Part of a location name, e.g. "orv".
        query: String,
    },

    /// Show the weather forecast for a location.
    Show {
        /// Location code, or exact location name.
        location: String,

        /// Also show the hourly details for each day.
        #[arg(long)]
        hourly: bool,
    },

    /// Configure the Tiempo affiliate ID.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Search { query } => search_locations(&query),
            Command::Show { location, hourly } => show_forecast(&location, hourly).await,
            Command::Configure => configure(),
        }
    }
}

fn search_locations(query: &str) -> anyhow::Result<()> {
    let results = location::search(query, SearchMode::PartialName);
    for found in &results {
        render::print_location(found);
        println!();
    }
    println!(
        "{} location{} found ({} locations available).",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        location::LOCATIONS.len()
    );
    Ok(())
}

async fn show_forecast(query: &str, hourly: bool) -> anyhow::Result<()> {
    // An all-digit query is a location code, anything else is a name.
    let (mode, attribute) = if is_code(query) {
        (SearchMode::ExactCode, "code")
    } else {
        (SearchMode::ExactName, "name")
    };

    let Some(found) = location::search(query, mode).into_iter().next() else {
        bail!("Location with {attribute} '{query}' not found.");
    };

    println!("Weather forecasts for {} ({})\n", found.name, found.province);

    let config = Config::load()?;
    let provider = provider_from_config(ProviderId::Tiempo, &config)?;
    let forecast = provider
        .forecast(found.code)
        .await
        .with_context(|| format!("Failed to acquire the forecast for {}", found.name))?;

    render::print_forecast(&forecast, hourly);
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.affiliate_id = inquire::Text::new("Tiempo affiliate ID:")
        .with_default(&config.affiliate_id)
        .prompt()
        .context("Affiliate ID prompt aborted")?;

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn is_code(query: &str) -> bool {
    !query.is_empty() && query.chars().all(|c| c.is_ascii_digit())
}
