#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for EcoMind.
//!
//! Without a subcommand, runs the interactive region picker and improvement
//! assistant. Subcommands expose the same queries non-interactively.
//!
//! Uses `indicatif-log-bridge` (via [`ecomind_cli_utils::init_logger`]) to
//! route `log` output through `indicatif::MultiProgress` so that log lines
//! and the assistant spinner never fight for the terminal.

mod config;
mod interactive;
mod render;

use clap::{Args, Parser, Subcommand};
use ecomind_dashboard::{DashboardQuery, DashboardView};
use ecomind_dataset::catalog::LocationCatalog;
use ecomind_simulation::reply::format_reply;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(
    name = "ecomind",
    about = "Environmental vulnerability explorer and improvement simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Region selection shared by the region-scoped subcommands.
#[derive(Args)]
struct RegionArgs {
    /// Country name (e.g., "United States")
    #[arg(long)]
    country: String,
    /// State name (e.g., "California")
    #[arg(long)]
    state: String,
    /// City name (e.g., "Los Angeles")
    #[arg(long)]
    city: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List vulnerability categories and severity legend colours
    Categories,
    /// List the countries, states and cities that can be selected
    Locations,
    /// Show the notification feed and its unread count
    Notifications,
    /// List the vulnerabilities in a city
    List {
        #[command(flatten)]
        region: RegionArgs,
        /// Comma-separated category names (e.g., "Air Pollution,Heat Island").
        /// If not specified, all categories are shown.
        #[arg(long)]
        categories: Option<String>,
        /// Hide vulnerabilities below this severity (0.0-1.0)
        #[arg(long, default_value = "0")]
        severity_min: f64,
    },
    /// Summarize a city's vulnerabilities per category
    Summary {
        #[command(flatten)]
        region: RegionArgs,
    },
    /// Simulate an improvement in a city and print the predicted impact
    Simulate {
        #[command(flatten)]
        region: RegionArgs,
        /// Improvement description (e.g., "Add more trees in the city center")
        prompt: String,
        /// Print the full simulation result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Validates the region against the catalog and opens its dashboard view.
fn open_view(
    config: &CliConfig,
    catalog: &LocationCatalog,
    region: &RegionArgs,
    categories: Option<&str>,
) -> Result<DashboardView, Box<dyn std::error::Error>> {
    let query =
        DashboardQuery::from_parts(&region.country, &region.state, &region.city, categories)?;
    catalog.require(&query.location())?;
    let dataset = config.load_dataset()?;
    Ok(DashboardView::new(&dataset, &query))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = ecomind_cli_utils::init_logger();
    let cli = Cli::parse();
    let config = CliConfig::from_env();

    let Some(command) = cli.command else {
        return interactive::run(&config, &multi).await;
    };

    let catalog = config.load_catalog()?;

    match command {
        Commands::Categories => print!("{}", render::categories()),
        Commands::Locations => print!("{}", render::locations(&catalog)),
        Commands::Notifications => {
            print!("{}", render::notifications(&config.load_notifications()?));
        }
        Commands::List {
            region,
            categories,
            severity_min,
        } => {
            let mut view = open_view(&config, &catalog, &region, categories.as_deref())?;
            view.set_severity_threshold(severity_min);
            print!("{}", render::dashboard(&view));
        }
        Commands::Summary { region } => {
            let view = open_view(&config, &catalog, &region, None)?;
            println!("{}", view.location());
            println!("Environmental score: {}/100", view.baseline_score());
            println!();
            print!("{}", render::summary(&view.summary(), view.population_affected()));
        }
        Commands::Simulate {
            region,
            prompt,
            json,
        } => {
            let view = open_view(&config, &catalog, &region, None)?;
            log::info!(
                "Simulating \"{prompt}\" over {} records in {}",
                view.base_records().len(),
                view.location()
            );
            let result = view.simulate(&prompt);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", format_reply(&result));
                println!();
                print!(
                    "{}",
                    render::comparison(&ecomind_dataset::summary::compare(
                        view.base_records(),
                        &result.resulting_records,
                    ))
                );
            }
        }
    }

    Ok(())
}
