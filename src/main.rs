//! Launch Dash
//!
//! Serves the launch records dashboard, or prints its charts to stdout.
//!
//! # Configuration
//!
//! Environment variables:
//! - `LAUNCH_DASH_DATA`: Dataset CSV path (default: data/spacex_launch_dash.csv)
//! - `LAUNCH_DASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCH_DASH_PORT`: Port to listen on (default: 8050)
//! - `LAUNCH_DASH_LOG_LEVEL` / `LAUNCH_DASH_LOG_FORMAT`: Logging (default: info / pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use launch_dash::api::{serve, AppState};
use launch_dash::chart::{PieChart, ScatterChart};
use launch_dash::config::{generate_default_config, Config};
use launch_dash::dashboard::default_payload_range;
use launch_dash::dataset::Dataset;
use launch_dash::logging;
use launch_dash::projection::{compute_pie_data, compute_scatter_data, PayloadRange, SiteSelector};

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard over a static dataset of rocket launches")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: searched in the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset CSV path, overrides the config file and environment
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format for printed charts (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard web server (default)
    Serve,

    /// List the distinct launch sites
    Sites,

    /// Print the pie chart for a site selection
    Pie {
        /// Launch site, or ALL
        #[arg(short, long, default_value = "ALL")]
        site: String,
    },

    /// Print the scatter chart for a site selection and payload range
    Scatter {
        /// Launch site, or ALL
        #[arg(short, long, default_value = "ALL")]
        site: String,
        /// Lower payload bound in kg (default: smallest observed payload)
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: largest observed payload)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = logging::bootstrap(|| match &cli.config {
        Some(path) => Config::load_with_env(path),
        None => Ok(Config::load_default()),
    })?;
    if let Some(data) = cli.data {
        config.dataset.path = data;
    }

    logging::init(&config.logging);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Config { output } => write_default_config(output.as_deref())?,
        Commands::Serve => {
            tracing::info!("Starting launch dashboard v{}", env!("CARGO_PKG_VERSION"));

            let dataset = load_dataset(&config)?;
            let state = AppState::new(Arc::new(dataset), config.api.clone(), &config.dashboard);
            tracing::info!(sites = state.sites.len(), "Site catalog ready");

            serve(state, &config.api).await?;
        }
        Commands::Sites => {
            let sites = load_dataset(&config)?.sites();
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&sites)?);
            } else {
                for site in sites {
                    println!("{}", site);
                }
            }
        }
        Commands::Pie { site } => {
            let dataset = load_dataset(&config)?;
            let chart = PieChart::build(&compute_pie_data(&dataset, &SiteSelector::from(site)));
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_pie(&chart);
            }
        }
        Commands::Scatter { site, low, high } => {
            let dataset = load_dataset(&config)?;
            let selector = SiteSelector::from(site);
            let default_range = default_payload_range(&dataset, &config.dashboard);
            let range = PayloadRange::new(
                low.unwrap_or(default_range.low),
                high.unwrap_or(default_range.high),
            );
            let points = compute_scatter_data(&dataset, range, &selector);
            let chart = ScatterChart::build(&points, &selector, range);
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_scatter(&chart);
            }
        }
    }

    Ok(())
}

/// Loading failures are fatal: the dashboard has nothing to show without data
fn load_dataset(config: &Config) -> anyhow::Result<Dataset> {
    Dataset::load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {}", config.dataset.path.display()))
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            eprintln!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn print_pie(chart: &PieChart) {
    println!("{}", chart.title);
    println!("{:<24} {:>8}", "Label", "Value");
    println!("{}", "-".repeat(33));
    for slice in &chart.slices {
        println!("{:<24} {:>8}", slice.label, slice.value);
    }
    println!("{}", "-".repeat(33));
    println!("{:<24} {:>8}", "Total", chart.total);
}

fn print_scatter(chart: &ScatterChart) {
    println!("{}", chart.title);
    println!(
        "Payload range: {} - {} kg, {} points",
        chart.range.low, chart.range.high, chart.point_count
    );
    println!("{:<12} {:>18} {:>6}", "Booster", chart.x_label, chart.y_label);
    println!("{}", "-".repeat(38));
    for series in &chart.series {
        for [payload, class] in &series.points {
            println!("{:<12} {:>18} {:>6}", series.category, payload, class);
        }
    }
}
