//! ShoreCast CLI
//!
//! Command-line weather outlook for beach-cleanup planning.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::{CleanupOutlook, PresenterPort, WeatherService};
use infrastructure::{AppConfig, RealtimeReadingsAdapter};
use integration_realtime::RealtimeClient;
use render::ConsolePresenter;

/// ShoreCast CLI
#[derive(Parser)]
#[command(name = "shorecast")]
#[command(author, version, about = "Beach-cleanup weather outlook", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current conditions and the synthesized outlook
    Outlook {
        /// Fixed seed for the synthesized outlook
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text panels
        #[arg(long)]
        json: bool,
    },

    /// Show current conditions only
    Current {
        /// Print JSON instead of text panels
        #[arg(long)]
        json: bool,
    },

    /// Show the synthesized outlook only
    Forecast {
        /// Fixed seed for the synthesized outlook
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text panels
        #[arg(long)]
        json: bool,
    },

    /// Check whether the readings service is reachable
    Health,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the forecast seed: CLI flag, then config, then derived from the date
fn seed_for(date: NaiveDate, cli_seed: Option<u64>, config: &AppConfig) -> u64 {
    cli_seed
        .or(config.forecast.seed)
        .unwrap_or_else(|| u64::from(date.num_days_from_ce().unsigned_abs()))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(p) => AppConfig::load_from(p)?,
        None => AppConfig::load()?,
    };
    Ok(config)
}

fn build_service(config: &AppConfig) -> anyhow::Result<WeatherService> {
    let site = config.site.location()?;
    let client = RealtimeClient::new(config.realtime.clone())?;
    let adapter = RealtimeReadingsAdapter::new(client, config.retry.clone());
    Ok(WeatherService::new(Arc::new(adapter), site))
}

fn outlook_json(site_name: &str, outlook: &CleanupOutlook) -> serde_json::Value {
    let forecast = match &outlook.forecast {
        Ok(days) => serde_json::json!(days),
        Err(reason) => serde_json::json!({ "error": reason }),
    };
    serde_json::json!({
        "site": site_name,
        "current": outlook.current,
        "recommendation": {
            "tier": outlook.tier,
            "message": outlook.tier.message(),
        },
        "forecast": forecast,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(cli.config.as_ref())?;
    let service = build_service(&config)?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Outlook { seed, json } => {
            let outlook = service.outlook(today, seed_for(today, seed, &config)).await;
            if json {
                let value = outlook_json(&config.site.name, &outlook);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                let presenter = ConsolePresenter::new(config.site.name.clone());
                WeatherService::present(&outlook, &presenter);
            }
        },

        Commands::Current { json } => {
            let outlook = service.outlook(today, seed_for(today, None, &config)).await;
            if json {
                let value = serde_json::json!({
                    "site": config.site.name,
                    "current": outlook.current,
                    "recommendation": {
                        "tier": outlook.tier,
                        "message": outlook.tier.message(),
                    },
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                let presenter = ConsolePresenter::new(config.site.name.clone());
                presenter.show_current(&outlook.current, outlook.tier);
            }
        },

        Commands::Forecast { seed, json } => {
            let outlook = service.outlook(today, seed_for(today, seed, &config)).await;
            match (&outlook.forecast, json) {
                (Ok(days), true) => println!("{}", serde_json::to_string_pretty(days)?),
                (Err(reason), true) => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::json!({ "error": reason }))?
                    );
                },
                _ => {
                    let presenter = ConsolePresenter::new(config.site.name.clone());
                    match &outlook.forecast {
                        Ok(days) => presenter.show_forecast(days),
                        Err(reason) => presenter.show_forecast_unavailable(reason),
                    }
                },
            }
        },

        Commands::Health => {
            if service.is_available().await {
                println!("✅ Readings service reachable");
            } else {
                println!("❌ Readings service unreachable");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
