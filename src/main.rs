//! TRUSTSCOPE Dashboard - Main Entry Point
//!
//! Operator console for the TRUSTSCOPE trust-assessment service: enter
//! diagnostic measurements, submit them, read the trust verdict.

mod api;
mod error;
mod logic;
pub mod constants;

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use api::commands::{self, FeatureAssignment};
use logic::dashboard::Session;
use logic::features::FeatureVector;
use logic::trust_api::{ClientConfig, HttpTrustClient, TrustApi};

#[derive(Parser)]
#[command(author, version, about = "TRUSTSCOPE trust assessment dashboard", long_about = None)]
struct Cli {
    /// Trust service URL (scheme and host; the /api path is fixed)
    #[arg(long, global = true, value_name = "URL")]
    server: Option<String>,
    /// Request timeout in seconds; 0 disables it (the default)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard (default)
    Dashboard,
    /// Run a single assessment and print the verdict
    Assess {
        /// Override one feature, e.g. --set "worst area=2019" (repeatable)
        #[arg(long = "set", value_name = "FEATURE=VALUE")]
        set: Vec<FeatureAssignment>,
        /// Print the display model and normalized result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the trust service
    Health,
    /// Show recent decisions from the service audit log
    Logs {
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// List all features with their default values
    Features,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let result = rt.block_on(run(cli));

    // stdin reads park a blocking thread; don't wait for it
    rt.shutdown_background();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::default();
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    if let Some(secs) = cli.timeout {
        config.timeout_seconds = (secs > 0).then_some(secs);
    }

    let ansi = !cli.no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);
    log::info!("   Server: {}{}", config.server_url, constants::API_BASE_PATH);

    let api: Arc<dyn TrustApi> = Arc::new(HttpTrustClient::new(config)?);

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut session = Session::new(api, io::stdout(), ansi)
                .with_log_limit(constants::get_log_limit());
            session.run(stdin).await?;
        }

        Commands::Assess { set, json } => {
            let report = commands::run_assessment(api, &set).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.display.to_terminal(ansi));
            }
            if let Some(notice) = report.notice {
                anyhow::bail!(notice);
            }
        }

        Commands::Health => {
            let health = commands::check_health(api.as_ref()).await?;
            println!("{} (version {})", health.status, health.version);
        }

        Commands::Logs { limit, json } => {
            let limit = limit.unwrap_or_else(constants::get_log_limit);
            let rows = commands::recent_decisions(api.as_ref(), limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{}", row);
                }
            }
        }

        Commands::Features => {
            for row in commands::feature_table(&FeatureVector::new()) {
                let position = row.position.map(|p| format!("{:>2}.", p)).unwrap_or_else(|| "   ".to_string());
                println!("{} {:<24} {}", position, row.name, row.value);
            }
        }
    }

    Ok(())
}
