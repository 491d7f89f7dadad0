use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod server;

use config::AppConfig;
use error::CliResult;

#[derive(Parser)]
#[command(name = "dealer-search")]
#[command(about = "Dealer Search - Google Ads Search campaign files from vehicle inventory")]
#[command(version)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "DEALER_SEARCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the builder form and the archive build endpoint
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long, env = "SERVER_HOST")]
        host: Option<String>,

        /// Bind port (overrides the config file)
        #[arg(short, long, env = "SERVER_PORT")]
        port: Option<u16>,
    },

    /// Build the campaign archive for a dealership and write it to disk
    Build {
        /// Dealership URL used to select inventory
        #[arg(short, long, default_value = "")]
        dealership_url: String,

        /// Campaign name (overrides the config file)
        #[arg(long)]
        campaign_name: Option<String>,

        /// Output file path
        #[arg(short, long, default_value = "google-ads-search.zip")]
        output: PathBuf,
    },

    /// Print the vehicles the configured inventory returns for a dealership
    Inventory {
        /// Dealership URL used to select inventory
        #[arg(short, long, default_value = "")]
        dealership_url: String,
    },

    /// List and validate the bulk files inside a built archive
    Inspect {
        /// Archive file
        archive: PathBuf,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve::execute(config).await
        }

        Commands::Build {
            dealership_url,
            campaign_name,
            output,
        } => {
            if let Some(campaign_name) = campaign_name {
                config.campaign_name = campaign_name;
            }
            commands::build_archive::execute(config, dealership_url, output).await
        }

        Commands::Inventory { dealership_url } => {
            commands::list_inventory::execute(config, dealership_url).await
        }

        Commands::Inspect { archive } => commands::inspect_archive::execute(archive),
    }
}
