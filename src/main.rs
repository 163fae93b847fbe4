use anyhow::Result;
use clap::{Parser, Subcommand};

/// quoterelay - marketing site and quote request relay
#[derive(Parser)]
#[command(name = "quoterelay")]
#[command(about = "Serves the marketing site and relays quote requests over SMTP", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = quoterelay::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize logging
    quoterelay::observability::init_observability(&config.logging.level)?;

    match cli.command {
        Commands::Serve { host, port } => quoterelay::server::serve(config, host, port).await,
    }
}
