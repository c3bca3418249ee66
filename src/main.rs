use anyhow::Result;
use clap::{Parser, Subcommand};

/// folio - personal portfolio site and contact form relay
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio pages and contact form email relay", long_about = None)]
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
    /// Print the page route table
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::Config::load(cli.config.clone())?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;

            folio::observability::init_observability(
                "folio",
                env!("CARGO_PKG_VERSION"),
                &config.observability.log_level,
            )?;

            folio::cli::serve(config, host, port).await
        }
        Commands::Routes => {
            folio::cli::print_routes(&config);
            Ok(())
        }
    }
}
