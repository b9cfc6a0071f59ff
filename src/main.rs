use anyhow::Result;
use clap::{Parser, Subcommand};

/// Karmic Canteen - employee meal planning
#[derive(Parser)]
#[command(name = "canteen")]
#[command(about = "Canteen menu, meal commitments and attendance analytics", long_about = None)]
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
    /// Print an argon2 hash of a password
    HashPassword {
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = canteen::config::Config::load(cli.config)?;

    canteen::observability::init_observability(
        "canteen",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            canteen::server::serve(config, host, port).await
        }
        Commands::HashPassword { password } => {
            println!("{}", canteen_user::hash_password(&password)?);
            Ok(())
        }
    }
}
