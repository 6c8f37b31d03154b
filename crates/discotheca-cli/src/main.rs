use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "discotheca", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the database (default: ~/.local/share/discotheca/catalog.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Drop and recreate the catalog schema
    ///
    /// Unconditionally drops the release, release_label, release_video,
    /// track, and format tables (children first, tolerating absence) and
    /// recreates them empty with the declared column sets, then stamps the
    /// applied variant.
    ///
    /// DESTRUCTIVE: every row in the catalog tables is lost on each run.
    /// Running it twice in a row is fine; the second run recreates the
    /// same empty tables.
    ///
    /// The canonical five-table schema is created unless --legacy asks for
    /// the older three-table form.
    Reset {
        /// Create the older three-table schema instead of the canonical one
        #[arg(long)]
        legacy: bool,
    },
    /// Show the applied schema stamp and per-table row counts
    Status,
    /// Check the live schema against the declared column sets
    Validate {
        /// Check against the older three-table schema
        #[arg(long)]
        legacy: bool,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Show example configuration
    Example,
    /// Create the config file with defaults if missing
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.db {
        Some(db) => config::Config::load_with_db_path(db)?,
        None => config::Config::load()?,
    };

    // Ensure the database directory exists
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match cli.command {
        Commands::Reset { legacy } => {
            commands::run_reset(&config.database_path, legacy)?;
        }
        Commands::Status => {
            commands::show_status(&config.database_path)?;
        }
        Commands::Validate { legacy } => {
            commands::run_validate(&config.database_path, legacy)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
