//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use libcat::config::Config;
use libcat::output::OutputMode;

/// libcat - An in-memory library catalog
#[derive(Parser, Debug)]
#[command(
    name = "libcat",
    version,
    about = "An in-memory library catalog",
    long_about = "Manage books, patrons, and checkouts from a text menu.\n\n\
                  Everything lives in memory and is gone when the program exits.\n\
                  Run without a subcommand to open the interactive menu."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (overrides LIBCAT_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive menu (default)
    Menu {
        /// Start with an empty catalog instead of the sample data
        #[arg(long)]
        empty: bool,
    },

    /// Run a scripted walkthrough against the sample catalog
    Demo,

    /// Check whether an identifier is a well-formed ISBN
    ValidateIsbn {
        /// Identifier to check (n-n-n-x)
        isbn: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = Config::load(cli.config.as_deref())?;

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        None => commands::menu(false, &config, output_mode),
        Some(Command::Menu { empty }) => commands::menu(empty, &config, output_mode),
        Some(Command::Demo) => commands::demo(&config, output_mode),
        Some(Command::ValidateIsbn { isbn }) => commands::validate_isbn(&isbn, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": libcat::VERSION
                    })
                );
            } else {
                println!("libcat v{}", libcat::VERSION);
            }
            Ok(())
        },
    }
}
