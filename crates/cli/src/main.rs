//! Showroom CLI - content store maintenance.
//!
//! # Usage
//!
//! ```bash
//! # Summarize the stored content
//! showroom-cli show
//!
//! # Export both records
//! showroom-cli export -o campos-moveis-config.json
//!
//! # Import a previously exported document
//! showroom-cli import campos-moveis-config.json
//!
//! # Restore the defaults
//! showroom-cli reset --yes
//!
//! # Clear a stuck admin session
//! showroom-cli logout
//! ```
//!
//! Every command takes `--data PATH` (or `SHOWROOM_DATA_PATH`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "showroom-cli")]
#[command(author, version, about = "Showroom content store tools")]
struct Cli {
    /// JSON file backing the content store
    #[arg(
        long,
        global = true,
        env = "SHOWROOM_DATA_PATH",
        default_value = "showroom-data.json"
    )]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the stored product and theme
    Show,
    /// Export both records as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import records from an exported document
    Import {
        /// Document to import
        file: PathBuf,
    },
    /// Overwrite both records with the defaults
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Clear the admin session flag
    Logout,
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data = cli.data;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Show => commands::content::show(&data, &mut stdout)?,
        Commands::Export { output } => {
            commands::content::export(&data, output.as_deref(), &mut stdout)?;
        }
        Commands::Import { file } => {
            let notice = commands::content::import(&data, &file)?;
            tracing::info!("{notice}");
        }
        Commands::Reset { yes } => {
            commands::content::reset(&data, yes)?;
            tracing::info!("Defaults restored");
        }
        Commands::Logout => {
            commands::session::logout(&data)?;
        }
    }
    Ok(())
}
