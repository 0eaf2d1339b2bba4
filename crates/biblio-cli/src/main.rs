//! CLI frontend for the biblio lending-library engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "biblio",
    about = "biblio — a small lending-library engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted demonstration tour of the lending workflow
    Demo {
        /// Also print the final status snapshot as pretty JSON
        #[arg(long)]
        json: bool,
    },

    /// Open an interactive circulation-desk session on stdin/stdout
    Desk {
        /// Pre-seed the demo catalogue and members
        #[arg(short, long)]
        sample: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo { json } => commands::demo::run(json),
        Commands::Desk { sample } => commands::desk::run(sample),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
