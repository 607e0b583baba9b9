use clap::{Parser, Subcommand};
use folder_navigator::commands::*;
use folder_navigator::core::print_error;
use std::env;

#[derive(Parser)]
#[command(name = "folder-navigator")]
#[command(about = "Instant type-ahead navigation of macOS Smart Folders")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search smart folders or inside one (the launcher entry point)
    Search {
        /// Free-text query; may contain the scope delimiter
        query: Vec<String>,

        /// Search the contents of the named folder directly
        #[arg(short = 'f', long)]
        folder: Option<String>,
    },
    /// Refresh a single cache key (the background job body)
    Refresh {
        /// Refresh the contents of the folder at this path
        #[arg(short = 'f', long)]
        folder: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Search { query, folder } => execute_search(query, folder),
        Commands::Refresh { folder } => execute_refresh(folder),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
