//! CLI Adapter.

mod fix;
mod logging;
mod menu;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "adminfix")]
#[command(version)]
#[command(
    about = "Maintain generated Vue admin panel sources and menu data",
    long_about = None
)]
struct Cli {
    /// Emit debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite deprecated `& /deep/` selectors to `::v-deep` in place
    #[clap(visible_alias = "f")]
    Fix {
        #[command(flatten)]
        source: fix::SourceArgs,
        /// Report files that would change without writing them
        #[arg(long)]
        dry_run: bool,
    },
    /// List component files under the source directory
    #[clap(visible_alias = "s")]
    Scan {
        #[command(flatten)]
        source: fix::SourceArgs,
    },
    /// Inspect admin menu data
    #[clap(visible_alias = "m")]
    Menu {
        #[command(subcommand)]
        command: menu::MenuCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // No subcommand keeps the original one-shot behaviour: fix with defaults.
    let command = cli
        .command
        .unwrap_or(Commands::Fix { source: fix::SourceArgs::default(), dry_run: false });

    let result: Result<i32, AppError> = match command {
        Commands::Fix { source, dry_run } => fix::run_fix(source, dry_run).map(|_| 0),
        Commands::Scan { source } => fix::run_scan(source).map(|_| 0),
        Commands::Menu { command } => menu::run_menu(command).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
