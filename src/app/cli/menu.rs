//! Menu command implementation.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::app::api::{self, MenuFormat, MenuSource};
use crate::domain::AppError;

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl From<OutputFormat> for MenuFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => MenuFormat::Json,
            OutputFormat::Yaml => MenuFormat::Yaml,
        }
    }
}

#[derive(Subcommand)]
pub enum MenuCommands {
    /// Print the menu tree (embedded default unless --file is given)
    Show {
        /// Menu JSON file to load instead of the embedded default
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Validate a menu JSON file against the menu schema
    Check {
        file: PathBuf,
    },
    /// List backing tables per role
    Tables {
        /// Menu JSON file to load instead of the embedded default
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Only list tables for this role
        #[arg(long)]
        role: Option<String>,
    },
}

pub fn run_menu(command: MenuCommands) -> Result<(), AppError> {
    match command {
        MenuCommands::Show { file, format } => {
            let rendered = api::menu_render(&MenuSource::from_option(file), format.into())?;
            println!("{}", rendered.trim_end());
        }
        MenuCommands::Check { file } => {
            let summary = api::menu_check(&MenuSource::File(file.clone()))?;
            println!(
                "✅ {} is valid: {} role(s), {} group(s), {} item(s)",
                file.display(),
                summary.roles,
                summary.groups,
                summary.items
            );
        }
        MenuCommands::Tables { file, role } => {
            let roles = api::menu_tables(&MenuSource::from_option(file), role.as_deref())?;
            for entry in roles {
                println!("{}:", entry.role);
                for table in entry.tables {
                    println!("  • {}", table);
                }
            }
        }
    }
    Ok(())
}
