//! Fix and scan command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::app::api::{self, FixOptions};
use crate::domain::{AppError, FixConfig};

#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Source directory to scan (default: `src`, or `fix.source_dir` from the config)
    #[arg(short, long)]
    root: Option<PathBuf>,
    /// File-name suffix of component files (default: `.vue`)
    #[arg(long)]
    suffix: Option<String>,
    /// Configuration file (default: ./adminfix.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SourceArgs {
    fn resolve(self, work_dir: &Path) -> Result<FixConfig, AppError> {
        let mut config = api::load_config_at(work_dir, self.config.as_deref())?;
        if let Some(root) = self.root {
            config.source_dir = root;
        }
        if let Some(suffix) = self.suffix {
            config.suffix = suffix;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn run_fix(source: SourceArgs, dry_run: bool) -> Result<(), AppError> {
    let work_dir = std::env::current_dir()?;
    let config = source.resolve(&work_dir)?;
    let legacy_token = config.rule.legacy_token.clone();
    let suffix = config.suffix.clone();

    let options = FixOptions::from_config(config, dry_run);
    let report = api::fix_at(&options, work_dir)?;

    println!("Found {} {} files", report.found, suffix);
    let verb = if report.dry_run { "Would fix" } else { "Fixed" };
    for path in &report.fixed {
        println!("{}: {}", verb, path.display());
    }
    for failure in &report.failures {
        eprintln!("Error processing {}: {}", failure.path.display(), failure.message);
    }
    println!(
        "{} {} files with SCSS {} selector issues",
        verb,
        report.fixed_count(),
        legacy_token
    );
    Ok(())
}

pub fn run_scan(source: SourceArgs) -> Result<(), AppError> {
    let work_dir = std::env::current_dir()?;
    let config = source.resolve(&work_dir)?;

    for path in api::scan_at(&config.source_dir, &config.suffix, work_dir)? {
        println!("{}", path.display());
    }
    Ok(())
}
