//! SCSS deep-selector fix command.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, DeepSelectorRule, FixConfig};
use crate::ports::SourceFilesystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOptions {
    /// Root directory to scan.
    pub root: PathBuf,
    pub suffix: String,
    pub rule: DeepSelectorRule,
    /// Report what would change without writing.
    pub dry_run: bool,
}

impl FixOptions {
    pub fn from_config(config: FixConfig, dry_run: bool) -> Self {
        Self { root: config.source_dir, suffix: config.suffix, rule: config.rule, dry_run }
    }
}

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    /// Number of files the scan matched.
    pub found: usize,
    /// Files rewritten (or that would be rewritten on a dry run).
    pub fixed: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    pub dry_run: bool,
}

impl FixReport {
    pub fn fixed_count(&self) -> usize {
        self.fixed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Rewrite one file in place when `rule` applies to it.
///
/// Returns whether the content changed. Files the rule does not touch are never written.
pub fn fix_file<F: SourceFilesystem>(
    sources: &F,
    rule: &DeepSelectorRule,
    path: &Path,
    dry_run: bool,
) -> Result<bool, AppError> {
    let content = sources.read_text(path)?;
    let Some(fixed) = rule.apply(&content) else {
        tracing::debug!("unchanged {}", path.display());
        return Ok(false);
    };

    if !dry_run {
        sources.write_text(path, &fixed)?;
    }
    tracing::info!(dry_run, "fixed {}", path.display());
    Ok(true)
}

/// Scan the source tree and fix every matching file, one at a time.
///
/// A scan failure aborts the run; a failure on a single file is recorded and skipped.
pub fn execute<F: SourceFilesystem>(
    ctx: &AppContext<F>,
    options: &FixOptions,
) -> Result<FixReport, AppError> {
    let root = ctx.resolve(&options.root);
    let files = ctx.sources().list_files(&root, &options.suffix)?;

    let mut report = FixReport { found: files.len(), dry_run: options.dry_run, ..Default::default() };

    for path in files {
        match fix_file(ctx.sources(), &options.rule, &path, options.dry_run) {
            Ok(true) => report.fixed.push(path),
            Ok(false) => {}
            Err(err) => {
                tracing::warn!("error processing {}: {}", path.display(), err);
                report.failures.push(FileFailure { path, message: err.to_string() });
            }
        }
    }

    Ok(report)
}
