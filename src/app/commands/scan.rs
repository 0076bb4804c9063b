//! Source tree listing command.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::SourceFilesystem;

/// List every file under `root` whose name ends with `suffix`.
pub fn execute<F: SourceFilesystem>(
    ctx: &AppContext<F>,
    root: &Path,
    suffix: &str,
) -> Result<Vec<PathBuf>, AppError> {
    let root = ctx.resolve(root);
    let files = ctx.sources().list_files(&root, suffix)?;
    tracing::debug!("found {} file(s) under {}", files.len(), root.display());
    Ok(files)
}
