use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Access to the component source tree being maintained.
pub trait SourceFilesystem {
    /// List files under `root`, at any depth, whose file name ends with `suffix`.
    ///
    /// Any directory that cannot be read aborts the listing.
    fn list_files(&self, root: &Path, suffix: &str) -> Result<Vec<PathBuf>, AppError>;

    /// Read a whole file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;

    /// Replace a file's content entirely.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
