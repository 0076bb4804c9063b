use std::path::{Path, PathBuf};

use crate::ports::SourceFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: SourceFilesystem> {
    sources: F,
    work_dir: PathBuf,
}

impl<F: SourceFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(sources: F, work_dir: impl Into<PathBuf>) -> Self {
        Self { sources, work_dir: work_dir.into() }
    }

    /// Get a reference to the source filesystem.
    pub fn sources(&self) -> &F {
        &self.sources
    }

    /// Directory that relative paths resolve against.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Resolve `path` against the working directory unless it is already absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.work_dir.join(path) }
    }
}
