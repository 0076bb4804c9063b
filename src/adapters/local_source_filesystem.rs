use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SourceFilesystem;

/// Filesystem-backed source tree.
#[derive(Debug, Clone, Default)]
pub struct LocalSourceFilesystem;

impl LocalSourceFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl SourceFilesystem for LocalSourceFilesystem {
    fn list_files(&self, root: &Path, suffix: &str) -> Result<Vec<PathBuf>, AppError> {
        let root = root.canonicalize().map_err(|e| AppError::directory_read(root, e))?;

        let mut pending = VecDeque::from([root]);
        let mut visited = HashSet::new();
        let mut matches = Vec::new();

        while let Some(dir) = pending.pop_front() {
            // Symlinked directories are followed; the canonical path keeps cycles finite.
            let canonical = dir.canonicalize().map_err(|e| AppError::directory_read(&dir, e))?;
            if !visited.insert(canonical) {
                tracing::debug!("skipping already visited {}", dir.display());
                continue;
            }
            tracing::debug!("scanning {}", dir.display());

            let entries = fs::read_dir(&dir).map_err(|e| AppError::directory_read(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| AppError::directory_read(&dir, e))?;
                let path = entry.path();
                let metadata = match fs::metadata(&path) {
                    Ok(metadata) => metadata,
                    Err(err) => {
                        // Dangling symlinks have no target to classify.
                        tracing::debug!("skipping unreadable entry {}: {}", path.display(), err);
                        continue;
                    }
                };

                if metadata.is_dir() {
                    pending.push_back(path);
                } else if metadata.is_file()
                    && entry.file_name().to_string_lossy().ends_with(suffix)
                {
                    matches.push(path);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|e| AppError::file_access(path, e))
    }
}
