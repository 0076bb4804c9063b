//! Test double for `SourceFilesystem`.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SourceFilesystem;

/// In-memory source tree with injectable failures.
#[derive(Default)]
pub struct MockSourceFilesystem {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub unreadable: RefCell<HashSet<PathBuf>>,
    pub unwritable: RefCell<HashSet<PathBuf>>,
    pub missing_root: RefCell<bool>,
    pub writes: RefCell<Vec<PathBuf>>,
}

impl MockSourceFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_unreadable(self, path: &str) -> Self {
        self.unreadable.borrow_mut().insert(PathBuf::from(path));
        self
    }

    pub fn with_unwritable(self, path: &str) -> Self {
        self.unwritable.borrow_mut().insert(PathBuf::from(path));
        self
    }

    pub fn with_missing_root(self) -> Self {
        *self.missing_root.borrow_mut() = true;
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl SourceFilesystem for MockSourceFilesystem {
    fn list_files(&self, root: &Path, suffix: &str) -> Result<Vec<PathBuf>, AppError> {
        if *self.missing_root.borrow() {
            return Err(AppError::directory_read(
                root,
                io::Error::new(io::ErrorKind::NotFound, "Mock root not found"),
            ));
        }
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| path.starts_with(root))
            .filter(|path| path.to_string_lossy().ends_with(suffix))
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        if self.unreadable.borrow().contains(path) {
            return Err(AppError::file_access(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "Mock read denied"),
            ));
        }
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            AppError::file_access(path, io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.unwritable.borrow().contains(path) {
            return Err(AppError::file_access(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "Mock write denied"),
            ));
        }
        self.writes.borrow_mut().push(path.to_path_buf());
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
