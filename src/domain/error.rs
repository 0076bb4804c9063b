use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::config::ConfigError;
use crate::domain::menu::MenuError;

/// Library-wide error type for adminfix operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A directory could not be read while scanning the source tree.
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single file could not be read or written.
    #[error("Failed to access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is missing, malformed, or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Menu data failed to parse or validate.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// Requested role is not declared in the menu.
    #[error("Role '{0}' not found in menu")]
    RoleNotFound(String),

    /// Output rendering failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Embedded asset is missing from the binary.
    #[error("Missing embedded asset: {0}")]
    MissingAsset(String),
}

impl AppError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileAccess { path: path.into(), source }
    }

    pub fn directory_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::DirectoryRead { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DirectoryRead { source, .. } | AppError::FileAccess { source, .. } => {
                source.kind()
            }
            AppError::Config(ConfigError::Missing(_))
            | AppError::MissingAsset(_)
            | AppError::RoleNotFound(_) => io::ErrorKind::NotFound,
            AppError::Config(_)
            | AppError::Menu(_)
            | AppError::Serialization(_) => io::ErrorKind::InvalidInput,
        }
    }
}
