//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::config_file::load_fix_config;
use crate::adapters::local_source_filesystem::LocalSourceFilesystem;
use crate::app::{
    AppContext,
    commands::{fix, menu, scan},
};

pub use crate::app::commands::fix::{FileFailure, FixOptions, FixReport};
pub use crate::app::commands::menu::{MenuFormat, MenuSource, MenuSummary, RoleTables};
pub use crate::domain::{AppError, FixConfig, MenuTree};

fn create_context(work_dir: PathBuf) -> AppContext<LocalSourceFilesystem> {
    AppContext::new(LocalSourceFilesystem::new(), work_dir)
}

// =============================================================================
// Fix Command API
// =============================================================================

/// Fix deprecated `/deep/` selectors under the configured source directory of the current directory.
pub fn fix(options: &FixOptions) -> Result<FixReport, AppError> {
    fix_at(options, std::env::current_dir()?)
}

/// Fix deprecated `/deep/` selectors, resolving a relative root against `work_dir`.
pub fn fix_at(options: &FixOptions, work_dir: impl Into<PathBuf>) -> Result<FixReport, AppError> {
    let ctx = create_context(work_dir.into());
    fix::execute(&ctx, options)
}

// =============================================================================
// Scan Command API
// =============================================================================

/// List files under `root` whose name ends with `suffix`.
pub fn scan(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, AppError> {
    scan_at(root, suffix, std::env::current_dir()?)
}

pub fn scan_at(
    root: &Path,
    suffix: &str,
    work_dir: impl Into<PathBuf>,
) -> Result<Vec<PathBuf>, AppError> {
    let ctx = create_context(work_dir.into());
    scan::execute(&ctx, root, suffix)
}

// =============================================================================
// Configuration API
// =============================================================================

/// Load `adminfix.toml` (or `explicit`) relative to `work_dir`.
pub fn load_config_at(work_dir: &Path, explicit: Option<&Path>) -> Result<FixConfig, AppError> {
    let explicit =
        explicit.map(|path| if path.is_absolute() { path.to_path_buf() } else { work_dir.join(path) });
    load_fix_config(work_dir, explicit.as_deref())
}

// =============================================================================
// Menu API
// =============================================================================

/// Load and validate the admin panel's default menu.
pub fn menu() -> Result<MenuTree, AppError> {
    MenuSource::Embedded.load()
}

/// Load and validate a menu document from disk.
pub fn menu_from_file(path: &Path) -> Result<MenuTree, AppError> {
    MenuSource::File(path.to_path_buf()).load()
}

pub fn menu_render(source: &MenuSource, format: MenuFormat) -> Result<String, AppError> {
    menu::render(source, format)
}

pub fn menu_check(source: &MenuSource) -> Result<MenuSummary, AppError> {
    menu::check(source)
}

pub fn menu_tables(source: &MenuSource, role: Option<&str>) -> Result<Vec<RoleTables>, AppError> {
    menu::tables(source, role)
}
