use std::fs;
use std::path::Path;

use crate::domain::{AppError, MenuTree};

/// Load and validate a menu document from disk.
pub fn load_menu_file(path: &Path) -> Result<MenuTree, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))?;
    Ok(MenuTree::parse_json(&content)?)
}
