use include_dir::{Dir, include_dir};

use crate::domain::{AppError, MenuTree};

static MENU_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/menu");

/// File name of the admin panel's default menu inside the embedded asset directory.
pub const DEFAULT_MENU_FILE: &str = "menu.json";

/// Raw JSON of an embedded menu document.
pub fn menu_file_content(name: &str) -> Option<&'static str> {
    MENU_DIR.get_file(name).and_then(|file| file.contents_utf8())
}

/// Load and validate the default admin menu embedded in the binary.
pub fn embedded_menu() -> Result<MenuTree, AppError> {
    let content = menu_file_content(DEFAULT_MENU_FILE)
        .ok_or_else(|| AppError::MissingAsset(format!("menu/{}", DEFAULT_MENU_FILE)))?;
    Ok(MenuTree::parse_json(content)?)
}
