//! Admin menu inspection commands.

use std::path::PathBuf;

use crate::adapters::assets::menu_assets::embedded_menu;
use crate::adapters::menu_file::load_menu_file;
use crate::domain::{AppError, MenuTree};

/// Where a menu document comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MenuSource {
    /// The admin panel's default menu compiled into the binary.
    #[default]
    Embedded,
    File(PathBuf),
}

impl MenuSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map(MenuSource::File).unwrap_or_default()
    }

    pub fn load(&self) -> Result<MenuTree, AppError> {
        match self {
            MenuSource::Embedded => embedded_menu(),
            MenuSource::File(path) => load_menu_file(path),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuFormat {
    #[default]
    Json,
    Yaml,
}

/// Structural counts of a validated menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSummary {
    pub roles: usize,
    pub groups: usize,
    pub items: usize,
}

/// Backing tables declared for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTables {
    pub role: String,
    pub tables: Vec<String>,
}

pub fn render(source: &MenuSource, format: MenuFormat) -> Result<String, AppError> {
    let tree = source.load()?;
    match format {
        MenuFormat::Json => {
            tree.to_json_pretty().map_err(|e| AppError::Serialization(e.to_string()))
        }
        MenuFormat::Yaml => tree.to_yaml().map_err(|e| AppError::Serialization(e.to_string())),
    }
}

pub fn check(source: &MenuSource) -> Result<MenuSummary, AppError> {
    let tree = source.load()?;
    Ok(MenuSummary { roles: tree.roles.len(), groups: tree.group_count(), items: tree.item_count() })
}

pub fn tables(source: &MenuSource, role: Option<&str>) -> Result<Vec<RoleTables>, AppError> {
    let tree = source.load()?;
    let roles = match role {
        Some(name) => {
            vec![tree.role(name).ok_or_else(|| AppError::RoleNotFound(name.to_string()))?]
        }
        None => tree.roles.iter().collect(),
    };

    Ok(roles
        .into_iter()
        .map(|role| RoleTables {
            role: role.role_name.clone(),
            tables: role.table_names().into_iter().map(str::to_string).collect(),
        })
        .collect())
}
