//! adminfix: maintenance for generated Vue admin panel sources.
//!
//! Two independent tools live here: a fixer that migrates deprecated SCSS
//! `/deep/` selectors in `.vue` files, and the typed admin menu/permission
//! tree consumed by the panel's navigation.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    FileFailure, FixOptions, FixReport, MenuFormat, MenuSource, MenuSummary, RoleTables, fix,
    fix_at, load_config_at, menu, menu_check, menu_from_file, menu_render, menu_tables, scan,
    scan_at,
};
pub use domain::{AppError, DeepSelectorRule, Flag, FixConfig, MenuGroup, MenuItem, MenuTree, RoleEntry};
