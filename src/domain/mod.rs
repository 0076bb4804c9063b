pub mod config;
pub mod error;
pub mod menu;
pub mod selector_rule;

pub use config::{ConfigError, FixConfig};
pub use error::AppError;
pub use menu::{Flag, MenuError, MenuGroup, MenuItem, MenuTree, RoleEntry};
pub use selector_rule::DeepSelectorRule;
