/// Menu data parse/validation error.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Failed to parse menu JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Menu {location} missing {field}")]
    MissingField { location: String, field: &'static str },

    #[error("Menu {location} has empty {field}")]
    EmptyField { location: String, field: &'static str },

    #[error("Invalid flag '{value}' for {location}.{field}: expected 是 or 否")]
    InvalidFlag { location: String, field: &'static str, value: String },

    #[error("Menu must declare at least one role")]
    NoRoles,

    #[error("Duplicate role '{0}'")]
    DuplicateRole(String),

    #[error("Menu group '{group}' of role '{role}' has no items")]
    EmptyGroup { role: String, group: String },

    #[error("Table '{table}' is mapped by more than one item of role '{role}'")]
    DuplicateTable { role: String, table: String },

    #[error("Item '{item}' of role '{role}' declares no buttons")]
    NoButtons { role: String, item: String },

    #[error("Item '{item}' of role '{role}' repeats button '{button}'")]
    DuplicateButton { role: String, item: String, button: String },
}
