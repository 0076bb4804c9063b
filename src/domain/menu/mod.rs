//! Admin menu/permission tree.
//!
//! The tree is static configuration: roles carry capability flags and an
//! ordered list of menu groups, each group lists leaf items, and each item
//! names its backing table, navigation target, and permitted buttons.

mod error;
mod parse;

use serde::Serialize;

pub use error::MenuError;

/// Yes/no capability flag, stored as `是` / `否`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Flag {
    #[serde(rename = "是")]
    Yes,
    #[serde(rename = "否")]
    No,
}

impl Flag {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "是" => Some(Flag::Yes),
            "否" => Some(Flag::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Yes => "是",
            Flag::No => "否",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Flag::Yes)
    }
}

/// Full menu document: an ordered list of role entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MenuTree {
    pub roles: Vec<RoleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleEntry {
    pub back_menu: Vec<MenuGroup>,
    pub front_menu: Vec<MenuGroup>,
    pub has_back_login: Flag,
    pub has_back_register: Flag,
    pub has_front_login: Flag,
    pub has_front_register: Flag,
    pub role_name: String,
    pub table_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    pub child: Vec<MenuItem>,
    pub menu: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub buttons: Vec<String>,
    pub menu: String,
    pub menu_jump: String,
    pub table_name: String,
}

impl MenuTree {
    /// Parse and validate a menu document from JSON.
    pub fn parse_json(content: &str) -> Result<Self, MenuError> {
        parse::parse_menu_json(content)
    }

    pub fn role(&self, name: &str) -> Option<&RoleEntry> {
        self.roles.iter().find(|role| role.role_name == name)
    }

    pub fn group_count(&self) -> usize {
        self.roles.iter().map(|role| role.back_menu.len() + role.front_menu.len()).sum()
    }

    pub fn item_count(&self) -> usize {
        self.roles.iter().map(|role| role.items().count()).sum()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl RoleEntry {
    /// All leaf items across back and front menus, in declaration order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.back_menu.iter().chain(self.front_menu.iter()).flat_map(|group| group.child.iter())
    }

    /// Backing tables of every leaf item, in declaration order.
    pub fn table_names(&self) -> Vec<&str> {
        self.items().map(|item| item.table_name.as_str()).collect()
    }

    pub fn find_item(&self, table_name: &str) -> Option<&MenuItem> {
        self.items().find(|item| item.table_name == table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(menu: &str, table: &str) -> MenuItem {
        MenuItem {
            buttons: vec!["查看".into()],
            menu: menu.into(),
            menu_jump: "列表".into(),
            table_name: table.into(),
        }
    }

    fn role() -> RoleEntry {
        RoleEntry {
            back_menu: vec![
                MenuGroup { child: vec![item("A", "a")], menu: "G1".into() },
                MenuGroup { child: vec![item("B", "b"), item("C", "c")], menu: "G2".into() },
            ],
            front_menu: vec![],
            has_back_login: Flag::Yes,
            has_back_register: Flag::No,
            has_front_login: Flag::No,
            has_front_register: Flag::No,
            role_name: "管理员".into(),
            table_name: "users".into(),
        }
    }

    #[test]
    fn flag_parses_both_values() {
        assert_eq!(Flag::parse("是"), Some(Flag::Yes));
        assert_eq!(Flag::parse("否"), Some(Flag::No));
        assert_eq!(Flag::parse("yes"), None);
        assert!(Flag::Yes.is_yes());
    }

    #[test]
    fn items_follow_declaration_order() {
        let role = role();
        assert_eq!(role.table_names(), vec!["a", "b", "c"]);
        assert_eq!(role.find_item("b").map(|i| i.menu.as_str()), Some("B"));
        assert!(role.find_item("zzz").is_none());
    }

    #[test]
    fn front_menu_items_follow_back_menu_items() {
        let mut role = role();
        role.front_menu = vec![MenuGroup { child: vec![item("D", "d")], menu: "F1".into() }];
        assert_eq!(role.table_names(), vec!["a", "b", "c", "d"]);
        assert_eq!(role.find_item("d").map(|i| i.menu.as_str()), Some("D"));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let tree = MenuTree { roles: vec![role()] };
        let json = tree.to_json_pretty().unwrap();
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("\"roleName\": \"管理员\""));
        assert!(json.contains("\"hasBackLogin\": \"是\""));
        assert!(json.contains("\"menuJump\": \"列表\""));
        assert!(json.contains("\"backMenu\""));
    }

    #[test]
    fn counts_groups_and_items() {
        let tree = MenuTree { roles: vec![role()] };
        assert_eq!(tree.group_count(), 2);
        assert_eq!(tree.item_count(), 3);
    }
}
