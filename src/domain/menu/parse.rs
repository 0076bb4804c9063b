use std::collections::HashSet;

use serde::Deserialize;

use super::{Flag, MenuError, MenuGroup, MenuItem, MenuTree, RoleEntry};

pub(super) fn parse_menu_json(content: &str) -> Result<MenuTree, MenuError> {
    let roles: Vec<dto::RoleDto> = serde_json::from_str(content)?;
    let roles = roles
        .into_iter()
        .enumerate()
        .map(|(index, role)| role.into_domain(index))
        .collect::<Result<Vec<_>, _>>()?;

    let tree = MenuTree { roles };
    validate(&tree)?;
    Ok(tree)
}

fn validate(tree: &MenuTree) -> Result<(), MenuError> {
    if tree.roles.is_empty() {
        return Err(MenuError::NoRoles);
    }

    let mut role_names = HashSet::new();
    for (index, role) in tree.roles.iter().enumerate() {
        non_empty(&role.role_name, &format!("role #{}", index + 1), "roleName")?;
        if !role_names.insert(role.role_name.as_str()) {
            return Err(MenuError::DuplicateRole(role.role_name.clone()));
        }
        validate_role(role)?;
    }
    Ok(())
}

fn validate_role(role: &RoleEntry) -> Result<(), MenuError> {
    let role_location = format!("role '{}'", role.role_name);
    non_empty(&role.table_name, &role_location, "tableName")?;

    let mut tables = HashSet::new();
    for group in role.back_menu.iter().chain(role.front_menu.iter()) {
        non_empty(&group.menu, &format!("group of {}", role_location), "menu")?;
        if group.child.is_empty() {
            return Err(MenuError::EmptyGroup {
                role: role.role_name.clone(),
                group: group.menu.clone(),
            });
        }

        for item in &group.child {
            let item_location = format!("item of group '{}'", group.menu);
            non_empty(&item.menu, &item_location, "menu")?;
            non_empty(&item.menu_jump, &item_location, "menuJump")?;
            non_empty(&item.table_name, &item_location, "tableName")?;
            validate_buttons(role, item)?;

            if !tables.insert(item.table_name.as_str()) {
                return Err(MenuError::DuplicateTable {
                    role: role.role_name.clone(),
                    table: item.table_name.clone(),
                });
            }
        }
    }
    Ok(())
}

fn validate_buttons(role: &RoleEntry, item: &MenuItem) -> Result<(), MenuError> {
    if item.buttons.is_empty() {
        return Err(MenuError::NoButtons { role: role.role_name.clone(), item: item.menu.clone() });
    }

    let mut seen = HashSet::new();
    for button in &item.buttons {
        non_empty(button, &format!("item '{}'", item.menu), "button label")?;
        if !seen.insert(button.as_str()) {
            return Err(MenuError::DuplicateButton {
                role: role.role_name.clone(),
                item: item.menu.clone(),
                button: button.clone(),
            });
        }
    }
    Ok(())
}

fn non_empty(value: &str, location: &str, field: &'static str) -> Result<(), MenuError> {
    if value.trim().is_empty() {
        return Err(MenuError::EmptyField { location: location.to_string(), field });
    }
    Ok(())
}

mod dto {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    pub struct RoleDto {
        pub back_menu: Option<Vec<GroupDto>>,
        pub front_menu: Option<Vec<GroupDto>>,
        pub has_back_login: Option<String>,
        pub has_back_register: Option<String>,
        pub has_front_login: Option<String>,
        pub has_front_register: Option<String>,
        pub role_name: Option<String>,
        pub table_name: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct GroupDto {
        pub child: Option<Vec<ItemDto>>,
        pub menu: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    pub struct ItemDto {
        pub buttons: Option<Vec<String>>,
        pub menu: Option<String>,
        pub menu_jump: Option<String>,
        pub table_name: Option<String>,
    }

    fn required<T>(value: Option<T>, location: &str, field: &'static str) -> Result<T, MenuError> {
        value.ok_or_else(|| MenuError::MissingField { location: location.to_string(), field })
    }

    fn flag(value: Option<String>, location: &str, field: &'static str) -> Result<Flag, MenuError> {
        let value = required(value, location, field)?;
        Flag::parse(&value).ok_or_else(|| MenuError::InvalidFlag {
            location: location.to_string(),
            field,
            value,
        })
    }

    impl RoleDto {
        pub fn into_domain(self, index: usize) -> Result<RoleEntry, MenuError> {
            let location = format!("role #{}", index + 1);
            let role_name = required(self.role_name, &location, "roleName")?;
            let location = format!("role '{}'", role_name);

            let back_menu = required(self.back_menu, &location, "backMenu")?;
            // Generated menus omit frontMenu when the role has no front-end pages.
            let front_menu = self.front_menu.unwrap_or_default();

            Ok(RoleEntry {
                back_menu: convert_groups(back_menu, &location)?,
                front_menu: convert_groups(front_menu, &location)?,
                has_back_login: flag(self.has_back_login, &location, "hasBackLogin")?,
                has_back_register: flag(self.has_back_register, &location, "hasBackRegister")?,
                has_front_login: flag(self.has_front_login, &location, "hasFrontLogin")?,
                has_front_register: flag(self.has_front_register, &location, "hasFrontRegister")?,
                table_name: required(self.table_name, &location, "tableName")?,
                role_name,
            })
        }
    }

    fn convert_groups(groups: Vec<GroupDto>, role_location: &str) -> Result<Vec<MenuGroup>, MenuError> {
        groups
            .into_iter()
            .map(|group| -> Result<MenuGroup, MenuError> {
                let location = format!("group of {}", role_location);
                let menu = required(group.menu, &location, "menu")?;
                let location = format!("group '{}'", menu);
                let child = required(group.child, &location, "child")?
                    .into_iter()
                    .map(|item| item.into_domain(&location))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MenuGroup { child, menu })
            })
            .collect()
    }

    impl ItemDto {
        fn into_domain(self, group_location: &str) -> Result<MenuItem, MenuError> {
            let location = format!("item of {}", group_location);
            Ok(MenuItem {
                buttons: required(self.buttons, &location, "buttons")?,
                menu: required(self.menu, &location, "menu")?,
                menu_jump: required(self.menu_jump, &location, "menuJump")?,
                table_name: required(self.table_name, &location, "tableName")?,
            })
        }
    }
}
