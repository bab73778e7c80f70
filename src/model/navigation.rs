use crate::model::role::Role;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Dashboard sections shown in the sidebar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Display, EnumString, EnumIter, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Module {
    Overview,
    Files,
    Attendance,
    Employees,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuEntry {
    pub id: Module,
    #[schema(example = "Attendance", value_type = String)]
    pub name: &'static str,
}

impl Module {
    pub fn title(self) -> &'static str {
        match self {
            Module::Overview => "Overview",
            Module::Files => "File management",
            Module::Attendance => "Attendance",
            Module::Employees => "Employees",
        }
    }

    pub fn roles(self) -> &'static [Role] {
        match self {
            Module::Overview | Module::Files => {
                &[Role::Admin, Role::Manager, Role::Employee, Role::Auditor]
            }
            Module::Attendance => &[Role::Admin, Role::Manager, Role::Employee],
            Module::Employees => &[Role::Admin, Role::Manager],
        }
    }

    pub fn visible_to(self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}

/// Sidebar entries for `role`, in display order.
pub fn menu_for(role: Role) -> Vec<MenuEntry> {
    Module::iter()
        .filter(|m| m.visible_to(role))
        .map(|m| MenuEntry {
            id: m,
            name: m.title(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(role: Role) -> Vec<Module> {
        menu_for(role).into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn admin_and_manager_see_everything() {
        let all = vec![
            Module::Overview,
            Module::Files,
            Module::Attendance,
            Module::Employees,
        ];
        assert_eq!(ids(Role::Admin), all);
        assert_eq!(ids(Role::Manager), all);
    }

    #[test]
    fn employee_has_no_directory_and_auditor_no_attendance() {
        assert_eq!(
            ids(Role::Employee),
            vec![Module::Overview, Module::Files, Module::Attendance]
        );
        assert_eq!(ids(Role::Auditor), vec![Module::Overview, Module::Files]);
    }
}
