use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Employee,
    Auditor,
}

impl Role {
    /// Role handed out by the login screen, whatever the credentials.
    pub const fn login_default() -> Self {
        Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_its_lowercase_name() {
        assert_eq!(Role::from_str("manager").ok(), Some(Role::Manager));
        assert_eq!(Role::Auditor.to_string(), "auditor");
        assert!(Role::from_str("root").is_err());
    }
}
