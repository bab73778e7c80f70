use crate::error::DashboardError;
use crate::model::{navigation::Module, role::Role};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures::future::{Ready, ready};

/// Caller identity placed on the request by `auth_middleware`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or_else(|| DashboardError::Unauthorized("Missing session".into()).into()),
        )
    }
}

impl AuthUser {
    /// Same rule as the sidebar: a module the role cannot see is forbidden.
    pub fn require_module(&self, module: Module) -> Result<(), DashboardError> {
        if module.visible_to(self.role) {
            Ok(())
        } else {
            Err(DashboardError::Forbidden(format!(
                "{} is not available to {}",
                module.title(),
                self.role
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auditor_cannot_open_attendance() {
        let user = AuthUser {
            username: "audit".into(),
            role: Role::Auditor,
        };
        assert!(user.require_module(Module::Files).is_ok());
        assert!(user.require_module(Module::Attendance).is_err());
    }
}
