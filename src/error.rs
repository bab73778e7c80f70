use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

#[derive(Debug, Display)]
pub enum DashboardError {
    #[display(fmt = "Attendance registry is not initialized")]
    RegistryMissing,

    #[display(fmt = "Employee directory is not initialized")]
    DirectoryMissing,

    #[display(fmt = "File catalog is not initialized")]
    CatalogMissing,

    #[display(fmt = "App config is not initialized")]
    ConfigMissing,

    #[display(fmt = "{}", _0)]
    Unauthorized(String),

    #[display(fmt = "{}", _0)]
    Forbidden(String),

    #[display(fmt = "Unknown employee: {}", _0)]
    UnknownEmployee(String),

    #[display(fmt = "File not found: {}", _0)]
    FileNotFound(String),
}

impl std::error::Error for DashboardError {}

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::RegistryMissing
            | DashboardError::DirectoryMissing
            | DashboardError::CatalogMissing
            | DashboardError::ConfigMissing => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DashboardError::Forbidden(_) => StatusCode::FORBIDDEN,
            DashboardError::UnknownEmployee(_) | DashboardError::FileNotFound(_) => {
                StatusCode::NOT_FOUND
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_employee_maps_to_not_found() {
        let err = DashboardError::UnknownEmployee("EMP999".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Unknown employee: EMP999");
    }

    #[test]
    fn auth_failures_keep_their_message() {
        let err = DashboardError::Unauthorized("Missing Authorization header".into());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Missing Authorization header");
        assert_eq!(
            DashboardError::Forbidden("nope".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn missing_state_is_a_server_error() {
        assert_eq!(
            DashboardError::RegistryMissing.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
