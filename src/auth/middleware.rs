use crate::auth::auth::AuthUser;
use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::error::DashboardError;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::AUTHORIZATION,
    web::Data,
};
use tracing::{debug, error};

fn unauthorized(message: &str) -> DashboardError {
    DashboardError::Unauthorized(message.to_string())
}

fn authenticate(req: &ServiceRequest) -> Result<AuthUser, DashboardError> {
    let Some(config) = req.app_data::<Data<Config>>() else {
        error!(path = %req.path(), "App config missing, cannot verify sessions");
        return Err(DashboardError::ConfigMissing);
    };

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header encoding"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Authorization header must start with Bearer"))?;

    let claims = verify_token(token, &config.jwt_secret).map_err(|e| {
        debug!(error = %e, "Rejected session token");
        unauthorized("Invalid or expired token")
    })?;

    Ok(AuthUser {
        username: claims.sub,
        role: claims.role,
    })
}

/// Resolves the Bearer token into an `AuthUser` request extension.
///
/// Rejections are answered here with the usual `{"message"}` body.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    match authenticate(&req) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.call(req).await
        }
        Err(err) => Ok(req.error_response(err)),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{TestApp, json_of};
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn rejections_share_the_message_body() {
        let ctx = TestApp::new();
        let app = test::init_service(ctx.app()).await;

        let cases = [
            (None, "Missing Authorization header"),
            (Some("Token abc"), "Authorization header must start with Bearer"),
            (Some("Bearer not-a-jwt"), "Invalid or expired token"),
        ];
        for (header, message) in cases {
            let mut req = ctx.anonymous_get("/api/navigation");
            if let Some(value) = header {
                req = req.insert_header(("Authorization", value));
            }
            let (status, body) = json_of(test::call_service(&app, req.to_request()).await).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body["message"], message);
        }
    }
}
