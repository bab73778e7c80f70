use crate::{
    auth::jwt::generate_access_token,
    config::Config,
    model::role::Role,
    models::{LoginReqDto, LoginResponse},
};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{debug, error, info, instrument};

/// Dashboard login.
///
/// Credentials are not checked against anything: any non-empty pair signs in
/// with the default role.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Empty username or password", body = Object, example = json!({
            "message": "Username and password are required"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(config, user),
    fields(username = %user.username)
)]
pub async fn login(user: web::Json<LoginReqDto>, config: web::Data<Config>) -> impl Responder {
    info!("Login request received");

    let username = user.username.as_str();
    if username.is_empty() || user.password.is_empty() {
        info!("Validation failed: empty username or password");
        return HttpResponse::BadRequest().json(json!({
            "message": "Username and password are required"
        }));
    }

    let role = Role::login_default();

    debug!(%role, "Generating access token");
    let access_token = match generate_access_token(
        username.to_string(),
        role,
        &config.jwt_secret,
        config.access_token_ttl,
    ) {
        Ok(token) => token,
        Err(e) => {
            error!(error = %e, "Failed to sign access token");
            return HttpResponse::InternalServerError().finish();
        }
    };

    info!(%role, "Login successful");

    HttpResponse::Ok().json(LoginResponse {
        access_token,
        username: username.to_string(),
        role,
    })
}

/// Sessions are stateless tokens; logging out is the client dropping its token.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = Object, example = json!({
            "message": "Logged out"
        }))
    ),
    tag = "Auth"
)]
pub async fn logout() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Logged out"
    }))
}
