use crate::auth::auth::AuthUser;
use crate::model::navigation::{MenuEntry, menu_for};
use crate::model::role::Role;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct NavigationResponse {
    #[schema(example = "demo")]
    pub username: String,
    pub role: Role,
    pub modules: Vec<MenuEntry>,
}

/// Sidebar entries for the signed-in user
#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Modules visible to the caller's role", body = NavigationResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Navigation"
)]
pub async fn navigation(auth: AuthUser) -> impl Responder {
    HttpResponse::Ok().json(NavigationResponse {
        modules: menu_for(auth.role),
        role: auth.role,
        username: auth.username,
    })
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{TestApp, json_of};
    use crate::model::role::Role;
    use actix_web::test;
    use serde_json::json;

    #[actix_web::test]
    async fn auditor_menu() {
        let ctx = TestApp::with_role(Role::Auditor);
        let app = test::init_service(ctx.app()).await;

        let req = ctx.get("/api/navigation").to_request();
        let (_, body) = json_of(test::call_service(&app, req).await).await;
        assert_eq!(body["role"], "auditor");
        assert_eq!(
            body["modules"],
            json!([
                {"id": "overview", "name": "Overview"},
                {"id": "files", "name": "File management"}
            ])
        );
    }
}
