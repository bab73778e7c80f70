use crate::error::DashboardError;
use crate::store::{attendance::AttendanceRegistry, employee::EmployeeDirectory, files::FileCatalog};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};
use std::ops::Deref;
use tracing::error;

/// State built once in `main` and registered with `App::app_data`.
pub trait Component: 'static {
    fn missing() -> DashboardError;
}

impl Component for AttendanceRegistry {
    fn missing() -> DashboardError {
        DashboardError::RegistryMissing
    }
}

impl Component for EmployeeDirectory {
    fn missing() -> DashboardError {
        DashboardError::DirectoryMissing
    }
}

impl Component for FileCatalog {
    fn missing() -> DashboardError {
        DashboardError::CatalogMissing
    }
}

/// Handle to an application component.
///
/// Extraction fails with a 500 when the app was assembled without the
/// component, instead of quietly serving empty data.
pub struct Shared<T: Component>(Data<T>);

impl<T: Component> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Component> FromRequest for Shared<T> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.app_data::<Data<T>>() {
            Some(data) => Ok(Shared(data.clone())),
            None => {
                let err = T::missing();
                error!(path = %req.path(), error = %err, "Component used before initialization");
                Err(err.into())
            }
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};

    async fn count(directory: Shared<EmployeeDirectory>) -> HttpResponse {
        HttpResponse::Ok().body(directory.list(None).len().to_string())
    }

    #[actix_web::test]
    async fn missing_component_fails_loudly() {
        let app = test::init_service(App::new().route("/", web::get().to(count))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn registered_component_is_handed_out() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(EmployeeDirectory::seeded()))
                .route("/", web::get().to(count)),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"5"));
    }
}
