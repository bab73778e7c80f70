use crate::{
    auth::jwt::generate_access_token,
    clock::FixedClock,
    config::Config,
    model::role::Role,
    routes,
    store::{attendance::AttendanceRegistry, employee::EmployeeDirectory, files::FileCatalog},
};
use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web::Data,
};
use chrono::NaiveDate;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;

const PEER: &str = "127.0.0.1:40000";

/// Application wired like `main`, clock pinned to 2024-01-16 10:42:17.
pub struct TestApp {
    pub config: Config,
    pub registry: Data<AttendanceRegistry>,
    pub directory: Data<EmployeeDirectory>,
    token: String,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_role(Role::Admin)
    }

    pub fn with_role(role: Role) -> Self {
        let config = Config::for_tests();
        let now = NaiveDate::from_ymd_opt(2024, 1, 16)
            .unwrap()
            .and_hms_opt(10, 42, 17)
            .unwrap();
        let registry = AttendanceRegistry::seeded(
            Arc::new(FixedClock(now)),
            config.attendance_policy(),
        );
        let token = generate_access_token("tester".into(), role, &config.jwt_secret, 900).unwrap();

        Self {
            registry: Data::new(registry),
            directory: Data::new(EmployeeDirectory::seeded()),
            config,
            token,
        }
    }

    /// Fresh app over this context's shared stores; borrows nothing from `self`.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = Error,
            InitError = (),
        > + use<>,
    > {
        let config = self.config.clone();
        App::new()
            .app_data(Data::new(self.config.clone()))
            .app_data(self.registry.clone())
            .app_data(self.directory.clone())
            .app_data(Data::new(FileCatalog::default()))
            .configure(move |cfg| routes::configure(cfg, config))
    }

    fn peer() -> SocketAddr {
        PEER.parse().unwrap()
    }

    pub fn anonymous_get(&self, uri: &str) -> TestRequest {
        TestRequest::get().uri(uri).peer_addr(Self::peer())
    }

    pub fn anonymous_post(&self, uri: &str, body: Value) -> TestRequest {
        TestRequest::post()
            .uri(uri)
            .peer_addr(Self::peer())
            .set_json(body)
    }

    fn authorized(&self, req: TestRequest) -> TestRequest {
        req.peer_addr(Self::peer())
            .insert_header(("Authorization", format!("Bearer {}", self.token)))
    }

    pub fn get(&self, uri: &str) -> TestRequest {
        self.authorized(TestRequest::get().uri(uri))
    }

    pub fn post(&self, uri: &str, body: Value) -> TestRequest {
        self.authorized(TestRequest::post().uri(uri).set_json(body))
    }

    pub fn delete(&self, uri: &str) -> TestRequest {
        self.authorized(TestRequest::delete().uri(uri))
    }
}

/// Status and JSON body of a response; `Null` when the body is not JSON.
pub async fn json_of<B: MessageBody>(resp: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}
