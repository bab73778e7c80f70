use crate::auth::auth::AuthUser;
use crate::error::DashboardError;
use crate::model::{
    attendance::{AttendanceRecord, AttendanceStatus},
    navigation::Module,
};
use crate::state::Shared;
use crate::store::attendance::{AttendanceRegistry, MarkOutcome};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendanceQuery {
    /// Day to show; today when omitted.
    #[schema(value_type = Option<String>, format = "date", example = "2024-01-16")]
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummaryQuery {
    #[schema(value_type = Option<String>, format = "date", example = "2024-01-16")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceReq {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    pub status: AttendanceStatus,
    #[schema(value_type = Option<String>, format = "date", example = "2024-01-16")]
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceListResponse {
    #[schema(value_type = String, format = "date", example = "2024-01-16")]
    pub date: NaiveDate,
    pub data: Vec<AttendanceRecord>,
    #[schema(example = 5)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct MarkAttendanceResponse {
    /// `true` when a new record was appended for the day.
    pub created: bool,
    pub record: AttendanceRecord,
}

fn list_response(date: NaiveDate, data: Vec<AttendanceRecord>) -> AttendanceListResponse {
    AttendanceListResponse {
        date,
        total: data.len(),
        data,
    }
}

/// Attendance for a day
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(
        ("date", Query, description = "Day as YYYY-MM-DD, defaults to today"),
        ("search", Query, description = "Filter by employee name, department or id")
    ),
    responses(
        (status = 200, description = "Records for the day", body = AttendanceListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    auth: AuthUser,
    registry: Shared<AttendanceRegistry>,
    query: web::Query<AttendanceQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Attendance)?;

    let date = query.date.unwrap_or_else(|| registry.today());
    let mut records = registry.attendance_by_date(date);
    if let Some(search) = &query.search {
        records.retain(|r| r.matches(search));
    }

    Ok(HttpResponse::Ok().json(list_response(date, records)))
}

/// Today's attendance
#[utoipa::path(
    get,
    path = "/api/attendance/today",
    responses(
        (status = 200, description = "Records for today", body = AttendanceListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn today_attendance(
    auth: AuthUser,
    registry: Shared<AttendanceRegistry>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Attendance)?;

    let today = registry.today();
    Ok(HttpResponse::Ok().json(list_response(today, registry.today_attendance())))
}

/// Every record held by the registry, all days
#[utoipa::path(
    get,
    path = "/api/attendance/records",
    responses(
        (status = 200, description = "All records in registry order", body = [AttendanceRecord]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn all_attendance(
    auth: AuthUser,
    registry: Shared<AttendanceRegistry>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Attendance)?;

    Ok(HttpResponse::Ok().json(registry.records()))
}

/// Per-status counts and attendance rate
#[utoipa::path(
    get,
    path = "/api/attendance/summary",
    params(
        ("date", Query, description = "Day as YYYY-MM-DD, defaults to today")
    ),
    responses(
        (status = 200, description = "Summary for the day", body = AttendanceSummary),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn attendance_summary(
    auth: AuthUser,
    registry: Shared<AttendanceRegistry>,
    query: web::Query<SummaryQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Attendance)?;

    let date = query.date.unwrap_or_else(|| registry.today());
    Ok(HttpResponse::Ok().json(registry.summary(date)))
}

/// Mark an employee's status for a day
#[utoipa::path(
    post,
    path = "/api/attendance/mark",
    request_body = MarkAttendanceReq,
    responses(
        (status = 200, description = "Existing record updated", body = MarkAttendanceResponse),
        (status = 201, description = "Record created for the day", body = MarkAttendanceResponse),
        (status = 404, description = "Employee has no attendance history", body = Object, example = json!({
            "message": "Unknown employee: EMP999"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    auth: AuthUser,
    registry: Shared<AttendanceRegistry>,
    payload: web::Json<MarkAttendanceReq>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Attendance)?;

    let MarkAttendanceReq {
        employee_id,
        status,
        date,
    } = payload.into_inner();

    let response = match registry.mark_attendance(&employee_id, status, date) {
        MarkOutcome::Updated(record) => HttpResponse::Ok().json(MarkAttendanceResponse {
            created: false,
            record,
        }),
        MarkOutcome::Created(record) => HttpResponse::Created().json(MarkAttendanceResponse {
            created: true,
            record,
        }),
        MarkOutcome::UnknownEmployee => {
            return Err(DashboardError::UnknownEmployee(employee_id).into());
        }
    };

    info!(employee_id = %employee_id, %status, by = %auth.username, "Attendance marked");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{TestApp, json_of};
    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn lists_todays_seed() {
        let ctx = TestApp::new();
        let app = test::init_service(ctx.app()).await;

        let req = ctx.get("/api/attendance").to_request();
        let (status, body) = json_of(test::call_service(&app, req).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2024-01-16");
        assert_eq!(body["total"], 5);
        assert_eq!(body["data"][0]["checkOut"], "06:00 PM");

        let req = ctx.get("/api/attendance/today").to_request();
        let (_, today) = json_of(test::call_service(&app, req).await).await;
        assert_eq!(today, body);
    }

    #[actix_web::test]
    async fn search_narrows_the_day() {
        let ctx = TestApp::new();
        let app = test::init_service(ctx.app()).await;

        let req = ctx.get("/api/attendance?search=engineering").to_request();
        let (_, body) = json_of(test::call_service(&app, req).await).await;
        let ids: Vec<&Value> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| &r["employeeId"])
            .collect();
        assert_eq!(ids, [&json!("EMP001"), &json!("EMP005")]);
    }

    #[actix_web::test]
    async fn mark_updates_then_reads_back() {
        let ctx = TestApp::new();
        let app = test::init_service(ctx.app()).await;

        let req = ctx.post(
            "/api/attendance/mark",
            json!({"employeeId": "EMP001", "status": "absent", "date": "2024-01-16"}),
        );
        let (status, body) = json_of(test::call_service(&app, req.to_request()).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["created"], false);
        assert_eq!(
            body["record"],
            json!({
                "id": "1",
                "employeeId": "EMP001",
                "employeeName": "John Doe",
                "department": "Engineering",
                "date": "2024-01-16",
                "checkIn": "-",
                "checkOut": "-",
                "status": "absent",
                "workingHours": "0h 0m"
            })
        );

        let req = ctx.get("/api/attendance/summary").to_request();
        let (_, summary) = json_of(test::call_service(&app, req).await).await;
        assert_eq!(summary["absent"], 2);
        assert_eq!(summary["present"], 1);
    }

    #[actix_web::test]
    async fn mark_on_a_new_day_creates() {
        let ctx = TestApp::new();
        let app = test::init_service(ctx.app()).await;

        let req = ctx.post(
            "/api/attendance/mark",
            json!({"employeeId": "EMP003", "status": "half-day", "date": "2024-01-17"}),
        );
        let (status, body) = json_of(test::call_service(&app, req.to_request()).await).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["record"]["id"], "EMP003-2024-01-17");
        assert_eq!(body["record"]["checkIn"], "10:42 AM");
        assert_eq!(body["record"]["checkOut"], "01:00 PM");
        assert_eq!(body["record"]["workingHours"], "4h 0m");

        let req = ctx.get("/api/attendance?date=2024-01-17").to_request();
        let (_, day) = json_of(test::call_service(&app, req).await).await;
        assert_eq!(day["total"], 1);

        let req = ctx.get("/api/attendance/records").to_request();
        let (_, all) = json_of(test::call_service(&app, req).await).await;
        let all = all.as_array().unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[5]["id"], "EMP003-2024-01-17");
    }

    #[actix_web::test]
    async fn unknown_employee_is_not_found_and_changes_nothing() {
        let ctx = TestApp::new();
        let app = test::init_service(ctx.app()).await;

        let req = ctx.post(
            "/api/attendance/mark",
            json!({"employeeId": "EMP999", "status": "present"}),
        );
        let (status, body) = json_of(test::call_service(&app, req.to_request()).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Unknown employee: EMP999");
        assert_eq!(ctx.registry.len(), 5);
    }

    #[actix_web::test]
    async fn unknown_status_is_rejected() {
        let ctx = TestApp::new();
        let app = test::init_service(ctx.app()).await;

        let req = ctx.post(
            "/api/attendance/mark",
            json!({"employeeId": "EMP001", "status": "presente"}),
        );
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn requires_a_session() {
        let ctx = TestApp::new();
        let app = test::init_service(ctx.app()).await;

        let req = ctx.anonymous_get("/api/attendance").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
