use crate::api::attendance::{
    AttendanceListResponse, AttendanceQuery, MarkAttendanceReq, MarkAttendanceResponse,
    SummaryQuery,
};
use crate::api::employee::{EmployeeFilesResponse, EmployeeListResponse, EmployeeQuery};
use crate::api::files::{FileSearchQuery, FileSearchResponse, FolderQuery, FolderResponse};
use crate::api::navigation::NavigationResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::{Employee, EmployeeFile, EmploymentStatus};
use crate::model::file_item::{Breadcrumb, FileItem, FileKind, ReviewStatus};
use crate::model::navigation::{MenuEntry, Module};
use crate::model::role::Role;
use crate::models::{LoginReqDto, LoginResponse};
use crate::store::attendance::AttendanceSummary;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DBJ Dashboard API",
        version = "0.1.0",
        description = r#"
## Office dashboard

Backend for a small organization's dashboard. All data is in-memory demo data
seeded at start-up and lost on restart.

### Modules
- **Attendance**
  - Daily records per employee, mark present / late / absent / half-day
  - Per-day summary with attendance rate
- **Employees**
  - Directory with search and per-employee documents
- **Files**
  - Browse and search the shared document tree

### Sessions
`POST /auth/login` accepts any non-empty username and password and returns a
**Bearer** token. The sidebar modules a role may open are listed by
`GET /api/navigation`.

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::logout,

        crate::api::navigation::navigation,

        crate::api::attendance::list_attendance,
        crate::api::attendance::today_attendance,
        crate::api::attendance::all_attendance,
        crate::api::attendance::attendance_summary,
        crate::api::attendance::mark_attendance,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::list_employee_files,
        crate::api::employee::delete_employee_file,

        crate::api::files::list_folder,
        crate::api::files::search_files
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            Role,
            Module,
            MenuEntry,
            NavigationResponse,
            AttendanceStatus,
            AttendanceRecord,
            AttendanceQuery,
            SummaryQuery,
            AttendanceSummary,
            AttendanceListResponse,
            MarkAttendanceReq,
            MarkAttendanceResponse,
            EmploymentStatus,
            Employee,
            EmployeeFile,
            EmployeeQuery,
            EmployeeListResponse,
            EmployeeFilesResponse,
            FileKind,
            ReviewStatus,
            FileItem,
            Breadcrumb,
            FolderQuery,
            FolderResponse,
            FileSearchQuery,
            FileSearchResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Session login"),
        (name = "Navigation", description = "Role based sidebar"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Files", description = "Shared document tree APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
