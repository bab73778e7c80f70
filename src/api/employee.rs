use crate::auth::auth::AuthUser;
use crate::error::DashboardError;
use crate::model::{
    employee::{Employee, EmployeeFile},
    navigation::Module,
};
use crate::state::Shared;
use crate::store::employee::EmployeeDirectory;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmployeeQuery {
    pub search: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    #[schema(example = 5)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFilesResponse {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    pub files: Vec<EmployeeFile>,
}

/// List employees
#[utoipa::path(
    get,
    path = "/api/employees",
    params(
        ("search", Query, description = "Search by name, email, department or employee id")
    ),
    responses(
        (status = 200, description = "Employee list", body = EmployeeListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_employees(
    auth: AuthUser,
    directory: Shared<EmployeeDirectory>,
    query: web::Query<EmployeeQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Employees)?;

    let data = directory.list(query.search.as_deref());
    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        total: data.len(),
        data,
    }))
}

/// Get Employee by employee id
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee id, e.g. EMP001")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Unknown employee: EMP999"
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_employee(
    auth: AuthUser,
    directory: Shared<EmployeeDirectory>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Employees)?;

    let employee_id = path.into_inner();
    match directory.get(&employee_id) {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(DashboardError::UnknownEmployee(employee_id).into()),
    }
}

/// Documents attached to an employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/files",
    params(
        ("employee_id", Path, description = "Employee id, e.g. EMP001")
    ),
    responses(
        (status = 200, description = "Attached files", body = EmployeeFilesResponse),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_employee_files(
    auth: AuthUser,
    directory: Shared<EmployeeDirectory>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Employees)?;

    let employee_id = path.into_inner();
    let files = directory
        .files(&employee_id)
        .ok_or_else(|| DashboardError::UnknownEmployee(employee_id.clone()))?;

    Ok(HttpResponse::Ok().json(EmployeeFilesResponse { employee_id, files }))
}

/// Detach a document from an employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}/files/{file_id}",
    params(
        ("employee_id", Path, description = "Employee id, e.g. EMP001"),
        ("file_id", Path, description = "File id")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Employee or file not found")
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_employee_file(
    auth: AuthUser,
    directory: Shared<EmployeeDirectory>,
    path: web::Path<(String, String)>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Employees)?;

    let (employee_id, file_id) = path.into_inner();
    if directory.get(&employee_id).is_none() {
        return Err(DashboardError::UnknownEmployee(employee_id).into());
    }
    if !directory.remove_file(&employee_id, &file_id) {
        return Err(DashboardError::FileNotFound(file_id).into());
    }

    info!(
        employee_id = %employee_id,
        file_id = %file_id,
        by = %auth.username,
        "Employee file removed"
    );
    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}
