use crate::utils::search::matches_any;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EmploymentStatus {
    Active,
    Inactive,
    OnLeave,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "1",
        "employeeId": "EMP001",
        "name": "John Doe",
        "email": "john.doe@ingsimple.com",
        "phone": "+56 9 1234 5678",
        "department": "Engineering",
        "position": "Senior Developer",
        "status": "active",
        "joinDate": "2023-01-15",
        "salary": "$350,000"
    })
)]
pub struct Employee {
    #[schema(example = "1")]
    pub id: String,

    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@ingsimple.com")]
    pub email: String,

    #[schema(example = "+56 9 1234 5678")]
    pub phone: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "Senior Developer")]
    pub position: String,

    pub status: EmploymentStatus,

    #[schema(
        example = "2023-01-15",
        value_type = String,
        format = "date"
    )]
    pub join_date: NaiveDate,

    #[schema(example = "$350,000")]
    pub salary: String,
}

impl Employee {
    pub fn matches(&self, query: &str) -> bool {
        matches_any(
            query,
            &[
                self.name.as_str(),
                self.email.as_str(),
                self.department.as_str(),
                self.employee_id.as_str(),
            ],
        )
    }
}

/// Document attached to an employee's profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFile {
    #[schema(example = "f1")]
    pub id: String,

    #[schema(example = "Contract_JohnDoe.pdf")]
    pub name: String,

    #[schema(example = "PDF")]
    #[serde(rename = "type")]
    pub kind: String,

    #[schema(example = "2.3 MB")]
    pub size: String,

    #[schema(example = "2023-01-20", value_type = String, format = "date")]
    pub upload_date: NaiveDate,

    #[schema(example = "Admin")]
    pub uploaded_by: String,
}
