use crate::utils::search::matches_any;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Placeholder shown for a time that was not recorded.
pub const NOT_RECORDED: &str = "-";

const CLOCK_FORMAT: &str = "%I:%M %p";

#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    HalfDay,
}

/// Duration label attached to a record, e.g. `9h 0m`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct WorkingHours {
    minutes: u32,
}

impl WorkingHours {
    pub const fn hours(hours: u32) -> Self {
        Self {
            minutes: hours * 60,
        }
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.minutes / 60, self.minutes % 60)
    }
}

impl Serialize for WorkingHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Renders a recorded time as `hh:mm AM/PM`, or the `-` placeholder.
pub fn format_clock(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format(CLOCK_FORMAT).to_string(),
        None => NOT_RECORDED.to_string(),
    }
}

fn serialize_clock<S: Serializer>(
    time: &Option<NaiveTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_clock(*time))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "1",
        "employeeId": "EMP001",
        "employeeName": "John Doe",
        "department": "Engineering",
        "date": "2024-01-16",
        "checkIn": "09:00 AM",
        "checkOut": "06:00 PM",
        "status": "present",
        "workingHours": "9h 0m"
    })
)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,

    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,

    #[serde(serialize_with = "serialize_clock")]
    #[schema(value_type = String, example = "09:00 AM")]
    pub check_in: Option<NaiveTime>,

    #[serde(serialize_with = "serialize_clock")]
    #[schema(value_type = String, example = "-")]
    pub check_out: Option<NaiveTime>,

    pub status: AttendanceStatus,

    #[schema(value_type = String, example = "9h 0m")]
    pub working_hours: WorkingHours,
}

impl AttendanceRecord {
    /// Id given to records appended by a mark: `{employee_id}-{date}`.
    pub fn derived_id(employee_id: &str, date: NaiveDate) -> String {
        format!("{}-{}", employee_id, date.format("%Y-%m-%d"))
    }

    pub fn is_for(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.employee_id == employee_id && self.date == date
    }

    pub fn matches(&self, query: &str) -> bool {
        matches_any(
            query,
            &[
                self.employee_name.as_str(),
                self.department.as_str(),
                self.employee_id.as_str(),
            ],
        )
    }
}
