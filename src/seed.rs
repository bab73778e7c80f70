//! Mock data the dashboard starts with. Nothing here is persisted.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus, WorkingHours};
use crate::model::employee::{Employee, EmployeeFile, EmploymentStatus};
use crate::model::file_item::{FileItem, FileKind, ReviewStatus};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use std::collections::HashMap;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn hm(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Attendance of the five seeded employees for `today`.
pub fn attendance(today: NaiveDate) -> Vec<AttendanceRecord> {
    #[rustfmt::skip]
    let rows = [
        ("1", "EMP001", "John Doe", "Engineering", hm(9, 0), hm(18, 0), AttendanceStatus::Present, 9),
        ("2", "EMP002", "Jane Smith", "Marketing", hm(9, 15), hm(18, 15), AttendanceStatus::Late, 9),
        ("3", "EMP003", "Mike Johnson", "Finance", hm(9, 0), hm(13, 0), AttendanceStatus::HalfDay, 4),
        ("4", "EMP004", "Sarah Wilson", "Human Resources", None, None, AttendanceStatus::Absent, 0),
        ("5", "EMP005", "David Brown", "Engineering", hm(8, 45), hm(17, 45), AttendanceStatus::Present, 9),
    ];

    rows.into_iter()
        .map(
            |(id, employee_id, name, department, check_in, check_out, status, hours)| {
                AttendanceRecord {
                    id: id.to_string(),
                    employee_id: employee_id.to_string(),
                    employee_name: name.to_string(),
                    department: department.to_string(),
                    date: today,
                    check_in,
                    check_out,
                    status,
                    working_hours: WorkingHours::hours(hours),
                }
            },
        )
        .collect()
}

pub fn employees() -> Vec<Employee> {
    #[rustfmt::skip]
    let rows = [
        ("1", "EMP001", "John Doe", "john.doe", "+56 9 1234 5678", "Engineering", "Senior Developer", EmploymentStatus::Active, ymd(2023, 1, 15), "$350,000"),
        ("2", "EMP002", "Jane Smith", "jane.smith", "+56 9 2345 6789", "Marketing", "Marketing Manager", EmploymentStatus::Active, ymd(2022, 11, 20), "$250,000"),
        ("3", "EMP003", "Mike Johnson", "mike.johnson", "+56 9 3456 7890", "Finance", "Financial Analyst", EmploymentStatus::OnLeave, ymd(2023, 3, 10), "$250,000"),
        ("4", "EMP004", "Sarah Wilson", "sarah.wilson", "+56 9 4567 8901", "Human Resources", "HR Specialist", EmploymentStatus::Active, ymd(2022, 8, 5), "$250,000"),
        ("5", "EMP005", "David Brown", "david.brown", "+56 9 5678 9012", "Engineering", "Junior Developer", EmploymentStatus::Active, ymd(2023, 6, 1), "$250,000"),
    ];

    rows.into_iter()
        .map(|row| {
            let (
                id,
                employee_id,
                name,
                mailbox,
                phone,
                department,
                position,
                status,
                join_date,
                salary,
            ) = row;
            Employee {
                id: id.to_string(),
                employee_id: employee_id.to_string(),
                name: name.to_string(),
                email: format!("{}@ingsimple.com", mailbox),
                phone: phone.to_string(),
                department: department.to_string(),
                position: position.to_string(),
                status,
                join_date,
                salary: salary.to_string(),
            }
        })
        .collect()
}

/// Attachments keyed by the employee's directory id (not the `EMP...` code).
pub fn employee_files() -> HashMap<String, Vec<EmployeeFile>> {
    fn file(id: &str, name: &str, size: &str, uploaded: NaiveDate, by: &str) -> EmployeeFile {
        EmployeeFile {
            id: id.to_string(),
            name: name.to_string(),
            kind: "PDF".to_string(),
            size: size.to_string(),
            upload_date: uploaded,
            uploaded_by: by.to_string(),
        }
    }

    HashMap::from([
        (
            "1".to_string(),
            vec![
                file("f1", "Contract_JohnDoe.pdf", "2.3 MB", ymd(2023, 1, 20), "Admin"),
                file("f2", "Degree_Certificate.pdf", "1.1 MB", ymd(2023, 1, 20), "HR"),
            ],
        ),
        (
            "2".to_string(),
            vec![file("f3", "Contract_JaneSmith.pdf", "2.5 MB", ymd(2022, 11, 25), "Admin")],
        ),
    ])
}

fn node(
    id: &str,
    kind: FileKind,
    size: Option<&str>,
    modified: NaiveDate,
    status: ReviewStatus,
    author: &str,
    path: &str,
) -> FileItem {
    let (parent, name) = match path.rsplit_once('/') {
        Some(("", name)) => ("/", name),
        Some((parent, name)) => (parent, name),
        None => ("/", path),
    };
    FileItem {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        size: size.map(str::to_string),
        modified,
        status,
        author: author.to_string(),
        path: path.to_string(),
        parent_path: parent.to_string(),
    }
}

/// The shared document tree shown by the file browser.
pub static FILE_TREE: Lazy<Vec<FileItem>> = Lazy::new(file_tree);

#[rustfmt::skip]
fn file_tree() -> Vec<FileItem> {
    use FileKind::{File, Folder};
    use ReviewStatus::{Approved, Draft, Pending};

    vec![
        node("1", Folder, None, ymd(2024, 1, 15), Approved, "admin", "/Financial Reports"),
        node("2", Folder, None, ymd(2024, 1, 14), Approved, "manager", "/HR Documents"),
        node("3", Folder, None, ymd(2024, 1, 13), Approved, "admin", "/Legal Documents"),
        node("4", Folder, None, ymd(2024, 1, 12), Approved, "manager", "/Marketing Documents"),
        node("5", Folder, None, ymd(2024, 1, 16), Approved, "Finance Manager", "/Financial Reports/Reports 2024"),
        node("6", Folder, None, ymd(2024, 1, 10), Approved, "Finance Manager", "/Financial Reports/Reports 2023"),
        node("7", Folder, None, ymd(2024, 1, 8), Approved, "Finance Manager", "/Financial Reports/Budget Planning"),
        node("8", File, Some("3.2 MB"), ymd(2024, 1, 15), Approved, "Finance Manager", "/Financial Reports/Annual_Summary_2023.pdf"),
        node("9", File, Some("2.1 MB"), ymd(2024, 1, 16), Pending, "John Doe", "/Financial Reports/Reports 2024/Q1_2024_Report.pdf"),
        node("10", File, Some("2.4 MB"), ymd(2024, 1, 16), Pending, "John Doe", "/Financial Reports/Reports 2024/Q4_2024_Report.pdf"),
        node("11", Folder, None, ymd(2024, 1, 14), Approved, "Financial Analyst", "/Financial Reports/Reports 2024/Monthly_Analysis"),
        node("12", File, Some("1.8 MB"), ymd(2024, 1, 14), Approved, "Financial Analyst", "/Financial Reports/Reports 2024/Monthly_Analysis/January_Analysis.xlsx"),
        node("13", File, Some("1.9 MB"), ymd(2024, 1, 14), Draft, "Financial Analyst", "/Financial Reports/Reports 2024/Monthly_Analysis/February_Analysis.xlsx"),
        node("14", Folder, None, ymd(2024, 1, 12), Approved, "HR Manager", "/HR Documents/Policies"),
        node("15", Folder, None, ymd(2024, 1, 11), Approved, "HR Manager", "/HR Documents/Employee_Records"),
        node("16", Folder, None, ymd(2024, 1, 10), Approved, "HR Specialist", "/HR Documents/Training_Material"),
        node("17", File, Some("1.8 MB"), ymd(2024, 1, 15), Approved, "HR Manager", "/HR Documents/Employee_Handbook.docx"),
        node("18", File, Some("856 KB"), ymd(2024, 1, 12), Approved, "HR Manager", "/HR Documents/Policies/Remote_Work_Policy.pdf"),
        node("19", File, Some("742 KB"), ymd(2024, 1, 11), Pending, "HR Specialist", "/HR Documents/Policies/Leave_Policy.pdf"),
        node("20", Folder, None, ymd(2024, 1, 13), Approved, "Legal Team", "/Legal Documents/Contracts"),
        node("21", Folder, None, ymd(2024, 1, 12), Approved, "Legal Team", "/Legal Documents/Compliance"),
        node("22", Folder, None, ymd(2024, 1, 12), Approved, "Marketing Team", "/Marketing Documents/Brand Assets"),
        node("23", Folder, None, ymd(2024, 1, 11), Approved, "Marketing Team", "/Marketing Documents/Campaign_Materials"),
    ]
}
