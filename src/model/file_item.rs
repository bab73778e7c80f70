use crate::utils::search::matches_any;
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Folder,
    File,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
    Draft,
}

/// One node of the shared document tree.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    #[schema(example = "9")]
    pub id: String,

    #[schema(example = "Q1_2024_Report.pdf")]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FileKind,

    /// Only files carry a size label.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2.1 MB", nullable = true)]
    pub size: Option<String>,

    #[schema(example = "2024-01-16", value_type = String, format = "date")]
    pub modified: NaiveDate,

    pub status: ReviewStatus,

    #[schema(example = "John Doe")]
    pub author: String,

    #[schema(example = "/Financial Reports/Reports 2024/Q1_2024_Report.pdf")]
    pub path: String,

    #[schema(example = "/Financial Reports/Reports 2024")]
    pub parent_path: String,
}

impl FileItem {
    pub fn matches(&self, query: &str) -> bool {
        matches_any(
            query,
            &[self.name.as_str(), self.path.as_str(), self.author.as_str()],
        )
    }
}

/// One step of the trail from the root to the current folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Breadcrumb {
    #[schema(example = "Reports 2024")]
    pub name: String,
    #[schema(example = "/Financial Reports/Reports 2024")]
    pub path: String,
}
