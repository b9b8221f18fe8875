//! Record types shared by the content pages.
//!
//! Library pages (documents, tableaux, diagrammes) carry link records;
//! the dashboard carries task records. Both shapes flow through the same
//! page controller via the `PageRecord` trait.

use serde::{Deserialize, Serialize};

/// Link target type, as stored in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocType {
    #[serde(rename = "google-doc")]
    GoogleDoc,
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "google-sheet")]
    GoogleSheet,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::GoogleDoc => "google-doc",
            DocType::Pdf => "pdf",
            DocType::Html => "html",
            DocType::GoogleSheet => "google-sheet",
        }
    }

    /// Parse the sheet cell value. Unknown strings are None.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "google-doc" => Some(DocType::GoogleDoc),
            "pdf" => Some(DocType::Pdf),
            "html" => Some(DocType::Html),
            "google-sheet" => Some(DocType::GoogleSheet),
            _ => None,
        }
    }
}

impl Default for DocType {
    fn default() -> Self {
        DocType::GoogleDoc
    }
}

/// Task lifecycle status. Serialized with the human-readable labels the
/// sheet uses ("Not Started", "In Progress", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "In Review")]
    InReview,
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InReview => "In Review",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Not Started" => Some(TaskStatus::NotStarted),
            "In Progress" => Some(TaskStatus::InProgress),
            "In Review" => Some(TaskStatus::InReview),
            "Completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::NotStarted
    }
}

/// One entry of a library page (documents, tableaux, diagrammes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub link: String,
    #[serde(rename = "type")]
    pub doc_type: DocType,
}

/// One row of the dashboard task table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub assignee: String,
}

/// The shape the page controller needs from a record.
///
/// Ids are stable strings; uniqueness is NOT guaranteed by the accessor,
/// so nothing downstream may assume it.
pub trait PageRecord: Clone {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Grouping/filtering key. None for records without one (tasks).
    fn category(&self) -> Option<&str>;
    /// Default-valued record for the add flow, with a freshly minted id.
    fn fresh(id: String) -> Self;
}

impl PageRecord for LibraryRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn fresh(id: String) -> Self {
        LibraryRecord {
            id,
            name: String::new(),
            category: String::new(),
            link: String::new(),
            doc_type: DocType::default(),
        }
    }
}

impl PageRecord for TaskRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn fresh(id: String) -> Self {
        TaskRecord {
            id,
            name: "New Task".to_string(),
            status: TaskStatus::NotStarted,
            progress: 0,
            assignee: String::new(),
        }
    }
}

/// Mint an id for a new record: one past the highest numeric id present.
/// Non-numeric ids are skipped; an empty set mints "1".
pub fn mint_record_id<R: PageRecord>(records: &[R]) -> String {
    let max = records
        .iter()
        .filter_map(|r| r.id().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    max.saturating_add(1).to_string()
}
