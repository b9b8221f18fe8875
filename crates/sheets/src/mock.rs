//! Placeholder accessor used during development.
//!
//! Returns static datasets after an artificial delay, dispatching on the
//! configured range string the way the future real integration will
//! dispatch on the spreadsheet. Updates always report acceptance.

use std::thread;
use std::time::Duration;

use sheetguard_config::settings::SheetSource;
use sheetguard_engine::accessor::{AccessorError, RecordSource, UpdatePayload};
use sheetguard_engine::record::{DocType, LibraryRecord, TaskRecord, TaskStatus};

/// Mock client bound to one logical source.
pub struct MockSheetsClient {
    source: SheetSource,
    fetch_delay: Duration,
    update_delay: Duration,
}

impl MockSheetsClient {
    /// Development delays: 500 ms fetch, 1000 ms update.
    pub fn new(source: SheetSource) -> Self {
        MockSheetsClient {
            source,
            fetch_delay: Duration::from_millis(500),
            update_delay: Duration::from_millis(1000),
        }
    }

    /// Zero-delay variant for tests.
    pub fn without_delay(source: SheetSource) -> Self {
        MockSheetsClient {
            source,
            fetch_delay: Duration::ZERO,
            update_delay: Duration::ZERO,
        }
    }
}

impl RecordSource<LibraryRecord> for MockSheetsClient {
    fn fetch_records(&self) -> Result<Vec<LibraryRecord>, AccessorError> {
        thread::sleep(self.fetch_delay);
        if self.source.range.contains("documents") {
            Ok(mock_documents())
        } else if self.source.range.contains("tableaux") {
            Ok(mock_tableaux())
        } else {
            Ok(mock_diagrammes())
        }
    }

    fn update_record(
        &self,
        _payload: UpdatePayload<'_, LibraryRecord>,
    ) -> Result<bool, AccessorError> {
        thread::sleep(self.update_delay);
        Ok(true)
    }
}

impl RecordSource<TaskRecord> for MockSheetsClient {
    fn fetch_records(&self) -> Result<Vec<TaskRecord>, AccessorError> {
        thread::sleep(self.fetch_delay);
        Ok(mock_tasks())
    }

    fn update_record(&self, _payload: UpdatePayload<'_, TaskRecord>) -> Result<bool, AccessorError> {
        thread::sleep(self.update_delay);
        Ok(true)
    }
}

// ── Development datasets ────────────────────────────────────────────

fn entry(id: &str, name: &str, category: &str, link: &str, doc_type: DocType) -> LibraryRecord {
    LibraryRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        link: link.to_string(),
        doc_type,
    }
}

fn task(id: &str, name: &str, status: TaskStatus, progress: u8, assignee: &str) -> TaskRecord {
    TaskRecord {
        id: id.to_string(),
        name: name.to_string(),
        status,
        progress,
        assignee: assignee.to_string(),
    }
}

pub fn mock_tasks() -> Vec<TaskRecord> {
    vec![
        task("1", "Task 1", TaskStatus::InProgress, 75, "John Doe"),
        task("2", "Task 2", TaskStatus::Completed, 100, "Jane Smith"),
        task("3", "Task 3", TaskStatus::NotStarted, 0, "Bob Johnson"),
        task("4", "Task 4", TaskStatus::InProgress, 30, "Alice Brown"),
        task("5", "Task 5", TaskStatus::InReview, 90, "Charlie White"),
    ]
}

pub fn mock_documents() -> Vec<LibraryRecord> {
    vec![
        entry(
            "1",
            "Process Validation Protocol",
            "Protocols",
            "https://docs.google.com/document/d/example1",
            DocType::GoogleDoc,
        ),
        entry(
            "2",
            "Risk Assessment Report",
            "Reports",
            "https://docs.google.com/document/d/example2",
            DocType::GoogleDoc,
        ),
        entry(
            "3",
            "Technical Specifications",
            "Technical",
            "https://example.com/specs.pdf",
            DocType::Pdf,
        ),
        entry(
            "4",
            "Validation Summary Report",
            "Reports",
            "https://example.com/validation.pdf",
            DocType::Pdf,
        ),
        entry(
            "5",
            "User Requirements Specification",
            "Technical",
            "https://docs.google.com/document/d/example3",
            DocType::GoogleDoc,
        ),
        entry(
            "6",
            "Functional Specification",
            "Technical",
            "https://example.com/functional.pdf",
            DocType::Pdf,
        ),
        entry(
            "7",
            "Test Script",
            "Testing",
            "https://docs.google.com/document/d/example4",
            DocType::GoogleDoc,
        ),
        entry(
            "8",
            "Qualification Report",
            "Reports",
            "https://example.com/qualification.pdf",
            DocType::Pdf,
        ),
    ]
}

pub fn mock_tableaux() -> Vec<LibraryRecord> {
    vec![
        entry(
            "1",
            "Process Flow Diagram",
            "Process Flows",
            "https://docs.google.com/spreadsheets/d/example1",
            DocType::GoogleSheet,
        ),
        entry(
            "2",
            "Risk Assessment Matrix",
            "Risk Management",
            "https://docs.google.com/spreadsheets/d/example2",
            DocType::GoogleSheet,
        ),
        entry(
            "3",
            "Quality Metrics Dashboard",
            "Quality Management",
            "https://docs.google.com/spreadsheets/d/example3",
            DocType::GoogleSheet,
        ),
        entry(
            "4",
            "Validation Test Results",
            "Testing",
            "https://docs.google.com/spreadsheets/d/example4",
            DocType::GoogleSheet,
        ),
        entry(
            "5",
            "Project Schedule Gantt Chart",
            "Project Management",
            "https://docs.google.com/spreadsheets/d/example5",
            DocType::GoogleSheet,
        ),
    ]
}

pub fn mock_diagrammes() -> Vec<LibraryRecord> {
    vec![
        entry(
            "1",
            "Equipment Layout Diagram",
            "Process Flows",
            "https://example.com/layout.html",
            DocType::Html,
        ),
        entry(
            "2",
            "Piping and Instrumentation Diagram",
            "Process Flows",
            "https://example.com/pid.pdf",
            DocType::Pdf,
        ),
        entry(
            "3",
            "Validation Decision Tree",
            "Quality Management",
            "https://docs.google.com/document/d/example5",
            DocType::GoogleDoc,
        ),
        entry(
            "4",
            "Sampling Plan Flowchart",
            "Testing",
            "https://example.com/sampling.pdf",
            DocType::Pdf,
        ),
    ]
}
