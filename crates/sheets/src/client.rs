//! Google Sheets HTTP accessor.
//!
//! Blocking reqwest client (no async runtime required). Reads go through
//! the public `values` endpoint with an API key; writes go to a
//! configured update endpoint (API keys are read-only), carrying either
//! a whole record or a `{id, deleted: true}` tombstone.

use std::time::Duration;

use sheetguard_config::settings::SheetSource;
use sheetguard_engine::accessor::{AccessorError, RecordSource, UpdatePayload};
use sheetguard_engine::record::{DocType, LibraryRecord, TaskRecord, TaskStatus};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Sheets API client bound to one logical source.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    api_key: String,
    update_endpoint: Option<String>,
    source: SheetSource,
    base_url: String,
}

impl SheetsClient {
    pub fn new(api_key: String, update_endpoint: Option<String>, source: SheetSource) -> Self {
        Self::with_base_url(api_key, update_endpoint, source, SHEETS_API_BASE.to_string())
    }

    /// Test seam: point the client at a local server.
    pub fn with_base_url(
        api_key: String,
        update_endpoint: Option<String>,
        source: SheetSource,
        base_url: String,
    ) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("sheetguard/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        SheetsClient {
            http,
            api_key,
            update_endpoint,
            source,
            base_url,
        }
    }

    /// Fetch the raw cell grid for this source's range.
    fn fetch_values(&self) -> Result<Vec<Vec<String>>, AccessorError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.source.spreadsheet_id, self.source.range
        );

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| AccessorError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AccessorError::Http(status, body));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| AccessorError::Parse(e.to_string()))?;

        // A range with no data comes back without a "values" key.
        let Some(rows) = json["values"].as_array() else {
            return Ok(Vec::new());
        };

        Ok(rows
            .iter()
            .map(|row| {
                row.as_array()
                    .map(|cells| cells.iter().map(cell_to_string).collect())
                    .unwrap_or_default()
            })
            .collect())
    }

    /// Send one update payload. `Ok(true)` when the endpoint accepted it.
    fn post_update(&self, payload: serde_json::Value) -> Result<bool, AccessorError> {
        let endpoint = self.update_endpoint.as_ref().ok_or_else(|| {
            AccessorError::NotConfigured(
                "no update endpoint configured; Sheets API keys are read-only".to_string(),
            )
        })?;

        let body = serde_json::json!({
            "spreadsheetId": self.source.spreadsheet_id,
            "range": self.source.range,
            "payload": payload,
        });

        let response = self
            .http
            .post(endpoint)
            .json(&body)
            .send()
            .map_err(|e| AccessorError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().unwrap_or_default();
            return Err(AccessorError::Http(status, text));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| AccessorError::Parse(e.to_string()))?;
        Ok(json["success"].as_bool().unwrap_or(true))
    }
}

impl RecordSource<LibraryRecord> for SheetsClient {
    fn fetch_records(&self) -> Result<Vec<LibraryRecord>, AccessorError> {
        parse_library_rows(&self.fetch_values()?)
    }

    fn update_record(
        &self,
        payload: UpdatePayload<'_, LibraryRecord>,
    ) -> Result<bool, AccessorError> {
        self.post_update(payload_json(payload)?)
    }
}

impl RecordSource<TaskRecord> for SheetsClient {
    fn fetch_records(&self) -> Result<Vec<TaskRecord>, AccessorError> {
        parse_task_rows(&self.fetch_values()?)
    }

    fn update_record(&self, payload: UpdatePayload<'_, TaskRecord>) -> Result<bool, AccessorError> {
        self.post_update(payload_json(payload)?)
    }
}

// ── Row parsing ─────────────────────────────────────────────────────

fn cell_to_string(cell: &serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn payload_json<R: serde::Serialize>(
    payload: UpdatePayload<'_, R>,
) -> Result<serde_json::Value, AccessorError> {
    match payload {
        UpdatePayload::Record(record) => {
            serde_json::to_value(record).map_err(|e| AccessorError::Parse(e.to_string()))
        }
        UpdatePayload::Tombstone { id } => Ok(serde_json::json!({ "id": id, "deleted": true })),
    }
}

/// Case-insensitive header lookup.
fn column_index(header: &[String], name: &str) -> Result<usize, AccessorError> {
    header
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| AccessorError::Parse(format!("missing '{}' column in header row", name)))
}

fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Progress cell: non-numeric reads as 0, numeric clamps to 100.
fn parse_progress(raw: &str) -> u8 {
    raw.trim().parse::<u64>().map_or(0, |n| n.min(100) as u8)
}

/// Parse a library sheet: header row, then id/name/category/link/type.
/// Cell values the enums don't recognize fall back to their defaults;
/// the accessor does not validate, it transports.
pub fn parse_library_rows(values: &[Vec<String>]) -> Result<Vec<LibraryRecord>, AccessorError> {
    let Some((header, rows)) = values.split_first() else {
        return Ok(Vec::new());
    };

    let id = column_index(header, "id")?;
    let name = column_index(header, "name")?;
    let category = column_index(header, "category")?;
    let link = column_index(header, "link")?;
    let doc_type = column_index(header, "type")?;

    Ok(rows
        .iter()
        .map(|row| LibraryRecord {
            id: cell(row, id).to_string(),
            name: cell(row, name).to_string(),
            category: cell(row, category).to_string(),
            link: cell(row, link).to_string(),
            doc_type: DocType::parse(cell(row, doc_type)).unwrap_or_default(),
        })
        .collect())
}

/// Parse the task sheet: header row, then id/name/status/progress/assignee.
pub fn parse_task_rows(values: &[Vec<String>]) -> Result<Vec<TaskRecord>, AccessorError> {
    let Some((header, rows)) = values.split_first() else {
        return Ok(Vec::new());
    };

    let id = column_index(header, "id")?;
    let name = column_index(header, "name")?;
    let status = column_index(header, "status")?;
    let progress = column_index(header, "progress")?;
    let assignee = column_index(header, "assignee")?;

    Ok(rows
        .iter()
        .map(|row| TaskRecord {
            id: cell(row, id).to_string(),
            name: cell(row, name).to_string(),
            status: TaskStatus::parse(cell(row, status)).unwrap_or_default(),
            progress: parse_progress(cell(row, progress)),
            assignee: cell(row, assignee).to_string(),
        })
        .collect())
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source() -> SheetSource {
        SheetSource {
            spreadsheet_id: "sheet-1".to_string(),
            range: "documents!A1:Z1000".to_string(),
        }
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse_library_rows() {
        let values = grid(&[
            &["id", "name", "category", "link", "type"],
            &["1", "Protocol", "Protocols", "https://x/1", "google-doc"],
            &["2", "Report", "Reports", "https://x/2", "pdf"],
        ]);
        let records = parse_library_rows(&values).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Protocol");
        assert_eq!(records[1].doc_type, DocType::Pdf);
    }

    #[test]
    fn test_parse_library_header_any_case() {
        let values = grid(&[
            &["ID", "Name", "Category", "Link", "Type"],
            &["1", "Protocol", "Protocols", "https://x/1", "html"],
        ]);
        let records = parse_library_rows(&values).unwrap();
        assert_eq!(records[0].doc_type, DocType::Html);
    }

    #[test]
    fn test_parse_library_missing_column() {
        let values = grid(&[&["id", "name", "category"], &["1", "A", "B"]]);
        let err = parse_library_rows(&values).unwrap_err();
        assert!(matches!(err, AccessorError::Parse(_)));
    }

    #[test]
    fn test_parse_task_rows_tolerates_bad_cells() {
        let values = grid(&[
            &["id", "name", "status", "progress", "assignee"],
            &["1", "Task 1", "In Progress", "75", "John Doe"],
            &["2", "Task 2", "Unknown", "banana", ""],
            &["3", "Task 3", "Completed", "250"],
        ]);
        let records = parse_task_rows(&values).unwrap();
        assert_eq!(records[0].progress, 75);
        assert_eq!(records[1].status, TaskStatus::NotStarted);
        assert_eq!(records[1].progress, 0);
        // Short row: missing assignee reads empty; out-of-range progress
        // clamps to 100.
        assert_eq!(records[2].assignee, "");
        assert_eq!(records[2].progress, 100);
    }

    #[test]
    fn test_parse_progress_clamps() {
        assert_eq!(parse_progress("75"), 75);
        assert_eq!(parse_progress(" 100 "), 100);
        assert_eq!(parse_progress("250"), 100);
        assert_eq!(parse_progress("99999999999999999999999"), 0); // not a u64
        assert_eq!(parse_progress("banana"), 0);
        assert_eq!(parse_progress(""), 0);
    }

    #[test]
    fn test_parse_empty_grid() {
        assert!(parse_library_rows(&[]).unwrap().is_empty());
        assert!(parse_task_rows(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_records_happy_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/spreadsheets/sheet-1/values/documents!A1:Z1000")
                .query_param("key", "AIza-test");
            then.status(200).json_body(serde_json::json!({
                "range": "documents!A1:Z1000",
                "values": [
                    ["id", "name", "category", "link", "type"],
                    ["1", "Protocol", "Protocols", "https://x/1", "google-doc"]
                ]
            }));
        });

        let client = SheetsClient::with_base_url(
            "AIza-test".to_string(),
            None,
            source(),
            server.base_url(),
        );
        let records: Vec<LibraryRecord> = client.fetch_records().unwrap();

        mock.assert();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Protocols");
    }

    #[test]
    fn test_fetch_records_empty_range() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200)
                .json_body(serde_json::json!({ "range": "documents!A1:Z1000" }));
        });

        let client = SheetsClient::with_base_url(
            "AIza-test".to_string(),
            None,
            source(),
            server.base_url(),
        );
        let records: Vec<LibraryRecord> = client.fetch_records().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_fetch_records_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(403).body("API key invalid");
        });

        let client = SheetsClient::with_base_url(
            "bad-key".to_string(),
            None,
            source(),
            server.base_url(),
        );
        let err = RecordSource::<LibraryRecord>::fetch_records(&client).unwrap_err();
        match err {
            AccessorError::Http(403, body) => assert!(body.contains("API key invalid")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_update_posts_tombstone() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/update")
                .json_body_includes(r#"{"payload": {"id": "3", "deleted": true}}"#);
            then.status(200).json_body(serde_json::json!({ "success": true }));
        });

        let client = SheetsClient::with_base_url(
            "AIza-test".to_string(),
            Some(format!("{}/update", server.base_url())),
            source(),
            server.base_url(),
        );
        let accepted = RecordSource::<LibraryRecord>::update_record(
            &client,
            UpdatePayload::Tombstone { id: "3" },
        )
        .unwrap();

        mock.assert();
        assert!(accepted);
    }

    #[test]
    fn test_update_refused_by_endpoint() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/update");
            then.status(200).json_body(serde_json::json!({ "success": false }));
        });

        let client = SheetsClient::with_base_url(
            "AIza-test".to_string(),
            Some(format!("{}/update", server.base_url())),
            source(),
            server.base_url(),
        );
        let record = LibraryRecord {
            id: "1".to_string(),
            name: "Protocol".to_string(),
            category: "Protocols".to_string(),
            link: "https://x/1".to_string(),
            doc_type: DocType::GoogleDoc,
        };
        let accepted = client.update_record(UpdatePayload::Record(&record)).unwrap();
        assert!(!accepted);
    }

    #[test]
    fn test_update_without_endpoint() {
        let client = SheetsClient::with_base_url(
            "AIza-test".to_string(),
            None,
            source(),
            "http://127.0.0.1:1".to_string(),
        );
        let err = RecordSource::<LibraryRecord>::update_record(
            &client,
            UpdatePayload::Tombstone { id: "1" },
        )
        .unwrap_err();
        assert!(matches!(err, AccessorError::NotConfigured(_)));
    }
}
