//! Spreadsheet accessors.
//!
//! Two implementations of the engine's `RecordSource` seam: a blocking
//! Google Sheets API client and a placeholder client that serves static
//! datasets with artificial latency. Controllers take either one; they
//! never see which is behind the trait.

pub mod client;
pub mod mock;

pub use client::SheetsClient;
pub use mock::MockSheetsClient;
