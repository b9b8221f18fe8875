// Application settings
// Loaded from ~/.config/sheetguard/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One logical sheet source: spreadsheet id plus A1 range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSource {
    pub spreadsheet_id: String,
    pub range: String,
}

impl SheetSource {
    fn placeholder(section: &str) -> Self {
        SheetSource {
            spreadsheet_id: format!("REPLACE_WITH_{}_SPREADSHEET_ID", section.to_uppercase()),
            range: format!("{}!A1:Z1000", section),
        }
    }
}

/// The four content sources, keyed by page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSources {
    pub dashboard: SheetSource,
    pub documents: SheetSource,
    pub tableaux: SheetSource,
    pub diagrammes: SheetSource,
}

impl Default for SheetSources {
    fn default() -> Self {
        SheetSources {
            dashboard: SheetSource::placeholder("dashboard"),
            documents: SheetSource::placeholder("documents"),
            tableaux: SheetSource::placeholder("tableaux"),
            diagrammes: SheetSource::placeholder("diagrammes"),
        }
    }
}

/// Google Sheets connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsSettings {
    /// API key for the read path.
    pub api_key: String,

    /// Endpoint accepting update payloads (an Apps Script URL or
    /// similar). API keys are read-only, so writes need their own door.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_endpoint: Option<String>,

    pub sheets: SheetSources,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        SheetsSettings {
            api_key: "REPLACE_WITH_YOUR_API_KEY".to_string(),
            update_endpoint: None,
            sheets: SheetSources::default(),
        }
    }
}

/// UI settings the shell reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Animation duration in milliseconds
    pub animation_duration: u64,
    /// "light" or "dark"
    pub default_theme: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            animation_duration: 300,
            default_theme: "light".to_string(),
        }
    }
}

/// Top-level application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub google_sheets: SheetsSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            app_name: "CBE#4 Process Validation".to_string(),
            google_sheets: SheetsSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sheetguard")
            .join("settings.json")
    }

    /// Load settings, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }
}
