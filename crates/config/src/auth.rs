//! Shared-password gate and the persisted authentication flag.
//!
//! Reads/writes ~/.config/sheetguard/auth.json (0600 on Unix). The flag
//! outlives the process; protected views read it on every mount and the
//! login view redirects away while it is set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The one shared password. Held here, outside the engine.
const ACCESS_PASSWORD: &str = "cbe425";

/// Exact string comparison; no hashing, no lockout, no backoff.
pub fn validate_password(candidate: &str) -> bool {
    candidate == ACCESS_PASSWORD
}

/// Persisted flag shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
struct AuthState {
    authenticated: bool,
}

/// Returns the path to the auth flag file.
pub fn auth_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|c| c.join("sheetguard/auth.json"))
}

/// Read the flag. Missing or unreadable file reads as "not
/// authenticated".
pub fn auth_state() -> bool {
    auth_file_path()
        .map(|p| auth_state_at(&p))
        .unwrap_or(false)
}

pub fn auth_state_at(path: &Path) -> bool {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str::<AuthState>(&s).ok())
        .map(|state| state.authenticated)
        .unwrap_or(false)
}

/// Persist the flag. Creates the parent directory if it doesn't exist.
/// Sets 0600 permissions on Unix.
pub fn set_auth_state(authenticated: bool) -> Result<(), String> {
    let path = auth_file_path().ok_or("Could not determine config directory")?;
    set_auth_state_at(&path, authenticated)
}

pub fn set_auth_state_at(path: &Path, authenticated: bool) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let contents = serde_json::to_string_pretty(&AuthState { authenticated })
        .map_err(|e| format!("Failed to serialize auth state: {}", e))?;

    std::fs::write(path, &contents).map_err(|e| format!("Failed to write auth file: {}", e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions)
            .map_err(|e| format!("Failed to set file permissions: {}", e))?;
    }

    Ok(())
}

/// Logout: delete the flag file.
pub fn clear_auth_state() -> Result<(), String> {
    let Some(path) = auth_file_path() else {
        return Ok(());
    };
    clear_auth_state_at(&path)
}

pub fn clear_auth_state_at(path: &Path) -> Result<(), String> {
    if path.exists() {
        std::fs::remove_file(path).map_err(|e| format!("Failed to delete auth file: {}", e))?;
    }
    Ok(())
}

/// Login-form entry point: validate and persist in one step. The error
/// string is the inline message the login view shows.
pub fn attempt_login(candidate: &str) -> Result<(), String> {
    if !validate_password(candidate) {
        return Err("Invalid password. Please try again.".to_string());
    }
    set_auth_state(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password_exact_match() {
        assert!(validate_password("cbe425"));
        assert!(!validate_password("cbe425 "));
        assert!(!validate_password("CBE425"));
        assert!(!validate_password(""));
    }

    #[test]
    fn test_auth_file_path_exists() {
        let path = auth_file_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("sheetguard"));
        assert!(path.to_string_lossy().contains("auth.json"));
    }

    #[test]
    fn test_flag_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");

        assert!(!auth_state_at(&path)); // absent = logged out

        set_auth_state_at(&path, true).unwrap();
        assert!(auth_state_at(&path));

        set_auth_state_at(&path, false).unwrap();
        assert!(!auth_state_at(&path));
    }

    #[test]
    fn test_clear_removes_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");

        set_auth_state_at(&path, true).unwrap();
        clear_auth_state_at(&path).unwrap();
        assert!(!auth_state_at(&path));
        assert!(!path.exists());

        // Clearing twice is fine.
        clear_auth_state_at(&path).unwrap();
    }

    #[test]
    fn test_garbage_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(!auth_state_at(&path));
    }

    #[cfg(unix)]
    #[test]
    fn test_flag_file_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        set_auth_state_at(&path, true).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
