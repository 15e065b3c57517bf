//! Session persistence.
//!
//! A session is one [`GameState`] (flags, variables, inventory) written as
//! pretty JSON under `sessions/<name>.json`. Everything else in the world is
//! rebuilt from stage content; the live clock, a running script, and combat
//! timers are deliberately not saved.

use std::fs;
use std::path::{Path, PathBuf};

use harrow_core::GameState;
use tracing::debug;

use crate::error::{Result, RuntimeError};

/// File-backed store for named sessions.
pub struct SessionStore {
    base_dir: PathBuf,
}

impl SessionStore {
    /// Opens the store at the per-OS data directory.
    ///
    /// - Linux: `~/.local/share/harrow/sessions` (or `$XDG_DATA_HOME`)
    /// - macOS: `~/Library/Application Support/harrow/sessions`
    /// - Windows: `%APPDATA%\harrow\sessions`
    /// - Fallback: `./save_data/sessions`
    pub fn open_default() -> Result<Self> {
        let base_dir = directories::ProjectDirs::from("", "", "harrow")
            .map(|dirs| dirs.data_dir().join("sessions"))
            .unwrap_or_else(|| PathBuf::from("./save_data/sessions"));
        Self::open(base_dir)
    }

    /// Opens the store at an explicit directory, creating it if needed.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| io_error(&base_dir, e))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Names are file stems; anything that could escape the directory is
    /// rejected rather than sanitized.
    fn session_path(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RuntimeError::InvalidSessionName(name.to_string()));
        }
        Ok(self.base_dir.join(format!("{name}.json")))
    }

    /// Writes the state under `name`, replacing any previous save. The write
    /// goes through a temp file and a rename, so a crash mid-save leaves the
    /// old session intact.
    pub fn save(&self, name: &str, state: &GameState) -> Result<()> {
        let path = self.session_path(name)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(state)?;
        fs::write(&temp_path, json).map_err(|e| io_error(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| io_error(&path, e))?;

        debug!(session = name, path = %path.display(), "session saved");
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<GameState> {
        let path = self.session_path(name)?;
        if !path.exists() {
            return Err(RuntimeError::SessionMissing(name.to_string()));
        }
        let json = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
        let state = serde_json::from_str(&json)?;

        debug!(session = name, "session loaded");
        Ok(state)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.session_path(name).is_ok_and(|path| path.exists())
    }

    /// Removing a session that does not exist is fine.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.session_path(name)?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| io_error(&path, e))?;
            debug!(session = name, "session deleted");
        }
        Ok(())
    }

    /// All session names, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = fs::read_dir(&self.base_dir).map_err(|e| io_error(&self.base_dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.base_dir, e))?;
            let path = entry.path();
            if let Some(file_name) = path.file_name().and_then(|s| s.to_str())
                && let Some(name) = file_name.strip_suffix(".json")
            {
                names.push(name.to_string());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> RuntimeError {
    RuntimeError::SessionIo {
        path: path.to_path_buf(),
        source,
    }
}
