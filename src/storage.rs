//! Save-file persistence
//!
//! The profile is a small JSON document under the user's config directory.
//! Saves are write-heavy (every coin pickup, every new record) and strictly
//! best-effort: an I/O or parse failure is logged and the in-memory profile
//! stays authoritative for the rest of the session. A failed load falls
//! back to safe defaults instead of crashing.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::profile::Profile;

/// Persistence error types
#[derive(Debug, Clone, PartialEq)]
pub enum SaveError {
    /// Underlying filesystem error
    Io(String),
    /// Serialization/deserialization error
    Serde(String),
    /// No writable location is available (wasm, or no config dir)
    Unavailable,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(msg) => write!(f, "I/O error: {}", msg),
            SaveError::Serde(msg) => write!(f, "serialization error: {}", msg),
            SaveError::Unavailable => write!(f, "no save location available"),
        }
    }
}

/// Handle to the profile's on-disk location
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: Option<PathBuf>,
}

impl ProfileStore {
    /// Store under the platform config directory
    /// (`<config_dir>/pixel-hopper/save.json`). Falls back to a disabled
    /// store when no such directory exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn at_default_location() -> Self {
        Self {
            path: dirs::config_dir().map(|d| d.join("pixel-hopper").join("save.json")),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn at_default_location() -> Self {
        Self::disabled()
    }

    /// Store at an explicit path (tests, portable installs)
    pub fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// A store that never touches the filesystem
    pub fn disabled() -> Self {
        Self { path: None }
    }

    fn try_load(&self) -> Result<Profile, SaveError> {
        let path = self.path.as_ref().ok_or(SaveError::Unavailable)?;
        let contents = fs::read_to_string(path).map_err(|e| SaveError::Io(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| SaveError::Serde(e.to_string()))
    }

    fn try_save(&self, profile: &Profile) -> Result<(), SaveError> {
        let path = self.path.as_ref().ok_or(SaveError::Unavailable)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SaveError::Io(e.to_string()))?;
        }
        let contents =
            serde_json::to_string_pretty(profile).map_err(|e| SaveError::Serde(e.to_string()))?;
        fs::write(path, contents).map_err(|e| SaveError::Io(e.to_string()))
    }

    /// Load the profile, or defaults on any failure. A missing file is the
    /// normal first run and is not reported.
    pub fn load(&self) -> Profile {
        match self.try_load() {
            Ok(profile) => profile,
            Err(SaveError::Unavailable) => Profile::default(),
            Err(err) => {
                eprintln!("save file unreadable, starting fresh: {}", err);
                Profile::default()
            }
        }
    }

    /// Write the profile, logging failures and carrying on
    pub fn save(&self, profile: &Profile) {
        match self.try_save(profile) {
            Ok(()) | Err(SaveError::Unavailable) => {}
            Err(err) => eprintln!("failed to save profile: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Skin, Trail};
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::at_path(dir.path().join("save.json"));

        let mut profile = Profile::default();
        profile.total_coins = 1234;
        profile.max_platforms = 77;
        profile.current_skin = Skin::Robot;
        profile.purchased_skins.push(Skin::Robot);
        profile.current_trail = Trail::Rainbow;
        profile.purchased_trails.push(Trail::Rainbow);
        profile.double_coins = true;
        store.save(&profile);

        let loaded = store.load();
        assert_eq!(loaded.total_coins, 1234);
        assert_eq!(loaded.max_platforms, 77);
        assert_eq!(loaded.current_skin, Skin::Robot);
        assert_eq!(loaded.current_trail, Trail::Rainbow);
        assert!(loaded.double_coins);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::at_path(dir.path().join("nope.json"));
        let loaded = store.load();
        assert_eq!(loaded.total_coins, 0);
        assert_eq!(loaded.current_skin, Skin::Default);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "{ not json ").unwrap();
        let store = ProfileStore::at_path(path);
        let loaded = store.load();
        assert_eq!(loaded.max_platforms, 0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, r#"{"total_coins": 42}"#).unwrap();
        let store = ProfileStore::at_path(path);
        let loaded = store.load();
        assert_eq!(loaded.total_coins, 42);
        assert!(loaded.sound_enabled);
        assert!(loaded.owns_skin(Skin::Default));
    }

    #[test]
    fn test_disabled_store_is_silent() {
        let store = ProfileStore::disabled();
        store.save(&Profile::default());
        let loaded = store.load();
        assert_eq!(loaded.total_coins, 0);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::at_path(dir.path().join("deep/nested/save.json"));
        store.save(&Profile::default());
        assert!(dir.path().join("deep/nested/save.json").exists());
    }
}
