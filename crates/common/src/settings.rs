// Item Remote - Connection Settings Store
// Persisted host/port/token, shared by the CLI and the view layer

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::error::{Error, Result};

/// Settings namespace; also the stem of the settings file name
pub const SETTINGS_NAMESPACE: &str = "ItemSettings";

/// Load/save capability for connection settings
///
/// Whoever builds a [`RemoteClient`](crate::RemoteClient) calls `load`; only
/// the settings screen calls `save`.
pub trait SettingsStore: Send + Sync {
    /// Current settings, or the defaults if nothing was ever saved
    fn load(&self) -> Result<ConnectionConfig>;

    /// Replace the stored settings
    fn save(&self, config: &ConnectionConfig) -> Result<()>;
}

/// Obfuscate a token for logging (show only last 4 characters)
/// Example: "abc123def456" -> "********f456"
pub fn obfuscate_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        "*".repeat(chars.len())
    } else {
        let mask_len = chars.len() - 4;
        let visible: String = chars[mask_len..].iter().collect();
        format!("{}{}", "*".repeat(mask_len), visible)
    }
}

/// Get the default settings file path
pub fn default_settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
    Ok(config_dir
        .join("item-remote")
        .join(format!("{}.toml", SETTINGS_NAMESPACE)))
}

/// Settings kept in a TOML file
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store at the default location under the user config directory
    pub fn new() -> Result<Self> {
        Ok(Self::at(default_settings_path()?))
    }

    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<ConnectionConfig> {
        if !self.path.exists() {
            debug!(
                "Settings file does not exist, using defaults: {}",
                self.path.display()
            );
            return Ok(ConnectionConfig::default());
        }

        let contents = fs::read_to_string(&self.path)?;
        let config: ConnectionConfig = toml::from_str(&contents)?;
        debug!(
            "Loaded settings for {}:{} from {}",
            config.host,
            config.port,
            self.path.display()
        );
        Ok(config)
    }

    fn save(&self, config: &ConnectionConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.path, contents)?;

        // The token is a secret
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        info!(
            "Saved settings for {}:{} (token: {}) to {}",
            config.host,
            config.port,
            obfuscate_token(&config.auth_token),
            self.path.display()
        );
        Ok(())
    }
}

/// In-process settings, for tests and embedders without a filesystem
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    config: Mutex<Option<ConnectionConfig>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConnectionConfig) -> Self {
        Self {
            config: Mutex::new(Some(config)),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<ConnectionConfig> {
        let guard = self
            .config
            .lock()
            .map_err(|_| Error::Config("Settings lock poisoned".to_string()))?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, config: &ConnectionConfig) -> Result<()> {
        let mut guard = self
            .config
            .lock()
            .map_err(|_| Error::Config("Settings lock poisoned".to_string()))?;
        *guard = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_obfuscate_token() {
        let token = "abc123de-f456-7890-1234-567890abcdef";
        let obfuscated = obfuscate_token(token);
        assert_eq!(obfuscated, "********************************cdef");
        assert_eq!(obfuscated.len(), token.len());

        assert_eq!(obfuscate_token("12345"), "*2345");
        assert_eq!(obfuscate_token("1234"), "****");
        assert_eq!(obfuscate_token(""), "");
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSettingsStore::at(temp_dir.path().join("ItemSettings.toml"));

        assert_eq!(store.load().unwrap(), ConnectionConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("ItemSettings.toml");
        let store = FileSettingsStore::at(&path);

        let config = ConnectionConfig::new("10.0.0.5", 9999, "secret-token");
        store.save(&config).unwrap();
        assert!(path.exists());

        // A fresh store over the same file sees the saved values
        let reopened = FileSettingsStore::at(&path);
        assert_eq!(reopened.load().unwrap(), config);
    }

    #[test]
    fn test_settings_file_permissions() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSettingsStore::at(temp_dir.path().join("ItemSettings.toml"));
        store.save(&ConnectionConfig::new("h", 1, "t")).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = fs::metadata(store.path()).unwrap();
            assert_eq!(metadata.permissions().mode() & 0o777, 0o600);
        }
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ItemSettings.toml");
        fs::write(&path, "api_port = \"not a number\"").unwrap();

        let err = FileSettingsStore::at(&path).load().unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.load().unwrap(), ConnectionConfig::default());

        let config = ConnectionConfig::new("10.0.0.5", 9999, "abc");
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }
}
