// Item Remote - CLI Config Module
// Resolves which settings file the CLI reads and writes

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use item_remote_common::FileSettingsStore;

/// Settings store for an explicit `--settings` path, or the default location
pub fn open_store(path: Option<PathBuf>) -> Result<FileSettingsStore> {
    match path {
        Some(path) => Ok(FileSettingsStore::at(path)),
        None => FileSettingsStore::new().context("Could not locate the settings file"),
    }
}

/// Field overrides given on the command line, applied on top of stored values
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FieldOverrides {
    /// Companion host or IP
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Companion API port
    #[arg(short = 'p', long)]
    pub port: Option<String>,

    /// Authentication token
    #[arg(short = 't', long)]
    pub token: Option<String>,
}

impl FieldOverrides {
    /// Overwrite the settings form fields that were given
    pub fn apply_to(&self, screen: &mut item_remote_gui_core::SettingsScreen) {
        if let Some(host) = &self.host {
            screen.host_input = host.clone();
        }
        if let Some(port) = &self.port {
            screen.port_input = port.clone();
        }
        if let Some(token) = &self.token {
            screen.auth_token_input = token.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use item_remote_common::{ConnectionConfig, SettingsStore};
    use item_remote_gui_core::SettingsScreen;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path() {
        let store = open_store(Some(PathBuf::from("/tmp/item/ItemSettings.toml"))).unwrap();
        assert_eq!(store.path(), std::path::Path::new("/tmp/item/ItemSettings.toml"));
    }

    #[test]
    fn test_overrides_only_touch_given_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSettingsStore::at(temp_dir.path().join("ItemSettings.toml"));
        store
            .save(&ConnectionConfig::new("10.0.0.5", 9999, "abc"))
            .unwrap();

        let (mut screen, _rx) = SettingsScreen::open(Arc::new(store)).unwrap();
        let overrides = FieldOverrides {
            port: Some("8000".to_string()),
            ..Default::default()
        };
        overrides.apply_to(&mut screen);

        assert_eq!(
            screen.form_config(),
            Some(ConnectionConfig::new("10.0.0.5", 8000, "abc"))
        );
    }
}
