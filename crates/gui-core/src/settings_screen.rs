// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Item Remote Contributors

//! Settings screen state: editable connection fields, test and save actions

use std::sync::Arc;

use anyhow::{Context, Result};
use item_remote_common::{parse_port_or_default, ConnectionConfig, RemoteClient, SettingsStore};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::events::{self, EventReceiver, EventSender, SettingsEvent};
use crate::view_models::{connection_test_line, error_text, StatusLine};

pub const FIELDS_REQUIRED_MESSAGE: &str = "❌ Please fill in all fields";
pub const SETTINGS_SAVED_MESSAGE: &str = "✅ Settings saved!";

pub struct SettingsScreen {
    store: Arc<dyn SettingsStore>,
    events: EventSender<SettingsEvent>,

    pub auth_token_input: String,
    pub host_input: String,
    pub port_input: String,

    /// Status message under the form; empty until an action runs
    pub status: Option<StatusLine>,
}

impl std::fmt::Debug for SettingsScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsScreen")
            .field("host_input", &self.host_input)
            .field("port_input", &self.port_input)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl SettingsScreen {
    /// Open the screen with the stored values filled in
    pub fn open(store: Arc<dyn SettingsStore>) -> Result<(Self, EventReceiver<SettingsEvent>)> {
        let config = store.load().context("Failed to load connection settings")?;
        let (events, receiver) = events::channel();
        let screen = Self {
            store,
            events,
            auth_token_input: config.auth_token,
            host_input: config.host,
            port_input: config.port.to_string(),
            status: None,
        };
        Ok((screen, receiver))
    }

    /// Settings described by the form, or `None` when token or host is blank
    ///
    /// An unparseable port falls back to the default port.
    pub fn form_config(&self) -> Option<ConnectionConfig> {
        let token = self.auth_token_input.trim();
        let host = self.host_input.trim();
        if token.is_empty() || host.is_empty() {
            return None;
        }
        Some(ConnectionConfig::new(
            host,
            parse_port_or_default(&self.port_input),
            token,
        ))
    }

    /// Check the companion described by the form (not the saved settings)
    pub fn test_connection(&mut self) -> Option<JoinHandle<()>> {
        let Some(config) = self.form_config() else {
            self.status = Some(StatusLine::failure(FIELDS_REQUIRED_MESSAGE));
            return None;
        };

        let client = match RemoteClient::new(config) {
            Ok(client) => client,
            Err(e) => {
                self.status = Some(StatusLine::failure(error_text(&e.to_string())));
                return None;
            }
        };

        debug!("Testing connection to {}", client.base_url());
        let events = self.events.clone();
        Some(tokio::spawn(async move {
            let event = match client.try_check_health().await {
                Ok(health) => SettingsEvent::ConnectionTested(health),
                Err(e) => SettingsEvent::ConnectionTestFailed(e.to_string()),
            };
            let _ = events.send(event);
        }))
    }

    /// Persist the form; returns whether anything was saved
    pub fn save(&mut self) -> bool {
        let Some(config) = self.form_config() else {
            self.status = Some(StatusLine::failure(FIELDS_REQUIRED_MESSAGE));
            return false;
        };

        match self.store.save(&config) {
            Ok(()) => {
                self.status = Some(StatusLine::success(SETTINGS_SAVED_MESSAGE));
                true
            }
            Err(e) => {
                self.status = Some(StatusLine::failure(error_text(&e.to_string())));
                false
            }
        }
    }

    /// Project a background outcome onto the screen
    pub fn apply(&mut self, event: SettingsEvent) {
        self.status = Some(match event {
            SettingsEvent::ConnectionTested(health) => connection_test_line(&health),
            SettingsEvent::ConnectionTestFailed(message) => {
                StatusLine::failure(error_text(&message))
            }
        });
    }
}
