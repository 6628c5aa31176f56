// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Item Remote Contributors

//! Main screen state: command input, response text, connection indicator
//!
//! Network calls run as independent tokio tasks and report back through a
//! [`MainEvent`] channel. Nothing orders concurrent calls; whichever outcome
//! is applied last owns the displayed text.

use anyhow::{Context, Result};
use item_remote_common::{RemoteClient, SettingsStore};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::events::{self, EventReceiver, EventSender, MainEvent};
use crate::view_models::{command_response_text, error_text, health_status_line, StatusLine};

/// Shown instead of sending when the trimmed input is empty
pub const EMPTY_COMMAND_MESSAGE: &str = "Please enter a command";

pub const VOICE_NOT_IMPLEMENTED: &str = "Voice input not yet implemented";
pub const HISTORY_NOT_IMPLEMENTED: &str = "Command history not yet implemented";

#[derive(Debug)]
pub struct MainScreen {
    client: RemoteClient,
    events: EventSender<MainEvent>,

    /// Text currently typed into the command field
    pub command_input: String,

    /// Response area
    pub response_text: String,

    /// Connection indicator
    pub status: StatusLine,
}

impl MainScreen {
    /// Open the screen with the currently stored settings
    ///
    /// Settings are read once; reopen the screen to pick up changes.
    pub fn open(store: &dyn SettingsStore) -> Result<(Self, EventReceiver<MainEvent>)> {
        let config = store.load().context("Failed to load connection settings")?;
        let client = RemoteClient::new(config).context("Failed to create remote client")?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: RemoteClient) -> (Self, EventReceiver<MainEvent>) {
        let (events, receiver) = events::channel();
        let screen = Self {
            client,
            events,
            command_input: String::new(),
            response_text: String::new(),
            status: StatusLine::pending(),
        };
        (screen, receiver)
    }

    pub fn client(&self) -> &RemoteClient {
        &self.client
    }

    /// Send whatever is in the command field
    ///
    /// Returns `None` without touching the network when the trimmed input is
    /// empty; the response text then asks for a command.
    pub fn submit_command(&mut self) -> Option<JoinHandle<()>> {
        let command = self.command_input.trim().to_string();
        if command.is_empty() {
            self.response_text = EMPTY_COMMAND_MESSAGE.to_string();
            return None;
        }

        debug!("Submitting command ({} chars)", command.len());
        let client = self.client.clone();
        let events = self.events.clone();
        Some(tokio::spawn(async move {
            let event = match client.submit_command(&command).await {
                Ok(result) => MainEvent::CommandCompleted(result),
                Err(e) => MainEvent::CommandFailed(e.to_string()),
            };
            // Receiver gone means the screen was closed
            let _ = events.send(event);
        }))
    }

    /// Refresh the connection indicator; call when the screen is shown
    pub fn check_connection(&self) -> JoinHandle<()> {
        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let health = client.check_health().await;
            let _ = events.send(MainEvent::HealthChecked(health));
        })
    }

    /// Project a background outcome onto the screen
    pub fn apply(&mut self, event: MainEvent) {
        match event {
            MainEvent::CommandCompleted(result) => {
                self.response_text = command_response_text(&result);
                if result.success {
                    self.command_input.clear();
                }
            }
            MainEvent::CommandFailed(message) => {
                self.response_text = error_text(&message);
            }
            MainEvent::HealthChecked(health) => {
                self.status = health_status_line(&health);
            }
        }
    }

    pub fn start_voice_input(&mut self) {
        self.response_text = VOICE_NOT_IMPLEMENTED.to_string();
    }

    pub fn show_history(&mut self) {
        self.response_text = HISTORY_NOT_IMPLEMENTED.to_string();
    }
}
