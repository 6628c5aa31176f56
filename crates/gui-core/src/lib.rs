// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Item Remote Contributors

//! Framework-agnostic screen state for Item Remote
//!
//! Front-ends own rendering and input; the screens here own presentation
//! state and delegate every network call to the remote client.

pub mod events;
pub mod main_screen;
pub mod settings_screen;
pub mod view_models;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use events::{EventReceiver, EventSender, MainEvent, SettingsEvent};
pub use main_screen::MainScreen;
pub use settings_screen::SettingsScreen;
pub use view_models::{StatusColor, StatusLine};

// Re-export types from common crate for convenience
pub use item_remote_common::{
    CommandResult, ConnectionConfig, FileSettingsStore, HealthStatus, RemoteClient,
    SettingsStore,
};
