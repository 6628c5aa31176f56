// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Item Remote Contributors

//! Outcomes of background calls, delivered back to the screen that started them

use item_remote_common::{CommandResult, HealthStatus};
use tokio::sync::mpsc;

/// Outcomes delivered to the main screen
#[derive(Debug, Clone)]
pub enum MainEvent {
    /// The companion answered the command (successfully or with an HTTP error)
    CommandCompleted(CommandResult),

    /// No usable answer: transport failure or malformed body
    CommandFailed(String),

    /// Result of the on-open connection check
    HealthChecked(HealthStatus),
}

/// Outcomes delivered to the settings screen
#[derive(Debug, Clone)]
pub enum SettingsEvent {
    /// The test connection got a health answer
    ConnectionTested(HealthStatus),

    /// The test connection could not reach or understand the companion
    ConnectionTestFailed(String),
}

/// Channel a screen hands to its background tasks
pub type EventSender<E> = mpsc::UnboundedSender<E>;

/// Channel a front-end drains and feeds back into the screen's `apply`
pub type EventReceiver<E> = mpsc::UnboundedReceiver<E>;

pub(crate) fn channel<E>() -> (EventSender<E>, EventReceiver<E>) {
    mpsc::unbounded_channel()
}
