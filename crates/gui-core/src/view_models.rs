// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Item Remote Contributors

//! View models - Text and colors prepared for UI display

use item_remote_common::{CommandResult, HealthStatus};

/// Status color for UI indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green, // Online, success
    Red,   // Offline, failure
    Gray,  // Not checked yet
}

/// A line of status text with its indicator color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub color: StatusColor,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, color: StatusColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, StatusColor::Green)
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(text, StatusColor::Red)
    }

    pub fn pending() -> Self {
        Self::new("Checking connection...", StatusColor::Gray)
    }
}

/// Connection indicator shown on the main screen
pub fn health_status_line(health: &HealthStatus) -> StatusLine {
    if health.is_healthy() {
        StatusLine::success("🟢 Online")
    } else {
        StatusLine::failure("🔴 Offline")
    }
}

/// Response text for a command the companion answered
///
/// A missing `result` renders as `null`.
pub fn command_response_text(result: &CommandResult) -> String {
    if result.success {
        format!(
            "✅ {}\n\nResult: {}",
            result.message,
            result.result.as_deref().unwrap_or("null")
        )
    } else {
        format!("❌ {}", result.message)
    }
}

/// Response text for a call that produced no usable answer
pub fn error_text(message: &str) -> String {
    format!("❌ Error: {}", message)
}

/// Settings screen status after a connection test
pub fn connection_test_line(health: &HealthStatus) -> StatusLine {
    if health.is_healthy() {
        StatusLine::success("✅ Connection successful!")
    } else {
        StatusLine::failure("❌ Connection failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_line() {
        let online = health_status_line(&HealthStatus {
            status: "healthy".to_string(),
        });
        assert_eq!(online, StatusLine::new("🟢 Online", StatusColor::Green));

        let offline = health_status_line(&HealthStatus::offline());
        assert_eq!(offline, StatusLine::new("🔴 Offline", StatusColor::Red));

        let unknown = health_status_line(&HealthStatus {
            status: "degraded".to_string(),
        });
        assert_eq!(unknown.color, StatusColor::Red);
    }

    #[test]
    fn test_command_response_text() {
        let done = CommandResult {
            success: true,
            message: "done".to_string(),
            result: Some("ok".to_string()),
            timestamp: None,
        };
        assert_eq!(command_response_text(&done), "✅ done\n\nResult: ok");

        let no_result = CommandResult {
            success: true,
            message: "done".to_string(),
            ..Default::default()
        };
        assert_eq!(command_response_text(&no_result), "✅ done\n\nResult: null");

        let failed = CommandResult::http_failure(500, "Internal Server Error");
        assert_eq!(
            command_response_text(&failed),
            "❌ HTTP 500: Internal Server Error"
        );
    }

    #[test]
    fn test_error_text() {
        assert_eq!(error_text("connection refused"), "❌ Error: connection refused");
    }

    #[test]
    fn test_connection_test_line() {
        let ok = connection_test_line(&HealthStatus {
            status: "healthy".to_string(),
        });
        assert_eq!(ok.color, StatusColor::Green);
        assert_eq!(ok.text, "✅ Connection successful!");

        let failed = connection_test_line(&HealthStatus::offline());
        assert_eq!(failed.color, StatusColor::Red);
        assert_eq!(failed.text, "❌ Connection failed");
    }
}
