// Wire types for the companion API

use serde::{Deserialize, Deserializer, Serialize};

/// Platform literal sent as `source` with every command
pub const COMMAND_SOURCE: &str = "android";

/// Health status value that means the companion is online
pub const STATUS_HEALTHY: &str = "healthy";

/// Health status synthesized locally when the companion cannot be reached
pub const STATUS_OFFLINE: &str = "offline";

/// Body of `POST /api/command`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRequest {
    pub command: String,
    pub source: &'static str,
}

impl CommandRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            source: COMMAND_SOURCE,
        }
    }
}

/// Normalized outcome of a command
///
/// Returned for 2xx responses (parsed from the body) and for non-2xx
/// responses (synthesized). Missing fields take their type defaults, so an
/// empty `{}` body parses as an unsuccessful result with an empty message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(
        default,
        deserialize_with = "deserialize_result_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub result: Option<String>,
    /// Server-side completion time, when the companion reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl CommandResult {
    /// Failure result built locally from an HTTP status line
    ///
    /// Codes without a known reason phrase render as `HTTP <code>`.
    pub fn http_failure(code: u16, reason: &str) -> Self {
        let message = if reason.is_empty() {
            format!("HTTP {}", code)
        } else {
            format!("HTTP {}: {}", code, reason)
        };
        Self {
            success: false,
            message,
            result: None,
            timestamp: None,
        }
    }
}

/// Companion answers with either a plain string or structured data in
/// `result`. Structured data is kept as its compact JSON text.
fn deserialize_result_text<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// An explicit `null` takes the type default, like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl HealthStatus {
    pub fn offline() -> Self {
        Self {
            status: STATUS_OFFLINE.to_string(),
        }
    }

    /// Only the literal `"healthy"` counts as online
    pub fn is_healthy(&self) -> bool {
        self.status == STATUS_HEALTHY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_request_body() {
        let body = serde_json::to_value(CommandRequest::new("turn on lights")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"command": "turn on lights", "source": "android"})
        );
    }

    #[test]
    fn test_empty_object_parses_with_defaults() {
        let result: CommandResult = serde_json::from_str("{}").unwrap();
        assert!(!result.success);
        assert!(result.message.is_empty());
        assert_eq!(result.result, None);

        let health: HealthStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(health.status, "");
        assert!(!health.is_healthy());
    }

    #[test]
    fn test_result_text_variants() {
        let result: CommandResult =
            serde_json::from_str(r#"{"success":true,"message":"done","result":"ok"}"#).unwrap();
        assert_eq!(result.result.as_deref(), Some("ok"));

        let result: CommandResult =
            serde_json::from_str(r#"{"success":true,"message":"done","result":null}"#).unwrap();
        assert_eq!(result.result, None);

        let body = r#"{"success":true,"message":"opened","result":{"app":"notepad"},
            "timestamp":"2025-01-01T10:00:00"}"#;
        let result: CommandResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.result.as_deref(), Some(r#"{"app":"notepad"}"#));
        assert_eq!(result.timestamp.as_deref(), Some("2025-01-01T10:00:00"));
    }

    #[test]
    fn test_http_failure_message() {
        let result = CommandResult::http_failure(500, "Internal Server Error");
        assert!(!result.success);
        assert_eq!(result.message, "HTTP 500: Internal Server Error");
        assert_eq!(result.result, None);

        let result = CommandResult::http_failure(599, "");
        assert_eq!(result.message, "HTTP 599");
    }

    #[test]
    fn test_explicit_nulls_parse_as_defaults() {
        let result: CommandResult =
            serde_json::from_str(r#"{"success":null,"message":null,"result":null}"#).unwrap();
        assert_eq!(result, CommandResult::default());

        let result: CommandResult =
            serde_json::from_str(r#"{"success":true,"message":null}"#).unwrap();
        assert!(result.success);
        assert!(result.message.is_empty());

        let health: HealthStatus = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert!(!health.is_healthy());
    }

    #[test]
    fn test_health_status() {
        assert!(HealthStatus { status: "healthy".to_string() }.is_healthy());
        assert!(!HealthStatus { status: "Healthy".to_string() }.is_healthy());
        assert!(!HealthStatus::offline().is_healthy());
        assert_eq!(HealthStatus::offline().status, "offline");
    }
}
