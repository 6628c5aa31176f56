// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Item Remote Contributors

// Item Remote - Remote Client Module
// Shared companion connection logic for the CLI and the view layer

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ConnectionConfig;
use crate::error::Result;
use crate::settings::obfuscate_token;
use crate::types::{CommandRequest, CommandResult, HealthStatus};

/// Connection establishment must fail fast
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Response bodies get a longer window before the call is abandoned
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of the command endpoint
pub const COMMAND_PATH: &str = "/api/command";

/// Path of the health endpoint
pub const HEALTH_PATH: &str = "/health";

/// Create an HTTP client with the fixed transport policy
///
/// # Returns
/// Configured reqwest::Client ready to talk to the companion process
pub fn create_http_client() -> Result<Client> {
    let client = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .read_timeout(READ_TIMEOUT)
        // A 3xx is an answer, not a second attempt
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

/// Add the bearer authorization header to a request
pub fn add_bearer_auth(
    request: reqwest::RequestBuilder,
    config: &ConnectionConfig,
) -> reqwest::RequestBuilder {
    request.header(
        reqwest::header::AUTHORIZATION,
        format!("Bearer {}", config.auth_token),
    )
}

/// Client for the companion process API
///
/// Holds the configuration it was built with for its whole lifetime; to pick
/// up new settings, build a new client. Clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    config: ConnectionConfig,
    base_url: String,
}

impl RemoteClient {
    /// Create a client for the given connection settings
    ///
    /// No validation of host or port happens here.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        let client = create_http_client()?;
        let base_url = config.base_url();
        debug!(
            "Remote client for {} (token: {})",
            base_url,
            obfuscate_token(&config.auth_token)
        );
        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// `http://{host}:{port}`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn command_url(&self) -> String {
        format!("{}{}", self.base_url, COMMAND_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }

    /// Send a command to the companion process
    ///
    /// The caller is expected to have trimmed the command and rejected empty
    /// input. Exactly one request is made.
    ///
    /// # Returns
    /// * `Ok(result)` for any HTTP response; non-2xx statuses become
    ///   `{success: false, message: "HTTP <code>: <reason>"}`; redirects are
    ///   not followed and report their own 3xx status
    /// * `Err(Error::Transport)` when no response arrived
    /// * `Err(Error::Decode)` when a 2xx body is not valid JSON
    pub async fn submit_command(&self, command: &str) -> Result<CommandResult> {
        let url = self.command_url();
        debug!("Sending command to {}", url);

        let request = add_bearer_auth(self.client.post(&url), &self.config)
            .json(&CommandRequest::new(command));

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Command rejected by companion: {}", status);
            return Ok(http_failure(status));
        }

        let body = response.text().await?;
        parse_body(&body)
    }

    /// Check whether the companion process is up
    ///
    /// Never fails: any HTTP error, transport error, or unparseable body is
    /// reported as `{status: "offline"}`.
    pub async fn check_health(&self) -> HealthStatus {
        match self.try_check_health().await {
            Ok(health) => health,
            Err(e) => {
                debug!("Health check failed: {}", e);
                HealthStatus::offline()
            }
        }
    }

    /// Like [`check_health`](Self::check_health) but keeps transport and
    /// decode errors distinguishable
    ///
    /// Non-2xx responses still collapse to `{status: "offline"}`.
    pub async fn try_check_health(&self) -> Result<HealthStatus> {
        let url = self.health_url();
        debug!("Checking health at {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("Health endpoint returned {}", status);
            return Ok(HealthStatus::offline());
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}

fn http_failure(status: StatusCode) -> CommandResult {
    CommandResult::http_failure(status.as_u16(), status.canonical_reason().unwrap_or(""))
}

/// Parse a response body, treating an empty body as `{}`
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    Ok(serde_json::from_str(body)?)
}
