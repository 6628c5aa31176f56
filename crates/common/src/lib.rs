// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Item Remote Contributors

// Item Remote - Common Library
// Wire types, connection settings, and the companion API client

pub mod config;
pub mod error;
pub mod remote_client;
pub mod settings;
pub mod types;

pub use config::{parse_port_or_default, ConnectionConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{Error, Result};
pub use remote_client::{
    add_bearer_auth, create_http_client, RemoteClient, CONNECT_TIMEOUT, READ_TIMEOUT,
};
pub use settings::{
    default_settings_path, obfuscate_token, FileSettingsStore, MemorySettingsStore,
    SettingsStore, SETTINGS_NAMESPACE,
};
pub use types::{
    CommandRequest, CommandResult, HealthStatus, COMMAND_SOURCE, STATUS_HEALTHY, STATUS_OFFLINE,
};
