// Error types for Item Remote

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced an HTTP response (DNS, connect, timeout, socket)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response carried a body that is not valid JSON for the expected shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// True for failures that happened before or instead of an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// True when the response arrived but could not be parsed
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
