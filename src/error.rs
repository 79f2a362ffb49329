// src/error.rs
//
// Error type shared by the client, the HTTP service and both front-ends.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("request to indexing service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("indexing service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Success status, but the body is not a word → count object.
    #[error("malformed index payload: {0}")]
    Malformed(String),

    #[error("invalid service url '{url}': {source}")]
    InvalidServiceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("indexing worker panicked")]
    WorkerPanicked,
}
