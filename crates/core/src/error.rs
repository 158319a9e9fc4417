use thiserror::Error;

/// Errors raised by a model hub implementation.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("module not found: {url}")]
    NotFound { url: String },

    #[error("hub returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed module archive: {0}")]
    Archive(String),

    #[error("{0}")]
    Rejected(String),
}

/// A failed fetch. Every cause collapses into this one kind; the message is
/// the underlying diagnostic.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    pub url: String,
    pub message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            message: cause.to_string(),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown model '{0}' (expected one of: movinet, i3d)")]
pub struct UnknownModel(pub String);
