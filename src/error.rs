//! Error handling for the hoststat exporter.

/// A specialized `Result` type for hoststat operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// The main error type for hoststat operations.
///
/// OS-level metric queries never produce this error: a failed query is
/// zero-filled at the collection site instead (see
/// [`crate::metrics::provider`]). This type covers everything outside that
/// contract: serialization, configuration, and the server lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding of a metrics record failed
    #[error("Failed to encode metrics: {0}")]
    Encode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Web server error
    #[error("Web server error: {0}")]
    WebServer(String),
}

impl MetricsError {
    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new web server error
    pub fn web_server_error(msg: impl Into<String>) -> Self {
        Self::WebServer(msg.into())
    }
}
