//! Error types for console rendering.
//!
//! Render failures never escape the "before send" boundary: the handler
//! catches them, traces them at debug level, and leaves the response
//! untouched. The variants here exist so configurators and the assembly step
//! have a typed failure channel up to that boundary.

use thiserror::Error;

/// A failure while building panels or assembling the console fragment.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The options payload could not be serialized for the client widget.
    #[error("failed to serialize console options: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An options configurator failed.
    #[error("configurator failed: {message}")]
    Configurator {
        /// Description of the failure.
        message: String,
    },
}

impl RenderError {
    /// Create a configurator failure.
    pub fn configurator(message: impl Into<String>) -> Self {
        Self::Configurator {
            message: message.into(),
        }
    }
}
