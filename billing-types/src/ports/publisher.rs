//! Message publisher port.
//!
//! Delivers a serialized payment to a named channel. Implementations can be
//! HTTP queue endpoints, in-memory recorders, etc.

/// Error type for publish operations.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Channel rejected message with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The channel name cannot be addressed by this publisher.
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),
}

/// Port trait for message publishers.
///
/// Fire-and-forget: `Ok(())` means the transport accepted the message,
/// nothing more.
#[async_trait::async_trait]
pub trait MessagePublisher: Send + Sync + 'static {
    /// Publishes `payload` to `channel`.
    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), PublishError>;
}
