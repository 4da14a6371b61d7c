//! Notification port for best-effort outbound messaging.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification operations.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Outbound notification contract.
///
/// Delivery is best-effort: the lifecycle service absorbs every error this
/// port returns, so implementations report failures for observability only
/// and must not expect retries.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Sends a notification message to the configured target.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError`] when the transport fails or the target
    /// rejects the message. An unconfigured sender skips the call and
    /// returns `Ok(())`.
    async fn send_notification(&self, message: &str) -> NotifierResult<()>;
}

/// Errors returned by notification sender implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// The transport could not deliver the request.
    #[error("notification transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The target answered with a non-success status.
    #[error("notification target answered with status {0}")]
    UnexpectedStatus(u16),
}

impl NotifierError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
