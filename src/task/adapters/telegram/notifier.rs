//! Best-effort notification delivery via the Telegram Bot API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::task::ports::{NotificationSender, NotifierError, NotifierResult};

/// Environment variable carrying the Telegram bot token.
const BOT_TOKEN_ENV: &str = "TASKER_TELEGRAM_BOT_TOKEN";

/// Environment variable carrying the Telegram chat identifier.
const CHAT_ID_ENV: &str = "TASKER_TELEGRAM_CHAT_ID";

/// Placeholder prefix marking a credential as unset.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Telegram credential configuration.
///
/// Credentials default to `YOUR_`-prefixed placeholders; while either value
/// still carries a placeholder the notifier skips delivery entirely, making
/// notification a no-op until real credentials are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    bot_token: String,
    chat_id: String,
}

impl TelegramConfig {
    /// Creates a configuration from explicit credential values.
    #[must_use]
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Reads credentials from the process environment, falling back to
    /// placeholder values when a variable is unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bot_token: std::env::var(BOT_TOKEN_ENV).unwrap_or_else(|_| "YOUR_TOKEN".to_owned()),
            chat_id: std::env::var(CHAT_ID_ENV).unwrap_or_else(|_| "YOUR_CHAT_ID".to_owned()),
        }
    }

    /// Returns `true` when both credentials carry real values.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.bot_token.contains(PLACEHOLDER_PREFIX) && !self.chat_id.contains(PLACEHOLDER_PREFIX)
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Notification sender targeting the Telegram `sendMessage` endpoint.
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
}

impl TelegramNotifier {
    /// Creates a notifier for the given credential configuration.
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl NotificationSender for TelegramNotifier {
    async fn send_notification(&self, message: &str) -> NotifierResult<()> {
        if !self.config.is_configured() {
            tracing::debug!("telegram credentials unconfigured, skipping notification");
            return Ok(());
        }

        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.bot_token
        );
        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": self.config.chat_id,
                "text": message,
            }))
            .send()
            .await
            .map_err(NotifierError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifierError::UnexpectedStatus(status.as_u16()));
        }
        Ok(())
    }
}
