//! Telegram Bot API client
//!
//! Sends plain-text alerts to a chat via the sendMessage method.
//! See: https://core.telegram.org/bots/api#sendmessage
//!
//! Delivery is strictly best-effort: one POST per alert, no retries. The
//! caller decides what a failed send means (for the poll cycle it means a
//! warning in the log and nothing else).

use std::time::Duration;

use serde::Serialize;

/// Total timeout for one sendMessage call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Telegram Bot API client
pub struct TelegramClient {
    bot_token: String,
    http_client: reqwest::Client,
    base_url: String,
}

/// sendMessage request body
#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Errors from delivering a notification.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Telegram API returned HTTP {0}")]
    Status(u16),
}

impl TelegramClient {
    /// Create a new client for the given bot token.
    pub fn new(bot_token: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            bot_token: bot_token.into(),
            http_client,
            base_url: "https://api.telegram.org".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(bot_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Send a text message to a chat. Single attempt, no retry.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let body = SendMessageBody { chat_id, text };

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        Ok(())
    }
}
