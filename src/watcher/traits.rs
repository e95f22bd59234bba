//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use crate::immich::{Album, FetchError};
use crate::telegram::NotifyError;

/// Trait for reading the remote album collection.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait AlbumsApi: Send + Sync {
    /// Fetch every album visible to the configured credential.
    async fn all_albums(&self) -> Result<Vec<Album>, FetchError>;
}

/// Trait for delivering a text alert to a chat.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send `text` to `chat_id`. Single best-effort attempt.
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifyError>;
}

// Implement traits for real clients

#[async_trait]
impl AlbumsApi for crate::immich::ImmichClient {
    async fn all_albums(&self) -> Result<Vec<Album>, FetchError> {
        self.all_albums().await
    }
}

#[async_trait]
impl Messenger for crate::telegram::TelegramClient {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        self.send_message(chat_id, text).await
    }
}
