//! Process-lifetime holder of the music service access token
//!
//! Empty until the OAuth callback succeeds; reset on restart.

use tokio::sync::RwLock;
use tracing::info;

#[derive(Default)]
pub struct CredentialStore {
    access_token: RwLock<Option<String>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored token
    pub async fn set(&self, token: String) {
        info!(token_len = token.len(), "Storing music service credential");
        *self.access_token.write().await = Some(token);
    }

    /// Current token, if any
    pub async fn get(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }
}
