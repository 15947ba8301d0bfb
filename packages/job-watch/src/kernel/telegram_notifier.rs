use anyhow::{Context, Result};
use async_trait::async_trait;
use telegram::{TelegramClient, TelegramOptions};

use super::traits::BaseNotifier;

/// Sends notifications to one Telegram chat through the bot API.
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str, chat_id: impl Into<String>) -> Result<Self> {
        Self::with_options(TelegramOptions::new(bot_token), chat_id)
    }

    pub fn with_options(options: TelegramOptions, chat_id: impl Into<String>) -> Result<Self> {
        let client = TelegramClient::new(options).context("Failed to create Telegram client")?;
        Ok(Self {
            client,
            chat_id: chat_id.into(),
        })
    }
}

#[async_trait]
impl BaseNotifier for TelegramNotifier {
    async fn send_message(&self, text: &str) -> Result<()> {
        // Keep link previews enabled.
        self.client
            .send_message(&self.chat_id, text, false)
            .await
            .context("Telegram sendMessage failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_sends_to_configured_chat() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/botT/sendMessage")
            .match_body(Matcher::UrlEncoded("chat_id".into(), "-1001".into()))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let notifier =
            TelegramNotifier::with_options(TelegramOptions::new("T").with_base_url(server.url()), "-1001")
                .unwrap();
        notifier.send_message("hello").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/botT/sendMessage")
            .with_status(429)
            .with_body(r#"{"ok":false,"description":"Too Many Requests"}"#)
            .create_async()
            .await;

        let notifier =
            TelegramNotifier::with_options(TelegramOptions::new("T").with_base_url(server.url()), "1")
                .unwrap();
        let err = notifier.send_message("hello").await.unwrap_err();
        assert!(format!("{err:#}").contains("Too Many Requests"));
    }
}
