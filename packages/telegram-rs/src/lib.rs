//! Pure Telegram Bot API client.
//!
//! A minimal client covering the one Bot API method the watcher needs:
//! `sendMessage` to a single chat.
//!
//! # Example
//!
//! ```rust,ignore
//! use telegram::{TelegramClient, TelegramOptions};
//!
//! let client = TelegramClient::new(TelegramOptions::new("123:abc"))?;
//! client.send_message("-100123", "hello", false).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, TelegramError};
pub use types::{ApiResponse, SendMessageForm};

use std::time::Duration;

const BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramOptions {
    pub bot_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl TelegramOptions {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Point the client at another host (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    options: TelegramOptions,
}

impl TelegramClient {
    pub fn new(options: TelegramOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;

        Ok(Self { client, options })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.options.base_url.trim_end_matches('/'),
            self.options.bot_token,
            method
        )
    }

    /// Send a plain-text message to a chat. Any 2xx response counts as delivered.
    pub async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
        disable_web_page_preview: bool,
    ) -> Result<()> {
        let form = SendMessageForm {
            chat_id,
            text,
            disable_web_page_preview,
        };

        let resp = self
            .client
            .post(self.method_url("sendMessage"))
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiResponse>(&body)
                .ok()
                .and_then(|r| r.description)
                .unwrap_or(body);
            tracing::debug!(status = status.as_u16(), %message, "Telegram sendMessage rejected");
            return Err(TelegramError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> TelegramClient {
        TelegramClient::new(TelegramOptions::new("TOKEN").with_base_url(server.url())).unwrap()
    }

    #[test]
    fn test_method_url_includes_token() {
        let client = TelegramClient::new(TelegramOptions::new("123:abc")).unwrap();
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[tokio::test]
    async fn test_send_message_posts_form() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("chat_id".into(), "42".into()),
                Matcher::UrlEncoded("text".into(), "hello world".into()),
                Matcher::UrlEncoded("disable_web_page_preview".into(), "false".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"ok":true,"result":{}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        client.send_message("42", "hello world", false).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_non_success_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/botTOKEN/sendMessage")
            .with_status(400)
            .with_body(r#"{"ok":false,"description":"Bad Request: chat not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.send_message("42", "hi", false).await.unwrap_err();

        match err {
            TelegramError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Bad Request: chat not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_message_keeps_raw_body_when_not_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/botTOKEN/sendMessage")
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.send_message("42", "hi", false).await.unwrap_err();

        assert!(err.to_string().contains("bad gateway"));
    }
}
