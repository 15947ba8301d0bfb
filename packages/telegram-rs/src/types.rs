use serde::{Deserialize, Serialize};

/// Form body for the `sendMessage` method.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageForm<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub disable_web_page_preview: bool,
}

/// Envelope returned by every Bot API method.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
