use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::models::{ChatApiReply, OutboundMessage};
use crate::outbound::ChatNotifier;

#[derive(Clone, Debug)]
pub struct TelegramClient {
    client: Client,
    api_url: String,
}

impl TelegramClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn send_message_url(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, bot_token)
    }
}

#[async_trait]
impl ChatNotifier for TelegramClient {
    /// The reply is returned whatever its `ok` flag; only transport and
    /// decoding failures are errors.
    async fn send_message(&self, bot_token: &str, message: &OutboundMessage) -> Result<ChatApiReply, reqwest::Error> {
        let res = self.client.post(self.send_message_url(bot_token))
            .json(message)
            .send()
            .await?;

        let status = res.status();
        let body: Value = res.json().await?;
        debug!("Telegram answered with status {}", status.as_str());

        Ok(ChatApiReply::new(body))
    }
}
