use async_trait::async_trait;

use crate::models::{ChatApiReply, OutboundMessage};

mod telegram;

pub use telegram::TelegramClient;

#[async_trait]
pub trait ChatNotifier: Send + Sync + 'static {
    async fn send_message(&self, bot_token: &str, message: &OutboundMessage) -> Result<ChatApiReply, reqwest::Error>;
}
