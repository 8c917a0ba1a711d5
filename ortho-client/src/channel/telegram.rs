//! Telegram Bot API channel

use super::{Channel, DispatchReceipt, Markup};
use crate::config::DEFAULT_TELEGRAM_API;
use crate::{ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

/// `sendMessage` request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
}

#[derive(Debug, Deserialize)]
struct BotResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Posts one `sendMessage` per configured chat, concurrently
#[derive(Debug, Clone)]
pub struct TelegramChannel {
    http: HttpClient,
    api_base: String,
    bot_token: String,
    chat_ids: Vec<String>,
}

impl TelegramChannel {
    pub fn new(http: HttpClient, bot_token: impl Into<String>, chat_ids: Vec<String>) -> Self {
        Self {
            http,
            api_base: DEFAULT_TELEGRAM_API.to_string(),
            bot_token: bot_token.into(),
            chat_ids,
        }
    }

    /// Override the API endpoint (self-hosted Bot API server, tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }

    async fn send_one(&self, url: &str, chat_id: &str, text: &str) -> ClientResult<()> {
        let body = SendMessage {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            parse_mode: "HTML".to_string(),
        };
        let response: BotResponse = self.http.post(url, &body).await?;
        if !response.ok {
            return Err(ClientError::Delivery(
                response
                    .description
                    .unwrap_or_else(|| "telegram returned ok=false".to_string()),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn markup(&self) -> Markup {
        Markup::Html
    }

    async fn dispatch(&self, text: &str) -> ClientResult<DispatchReceipt> {
        if self.bot_token.is_empty() {
            return Err(ClientError::NotConfigured("telegram bot token".to_string()));
        }
        if self.chat_ids.is_empty() {
            return Err(ClientError::NotConfigured("telegram chat ids".to_string()));
        }

        let url = self.send_message_url();
        let sends = self
            .chat_ids
            .iter()
            .map(|chat_id| self.send_one(&url, chat_id, text));

        if let Err(e) = try_join_all(sends).await {
            tracing::warn!(channel = self.name(), error = %e, "Telegram delivery failed");
            return Err(e);
        }

        tracing::info!(channel = self.name(), destinations = self.chat_ids.len(), "Message delivered");
        Ok(DispatchReceipt::Delivered {
            destinations: self.chat_ids.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    fn channel(token: &str, chats: &[&str]) -> TelegramChannel {
        let http = ClientConfig::default().build_http_client().unwrap();
        TelegramChannel::new(http, token, chats.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_send_message_url() {
        let ch = channel("123:abc", &["1"]).with_api_base("http://localhost:9000/");
        assert_eq!(ch.send_message_url(), "http://localhost:9000/bot123:abc/sendMessage");
    }

    #[test]
    fn test_send_message_body() {
        let body = SendMessage {
            chat_id: "-100".into(),
            text: "<b>Заявка</b>".into(),
            parse_mode: "HTML".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["chat_id"], "-100");
        assert_eq!(json["parse_mode"], "HTML");
    }

    #[tokio::test]
    async fn test_requires_token_and_chats() {
        let err = channel("", &["1"]).dispatch("x").await.unwrap_err();
        assert!(matches!(err, ClientError::NotConfigured(_)));

        let err = channel("t", &[]).dispatch("x").await.unwrap_err();
        assert!(matches!(err, ClientError::NotConfigured(_)));
    }
}
