//! WhatsApp deep-link channel

use super::{Channel, DispatchReceipt, Markup};
use crate::{ClientError, ClientResult};
use async_trait::async_trait;

const WA_ME: &str = "https://wa.me";

/// Builds `wa.me` links carrying the message as a URL-encoded query parameter
#[derive(Debug, Clone)]
pub struct WhatsAppChannel {
    phone: String,
}

impl WhatsAppChannel {
    /// `phone` may contain `+`, spaces or dashes; only digits are kept
    pub fn new(phone: &str) -> Self {
        Self {
            phone: phone.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Deep link for `text`
    pub fn deep_link(&self, text: &str) -> String {
        format!("{}/{}?text={}", WA_ME, self.phone, urlencoding::encode(text))
    }
}

#[async_trait]
impl Channel for WhatsAppChannel {
    fn name(&self) -> &'static str {
        "whatsapp"
    }

    fn markup(&self) -> Markup {
        Markup::Plain
    }

    async fn dispatch(&self, text: &str) -> ClientResult<DispatchReceipt> {
        if self.phone.is_empty() {
            return Err(ClientError::NotConfigured("whatsapp phone".to_string()));
        }
        let link = self.deep_link(text);
        tracing::info!(channel = self.name(), chars = text.chars().count(), "Prepared deep link");
        Ok(DispatchReceipt::DeepLink(link))
    }
}
