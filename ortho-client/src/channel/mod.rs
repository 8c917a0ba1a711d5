//! Outbound messaging channels
//!
//! A channel receives a fully composed text and hands it to a third party.
//! Delivery is fire-and-forget: no retries, no acknowledgement beyond what
//! the transport reports synchronously.

mod telegram;
mod whatsapp;

pub use telegram::{SendMessage, TelegramChannel};
pub use whatsapp::WhatsAppChannel;

use crate::ClientResult;
use async_trait::async_trait;

/// Markup flavour a channel renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Plain text with WhatsApp-style `*bold*`
    Plain,
    /// Telegram HTML subset (`<b>`, escaped entities)
    Html,
}

/// What a channel reports after handing the message off
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchReceipt {
    /// Deep link the customer's browser should open
    DeepLink(String),
    /// Message posted to this many destinations
    Delivered { destinations: usize },
}

/// External messaging endpoint
#[async_trait]
pub trait Channel: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Markup the composed text must use
    fn markup(&self) -> Markup;

    /// Hand a composed message to the endpoint
    async fn dispatch(&self, text: &str) -> ClientResult<DispatchReceipt>;
}
