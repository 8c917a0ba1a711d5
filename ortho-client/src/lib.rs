//! Ortho Client - outbound I/O for the storefront
//!
//! Fetches the product catalog and hands composed messages to external
//! messaging channels (WhatsApp deep links, Telegram Bot API).

pub mod catalog;
pub mod channel;
pub mod config;
pub mod error;
pub mod http;

pub use catalog::{CatalogSource, FileCatalogSource, HttpCatalogSource, parse_catalog, source_for};
pub use channel::{Channel, DispatchReceipt, Markup, TelegramChannel, WhatsAppChannel};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
