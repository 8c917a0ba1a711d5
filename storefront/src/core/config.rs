use chrono_tz::Tz;
use ortho_client::ClientConfig;
use ortho_client::config::DEFAULT_TELEGRAM_API;

/// Default WhatsApp number orders are sent to
pub const DEFAULT_WHATSAPP_PHONE: &str = "87055915916";

/// Embedded video shown in the test view
pub const DEFAULT_TEST_VIDEO: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// Storefront configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_URL | products.json | Catalog location, URL or local path |
/// | SITE_URL | (empty) | Base URL used for shareable product links |
/// | WHATSAPP_PHONE | 87055915916 | Order recipient |
/// | TELEGRAM_API_BASE | https://api.telegram.org | Bot API base |
/// | TELEGRAM_BOT_TOKEN | (unset) | Bot token, consultations disabled when unset |
/// | TELEGRAM_CHAT_IDS | (empty) | Comma-separated chat ids |
/// | TEST_VIDEO_URL | youtube embed | Video for the test view |
/// | TIMEZONE | Asia/Almaty | Zone for message timestamps |
/// | REQUEST_TIMEOUT_MS | 30000 | Outbound request timeout |
/// | LOG_LEVEL | info | Log filter |
/// | LOG_JSON | false | JSON log output |
/// | LOG_DIR | (unset) | Directory for rolling log files |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// CATALOG_URL=https://shop.kz/products.json TELEGRAM_CHAT_IDS=-1001,-1002 cargo run -- list
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_url: String,
    pub site_url: String,
    pub whatsapp_phone: String,
    pub telegram_api_base: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_ids: Vec<String>,
    pub test_video_url: String,
    pub timezone: Tz,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Built-in defaults, ignoring the environment
    pub fn defaults() -> Self {
        Self {
            catalog_url: "products.json".into(),
            site_url: String::new(),
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.into(),
            telegram_api_base: DEFAULT_TELEGRAM_API.into(),
            telegram_bot_token: None,
            telegram_chat_ids: Vec::new(),
            test_video_url: DEFAULT_TEST_VIDEO.into(),
            timezone: chrono_tz::Asia::Almaty,
            request_timeout_ms: 30000,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to [`Config::defaults`].
    pub fn from_env() -> Self {
        let defaults = Self::defaults();
        Self {
            catalog_url: std::env::var("CATALOG_URL").unwrap_or(defaults.catalog_url),
            site_url: std::env::var("SITE_URL").unwrap_or(defaults.site_url),
            whatsapp_phone: std::env::var("WHATSAPP_PHONE").unwrap_or(defaults.whatsapp_phone),
            telegram_api_base: std::env::var("TELEGRAM_API_BASE")
                .unwrap_or(defaults.telegram_api_base),
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            telegram_chat_ids: std::env::var("TELEGRAM_CHAT_IDS")
                .map(|v| parse_chat_ids(&v))
                .unwrap_or_default(),
            test_video_url: std::env::var("TEST_VIDEO_URL").unwrap_or(defaults.test_video_url),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(defaults.timezone),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Settings for the outbound HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default().with_timeout_ms(self.request_timeout_ms)
    }

    /// Whether consultation requests can be delivered
    pub fn telegram_enabled(&self) -> bool {
        self.telegram_bot_token.is_some() && !self.telegram_chat_ids.is_empty()
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// JSON logs when asked for, and always in production
    pub fn json_logs(&self) -> bool {
        self.log_json || self.is_production()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Split a comma-separated chat id list, skipping blanks
fn parse_chat_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::defaults();
        assert_eq!(config.whatsapp_phone, "87055915916");
        assert_eq!(config.timezone, chrono_tz::Asia::Almaty);
        assert_eq!(config.request_timeout_ms, 30000);
        assert!(!config.telegram_enabled());
        assert!(!config.is_production());
    }

    #[test]
    fn test_parse_chat_ids() {
        assert_eq!(parse_chat_ids("-1001, -1002,,"), vec!["-1001", "-1002"]);
        assert!(parse_chat_ids(" ").is_empty());
    }

    #[test]
    fn test_telegram_enabled_needs_token_and_chats() {
        let mut config = Config::defaults();
        config.telegram_bot_token = Some("123:abc".into());
        assert!(!config.telegram_enabled());
        config.telegram_chat_ids = vec!["-1001".into()];
        assert!(config.telegram_enabled());
    }

    #[test]
    fn test_production_forces_json_logs() {
        let mut config = Config::defaults();
        assert!(!config.json_logs());
        config.environment = "production".into();
        assert!(config.json_logs());
    }
}
