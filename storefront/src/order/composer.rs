//! Order Composer
//!
//! Turns the current selection and the customer's contact details into the
//! text handed to a messaging channel.

use super::message::MessageBuilder;
use crate::pricing::discount_badge;
use crate::render::GIFT_LINE;
use crate::selection::Resolved;
use crate::view::PricePair;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use ortho_client::Markup;
use serde::{Deserialize, Serialize};
use shared::util::format_price;
use shared::{AppError, AppResult, ErrorCode, ProductId};

/// Timestamp layout used in messages
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Contact details typed by the customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl CustomerDetails {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Trimmed copy, rejecting blank name or phone
    pub fn validated(&self) -> AppResult<CustomerDetails> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        if name.is_empty() {
            return Err(AppError::new(ErrorCode::CustomerNameRequired).with_detail("field", "name"));
        }
        if phone.is_empty() {
            return Err(
                AppError::new(ErrorCode::CustomerPhoneRequired).with_detail("field", "phone")
            );
        }
        Ok(CustomerDetails {
            name: name.to_string(),
            phone: phone.to_string(),
            comment: self
                .comment
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Order,
    Consultation,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Order => "order",
            MessageKind::Consultation => "consultation",
        }
    }
}

/// Composed message ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    pub kind: MessageKind,
    pub product_id: Option<ProductId>,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct OrderComposer {
    timezone: Tz,
}

impl OrderComposer {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Format `now` in the configured timezone
    pub fn timestamp(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.timezone)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    /// Compose an order for the selected product and size
    ///
    /// Fails with `NothingSelected` when nothing is open, or with a contact
    /// validation error when name or phone is blank. Products without sizes
    /// are ordered at their own price.
    pub fn compose_order(
        &self,
        selection: Option<Resolved<'_>>,
        customer: &CustomerDetails,
        now: DateTime<Utc>,
        markup: Markup,
    ) -> AppResult<OrderMessage> {
        let Some(Resolved { product, size }) = selection else {
            return Err(AppError::new(ErrorCode::NothingSelected));
        };
        let customer = customer.validated()?;
        let prices = PricePair::for_selection(product, size);

        let mut b = MessageBuilder::new(markup);
        b.title("Новый заказ")
            .line(&format!(
                "Здравствуйте! Хочу заказать матрас \"{}\".",
                product.name
            ))
            .newline()
            .field("Матрас", &product.name)
            .optional_field("Размер", size.map(|s| s.name.as_str()))
            .field("Цена", &prices.price_label());
        if let Some(savings) = prices.savings() {
            let amount = match discount_badge(prices.discount_percent()) {
                Some(badge) => format!("{} ({})", format_price(savings), badge),
                None => format_price(savings),
            };
            b.field("Скидка", &amount);
        }
        b.line(&format!("🎁 {}", GIFT_LINE)).newline();
        self.contact_block(&mut b, &customer, now);

        Ok(OrderMessage {
            kind: MessageKind::Order,
            product_id: Some(product.id),
            text: b.build(),
        })
    }

    /// Compose a consultation request
    pub fn compose_consultation(
        &self,
        customer: &CustomerDetails,
        now: DateTime<Utc>,
        markup: Markup,
    ) -> AppResult<OrderMessage> {
        let customer = customer.validated()?;

        let mut b = MessageBuilder::new(markup);
        b.title("Заявка на консультацию");
        self.contact_block(&mut b, &customer, now);

        Ok(OrderMessage {
            kind: MessageKind::Consultation,
            product_id: None,
            text: b.build(),
        })
    }

    fn contact_block(&self, b: &mut MessageBuilder, customer: &CustomerDetails, now: DateTime<Utc>) {
        b.field("Имя", &customer.name)
            .field("Телефон", &customer.phone)
            .optional_field("Комментарий", customer.comment.as_deref())
            .field("Время", &self.timestamp(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, default_catalog};
    use crate::selection::SelectionState;
    use chrono::TimeZone;
    use shared::ErrorCategory;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 0).unwrap()
    }

    fn composer() -> OrderComposer {
        OrderComposer::new(chrono_tz::Asia::Almaty)
    }

    #[test]
    fn test_timestamp_in_timezone() {
        // Almaty is UTC+5
        assert_eq!(composer().timestamp(now()), "19.10.2026 13:05");
    }

    #[test]
    fn test_compose_order_with_discount() {
        let catalog = CatalogStore::from_products(default_catalog());
        let mut selection = SelectionState::new();
        selection.open_product(&catalog, 1);
        selection.choose_size(&catalog, 1);

        let customer = CustomerDetails::new("  Айгерим ", "+7 705 000 00 00").with_comment("  ");
        let message = composer()
            .compose_order(selection.resolve(&catalog), &customer, now(), Markup::Plain)
            .unwrap();

        assert_eq!(message.kind, MessageKind::Order);
        assert_eq!(message.product_id, Some(1));
        let text = &message.text;
        assert!(text.starts_with("*Новый заказ*\n"));
        assert!(text.contains("*Размер:* 140x200"));
        assert!(text.contains("*Цена:* 46 000 ₸"));
        assert!(text.contains("*Скидка:* 12 000 ₸ (-21%)"));
        assert!(text.contains("Водозащитный наматрасник в подарок"));
        assert!(text.contains("*Имя:* Айгерим\n"));
        assert!(!text.contains("Комментарий"));
        assert!(text.ends_with("*Время:* 19.10.2026 13:05"));
    }

    #[test]
    fn test_compose_order_without_original_price() {
        let mut products = default_catalog();
        products[0].sizes[0].original_price = None;
        let catalog = CatalogStore::from_products(products);
        let mut selection = SelectionState::new();
        selection.open_product(&catalog, 1);

        let message = composer()
            .compose_order(
                selection.resolve(&catalog),
                &CustomerDetails::new("Аян", "87010000000"),
                now(),
                Markup::Plain,
            )
            .unwrap();
        assert!(message.text.contains("*Цена:* 35 000 ₸"));
        assert!(!message.text.contains("Скидка"));
    }

    #[test]
    fn test_compose_sizeless_order_never_carries_negative_savings() {
        let mut products = default_catalog();
        products[0].sizes.clear();
        products[0].price = 40000;
        products[0].original_price = Some(30000);
        let catalog = CatalogStore::from_products(products);
        let mut selection = SelectionState::new();
        selection.open_product(&catalog, 1);

        let message = composer()
            .compose_order(
                selection.resolve(&catalog),
                &CustomerDetails::new("Аян", "87010000000"),
                now(),
                Markup::Plain,
            )
            .unwrap();
        assert!(message.text.contains("*Цена:* 40 000 ₸"));
        assert!(!message.text.contains("Размер"));
        assert!(!message.text.contains("Скидка"));
    }

    #[test]
    fn test_compose_order_validation() {
        let catalog = CatalogStore::from_products(default_catalog());
        let mut selection = SelectionState::new();

        let err = composer()
            .compose_order(
                selection.resolve(&catalog),
                &CustomerDetails::new("Аян", "8701"),
                now(),
                Markup::Plain,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NothingSelected);
        assert_eq!(err.category(), ErrorCategory::Validation);

        selection.open_product(&catalog, 1);
        let err = composer()
            .compose_order(
                selection.resolve(&catalog),
                &CustomerDetails::new("   ", "8701"),
                now(),
                Markup::Plain,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNameRequired);
        assert!(err.user_message().is_some());

        let err = composer()
            .compose_order(
                selection.resolve(&catalog),
                &CustomerDetails::new("Аян", ""),
                now(),
                Markup::Plain,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerPhoneRequired);
    }

    #[test]
    fn test_compose_consultation_html() {
        let customer = CustomerDetails::new("Dana <b>", "8701").with_comment("Жесткий & высокий");
        let message = composer()
            .compose_consultation(&customer, now(), Markup::Html)
            .unwrap();

        assert_eq!(message.kind, MessageKind::Consultation);
        assert_eq!(message.product_id, None);
        assert_eq!(
            message.text,
            "<b>Заявка на консультацию</b>\n\
             <b>Имя:</b> Dana &lt;b&gt;\n\
             <b>Телефон:</b> 8701\n\
             <b>Комментарий:</b> Жесткий &amp; высокий\n\
             <b>Время:</b> 19.10.2026 13:05"
        );
    }
}
