//! Product card view model

use super::StarRating;
use crate::pricing::discount_badge;
use crate::routing::Route;
use crate::view::PricePair;
use serde::Serialize;
use shared::slug::slugify;
use shared::{Product, ProductId};

/// Image used when a product has none or its image fails to load
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop&crop=center";

/// Promotional line shown on every card and order
pub const GIFT_LINE: &str = "Водозащитный наматрасник в подарок";

/// Features listed on a card
pub const CARD_FEATURES: usize = 3;

/// Entrance animation stagger per card
pub const STAGGER_STEP_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub product_id: ProductId,
    pub title: String,
    pub slug: String,
    pub anchor_url: String,
    pub image: String,
    pub discount_percent: u32,
    pub discount_badge: Option<String>,
    pub badge: Option<String>,
    pub stars: StarRating,
    pub reviews_label: String,
    pub old_price_label: Option<String>,
    pub price_label: String,
    pub features: Vec<String>,
    pub gift_line: &'static str,
    pub animation_delay_ms: u32,
}

impl ProductCard {
    /// Swap in the placeholder after the primary image failed to load
    pub fn image_failed(&mut self) {
        self.image = PLACEHOLDER_IMAGE.to_string();
    }

    /// Override the price label with the selection-driven one
    pub fn with_price_label(mut self, label: Option<&str>) -> Self {
        if let Some(label) = label {
            self.price_label = label.to_string();
        }
        self
    }
}

/// Builds cards; the only state is the site URL for anchors
#[derive(Debug, Clone, Default)]
pub struct CardRenderer {
    site_url: String,
}

impl CardRenderer {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }

    /// Render `product` as the `index`-th card of its section
    pub fn render(&self, product: &Product, index: usize) -> ProductCard {
        let prices = PricePair::for_selection(product, None);
        let percent = prices.discount_percent();
        let delay_steps = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);

        ProductCard {
            product_id: product.id,
            title: product.name.clone(),
            slug: slugify(&product.name),
            anchor_url: self.anchor_url(product),
            image: product
                .images
                .first()
                .filter(|url| !url.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            discount_percent: percent,
            discount_badge: discount_badge(percent),
            badge: product.badge.clone().filter(|b| !b.is_empty()),
            stars: StarRating::from_rating(product.rating),
            reviews_label: format!("({} отзывов)", product.reviews),
            old_price_label: prices.old_price_label(),
            price_label: prices.price_label(),
            features: product.features.iter().take(CARD_FEATURES).cloned().collect(),
            gift_line: GIFT_LINE,
            animation_delay_ms: delay_steps.saturating_mul(STAGGER_STEP_MS),
        }
    }

    /// Shareable link to the product's details view
    pub fn anchor_url(&self, product: &Product) -> String {
        Route::product(product).share_url(&self.site_url)
    }
}
