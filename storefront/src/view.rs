//! Price board
//!
//! Every price the page shows is derived here from the current selection,
//! so the modal, the card and the order summary can never disagree.

use crate::pricing::discount_percent;
use crate::render::card::GIFT_LINE;
use serde::Serialize;
use shared::util::format_price;
use shared::{Product, ProductId, Size};
use std::collections::HashMap;

/// New price and optional struck-through old price
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePair {
    pub price: i64,
    pub original_price: Option<i64>,
}

impl PricePair {
    /// Prices of the chosen size, or the product's own when it has none
    ///
    /// An original price below the current one is dropped.
    pub fn for_selection(product: &Product, size: Option<&Size>) -> Self {
        let (price, original_price) = match size {
            Some(size) => (size.price, size.original_price),
            None => (product.price, product.original_price),
        };
        Self {
            price,
            original_price: original_price.filter(|&original| original >= price),
        }
    }

    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    pub fn old_price_label(&self) -> Option<String> {
        self.original_price.map(format_price)
    }

    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.price, self.original_price)
    }

    /// `original - price`, present whenever an original price is
    pub fn savings(&self) -> Option<i64> {
        self.original_price.map(|original| original - self.price)
    }
}

/// Summary shown in the order view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub product_id: ProductId,
    pub product_name: String,
    pub size_name: Option<String>,
    pub prices: PricePair,
    pub price_label: String,
    pub savings_label: Option<String>,
    pub gift_line: &'static str,
}

impl OrderSummary {
    pub fn new(product: &Product, size: Option<&Size>) -> Self {
        let prices = PricePair::for_selection(product, size);
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            size_name: size.map(|s| s.name.clone()),
            price_label: prices.price_label(),
            savings_label: prices.savings().map(format_price),
            prices,
            gift_line: GIFT_LINE,
        }
    }
}

/// Derived price displays
#[derive(Debug, Clone, Default)]
pub struct PriceBoard {
    modal: Option<PricePair>,
    card_labels: HashMap<ProductId, String>,
    order_summary: Option<OrderSummary>,
}

impl PriceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every card label to its product's list price
    pub fn reset_cards(&mut self, products: &[Product]) {
        self.card_labels = products
            .iter()
            .map(|p| (p.id, format_price(p.price)))
            .collect();
        self.modal = None;
        self.order_summary = None;
    }

    /// Refresh all displays for `product` with `size` chosen
    ///
    /// Updates the modal pair and the card label; the order summary only
    /// when the order view is open.
    pub fn apply(&mut self, product: &Product, size: Option<&Size>, order_active: bool) {
        let pair = PricePair::for_selection(product, size);
        self.card_labels.insert(product.id, pair.price_label());
        self.modal = Some(pair);
        self.order_summary = order_active.then(|| OrderSummary::new(product, size));
    }

    /// Drop the modal-scoped displays; card labels keep the last choice
    pub fn clear_modal(&mut self) {
        self.modal = None;
        self.order_summary = None;
    }

    pub fn modal(&self) -> Option<&PricePair> {
        self.modal.as_ref()
    }

    pub fn card_label(&self, id: ProductId) -> Option<&str> {
        self.card_labels.get(&id).map(String::as_str)
    }

    pub fn order_summary(&self) -> Option<&OrderSummary> {
        self.order_summary.as_ref()
    }
}
