//! Modal view models

use super::StarRating;
use super::card::PLACEHOLDER_IMAGE;
use crate::view::PricePair;
use serde::Serialize;
use shared::util::group_thousands;
use shared::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalContext {
    /// Product with the test video
    Test,
    /// Full product information
    Details,
    /// Order summary and contact form
    Order,
}

/// Entry of the size selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeOption {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalView {
    pub context: ModalContext,
    pub product_id: ProductId,
    pub title: String,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub stars: StarRating,
    pub rating_label: String,
    pub video_url: Option<String>,
    pub size_options: Vec<SizeOption>,
    pub price_label: String,
    pub old_price_label: Option<String>,
}

/// Build the modal for `product` with the size at `selected` highlighted
pub fn render_modal(
    product: &Product,
    context: ModalContext,
    selected: Option<usize>,
    prices: &PricePair,
    video_url: &str,
) -> ModalView {
    let title = match context {
        ModalContext::Test => format!("{} - Тест", product.name),
        ModalContext::Details => format!("{} - Подробная информация", product.name),
        ModalContext::Order => format!("{} - Заказ", product.name),
    };

    let images = if product.images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        product.images.clone()
    };

    let size_options = product
        .sizes
        .iter()
        .enumerate()
        .map(|(index, size)| SizeOption {
            index,
            label: format!("{} - {} ₸", size.name, group_thousands(size.price)),
            selected: selected == Some(index),
        })
        .collect();

    ModalView {
        context,
        product_id: product.id,
        title,
        images,
        description: product.description.clone(),
        features: product.features.clone(),
        stars: StarRating::from_rating(product.rating),
        rating_label: format!("{} ({} отзывов)", product.rating, product.reviews),
        video_url: (context == ModalContext::Test).then(|| video_url.to_string()),
        size_options,
        price_label: prices.price_label(),
        old_price_label: prices.old_price_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    const VIDEO: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

    #[test]
    fn test_test_view() {
        let product = default_catalog().remove(0);
        let prices = PricePair::for_selection(&product, product.size(0));
        let view = render_modal(&product, ModalContext::Test, Some(0), &prices, VIDEO);

        assert_eq!(view.title, "Орто Стандарт - Тест");
        assert_eq!(view.video_url.as_deref(), Some(VIDEO));
        assert_eq!(view.rating_label, "4.8 (153 отзывов)");
        assert_eq!(view.size_options.len(), 2);
        assert_eq!(view.size_options[0].label, "80x190 - 35 000 ₸");
        assert!(view.size_options[0].selected);
        assert!(!view.size_options[1].selected);
        assert_eq!(view.features.len(), 4);
    }

    #[test]
    fn test_details_view_tracks_selected_size() {
        let product = default_catalog().remove(0);
        let prices = PricePair::for_selection(&product, product.size(1));
        let view = render_modal(&product, ModalContext::Details, Some(1), &prices, VIDEO);

        assert_eq!(view.title, "Орто Стандарт - Подробная информация");
        assert_eq!(view.video_url, None);
        assert!(view.size_options[1].selected);
        assert_eq!(view.price_label, "46 000 ₸");
        assert_eq!(view.old_price_label.as_deref(), Some("58 000 ₸"));
    }
}
