//! Product Model

use super::Category;
use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Product identifier as served by the catalog
pub type ProductId = i64;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category identifier; records with unknown identifiers are kept but never bucketed
    pub category: String,
    /// Price in tenge
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Image URLs, first one is the primary image
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sizes: Vec<Size>,
    /// 0.0 ..= 5.0
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Known display category, if any
    pub fn category(&self) -> Option<Category> {
        Category::from_id(&self.category)
    }

    /// Size at `index`
    pub fn size(&self, index: usize) -> Option<&Size> {
        self.sizes.get(index)
    }
}

/// Size option of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub name: String,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
}

/// Check catalog-wide invariants
///
/// - product ids are unique
/// - prices are non-negative
/// - an `originalPrice`, when present, is not below its `price`, for the
///   product itself (ordered as-is when it has no sizes) and for every size
pub fn validate_catalog(products: &[Product]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(
                AppError::with_message(ErrorCode::CatalogInvalid, "Duplicate product id")
                    .with_detail("product_id", product.id),
            );
        }
        if !valid_pricing(product.price, product.original_price) {
            tracing::debug!(product_id = product.id, "Rejected product");
            return Err(AppError::with_message(
                ErrorCode::CatalogInvalid,
                "Invalid product pricing",
            )
            .with_detail("product_id", product.id));
        }
        for size in &product.sizes {
            if !valid_pricing(size.price, size.original_price) {
                tracing::debug!(product_id = product.id, size = %size.name, "Rejected size");
                return Err(AppError::with_message(
                    ErrorCode::CatalogInvalid,
                    "Invalid size pricing",
                )
                .with_detail("product_id", product.id)
                .with_detail("size", size.name.clone()));
            }
        }
    }
    Ok(())
}

fn valid_pricing(price: i64, original_price: Option<i64>) -> bool {
    price >= 0 && original_price.is_none_or(|orig| orig >= price)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 7,
        "name": "Кидс Лайт",
        "category": "children",
        "price": 21000,
        "originalPrice": 25000,
        "images": ["https://img.example/kids.jpg"],
        "features": ["Мягкий", "Высота 10 см"],
        "description": "Для детей",
        "sizes": [
            { "name": "60x120", "price": 21000, "originalPrice": 25000 },
            { "name": "70x140", "price": 24000 }
        ],
        "rating": 4.5,
        "reviews": 12,
        "badge": "Хит"
    }"#;

    fn product(id: ProductId, sizes: Vec<Size>) -> Product {
        Product {
            id,
            name: format!("p{}", id),
            category: "dependent".to_string(),
            price: 1000,
            original_price: None,
            images: vec![],
            features: vec![],
            description: String::new(),
            sizes,
            rating: 0.0,
            reviews: 0,
            badge: None,
        }
    }

    #[test]
    fn test_deserialize_full_record() {
        let p: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.original_price, Some(25000));
        assert_eq!(p.category(), Some(Category::Children));
        assert_eq!(p.sizes.len(), 2);
        assert_eq!(p.sizes[1].original_price, None);
        assert_eq!(p.badge.as_deref(), Some("Хит"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let p: Product =
            serde_json::from_str(r#"{"id":1,"name":"X","category":"pillows","price":5}"#).unwrap();
        assert!(p.images.is_empty());
        assert!(p.sizes.is_empty());
        assert_eq!(p.category(), None);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let p: Product = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["originalPrice"], 25000);
        assert!(json.get("original_price").is_none());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let err = validate_catalog(&[product(1, vec![]), product(1, vec![])]).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
    }

    #[test]
    fn test_validate_rejects_original_below_price() {
        let bad = Size { name: "a".into(), price: 100, original_price: Some(90) };
        assert!(validate_catalog(&[product(1, vec![bad])]).is_err());

        let ok = Size { name: "a".into(), price: 100, original_price: Some(100) };
        assert!(validate_catalog(&[product(1, vec![ok]), product(2, vec![])]).is_ok());
    }

    #[test]
    fn test_validate_rejects_sizeless_original_below_price() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[{"id":3,"name":"Лайт","category":"springless","price":40000,"originalPrice":30000}]"#,
        )
        .unwrap();
        let err = validate_catalog(&products).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
        assert_eq!(err.details.unwrap()["product_id"], 3);

        let mut fixed = products;
        fixed[0].original_price = Some(48000);
        assert!(validate_catalog(&fixed).is_ok());
    }
}
