//! Catalog Store
//!
//! Holds the product list for the session. The list is swapped as a whole:
//! either the fetched payload or the built-in fallback, never a mix.

use crate::render::PLACEHOLDER_IMAGE;
use ortho_client::CatalogSource;
use shared::{AppError, Product, ProductId, Size};
use std::collections::HashMap;

/// Where the current catalog came from
#[derive(Debug, Clone)]
pub enum CatalogOrigin {
    /// Nothing loaded yet
    Empty,
    /// Payload fetched and validated
    Fetched { location: String },
    /// Fetch failed, the default catalog is installed
    Fallback { reason: AppError },
}

impl CatalogOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CatalogOrigin::Fallback { .. })
    }
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    origin: CatalogOrigin,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            index: HashMap::new(),
            origin: CatalogOrigin::Empty,
        }
    }

    /// Store pre-populated with `products`
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut store = Self::new();
        store.replace(products);
        store
    }

    /// Fetch the catalog, installing the default catalog on any failure
    ///
    /// The failure is logged and never surfaced: after this call the store
    /// is always usable.
    pub async fn load_or_default(&mut self, source: &dyn CatalogSource) -> &CatalogOrigin {
        let location = source.location();
        match source.fetch().await {
            Ok(products) => {
                tracing::info!(location = %location, count = products.len(), "Catalog loaded");
                self.replace(products);
                self.origin = CatalogOrigin::Fetched { location };
            }
            Err(e) => {
                let reason = e.to_catalog_error();
                tracing::warn!(
                    location = %location,
                    code = %reason.code,
                    error = %e,
                    "Catalog load failed, using default catalog"
                );
                self.replace(default_catalog());
                self.origin = CatalogOrigin::Fallback { reason };
            }
        }
        &self.origin
    }

    /// Swap the whole product list
    pub fn replace(&mut self, products: Vec<Product>) {
        self.index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();
        self.products = products;
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|&i| self.products.get(i))
    }

    /// Products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in single-product catalog used when the fetch fails
pub fn default_catalog() -> Vec<Product> {
    vec![Product {
        id: 1,
        name: "Орто Стандарт".into(),
        category: "independent".into(),
        price: 35000,
        original_price: Some(45000),
        images: vec![PLACEHOLDER_IMAGE.into()],
        features: vec![
            "Средняя жесткость".into(),
            "Высота 18 см".into(),
            "Пружины + кокос".into(),
            "Для среднего веса".into(),
        ],
        description: "Идеальный матрас для ежедневного использования. Обеспечивает оптимальную поддержку позвоночника.".into(),
        sizes: vec![
            Size {
                name: "80x190".into(),
                price: 35000,
                original_price: Some(45000),
            },
            Size {
                name: "140x200".into(),
                price: 46000,
                original_price: Some(58000),
            },
        ],
        rating: 4.8,
        reviews: 153,
        badge: None,
    }]
}
