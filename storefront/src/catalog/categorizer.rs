//! Categorizer
//!
//! Partitions the catalog into the four display categories and tracks the
//! "show all" state of each section.

use shared::{Category, Product};
use std::collections::BTreeMap;

/// Products shown in a section before it is revealed
pub const INITIAL_VISIBLE: usize = 3;

/// Partition products by known category, keeping catalog order
///
/// Products with an unknown category are dropped.
pub fn bucket(products: &[Product]) -> BTreeMap<Category, Vec<Product>> {
    let mut buckets: BTreeMap<Category, Vec<Product>> = BTreeMap::new();
    for product in products {
        match product.category() {
            Some(category) => buckets.entry(category).or_default().push(product.clone()),
            None => tracing::debug!(
                product_id = product.id,
                category = %product.category,
                "Skipping product with unknown category"
            ),
        }
    }
    buckets
}

/// One non-empty category on the page
#[derive(Debug, Clone)]
pub struct CategorySection {
    category: Category,
    products: Vec<Product>,
    revealed: bool,
}

impl CategorySection {
    pub fn new(category: Category, products: Vec<Product>) -> Self {
        Self {
            category,
            products,
            revealed: false,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn title(&self) -> &'static str {
        self.category.title()
    }

    /// All products of the bucket in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total(&self) -> usize {
        self.products.len()
    }

    /// Products currently shown
    pub fn visible(&self) -> &[Product] {
        if self.revealed {
            &self.products
        } else {
            &self.products[..self.products.len().min(INITIAL_VISIBLE)]
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn can_reveal(&self) -> bool {
        !self.revealed && self.products.len() > INITIAL_VISIBLE
    }

    /// Label of the "show all" control, `None` when there is nothing to reveal
    pub fn reveal_label(&self) -> Option<String> {
        self.can_reveal()
            .then(|| format!("Показать все ({})", self.products.len()))
    }

    /// Show the remaining products, returning only the newly shown ones
    ///
    /// A second call returns an empty slice.
    pub fn reveal(&mut self) -> &[Product] {
        if !self.can_reveal() {
            return &[];
        }
        self.revealed = true;
        &self.products[INITIAL_VISIBLE..]
    }
}

/// Sections of the page in display order
#[derive(Debug, Clone, Default)]
pub struct CategoryBuckets {
    sections: Vec<CategorySection>,
}

impl CategoryBuckets {
    /// Build sections for every non-empty category
    pub fn from_products(products: &[Product]) -> Self {
        let sections = bucket(products)
            .into_iter()
            .map(|(category, products)| CategorySection::new(category, products))
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    pub fn section(&self, category: Category) -> Option<&CategorySection> {
        self.sections.iter().find(|s| s.category == category)
    }

    pub fn section_mut(&mut self, category: Category) -> Option<&mut CategorySection> {
        self.sections.iter_mut().find(|s| s.category == category)
    }

    /// Reveal a category; unknown or empty categories reveal nothing
    pub fn reveal(&mut self, category: Category) -> &[Product] {
        match self.section_mut(category) {
            Some(section) => section.reveal(),
            None => &[],
        }
    }
}
