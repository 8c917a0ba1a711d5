//! Selection State
//!
//! Tracks which product and size the customer is looking at. Only ids and
//! indices are kept; they are resolved against the [`CatalogStore`] on use.

use crate::catalog::CatalogStore;
use serde::Serialize;
use shared::{Product, ProductId, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Empty,
    /// Product open, it has no sizes to choose from
    ProductOpen { product_id: ProductId },
    SizeChosen {
        product_id: ProductId,
        size_index: usize,
    },
}

impl Selection {
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Selection::Empty => None,
            Selection::ProductOpen { product_id } | Selection::SizeChosen { product_id, .. } => {
                Some(*product_id)
            }
        }
    }

    pub fn size_index(&self) -> Option<usize> {
        match self {
            Selection::SizeChosen { size_index, .. } => Some(*size_index),
            _ => None,
        }
    }
}

/// Emitted whenever a size becomes the chosen one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeChange {
    pub product_id: ProductId,
    pub size_index: usize,
}

/// Selection resolved against the catalog
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'c> {
    pub product: &'c Product,
    pub size: Option<&'c Size>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Selection {
        self.current
    }

    /// Open `id`, choosing its first size when it has any
    ///
    /// Unknown ids leave the state untouched and return `None`.
    pub fn open_product(&mut self, catalog: &CatalogStore, id: ProductId) -> Option<Selection> {
        let Some(product) = catalog.get(id) else {
            tracing::debug!(product_id = id, "Ignoring open of unknown product");
            return None;
        };
        self.current = if product.sizes.is_empty() {
            Selection::ProductOpen { product_id: id }
        } else {
            Selection::SizeChosen {
                product_id: id,
                size_index: 0,
            }
        };
        Some(self.current)
    }

    /// Choose a size of the open product
    ///
    /// No-op returning `None` when nothing is open or `index` is out of range.
    pub fn choose_size(&mut self, catalog: &CatalogStore, index: usize) -> Option<SizeChange> {
        let product_id = self.current.product_id()?;
        let product = catalog.get(product_id)?;
        if product.size(index).is_none() {
            tracing::debug!(product_id, index, "Ignoring out-of-range size");
            return None;
        }
        self.current = Selection::SizeChosen {
            product_id,
            size_index: index,
        };
        Some(SizeChange {
            product_id,
            size_index: index,
        })
    }

    pub fn reset(&mut self) {
        self.current = Selection::Empty;
    }

    /// Look up the selected product and size
    pub fn resolve<'c>(&self, catalog: &'c CatalogStore) -> Option<Resolved<'c>> {
        let product = catalog.get(self.current.product_id()?)?;
        let size = self.current.size_index().and_then(|i| product.size(i));
        Some(Resolved { product, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn catalog() -> CatalogStore {
        let mut products = default_catalog();
        let mut plain = products[0].clone();
        plain.id = 2;
        plain.sizes.clear();
        products.push(plain);
        CatalogStore::from_products(products)
    }

    #[test]
    fn test_open_promotes_to_first_size() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        let selection = state.open_product(&catalog, 1);
        assert_eq!(
            selection,
            Some(Selection::SizeChosen {
                product_id: 1,
                size_index: 0
            })
        );
        assert_eq!(
            state.open_product(&catalog, 2),
            Some(Selection::ProductOpen { product_id: 2 })
        );
    }

    #[test]
    fn test_open_unknown_is_noop() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.open_product(&catalog, 1);

        assert_eq!(state.open_product(&catalog, 99), None);
        assert_eq!(state.current().product_id(), Some(1));
    }

    #[test]
    fn test_choose_size() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.open_product(&catalog, 1);

        let change = state.choose_size(&catalog, 1);
        assert_eq!(
            change,
            Some(SizeChange {
                product_id: 1,
                size_index: 1
            })
        );
        let resolved = state.resolve(&catalog).unwrap();
        assert_eq!(resolved.size.map(|s| s.price), Some(46000));
    }

    #[test]
    fn test_choose_size_out_of_range_keeps_state() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        assert_eq!(state.choose_size(&catalog, 0), None);
        assert_eq!(state.current(), Selection::Empty);

        state.open_product(&catalog, 1);
        state.choose_size(&catalog, 1);
        let before = state.current();
        assert_eq!(state.choose_size(&catalog, 2), None);
        assert_eq!(state.current(), before);

        state.open_product(&catalog, 2);
        assert_eq!(state.choose_size(&catalog, 0), None);
        assert_eq!(state.current(), Selection::ProductOpen { product_id: 2 });
    }

    #[test]
    fn test_reset() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.open_product(&catalog, 1);
        state.reset();
        assert_eq!(state.current(), Selection::Empty);
        assert!(state.resolve(&catalog).is_none());
    }
}
