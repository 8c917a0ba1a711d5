//! Hash-fragment routes
//!
//! `#/product/{id}/{slug}` opens the details view, `#/test/{id}/{slug}` the
//! test view. The id is authoritative; the slug is cosmetic and optional.

use serde::Serialize;
use shared::slug::slugify;
use shared::{Product, ProductId};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    Home,
    Product { id: ProductId, slug: Option<String> },
    Test { id: ProductId, slug: Option<String> },
}

impl Route {
    /// Details route for a product
    pub fn product(product: &Product) -> Self {
        Route::Product {
            id: product.id,
            slug: Some(slugify(&product.name)),
        }
    }

    /// Test-view route for a product
    pub fn test(product: &Product) -> Self {
        Route::Test {
            id: product.id,
            slug: Some(slugify(&product.name)),
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Route::Home => None,
            Route::Product { id, .. } | Route::Test { id, .. } => Some(*id),
        }
    }

    /// Parse a location fragment; anything unrecognised is [`Route::Home`]
    pub fn parse(fragment: &str) -> Self {
        let path = fragment.trim().trim_start_matches('#').trim_start_matches('/');
        let mut parts = path.split('/').filter(|p| !p.is_empty());

        let (Some(view), Some(id)) = (parts.next(), parts.next()) else {
            return Route::Home;
        };
        let Ok(id) = id.parse::<ProductId>() else {
            return Route::Home;
        };
        let slug = parts.next().map(String::from);

        match view {
            "product" => Route::Product { id, slug },
            "test" => Route::Test { id, slug },
            _ => Route::Home,
        }
    }

    /// Fragment including the leading `#`; empty for the home route
    pub fn to_fragment(&self) -> String {
        let (view, id, slug) = match self {
            Route::Home => return String::new(),
            Route::Product { id, slug } => ("product", id, slug),
            Route::Test { id, slug } => ("test", id, slug),
        };
        match slug {
            Some(slug) if !slug.is_empty() => format!("#/{}/{}/{}", view, id, slug),
            _ => format!("#/{}/{}", view, id),
        }
    }

    /// Absolute shareable URL under `site_url`
    pub fn share_url(&self, site_url: &str) -> String {
        format!("{}{}", site_url.trim_end_matches('#'), self.to_fragment())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("#"),
            _ => f.write_str(&self.to_fragment()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_round_trip() {
        let route = Route::Product {
            id: 1,
            slug: Some("orto-standart".into()),
        };
        assert_eq!(route.to_fragment(), "#/product/1/orto-standart");
        assert_eq!(Route::parse(&route.to_fragment()), route);

        let test = Route::Test { id: 12, slug: None };
        assert_eq!(test.to_fragment(), "#/test/12");
        assert_eq!(Route::parse("#/test/12"), test);
    }

    #[test]
    fn test_parse_lenient_prefix() {
        let expected = Route::Product {
            id: 3,
            slug: Some("kids".into()),
        };
        assert_eq!(Route::parse("/product/3/kids"), expected);
        assert_eq!(Route::parse("product/3/kids"), expected);
        assert_eq!(Route::parse("#product/3/kids/"), expected);
    }

    #[test]
    fn test_parse_garbage_is_home() {
        for fragment in ["", "#", "#/", "#/product", "#/product/abc", "#/cart/1", "#/product/-/x"] {
            assert_eq!(Route::parse(fragment), Route::Home, "fragment {:?}", fragment);
        }
        assert_eq!(Route::Home.to_fragment(), "");
    }

    #[test]
    fn test_share_url() {
        let route = Route::Test {
            id: 1,
            slug: Some("orto-standart".into()),
        };
        assert_eq!(
            route.share_url("https://ortho.kz/"),
            "https://ortho.kz/#/test/1/orto-standart"
        );
        assert_eq!(route.share_url("https://ortho.kz/#"), "https://ortho.kz/#/test/1/orto-standart");
        assert_eq!(route.product_id(), Some(1));
    }
}
