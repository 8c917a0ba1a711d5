//! Catalog sources
//!
//! A catalog is a JSON array of [`Product`] records. Sources only fetch and
//! decode; falling back to a default catalog is the caller's policy.

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use shared::Product;
use shared::models::validate_catalog;
use std::path::PathBuf;

/// Somewhere a catalog can be loaded from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location for logs
    fn location(&self) -> String;

    /// Fetch, decode and validate the whole catalog
    async fn fetch(&self) -> ClientResult<Vec<Product>>;
}

/// Decode and validate a catalog payload
pub fn parse_catalog(bytes: &[u8]) -> ClientResult<Vec<Product>> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if !value.is_array() {
        return Err(ClientError::InvalidResponse(
            "catalog payload is not an array".to_string(),
        ));
    }
    let products: Vec<Product> = serde_json::from_value(value)?;
    validate_catalog(&products)?;
    Ok(products)
}

/// Catalog served over HTTP (usually `products.json` next to the page)
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    http: HttpClient,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> ClientResult<Vec<Product>> {
        let bytes = self.http.get_bytes(&self.url).await?;
        parse_catalog(&bytes)
    }
}

/// Catalog read from a local JSON file
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> ClientResult<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path).await?;
        parse_catalog(&bytes)
    }
}

/// Pick a source from a configured location: `http(s)://` URLs are fetched,
/// anything else is treated as a file path
pub fn source_for(location: &str, config: &ClientConfig) -> ClientResult<Box<dyn CatalogSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let http = config.build_http_client()?;
        Ok(Box::new(HttpCatalogSource::new(http, location)))
    } else {
        Ok(Box::new(FileCatalogSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let json = br#"[
            {"id": 1, "name": "A", "category": "independent", "price": 100},
            {"id": 2, "name": "B", "category": "children", "price": 200,
             "sizes": [{"name": "60x120", "price": 200, "originalPrice": 250}]}
        ]"#;
        let products = parse_catalog(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].sizes[0].original_price, Some(250));
    }

    #[test]
    fn test_parse_rejects_object() {
        let err = parse_catalog(br#"{"products": []}"#).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_catalog(b"<html>404</html>").unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_parse_rejects_shape_mismatch() {
        let err = parse_catalog(br#"[{"id": "one", "name": "A"}]"#).unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_catalog() {
        let json = br#"[
            {"id": 1, "name": "A", "category": "independent", "price": 100},
            {"id": 1, "name": "B", "category": "independent", "price": 100}
        ]"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(err, ClientError::Rejected(_)));
    }

    #[test]
    fn test_source_for_location() {
        let config = ClientConfig::default();
        let http = source_for("https://shop.example/products.json", &config).unwrap();
        assert_eq!(http.location(), "https://shop.example/products.json");

        let file = source_for("./products.json", &config).unwrap();
        assert_eq!(file.location(), "./products.json");
    }
}
