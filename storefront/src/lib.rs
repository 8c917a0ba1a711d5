//! Ortho storefront core
//!
//! State and view models of the single-page mattress catalog:
//!
//! - **Catalog** (`catalog`): session product list with default fallback, category sections
//! - **Selection** (`selection`): open product and chosen size
//! - **Price board** (`view`): every displayed price derived from the selection
//! - **Renderers** (`render`): product cards and modal views
//! - **Orders** (`order`): message composition and the submission guard
//! - **Routing** (`routing`): `#/product/{id}/{slug}` fragments
//! - **Page** (`page`): controller owning all of the above
//!
//! ```text
//! storefront/src/
//! ├── core/       # configuration
//! ├── utils/      # logging
//! ├── catalog/    # store, categorizer
//! ├── render/     # card, modal
//! ├── order/      # composer, message builder, guard
//! ├── pricing.rs  # discount percent
//! ├── routing.rs
//! ├── selection.rs
//! ├── view.rs
//! └── page.rs
//! ```

pub mod catalog;
pub mod core;
pub mod order;
pub mod page;
pub mod pricing;
pub mod render;
pub mod routing;
pub mod selection;
pub mod utils;
pub mod view;

pub use catalog::{CatalogOrigin, CatalogStore, CategoryBuckets, CategorySection};
pub use crate::core::Config;
pub use order::{CustomerDetails, OrderComposer, OrderMessage, SubmitGuard};
pub use page::{PageController, SectionView};
pub use render::{CardRenderer, ModalContext, ModalView, ProductCard};
pub use routing::Route;
pub use selection::{Selection, SelectionState, SizeChange};
pub use view::{OrderSummary, PriceBoard, PricePair};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
///
/// Must run inside a tokio runtime when `LOG_DIR` is set.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.json_logs(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}
