//! Page controller
//!
//! Owns all page state and is the only place it changes. Renderers and the
//! composer receive it by reference.

use crate::catalog::{CatalogOrigin, CatalogStore, CategoryBuckets, INITIAL_VISIBLE};
use crate::core::Config;
use crate::order::{CustomerDetails, OrderComposer, OrderMessage, SubmitGuard};
use crate::render::modal::render_modal;
use crate::render::{CardRenderer, ModalContext, ModalView, ProductCard};
use crate::routing::Route;
use crate::selection::{Resolved, Selection, SelectionState, SizeChange};
use crate::view::{PriceBoard, PricePair};
use chrono::Utc;
use ortho_client::{CatalogSource, Channel, DispatchReceipt, TelegramChannel, WhatsAppChannel};
use serde::Serialize;
use shared::{AppError, AppResult, Category, ErrorCode, Product, ProductId};
use std::sync::Arc;

/// One category section as rendered
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub category: Category,
    pub title: &'static str,
    pub cards: Vec<ProductCard>,
    pub reveal_label: Option<String>,
}

pub struct PageController {
    catalog: CatalogStore,
    sections: CategoryBuckets,
    selection: SelectionState,
    board: PriceBoard,
    modal: Option<ModalContext>,
    route: Route,
    cards: CardRenderer,
    composer: OrderComposer,
    order_channel: Arc<dyn Channel>,
    consultation_channel: Option<Arc<dyn Channel>>,
    guard: SubmitGuard,
    site_url: String,
    video_url: String,
    loaded: bool,
}

impl PageController {
    pub fn new(
        config: &Config,
        order_channel: Arc<dyn Channel>,
        consultation_channel: Option<Arc<dyn Channel>>,
    ) -> Self {
        Self {
            catalog: CatalogStore::new(),
            sections: CategoryBuckets::default(),
            selection: SelectionState::new(),
            board: PriceBoard::new(),
            modal: None,
            route: Route::Home,
            cards: CardRenderer::new(config.site_url.clone()),
            composer: OrderComposer::new(config.timezone),
            order_channel,
            consultation_channel,
            guard: SubmitGuard::new(),
            site_url: config.site_url.clone(),
            video_url: config.test_video_url.clone(),
            loaded: false,
        }
    }

    /// Controller wired to WhatsApp for orders and, when configured,
    /// Telegram for consultations
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let order_channel: Arc<dyn Channel> = Arc::new(WhatsAppChannel::new(&config.whatsapp_phone));

        let consultation_channel: Option<Arc<dyn Channel>> = match &config.telegram_bot_token {
            Some(token) if config.telegram_enabled() => {
                let http = config
                    .client_config()
                    .build_http_client()
                    .map_err(|e| AppError::internal(e.to_string()))?;
                let channel = TelegramChannel::new(http, token, config.telegram_chat_ids.clone())
                    .with_api_base(&config.telegram_api_base);
                Some(Arc::new(channel))
            }
            _ => {
                tracing::info!("Telegram not configured, consultation requests disabled");
                None
            }
        };

        Ok(Self::new(config, order_channel, consultation_channel))
    }

    // ==================== Catalog ====================

    /// Load the catalog (or its fallback) and build the sections
    pub async fn load_catalog(&mut self, source: &dyn CatalogSource) -> &CatalogOrigin {
        self.catalog.load_or_default(source).await;
        self.sections = CategoryBuckets::from_products(self.catalog.products());
        self.board.reset_cards(self.catalog.products());
        self.selection.reset();
        self.modal = None;
        self.route = Route::Home;
        self.loaded = true;
        tracing::debug!(sections = self.sections.sections().len(), "Page sections built");
        self.catalog.origin()
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Sections with their visible cards; empty until the catalog is loaded
    pub fn sections(&self) -> Vec<SectionView> {
        if !self.loaded {
            return Vec::new();
        }
        self.sections
            .sections()
            .iter()
            .map(|section| SectionView {
                category: section.category(),
                title: section.title(),
                cards: section
                    .visible()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| self.card(p, i))
                    .collect(),
                reveal_label: section.reveal_label(),
            })
            .collect()
    }

    /// Reveal the rest of a section, returning the new cards
    pub fn reveal(&mut self, category: Category) -> Vec<ProductCard> {
        let cards = &self.cards;
        let board = &self.board;
        self.sections
            .reveal(category)
            .iter()
            .enumerate()
            .map(|(i, p)| {
                cards
                    .render(p, INITIAL_VISIBLE + i)
                    .with_price_label(board.card_label(p.id))
            })
            .collect()
    }

    fn card(&self, product: &Product, index: usize) -> ProductCard {
        self.cards
            .render(product, index)
            .with_price_label(self.board.card_label(product.id))
    }

    // ==================== Modal ====================

    pub fn open_test(&mut self, id: ProductId) -> Option<ModalView> {
        self.open(ModalContext::Test, id)
    }

    pub fn open_details(&mut self, id: ProductId) -> Option<ModalView> {
        self.open(ModalContext::Details, id)
    }

    /// Switch the open product to the order view
    pub fn open_order(&mut self) -> Option<ModalView> {
        self.selection.current().product_id()?;
        self.modal = Some(ModalContext::Order);
        self.refresh_prices();
        self.modal_view()
    }

    fn open(&mut self, context: ModalContext, id: ProductId) -> Option<ModalView> {
        self.selection.open_product(&self.catalog, id)?;
        let product = self.catalog.get(id)?;
        self.route = match context {
            ModalContext::Test => Route::test(product),
            _ => Route::product(product),
        };
        self.modal = Some(context);
        self.refresh_prices();
        tracing::debug!(product_id = id, route = %self.route, "Modal opened");
        self.modal_view()
    }

    /// Choose a size of the open product and refresh every price display
    pub fn choose_size(&mut self, index: usize) -> Option<SizeChange> {
        let change = self.selection.choose_size(&self.catalog, index)?;
        self.refresh_prices();
        Some(change)
    }

    /// Close the modal and forget the selection
    pub fn close(&mut self) {
        self.selection.reset();
        self.modal = None;
        self.board.clear_modal();
        self.route = Route::Home;
    }

    /// Follow a location fragment
    ///
    /// Unknown products and unparseable fragments close the modal.
    pub fn navigate(&mut self, fragment: &str) -> Option<ModalView> {
        let opened = match Route::parse(fragment) {
            Route::Home => None,
            Route::Product { id, .. } => self.open_details(id),
            Route::Test { id, .. } => self.open_test(id),
        };
        if opened.is_none() {
            self.close();
        }
        opened
    }

    pub fn modal_view(&self) -> Option<ModalView> {
        let context = self.modal?;
        let Resolved { product, size } = self.selection.resolve(&self.catalog)?;
        let prices = self
            .board
            .modal()
            .cloned()
            .unwrap_or_else(|| PricePair::for_selection(product, size));
        Some(render_modal(
            product,
            context,
            self.selection.current().size_index(),
            &prices,
            &self.video_url,
        ))
    }

    fn refresh_prices(&mut self) {
        let order_active = self.modal == Some(ModalContext::Order);
        match self.selection.resolve(&self.catalog) {
            Some(Resolved { product, size }) => self.board.apply(product, size, order_active),
            None => self.board.clear_modal(),
        }
    }

    // ==================== State accessors ====================

    pub fn selection(&self) -> Selection {
        self.selection.current()
    }

    pub fn modal_context(&self) -> Option<ModalContext> {
        self.modal
    }

    pub fn board(&self) -> &PriceBoard {
        &self.board
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Shareable URL of the current route, `None` on the home page
    pub fn share_url(&self) -> Option<String> {
        (self.route != Route::Home).then(|| self.route.share_url(&self.site_url))
    }

    /// Handle on the submission guard, e.g. to disable the submit button
    pub fn submit_guard(&self) -> SubmitGuard {
        self.guard.clone()
    }

    // ==================== Submission ====================

    /// Compose and dispatch an order for the current selection
    pub async fn submit_order(&self, customer: &CustomerDetails) -> AppResult<DispatchReceipt> {
        let _ticket = self.guard.try_begin()?;
        let channel = self.order_channel.as_ref();
        let message = self.composer.compose_order(
            self.selection.resolve(&self.catalog),
            customer,
            Utc::now(),
            channel.markup(),
        )?;
        dispatch(channel, &message).await
    }

    /// Compose and dispatch a consultation request
    pub async fn request_consultation(
        &self,
        customer: &CustomerDetails,
    ) -> AppResult<DispatchReceipt> {
        let _ticket = self.guard.try_begin()?;
        let channel = self
            .consultation_channel
            .as_deref()
            .ok_or_else(|| AppError::new(ErrorCode::ChannelNotConfigured))?;
        let message = self
            .composer
            .compose_consultation(customer, Utc::now(), channel.markup())?;
        dispatch(channel, &message).await
    }
}

async fn dispatch(channel: &dyn Channel, message: &OrderMessage) -> AppResult<DispatchReceipt> {
    match channel.dispatch(&message.text).await {
        Ok(receipt) => {
            let product = message
                .product_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            crate::order_log!(
                channel.name(),
                message.kind.as_str(),
                product,
                message.text.as_str()
            );
            tracing::info!(
                channel = channel.name(),
                kind = message.kind.as_str(),
                "Message dispatched"
            );
            Ok(receipt)
        }
        Err(e) => {
            tracing::error!(channel = channel.name(), error = %e, "Message dispatch failed");
            Err(e.to_dispatch_error())
        }
    }
}
