//! Incremental loading of a product listing.
//!
//! [`ProductListState`] holds the accumulated products and the paging counters,
//! [`ProductListing`] drives it against a [`ProductRetrieval`] backend. Fetches
//! are not queued: a call made while another one is outstanding is dropped and
//! the caller re-triggers it later (next scroll event).
//!
//! Every request is tagged with the generation current at issue time. A new
//! search bumps the generation, so responses that belong to an earlier search
//! are discarded instead of being merged into the new one.

use std::{cell::RefCell, collections::HashSet, future::Future, rc::Rc};

use tracing::{debug, error, info, warn};

use crate::{
    criteria_url::product_criteria_to_url,
    product::{ProductObject, ProductResponse},
    product_criteria::ProductCriteria,
};


/// The two retrieval calls the listing depends on.
pub trait ProductRetrieval {
    /// Standard paginated search.
    fn search_products(
        &self,
        criteria: &ProductCriteria,
        page_index: u32,
    ) -> impl Future<Output = anyhow::Result<ProductResponse>>;

    /// Semantic search returning the whole result set in one response.
    fn search_products_by_ai(
        &self,
        criteria: &ProductCriteria,
    ) -> impl Future<Output = anyhow::Result<ProductResponse>>;
}

/// How the first page of a search session is retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionKind {
    #[default]
    Standard,
    /// First page comes from the AI endpoint, later pages from standard search.
    AiOneShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMode {
    Standard { page_index: u32 },
    AiOneShot,
}

/// Issued by [`ProductListState::begin_fetch`], handed back with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub page_index: u32,
    pub mode: RetrievalMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Another fetch was in flight, or the page does not exist.
    Skipped,
    Loaded { added: usize, total_pages: u32 },
    /// The message is meant for a user-visible notification.
    Failed(String),
    /// The response belonged to an earlier search and was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductListState {
    products: Vec<ProductObject>,
    page_index: u32,
    total_pages: u32,
    in_flight: bool,
    session_kind: SessionKind,
    ai_pending: bool,
    generation: u64,
    loaded_once: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new(SessionKind::Standard)
    }
}

impl ProductListState {
    pub fn new(session_kind: SessionKind) -> Self {
        Self {
            products: Vec::new(),
            page_index: 0,
            // at least one page exists until the backend says otherwise
            total_pages: 1,
            in_flight: false,
            session_kind,
            ai_pending: session_kind == SessionKind::AiOneShot,
            generation: 0,
            loaded_once: false,
        }
    }

    pub fn products(&self) -> &[ProductObject] {
        &self.products
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    pub fn session_kind(&self) -> SessionKind {
        self.session_kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a response came back for this search, even an empty one.
    pub fn has_loaded(&self) -> bool {
        self.loaded_once
    }

    /// No further page can be requested for the current search.
    /// A search that has not loaded its first page yet is never exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.loaded_once && !self.in_flight && self.page_index.saturating_add(1) >= self.total_pages
    }

    /// Starts a new search session. Outstanding requests become stale.
    pub fn reset(&mut self, session_kind: SessionKind) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(session_kind);
        self.generation = generation;
    }

    /// Claims the in-flight slot for `page_index`, or `None` when the fetch must be dropped.
    pub fn begin_fetch(&mut self, page_index: u32) -> Option<FetchTicket> {
        if self.in_flight || page_index >= self.total_pages {
            return None;
        }
        self.in_flight = true;
        let mode = if self.ai_pending {
            RetrievalMode::AiOneShot
        } else {
            RetrievalMode::Standard { page_index }
        };
        Some(FetchTicket {
            generation: self.generation,
            page_index,
            mode,
        })
    }

    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: anyhow::Result<ProductResponse>) -> FetchOutcome {
        if ticket.generation != self.generation {
            return FetchOutcome::Stale;
        }
        self.in_flight = false;
        match result {
            Ok(response) => {
                if ticket.mode == RetrievalMode::AiOneShot {
                    self.ai_pending = false;
                }
                let added = self.merge(response.products);
                self.total_pages = response.total_pages;
                self.loaded_once = true;
                FetchOutcome::Loaded {
                    added,
                    total_pages: self.total_pages,
                }
            }
            Err(e) => {
                // let the next load_more ask for the same page again
                if ticket.page_index > 0 && ticket.page_index == self.page_index {
                    self.page_index -= 1;
                }
                FetchOutcome::Failed(format!("An error occurred while loading products: {e}"))
            }
        }
    }

    /// Moves to the next page. Returns the index to fetch, if any.
    pub fn advance_page(&mut self) -> Option<u32> {
        if self.in_flight || self.page_index >= self.total_pages {
            return None;
        }
        self.page_index += 1;
        (self.page_index > 0).then_some(self.page_index)
    }

    /// Appends products whose id is not accumulated yet. Returns how many were added.
    pub fn merge(&mut self, products: Vec<ProductObject>) -> usize {
        let mut seen = self.products.iter().map(|p| p.id.clone()).collect::<HashSet<_>>();
        let before = self.products.len();
        self.products.extend(products.into_iter().filter(|p| seen.insert(p.id.clone())));
        self.products.len() - before
    }
}

/// Storage for a [`ProductListState`] that can be shared with the view layer.
pub trait ListingStateCell {
    fn with_state<T>(&self, f: impl FnOnce(&ProductListState) -> T) -> T;
    fn update_state<T>(&self, f: impl FnOnce(&mut ProductListState) -> T) -> T;
}

impl ListingStateCell for RefCell<ProductListState> {
    fn with_state<T>(&self, f: impl FnOnce(&ProductListState) -> T) -> T {
        f(&self.borrow())
    }

    fn update_state<T>(&self, f: impl FnOnce(&mut ProductListState) -> T) -> T {
        f(&mut self.borrow_mut())
    }
}

impl<C: ListingStateCell> ListingStateCell for Rc<C> {
    fn with_state<T>(&self, f: impl FnOnce(&ProductListState) -> T) -> T {
        self.as_ref().with_state(f)
    }

    fn update_state<T>(&self, f: impl FnOnce(&mut ProductListState) -> T) -> T {
        self.as_ref().update_state(f)
    }
}

pub struct ProductListing<R, S> {
    retrieval: R,
    state: S,
}

impl<R: ProductRetrieval, S: ListingStateCell> ProductListing<R, S> {
    pub fn new(retrieval: R, state: S) -> Self {
        Self { retrieval, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub async fn fetch_page(&self, criteria: &ProductCriteria, page_index: u32) -> FetchOutcome {
        // The state is never borrowed across the await below.
        let Some(ticket) = self.state.update_state(|s| s.begin_fetch(page_index)) else {
            debug!("fetch of page {page_index} skipped");
            return FetchOutcome::Skipped;
        };
        debug!("fetching page {page_index} ({:?}, generation {})", ticket.mode, ticket.generation);

        let result = match ticket.mode {
            RetrievalMode::AiOneShot => self.retrieval.search_products_by_ai(criteria).await,
            RetrievalMode::Standard { page_index } => self.retrieval.search_products(criteria, page_index).await,
        };

        let outcome = self.state.update_state(|s| s.finish_fetch(ticket, result));
        match &outcome {
            FetchOutcome::Loaded { added, total_pages } => {
                info!("page {page_index} loaded: {added} new products, {total_pages} pages in total");
            }
            FetchOutcome::Failed(message) => error!("page {page_index} failed: {message}"),
            FetchOutcome::Stale => warn!("dropped stale response for page {page_index} (generation {})", ticket.generation),
            FetchOutcome::Skipped => {}
        }
        outcome
    }

    pub async fn load_more(&self, criteria: &ProductCriteria) -> FetchOutcome {
        match self.state.update_state(|s| s.advance_page()) {
            Some(page_index) => self.fetch_page(criteria, page_index).await,
            None => FetchOutcome::Skipped,
        }
    }

    /// Resets the accumulation, navigates to `base_path?<criteria>` and loads page 0.
    pub async fn new_search(
        &self,
        base_path: &str,
        criteria: &ProductCriteria,
        session_kind: SessionKind,
        navigate: impl FnOnce(String),
    ) -> FetchOutcome {
        self.state.update_state(|s| s.reset(session_kind));
        navigate(product_criteria_to_url(base_path, criteria));
        self.fetch_page(criteria, 0).await
    }
}
