//! Entity list store with filter, search, and pagination
//!
//! Holds the full fetched collection and a derived visible slice. Every
//! `load()` takes a new generation; a response that resolves after a newer
//! load started is discarded instead of overwriting fresher state, the
//! last-write-wins race the original dashboard suffered from.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use console_client::ClientResult;
use tokio::sync::RwLock;

use crate::notice::NoticeQueue;
use crate::pager::Pager;
use crate::record::Record;

/// An async source of a full entity collection
#[async_trait]
pub trait Collection: Send + Sync + 'static {
    type Item: Record;

    /// Fetch and normalize the entire collection
    async fn fetch_all(&self) -> ClientResult<Vec<Self::Item>>;
}

/// Exact-match facet filter ("all" means no filtering)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Key(String),
}

impl Facet {
    fn matches(&self, record: &impl Record) -> bool {
        match self {
            Facet::All => true,
            Facet::Key(key) => record.facet() == *key,
        }
    }
}

#[derive(Debug)]
struct ListState<T> {
    items: Vec<T>,
    visible: Vec<T>,
    facet: Facet,
    search: String,
    pager: Pager,
    loaded: bool,
}

/// List store over a [`Collection`] source
pub struct ListStore<C: Collection> {
    source: Arc<C>,
    state: Arc<RwLock<ListState<C::Item>>>,
    generation: Arc<AtomicU64>,
    notices: NoticeQueue,
}

// Manual impl: deriving Clone would wrongly require C: Clone
impl<C: Collection> Clone for ListStore<C> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
            notices: self.notices.clone(),
        }
    }
}

impl<C: Collection> ListStore<C> {
    pub fn new(source: Arc<C>, page_size: usize, notices: NoticeQueue) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(ListState {
                items: Vec::new(),
                visible: Vec::new(),
                facet: Facet::All,
                search: String::new(),
                pager: Pager::new(page_size),
                loaded: false,
            })),
            generation: Arc::new(AtomicU64::new(0)),
            notices,
        }
    }

    /// Fetch the collection, replacing local state wholesale.
    ///
    /// Returns `false` when the fetch failed or resolved stale. A failed
    /// load keeps whatever list was already shown and surfaces an error
    /// notice; the very first load leaves the list empty.
    pub async fn load(&self) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(generation, "loading collection");

        match self.source.fetch_all().await {
            Ok(items) => {
                let mut state = self.state.write().await;
                // Checked under the write lock: a newer load may have
                // started and finished while this one awaited it.
                if self.generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "discarding superseded load");
                    return false;
                }
                state.items = items;
                state.loaded = true;
                Self::recompute(&mut state);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "collection load failed");
                self.notices.error(err.user_message());
                false
            }
        }
    }

    /// Set the exact-match facet filter; resets pagination to page 1
    pub async fn set_facet(&self, facet: Facet) {
        let mut state = self.state.write().await;
        state.facet = facet;
        state.pager.reset();
        Self::recompute(&mut state);
    }

    /// Apply a (debounced) search text; resets pagination to page 1
    pub async fn apply_search(&self, text: impl Into<String>) {
        let mut state = self.state.write().await;
        state.search = text.into();
        state.pager.reset();
        Self::recompute(&mut state);
    }

    fn recompute(state: &mut ListState<C::Item>) {
        let needle = state.search.trim().to_lowercase();
        state.visible = state
            .items
            .iter()
            .filter(|item| state.facet.matches(*item))
            .filter(|item| {
                needle.is_empty()
                    || item
                        .search_haystack()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        state.pager.clamp(state.visible.len());
    }

    /// The complete fetched collection
    pub async fn items(&self) -> Vec<C::Item> {
        self.state.read().await.items.clone()
    }

    /// The filtered collection (all pages)
    pub async fn visible(&self) -> Vec<C::Item> {
        self.state.read().await.visible.clone()
    }

    /// The rows for the current page
    pub async fn page_items(&self) -> Vec<C::Item> {
        let state = self.state.read().await;
        state.pager.slice(&state.visible).to_vec()
    }

    pub async fn page(&self) -> usize {
        self.state.read().await.pager.page()
    }

    pub async fn total_pages(&self) -> usize {
        let state = self.state.read().await;
        state.pager.total_pages(state.visible.len())
    }

    /// Advance a page; no-op at the last page
    pub async fn next_page(&self) {
        let mut state = self.state.write().await;
        let len = state.visible.len();
        state.pager.next(len);
    }

    /// Go back a page; no-op at page 1
    pub async fn prev_page(&self) {
        self.state.write().await.pager.prev();
    }

    /// Whether an initial load has completed
    pub async fn is_loaded(&self) -> bool {
        self.state.read().await.loaded
    }
}
