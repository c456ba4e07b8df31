//! One listing-page session: store, URL, derived view and pagination.
//!
//! Every filter mutation flows one way:
//!
//! ```text
//! StoreIntent → Store → UrlSynchronizer
//!                    └→ FilteredView → (content changed?) → pagination reset
//! ```

use reqwest::Url;
use std::sync::Arc;
use tokio::sync::watch;

use crate::catalog::Item;
use crate::filter::{FilterState, FilteredView};
use crate::ui::mvi::{Reducer, Store};
use crate::ui::pagination::{PaginationIntent, PaginationReducer, PaginationState};
use crate::ui::store::{StoreIntent, StoreReducer, StoreState};
use crate::url_sync::UrlSynchronizer;

/// A delayed page load the caller has to schedule and then report back
/// through [`Session::page_loaded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub page: usize,
}

pub struct Session {
    store: Store<StoreReducer>,
    url: UrlSynchronizer,
    items: Arc<[Item]>,
    view: FilteredView,
    pagination: PaginationState,
    per_page: usize,
}

impl Session {
    /// Seed the filters from the page URL and reveal the first page.
    pub fn new(items: Vec<Item>, url: UrlSynchronizer, per_page: usize) -> Self {
        let state = StoreState::new(items, url.initial_filters());
        let view = FilteredView::build(&state.items, &state.filters);
        let pagination = PaginationReducer::reduce(
            PaginationState::default(),
            PaginationIntent::Reset {
                total: view.len(),
                per_page,
            },
        );

        Self {
            items: Arc::clone(&state.items),
            store: Store::new(state),
            url,
            view,
            pagination,
            per_page,
        }
    }

    /// Apply a store mutation. Returns false if the state did not change.
    pub fn dispatch(&mut self, intent: StoreIntent) -> bool {
        let shareable = intent.is_shareable();
        if !self.store.dispatch(intent) {
            return false;
        }

        let state = self.store.snapshot();
        if shareable {
            self.url.sync(&state.filters);
        }
        let previous_items = std::mem::replace(&mut self.items, state.items);
        self.refresh_view(&previous_items, &state.filters);
        true
    }

    /// Scroll reached the end of the revealed window.
    pub fn near_bottom(&mut self) -> Option<PageRequest> {
        let before = self.pagination;
        self.dispatch_pagination(PaginationIntent::NearBottom);
        match (before.pending, self.pagination.pending) {
            (None, Some(page)) => Some(PageRequest {
                generation: self.pagination.generation,
                page,
            }),
            _ => None,
        }
    }

    /// Append the page a scheduled request was for. Stale requests are ignored.
    pub fn page_loaded(&mut self, request: PageRequest) -> bool {
        let before = self.pagination;
        self.dispatch_pagination(PaginationIntent::PageLoaded {
            generation: request.generation,
            page: request.page,
        });
        before != self.pagination
    }

    pub fn filters(&self) -> FilterState {
        self.store.state().filters.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.store.subscribe()
    }

    pub fn url(&self) -> &Url {
        self.url.url()
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn catalog_len(&self) -> usize {
        self.items.len()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Revealed prefix of the filtered view.
    pub fn visible(&self) -> Vec<&Item> {
        self.view.window(&self.items, self.pagination.revealed)
    }

    fn refresh_view(&mut self, previous_items: &[Item], filters: &FilterState) {
        let view = FilteredView::build(&self.items, filters);
        if !view.same_content(&self.items, &self.view, previous_items) {
            tracing::debug!(total = view.len(), "Filtered view changed; pagination reset");
            self.dispatch_pagination(PaginationIntent::Reset {
                total: view.len(),
                per_page: self.per_page,
            });
        }
        self.view = view;
    }

    fn dispatch_pagination(&mut self, intent: PaginationIntent) {
        self.pagination = PaginationReducer::reduce(self.pagination, intent);
    }
}
