// SPDX-License-Identifier: GPL-3.0-only

//! Coordinators bridging the remote API and the state the UI collaborator
//! reads. Failures never propagate upward: they are converted into a fixed
//! message in state, with the underlying cause only in the logs.

use crate::core::api::ApiError;
use crate::core::cache::PokemonCache;
use crate::core::validation::{is_valid_lowercase_name, is_valid_numeric_id};
use crate::entities::{PokemonDetail, PokemonListPage, PokemonRef};

/// Message exposed when a list fetch fails, whatever the cause.
pub const LIST_FETCH_ERROR: &str = "Failed to fetch Pokemon list";
/// Message exposed when a detail fetch fails, whatever the cause.
pub const DETAIL_FETCH_ERROR: &str = "Failed to fetch Pokemon details";

/// Seam to the remote API collaborator. The production implementation is
/// [`PokeApi`]; tests substitute an in-memory source.
///
/// [`PokeApi`]: crate::core::api::PokeApi
#[allow(async_fn_in_trait)]
pub trait PokemonSource {
    async fn fetch_list(&self, offset: u32, limit: u32) -> Result<PokemonListPage, ApiError>;
    async fn fetch_detail_by_id(&self, id: i64) -> Result<PokemonDetail, ApiError>;
    async fn fetch_detail_by_name(&self, name: &str) -> Result<PokemonDetail, ApiError>;
}

/// Drives the paginated list: page 0 replaces the cache, later pages merge
/// into it. Owns the cache it mutates; mutation only happens through
/// `&mut self`, so two loads of the same coordinator can never interleave.
#[derive(Debug)]
pub struct ListCoordinator<S> {
    source: S,
    page_size: u32,
    last_offset: u32,
    cache: PokemonCache,
}

impl<S: PokemonSource> ListCoordinator<S> {
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            last_offset: 0,
            cache: PokemonCache::new(),
        }
    }

    /// Seeds the cache from persisted state. Intended for session restore,
    /// before any page has been requested.
    pub fn restore(&mut self, items: Vec<PokemonRef>) {
        self.cache.replace_all(items);
    }

    /// Requests one page at `offset` and applies it to the cache. A failed
    /// request leaves existing entries untouched and records the fixed
    /// error message.
    pub async fn load_page(&mut self, offset: u32) {
        self.last_offset = offset;
        self.cache.set_loading(true);

        match self.source.fetch_list(offset, self.page_size).await {
            Ok(page) => {
                if offset == 0 {
                    self.cache.replace_all(page.results);
                } else {
                    self.cache.merge(page.results);
                }
            }
            Err(err) => {
                tracing::warn!("list fetch failed at offset {offset}: {err}");
                self.cache.set_error(Some(LIST_FETCH_ERROR.to_string()));
            }
        }

        self.cache.set_loading(false);
    }

    /// Re-issues the most recent request (offset 0 if none was made yet).
    pub async fn refetch(&mut self) {
        self.load_page(self.last_offset).await;
    }

    pub fn cache(&self) -> &PokemonCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut PokemonCache {
        &mut self.cache
    }

    pub fn pokemon_list(&self) -> &[PokemonRef] {
        self.cache.entries()
    }

    pub fn has_data(&self) -> bool {
        self.cache.has_data()
    }
}

/// Drives a single detail lookup. Keeps its own loading/error/data state,
/// independent of the list cache; detail payloads are never merged into it.
#[derive(Debug)]
pub struct DetailCoordinator<S> {
    source: S,
    last_query: Option<String>,
    detail: Option<PokemonDetail>,
    is_loading: bool,
    error: Option<String>,
}

impl<S: PokemonSource> DetailCoordinator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_query: None,
            detail: None,
            is_loading: false,
            error: None,
        }
    }

    /// Fetches the detail for `query`, which is either a canonical numeric
    /// id or a lowercase name. Anything else is rejected up front without
    /// touching the network.
    pub async fn load(&mut self, query: &str) {
        self.last_query = Some(query.to_string());
        self.is_loading = true;

        let result = match query.parse::<i64>() {
            Ok(id) if is_valid_numeric_id(query) => self.source.fetch_detail_by_id(id).await,
            _ if is_valid_lowercase_name(query) => self.source.fetch_detail_by_name(query).await,
            _ => {
                tracing::warn!("rejected detail query {query:?}");
                self.error = Some(DETAIL_FETCH_ERROR.to_string());
                self.is_loading = false;
                return;
            }
        };

        match result {
            Ok(detail) => self.detail = Some(detail),
            Err(err) => {
                tracing::warn!("detail fetch for {query:?} failed: {err}");
                self.error = Some(DETAIL_FETCH_ERROR.to_string());
            }
        }

        self.is_loading = false;
    }

    /// Re-issues the most recent query, if any.
    pub async fn refetch(&mut self) {
        if let Some(query) = self.last_query.clone() {
            self.load(&query).await;
        }
    }

    pub fn pokemon_detail(&self) -> Option<&PokemonDetail> {
        self.detail.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_data(&self) -> bool {
        self.detail.is_some()
    }
}
