// SPDX-License-Identifier: GPL-3.0-only

//! In-memory Pokémon list cache: an insertion-ordered collection of
//! [`PokemonRef`] entries, unique by name, plus the loading/error flags the
//! UI collaborator reads. The cache is a plain owned value, injected into
//! whatever coordinates it, so every test can hold an isolated instance.

use crate::entities::PokemonRef;

/// Observable lifecycle of the cache, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Idle,
    Loading,
    Error,
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonCache {
    entries: Vec<PokemonRef>,
    is_loading: bool,
    error: Option<String>,
}

impl PokemonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection with `items`, preserving their order.
    /// Used for the first page and for refreshes. Loading/error flags are
    /// left for the caller to coordinate.
    pub fn replace_all(&mut self, items: Vec<PokemonRef>) {
        self.entries = items;
    }

    /// Merges a batch into the cache: an item whose name is already present
    /// replaces the existing entry in place, everything else is appended in
    /// batch order.
    ///
    /// Idempotent, never produces duplicate names, and never reorders
    /// pre-existing entries.
    pub fn merge(&mut self, items: Vec<PokemonRef>) {
        for item in items {
            match self.entries.iter().position(|entry| entry.name == item.name) {
                Some(index) => self.entries[index] = item,
                None => self.entries.push(item),
            }
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Empties the collection. Loading/error flags are untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[PokemonRef] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_data(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&PokemonRef> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Looks an entry up by the identifier encoded in its URL.
    pub fn find_by_id(&self, id: &str) -> Option<&PokemonRef> {
        let needle = format!("/{id}/");
        self.entries.iter().find(|entry| entry.url.contains(&needle))
    }

    pub fn status(&self) -> CacheStatus {
        if self.is_loading {
            CacheStatus::Loading
        } else if self.error.is_some() {
            CacheStatus::Error
        } else if self.has_data() {
            CacheStatus::Ready
        } else {
            CacheStatus::Idle
        }
    }
}
