// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end scenarios over an in-memory API source: paginated loading into
//! the cache, session restore from storage, and failure surfacing.

use rustydex::core::api::ApiError;
use rustydex::core::coordinator::{
    DETAIL_FETCH_ERROR, DetailCoordinator, ListCoordinator, PokemonSource,
};
use rustydex::core::storage::Storage;
use rustydex::core::validation::ValidationError;
use rustydex::entities::{PokemonDetail, PokemonListPage, PokemonRef};

struct FakeApi {
    pages: Vec<(u32, Vec<PokemonRef>)>,
    healthy: bool,
}

impl PokemonSource for FakeApi {
    async fn fetch_list(&self, offset: u32, _limit: u32) -> Result<PokemonListPage, ApiError> {
        if !self.healthy {
            return Err(ApiError::InvalidPayload(ValidationError::NotAnObject));
        }
        let results = self
            .pages
            .iter()
            .find(|(page_offset, _)| *page_offset == offset)
            .map(|(_, refs)| refs.clone())
            .unwrap_or_default();
        Ok(PokemonListPage {
            count: 1302,
            next: None,
            previous: None,
            results,
        })
    }

    async fn fetch_detail_by_id(&self, _id: i64) -> Result<PokemonDetail, ApiError> {
        Err(ApiError::InvalidPayload(ValidationError::NotAnObject))
    }

    async fn fetch_detail_by_name(&self, _name: &str) -> Result<PokemonDetail, ApiError> {
        Err(ApiError::InvalidPayload(ValidationError::NotAnObject))
    }
}

fn entry(name: &str, id: u32) -> PokemonRef {
    PokemonRef {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
    }
}

#[tokio::test]
async fn paginating_grows_the_cache_without_disturbing_earlier_pages() {
    let api = FakeApi {
        pages: vec![
            (0, vec![entry("bulbasaur", 1), entry("ivysaur", 2)]),
            (20, vec![entry("venusaur", 3)]),
        ],
        healthy: true,
    };
    let mut list = ListCoordinator::new(api, 20);

    list.load_page(0).await;
    assert_eq!(list.pokemon_list().len(), 2);
    assert!(list.has_data());

    list.load_page(20).await;
    let names: Vec<_> = list
        .pokemon_list()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
}

#[tokio::test]
async fn a_session_restores_from_storage_and_persists_back() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::with_root(dir.path());
    storage
        .save_pokemon_cache(&[entry("bulbasaur", 1)])
        .await;

    let api = FakeApi {
        pages: vec![(20, vec![entry("ivysaur", 2)])],
        healthy: true,
    };
    let mut list = ListCoordinator::new(api, 20);

    if let Some(cached) = storage.load_pokemon_cache().await {
        list.restore(cached);
    }
    assert!(list.has_data());

    list.load_page(20).await;
    storage.save_pokemon_cache(list.pokemon_list()).await;

    let persisted = storage.load_pokemon_cache().await.unwrap();
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].name, "bulbasaur");
    assert_eq!(persisted[1].name, "ivysaur");
}

#[tokio::test]
async fn a_failed_detail_fetch_surfaces_only_the_fixed_message() {
    let api = FakeApi {
        pages: Vec::new(),
        healthy: false,
    };
    let mut detail = DetailCoordinator::new(api);

    detail.load("1").await;

    assert_eq!(detail.error(), Some(DETAIL_FETCH_ERROR));
    assert!(detail.pokemon_detail().is_none());
    assert!(!detail.is_loading());
}
