// SPDX-License-Identifier: GPL-3.0-only

//! Persistent storage for the cached Pokémon list and favorites, kept as
//! JSON blobs in the application data directory. Only used to seed/restore
//! state across sessions; loads degrade to "nothing stored" and saves report
//! success as a plain bool, so a broken disk never takes the app down.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::entities::PokemonRef;

const POKEMON_CACHE_KEY: &str = "pokemon_cache";
const FAVORITES_KEY: &str = "favorite_pokemon";

#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Opens storage under the user data directory for `app_id`.
    pub fn open(app_id: &str) -> Result<Self, anywho::Error> {
        let root = dirs::data_dir()
            .ok_or_else(|| anywho::anywho!("no data directory available"))?
            .join(app_id);
        Ok(Self { root })
    }

    /// Storage rooted at an arbitrary directory. Used by tests.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    async fn get_item<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.blob_path(key);
        let contents = tokio::fs::read_to_string(&path).await.ok()?;
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("discarding corrupt blob {}: {err}", path.display());
                None
            }
        }
    }

    async fn set_item<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!("failed to serialize {key}: {err}");
                return false;
            }
        };

        if let Err(err) = tokio::fs::create_dir_all(&self.root).await {
            tracing::warn!("failed to create {}: {err}", self.root.display());
            return false;
        }

        match tokio::fs::write(self.blob_path(key), serialized).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("failed to write {key}: {err}");
                false
            }
        }
    }

    async fn remove_item(&self, key: &str) -> bool {
        match tokio::fs::remove_file(self.blob_path(key)).await {
            Ok(()) => true,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => true,
            Err(err) => {
                tracing::warn!("failed to remove {key}: {err}");
                false
            }
        }
    }

    /// Returns the persisted list cache, or `None` when nothing usable is
    /// stored.
    pub async fn load_pokemon_cache(&self) -> Option<Vec<PokemonRef>> {
        self.get_item(POKEMON_CACHE_KEY).await
    }

    pub async fn save_pokemon_cache(&self, items: &[PokemonRef]) -> bool {
        self.set_item(POKEMON_CACHE_KEY, &items).await
    }

    pub async fn clear_pokemon_cache(&self) -> bool {
        self.remove_item(POKEMON_CACHE_KEY).await
    }

    pub async fn load_favorites(&self) -> Vec<String> {
        self.get_item(FAVORITES_KEY).await.unwrap_or_default()
    }

    pub async fn save_favorites(&self, favorites: &[String]) -> bool {
        self.set_item(FAVORITES_KEY, &favorites).await
    }
}
