// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::APP_ID;

/// Application configuration, read from `config.ron` in the user config
/// directory. Any missing or unreadable file falls back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the PokéAPI REST service.
    pub api_base_url: String,
    /// Number of list items requested per page.
    pub page_size: u32,
    /// Upper bound the API accepts for a single page.
    pub max_page_size: u32,
    /// Request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// Base URL of the official-artwork sprite repository.
    pub artwork_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://pokeapi.co/api/v2"),
            page_size: 20,
            max_page_size: 100,
            request_timeout_secs: 10,
            artwork_base_url: String::from(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork",
            ),
        }
    }
}

impl Config {
    /// Loads the configuration from disk, falling back to the defaults when
    /// the file is absent or malformed. Never fails.
    pub fn load() -> Self {
        let Some(path) = dirs::config_dir().map(|dir| dir.join(APP_ID).join("config.ron")) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => ron::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!("invalid config file {}: {err}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
