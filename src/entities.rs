// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Minimal list item returned by the paginated Pokémon endpoint.
///
/// `name` is the deduplication key of the cache; `url` points into the
/// Pokémon resource namespace and its trailing segment encodes the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

/// One page of the paginated Pokémon list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonListPage {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PokemonRef>,
}

/// A `{ name, url }` reference to some other PokéAPI resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Type entry of a Pokémon, ordered by `slot`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(default)]
    pub slot: i64,
    #[serde(rename = "type", default)]
    pub type_info: NamedResource,
}

/// Sprite URL bundle. PokéAPI serves `null` for missing sprites, so every
/// field falls back to an empty string rather than being absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonSprites {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub front_default: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub front_shiny: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub back_default: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub back_shiny: String,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: OfficialArtwork,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficialArtwork {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub front_default: String,
}

/// Full record for a single Pokémon. Heights are decimeters, weights are
/// hectograms, as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub sprites: PokemonSprites,
    #[serde(default)]
    pub base_experience: i64,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_default: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprites_tolerate_null_and_missing_fields() {
        let sprites: PokemonSprites = serde_json::from_value(serde_json::json!({
            "front_default": "https://example.com/25.png",
            "front_shiny": null,
        }))
        .unwrap();

        assert_eq!(sprites.front_default, "https://example.com/25.png");
        assert_eq!(sprites.front_shiny, "");
        assert_eq!(sprites.back_default, "");
        assert_eq!(sprites.other.official_artwork.front_default, "");
    }
}
