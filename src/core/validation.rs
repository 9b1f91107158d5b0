// SPDX-License-Identifier: GPL-3.0-only

//! Shape checks applied to raw API payloads before anything enters the
//! cache. Each validator returns the typed value or the reason it was
//! rejected; none of them panics on arbitrary input.

use serde_json::Value;
use thiserror::Error;

use crate::entities::{PokemonDetail, PokemonListPage, PokemonRef};

/// Why a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("field `{0}` is missing or has the wrong type")]
    BadField(&'static str),
    #[error("`name` must be a non-empty string")]
    EmptyName,
    #[error("`url` does not reference the Pokémon resource namespace")]
    ForeignResource,
    #[error("list entry {0} is invalid: {1}")]
    BadListEntry(usize, Box<ValidationError>),
    #[error("payload does not deserialize: {0}")]
    Malformed(String),
}

/// Validates a single list item: a non-empty `name` and a `url` pointing at
/// the Pokémon resource namespace.
pub fn validate_list_item(candidate: &Value) -> Result<PokemonRef, ValidationError> {
    let object = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ValidationError::BadField("name"))?;
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let url = object
        .get("url")
        .and_then(Value::as_str)
        .ok_or(ValidationError::BadField("url"))?;
    if !url.contains("pokemon") {
        return Err(ValidationError::ForeignResource);
    }

    Ok(PokemonRef {
        name: name.to_string(),
        url: url.to_string(),
    })
}

/// Validates the top-level shape of a detail payload: numeric `id`, string
/// `name`, numeric `height`/`weight`, array `types` and object `sprites`.
/// Nested fields are not validated recursively; serde defaults absorb them.
pub fn validate_detail(candidate: &Value) -> Result<PokemonDetail, ValidationError> {
    let object = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    for field in ["id", "height", "weight"] {
        if !object.get(field).is_some_and(Value::is_number) {
            return Err(ValidationError::BadField(field));
        }
    }
    if !object.get("name").is_some_and(Value::is_string) {
        return Err(ValidationError::BadField("name"));
    }
    if !object.get("types").is_some_and(Value::is_array) {
        return Err(ValidationError::BadField("types"));
    }
    if !object.get("sprites").is_some_and(Value::is_object) {
        return Err(ValidationError::BadField("sprites"));
    }

    serde_json::from_value(candidate.clone())
        .map_err(|err| ValidationError::Malformed(err.to_string()))
}

/// Validates one page of the paginated list: numeric `count` and a `results`
/// array where every element is a valid list item.
pub fn validate_list_page(candidate: &Value) -> Result<PokemonListPage, ValidationError> {
    let object = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    let count = object
        .get("count")
        .and_then(Value::as_i64)
        .ok_or(ValidationError::BadField("count"))?;
    let results = object
        .get("results")
        .and_then(Value::as_array)
        .ok_or(ValidationError::BadField("results"))?;

    let results = results
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            validate_list_item(entry)
                .map_err(|err| ValidationError::BadListEntry(index, Box::new(err)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PokemonListPage {
        count,
        next: object
            .get("next")
            .and_then(Value::as_str)
            .map(str::to_string),
        previous: object
            .get("previous")
            .and_then(Value::as_str)
            .map(str::to_string),
        results,
    })
}

/// Strict form check for a Pokémon resource URL: must reference the Pokémon
/// endpoint and end with a separator. Stricter than [`extract_pokemon_id`],
/// which still parses slash-less URLs.
///
/// [`extract_pokemon_id`]: crate::utils::extract_pokemon_id
pub fn is_well_formed_pokemon_url(url: &str) -> bool {
    url.contains("pokeapi.co/api/v2/pokemon/") && url.ends_with('/')
}

/// True iff the string is a positive integer in canonical decimal form:
/// no leading zeros, no sign, no fractional part.
pub fn is_valid_numeric_id(id: &str) -> bool {
    match id.parse::<i64>() {
        Ok(parsed) => parsed > 0 && parsed.to_string() == id,
        Err(_) => false,
    }
}

/// True iff the string is one or more lowercase ASCII letters.
pub fn is_valid_lowercase_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|byte| byte.is_ascii_lowercase())
}
