// SPDX-License-Identifier: GPL-3.0-only

/// Extracts the identifier segment from a PokéAPI resource URL.
///
/// Splits on `/` and takes the final segment, or the second-to-last one when
/// the URL ends with a separator. Degenerate inputs fall back to the original
/// string unchanged, never panicking.
pub fn extract_pokemon_id(url: &str) -> &str {
    let mut parts = url.rsplit('/');
    let last = parts.next().unwrap_or_default();

    if !last.is_empty() {
        return last;
    }

    match parts.next() {
        Some(second_last) if !second_last.is_empty() => second_last,
        _ => url,
    }
}

/// Renders a Pokédex number as `#` plus the id left-padded with zeros to
/// width 3. Padding is plain string fill, not sign-aware: negative ids come
/// out as e.g. `#0-5`, matching the behavior this was ported from.
pub fn format_pokemon_id(id: i64) -> String {
    format!("#{id:0>3}")
}

/// Formats a height in decimeters for display, e.g. `7` -> `"70 cm"`.
pub fn format_height(decimeters: i64) -> String {
    format!("{} cm", decimeters * 10)
}

/// Formats a weight in hectograms for display, e.g. `69` -> `"6.9 kg"`.
/// Whole kilograms render without a trailing `.0`.
pub fn format_weight(hectograms: i64) -> String {
    format!("{} kg", (hectograms as f64) / 10.0)
}

/// Uppercases the first character of a string, leaving the rest untouched.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds the official-artwork image URL for an id. The id range is not
/// validated; callers get a syntactically valid URL either way.
pub fn artwork_url(base_url: &str, id: i64) -> String {
    format!("{base_url}/{id}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_url_with_trailing_slash() {
        assert_eq!(
            extract_pokemon_id("https://pokeapi.co/api/v2/pokemon/25/"),
            "25"
        );
    }

    #[test]
    fn extracts_id_from_url_without_trailing_slash() {
        assert_eq!(
            extract_pokemon_id("https://pokeapi.co/api/v2/pokemon/25"),
            "25"
        );
    }

    #[test]
    fn extraction_falls_back_to_input_for_degenerate_urls() {
        assert_eq!(extract_pokemon_id("not-a-url"), "not-a-url");
        assert_eq!(extract_pokemon_id("/"), "/");
        assert_eq!(extract_pokemon_id(""), "");
    }

    #[test]
    fn formats_pokedex_numbers_with_zero_padding() {
        assert_eq!(format_pokemon_id(1), "#001");
        assert_eq!(format_pokemon_id(25), "#025");
        assert_eq!(format_pokemon_id(150), "#150");
        assert_eq!(format_pokemon_id(0), "#000");
        assert_eq!(format_pokemon_id(1010), "#1010");
    }

    #[test]
    fn negative_ids_keep_the_naive_padding_quirk() {
        // Known quirk of plain string padding, kept as observed behavior.
        assert_eq!(format_pokemon_id(-5), "#0-5");
    }

    #[test]
    fn formats_height_and_weight() {
        assert_eq!(format_height(7), "70 cm");
        assert_eq!(format_height(0), "0 cm");
        assert_eq!(format_weight(69), "6.9 kg");
        assert_eq!(format_weight(70), "7 kg");
        assert_eq!(format_weight(1000), "100 kg");
    }

    #[test]
    fn capitalizes_only_the_first_character() {
        assert_eq!(capitalize_first("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize_first("mr-mime"), "Mr-mime");
        assert_eq!(capitalize_first("PIKACHU"), "PIKACHU");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn builds_artwork_urls() {
        assert_eq!(
            artwork_url("https://img.example/official-artwork", 25),
            "https://img.example/official-artwork/25.png"
        );
    }
}
