use serde_json::Value;

use crate::core::{
    ArcanaError,
    Card,
};

/// Which JSON keys a source uses for each card field, tried in order.
/// Sources disagree on names (`name`/`card_name`, `desc`/`description`,
/// `meaning_up`/`meaning`, `image`/`img_url`); keeping the aliases in one
/// table per endpoint keeps the normalization auditable.
#[derive(Debug, Clone)]
pub struct FieldMap {
    /// Keys under which the card array may live. A bare top-level array is
    /// always accepted.
    pub entries: &'static [&'static str],
    pub name: &'static [&'static str],
    pub short_code: &'static [&'static str],
    pub desc: &'static [&'static str],
    pub meaning_up: &'static [&'static str],
    pub meaning_rev: &'static [&'static str],
    pub suit: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub image: &'static [&'static str],
}

pub fn card_entries<'a>(body: &'a Value, map: &FieldMap) -> Result<&'a [Value], ArcanaError> {
    if let Some(list) = body.as_array() {
        return Ok(list);
    }

    for key in map.entries {
        if let Some(list) = body.get(*key).and_then(Value::as_array) {
            return Ok(list);
        }
    }

    Err(ArcanaError::Parse(format!("no card list found under any of {:?}", map.entries)))
}

fn first_string(entry: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(text) = entry.get(*key).and_then(Value::as_str) {
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn string_list(entry: &Value, keys: &[&str]) -> Vec<String> {
    for key in keys {
        match entry.get(*key) {
            Some(Value::Array(items)) => {
                return items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            Some(Value::String(text)) => {
                return text
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            _ => {}
        }
    }
    Vec::new()
}

fn resolve_image(raw: Option<String>, image_base: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw);
    }
    // Relative reference with no base host to resolve against is unusable.
    let base = image_base?;
    Some(format!("{}/{}", base.trim_end_matches('/'), raw.trim_start_matches('/')))
}

/// Normalize one raw entry. Entries without a usable name are malformed and
/// get dropped by the caller.
pub fn card_from_entry(entry: &Value, map: &FieldMap, image_base: Option<&str>) -> Option<Card> {
    let name = first_string(entry, map.name)?;

    Some(Card {
        name,
        short_code: first_string(entry, map.short_code),
        desc: first_string(entry, map.desc).unwrap_or_default(),
        meaning_up: first_string(entry, map.meaning_up).unwrap_or_default(),
        meaning_rev: first_string(entry, map.meaning_rev).unwrap_or_default(),
        suit: first_string(entry, map.suit),
        keywords: string_list(entry, map.keywords),
        image_url: resolve_image(first_string(entry, map.image), image_base),
    })
}

pub fn normalize_deck(
    body: &Value,
    map: &FieldMap,
    image_base: Option<&str>,
    drop_missing_images: bool,
) -> Result<Vec<Card>, ArcanaError> {
    let entries = card_entries(body, map)?;

    let mut skipped = 0usize;
    let mut cards: Vec<Card> = entries
        .iter()
        .filter_map(|entry| {
            let card = card_from_entry(entry, map, image_base);
            if card.is_none() {
                skipped += 1;
            }
            card
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {} card entries without a usable name", skipped);
    }

    if drop_missing_images {
        cards.retain(|card| card.image_url.is_some());
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::source;

    #[test]
    fn test_primary_payload_normalizes() {
        // The shape served by the primary endpoint.
        let body = json!({
            "cards": [
                {
                    "name": "The Fool",
                    "desc": "A young wanderer at the edge of a cliff.",
                    "meaning_up": "New beginnings",
                    "meaning_rev": "Recklessness",
                    "image": null
                }
            ]
        });

        let cards = normalize_deck(&body, &source::esoteric_fields(), None, false).unwrap();
        assert_eq!(cards.len(), 1);

        let fool = &cards[0];
        assert_eq!(fool.name, "The Fool");
        assert_eq!(fool.meaning_up, "New beginnings");
        assert_eq!(fool.meaning_rev, "Recklessness");
        assert!(fool.image_url.is_none());
        assert_eq!(fool.display_image_url(), "https://via.placeholder.com/300x500?text=The+Fool");
    }

    #[test]
    fn test_alias_keys_map_to_same_shape() {
        let body = json!([
            {
                "card_name": "The Magician",
                "description": "As above, so below.",
                "meaning": "Willpower and skill",
                "meaning_rev": "Manipulation",
                "img_url": "https://example.com/magician.jpg"
            }
        ]);

        let cards = normalize_deck(&body, &source::esoteric_fields(), None, false).unwrap();
        assert_eq!(cards.len(), 1);

        let magician = &cards[0];
        assert_eq!(magician.name, "The Magician");
        assert_eq!(magician.desc, "As above, so below.");
        assert_eq!(magician.meaning_up, "Willpower and skill");
        assert_eq!(magician.image_url.as_deref(), Some("https://example.com/magician.jpg"));
    }

    #[test]
    fn test_nameless_entries_are_skipped() {
        let body = json!({
            "cards": [
                { "desc": "no name here" },
                { "name": "  " },
                { "name": "The Star", "meaning_up": "Hope" }
            ]
        });

        let cards = normalize_deck(&body, &source::esoteric_fields(), None, false).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "The Star");
    }

    #[test]
    fn test_relative_image_resolves_against_base() {
        let body = json!({
            "cards": [
                { "name": "The Emperor", "img": "ar04.jpg" },
                { "name": "The Hierophant", "img": "/ar05.jpg" }
            ]
        });

        let cards = normalize_deck(
            &body,
            &source::tarotapi_fields(),
            Some("https://sacred-texts.com/tarot/pkt/img/"),
            false,
        )
        .unwrap();

        assert_eq!(
            cards[0].image_url.as_deref(),
            Some("https://sacred-texts.com/tarot/pkt/img/ar04.jpg")
        );
        assert_eq!(
            cards[1].image_url.as_deref(),
            Some("https://sacred-texts.com/tarot/pkt/img/ar05.jpg")
        );
    }

    #[test]
    fn test_relative_image_without_base_is_dropped() {
        let body = json!([{ "name": "The Moon", "image": "ar18.jpg" }]);

        let cards = normalize_deck(&body, &source::esoteric_fields(), None, false).unwrap();
        assert!(cards[0].image_url.is_none());
    }

    #[test]
    fn test_keywords_from_array_or_joined_string() {
        let from_array = json!([{ "name": "Strength", "keywords": ["courage", "patience"] }]);
        let from_string = json!([{ "name": "Strength", "keywords": "courage, patience" }]);

        for body in [from_array, from_string] {
            let cards = normalize_deck(&body, &source::esoteric_fields(), None, false).unwrap();
            assert_eq!(cards[0].keywords, vec!["courage", "patience"]);
        }
    }

    #[test]
    fn test_drop_missing_images_filters_only_imageless() {
        let body = json!({
            "cards": [
                { "name": "The Sun", "image": "https://example.com/sun.jpg" },
                { "name": "The Moon", "image": null }
            ]
        });

        let kept = normalize_deck(&body, &source::esoteric_fields(), None, false).unwrap();
        assert_eq!(kept.len(), 2);

        let dropped = normalize_deck(&body, &source::esoteric_fields(), None, true).unwrap();
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].name, "The Sun");
    }

    #[test]
    fn test_body_without_card_list_is_a_parse_error() {
        let body = json!({ "message": "rate limited" });

        let result = normalize_deck(&body, &source::esoteric_fields(), None, false);
        assert!(matches!(result, Err(ArcanaError::Parse(_))));
    }
}
