use std::future::Future;

use reqwest::Client;

use crate::core::{
    ArcanaError,
    Card,
    Deck,
};

pub mod api;
pub mod embedded;
pub mod mapping;

pub use mapping::FieldMap;

/// One remote card source: where to fetch the collection, optionally where to
/// fetch a single random card, and how its JSON maps onto [`Card`].
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: &'static str,
    pub cards_url: &'static str,
    pub random_url: Option<&'static str>,
    pub image_base: Option<&'static str>,
    pub fields: FieldMap,
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Remote sources tried in priority order; the first success wins.
    pub endpoints: Vec<Endpoint>,
    pub drop_missing_images: bool,
    pub use_embedded_fallback: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            drop_missing_images: false,
            use_embedded_fallback: true,
        }
    }
}

pub fn default_endpoints() -> Vec<Endpoint> {
    vec![esoteric_endpoint(), tarotapi_endpoint()]
}

pub fn esoteric_fields() -> FieldMap {
    FieldMap {
        entries: &["cards"],
        name: &["name", "card_name"],
        short_code: &["short_code", "name_short"],
        desc: &["desc", "description"],
        meaning_up: &["meaning_up", "meaning"],
        meaning_rev: &["meaning_rev", "meaning_reversed"],
        suit: &["suit", "arcana"],
        keywords: &["keywords"],
        image: &["image", "img_url", "img"],
    }
}

pub fn tarotapi_fields() -> FieldMap {
    FieldMap {
        entries: &["cards"],
        name: &["name"],
        short_code: &["name_short"],
        desc: &["desc"],
        meaning_up: &["meaning_up"],
        meaning_rev: &["meaning_rev"],
        suit: &["suit", "type"],
        keywords: &["keywords"],
        image: &["img"],
    }
}

fn esoteric_endpoint() -> Endpoint {
    Endpoint {
        name: "tarot-api-esoteric",
        cards_url: "https://tarot-api-esoteric.vercel.app/api/cards",
        random_url: None,
        image_base: None,
        fields: esoteric_fields(),
    }
}

fn tarotapi_endpoint() -> Endpoint {
    Endpoint {
        name: "tarotapi.dev",
        cards_url: "https://tarotapi.dev/api/v1/cards",
        random_url: Some("https://tarotapi.dev/api/v1/cards/random?n=1"),
        image_base: Some("https://sacred-texts.com/tarot/pkt/img"),
        fields: tarotapi_fields(),
    }
}

/// Outcome of walking the source chain: the deck that was finally served plus
/// whatever failed on the way there. Failures are user-visible warnings, not
/// fatal errors.
#[derive(Debug)]
pub struct DeckLoad {
    pub deck: Deck,
    pub failures: Vec<(String, ArcanaError)>,
}

impl DeckLoad {
    pub fn warning(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }

        let names: Vec<&str> = self.failures.iter().map(|(name, _)| name.as_str()).collect();
        Some(format!(
            "{} unavailable; deck served from {}",
            names.join(", "),
            self.deck.source
        ))
    }

    pub fn failure_details(&self) -> String {
        self.failures
            .iter()
            .map(|(name, error)| format!("{}: {}", name, error))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub async fn load_deck(client: &Client, config: &SourceConfig) -> Result<DeckLoad, ArcanaError> {
    let drop_missing_images = config.drop_missing_images;
    load_deck_with(config, |endpoint| {
        let client = client.clone();
        async move { api::fetch_cards(&client, &endpoint, drop_missing_images).await }
    })
    .await
}

/// Walks the endpoint chain with a caller-supplied fetch, so the fallback
/// policy can be exercised without a network.
pub async fn load_deck_with<F, Fut>(
    config: &SourceConfig,
    mut fetch: F,
) -> Result<DeckLoad, ArcanaError>
where
    F: FnMut(Endpoint) -> Fut,
    Fut: Future<Output = Result<Vec<Card>, ArcanaError>>,
{
    let mut failures: Vec<(String, ArcanaError)> = Vec::new();

    for endpoint in &config.endpoints {
        match fetch(endpoint.clone()).await {
            Ok(cards) if !cards.is_empty() => {
                return Ok(DeckLoad { deck: Deck::new(cards, endpoint.name), failures });
            }
            Ok(_) => {
                failures.push((
                    endpoint.name.to_string(),
                    ArcanaError::Parse("source returned no cards".to_string()),
                ));
            }
            Err(e) => {
                log::warn!("Deck load from {} failed: {}", endpoint.name, e);
                failures.push((endpoint.name.to_string(), e));
            }
        }
    }

    if config.use_embedded_fallback {
        return Ok(DeckLoad { deck: embedded::embedded_deck(config.drop_missing_images), failures });
    }

    Err(ArcanaError::network(
        None,
        format!("all {} card sources failed", config.endpoints.len()),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{
        AtomicUsize,
        Ordering,
    };

    use super::*;

    fn test_card(name: &str) -> Card {
        Card {
            name: name.to_string(),
            short_code: None,
            desc: String::new(),
            meaning_up: String::new(),
            meaning_rev: String::new(),
            suit: None,
            keywords: Vec::new(),
            image_url: None,
        }
    }

    fn unreachable_error() -> ArcanaError {
        ArcanaError::network(None, "connection refused")
    }

    #[tokio::test]
    async fn test_primary_success_skips_later_endpoints() {
        let config = SourceConfig::default();
        let calls = AtomicUsize::new(0);

        let load = load_deck_with(&config, |endpoint| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                assert_eq!(endpoint.name, "tarot-api-esoteric");
                Ok(vec![test_card("The Fool")])
            }
        })
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(load.deck.source, "tarot-api-esoteric");
        assert!(load.failures.is_empty());
        assert!(load.warning().is_none());
    }

    #[tokio::test]
    async fn test_primary_failure_falls_through_to_secondary() {
        let config = SourceConfig::default();

        let load = load_deck_with(&config, |endpoint| async move {
            match endpoint.name {
                "tarot-api-esoteric" => Err(unreachable_error()),
                _ => Ok(vec![test_card("The Fool"), test_card("The Magician")]),
            }
        })
        .await
        .unwrap();

        assert_eq!(load.deck.source, "tarotapi.dev");
        assert_eq!(load.deck.len(), 2);
        assert_eq!(load.failures.len(), 1);
        assert!(load.warning().unwrap().contains("tarot-api-esoteric"));
    }

    #[tokio::test]
    async fn test_all_remotes_failing_serves_embedded_deck() {
        let config = SourceConfig::default();

        let load = load_deck_with(&config, |_| async { Err(unreachable_error()) })
            .await
            .unwrap();

        assert_eq!(load.deck.source, embedded::EMBEDDED_SOURCE);
        assert!(!load.deck.is_empty());
        assert_eq!(load.failures.len(), config.endpoints.len());
    }

    #[tokio::test]
    async fn test_empty_payload_counts_as_failure() {
        let config = SourceConfig::default();

        let load = load_deck_with(&config, |endpoint| async move {
            match endpoint.name {
                "tarot-api-esoteric" => Ok(Vec::new()),
                _ => Ok(vec![test_card("The World")]),
            }
        })
        .await
        .unwrap();

        assert_eq!(load.deck.source, "tarotapi.dev");
        assert_eq!(load.failures.len(), 1);
    }

    #[tokio::test]
    async fn test_disabled_fallback_surfaces_network_error() {
        let config = SourceConfig { use_embedded_fallback: false, ..SourceConfig::default() };

        let result = load_deck_with(&config, |_| async { Err(unreachable_error()) }).await;

        assert!(matches!(result, Err(ArcanaError::Network { .. })));
    }
}
