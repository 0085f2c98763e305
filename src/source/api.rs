use reqwest::Client;

use super::{
    mapping,
    Endpoint,
};
use crate::core::{
    http,
    ArcanaError,
    Card,
};

pub async fn fetch_cards(
    client: &Client,
    endpoint: &Endpoint,
    drop_missing_images: bool,
) -> Result<Vec<Card>, ArcanaError> {
    let body = http::get_json(client, endpoint.cards_url).await?;
    mapping::normalize_deck(&body, &endpoint.fields, endpoint.image_base, drop_missing_images)
}

/// Remote variant of the draw contract: ask the source for exactly one card,
/// normalized through the same field map as the full collection.
pub async fn fetch_random_card(client: &Client, endpoint: &Endpoint) -> Result<Card, ArcanaError> {
    let url = endpoint
        .random_url
        .ok_or_else(|| ArcanaError::Custom(format!("{} has no random endpoint", endpoint.name)))?;

    let body = http::get_json(client, url).await?;
    let cards = mapping::normalize_deck(&body, &endpoint.fields, endpoint.image_base, false)?;

    cards
        .into_iter()
        .next()
        .ok_or_else(|| ArcanaError::Parse(format!("{} returned no random card", endpoint.name)))
}

/// Cheap connectivity probe: status line only, body discarded.
pub async fn check_source(client: &Client, endpoint: &Endpoint) -> bool {
    client
        .get(endpoint.cards_url)
        .send()
        .await
        .map(|resp| resp.status().is_success())
        .unwrap_or(false)
}
