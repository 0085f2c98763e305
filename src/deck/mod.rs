use rand::Rng;

use crate::core::{
    ArcanaError,
    Card,
    Deck,
};

/// The currently loaded deck plus the live filter string. The filtered view is
/// recomputed from (deck, query) on every call; there is no cached subset to
/// go stale.
pub struct DeckState {
    deck: Option<Deck>,
    query: String,
}

impl DeckState {
    pub fn new() -> Self {
        Self { deck: None, query: String::new() }
    }

    /// Wholesale swap; readers never see a partially replaced deck.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = Some(deck);
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub fn has_deck(&self) -> bool {
        self.deck.as_ref().map_or(false, |deck| !deck.is_empty())
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered(&self) -> Vec<&Card> {
        let query = self.query.trim();
        match &self.deck {
            Some(deck) => deck.cards.iter().filter(|card| matches_query(card, query)).collect(),
            None => Vec::new(),
        }
    }

    /// Uniform draw over the loaded deck. Non-deterministic by contract;
    /// callers prompt a reload on [`ArcanaError::EmptyDeck`] instead of
    /// crashing.
    pub fn draw_random(&self) -> Result<&Card, ArcanaError> {
        let deck = self.deck.as_ref().ok_or(ArcanaError::EmptyDeck)?;
        if deck.is_empty() {
            return Err(ArcanaError::EmptyDeck);
        }

        let index = rand::rng().random_range(0..deck.len());
        Ok(&deck.cards[index])
    }
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_ci(text: &str, query_lower: &str) -> bool {
    text.to_lowercase().contains(query_lower)
}

/// Case-insensitive substring match over every text field a source may have
/// populated. An empty query matches everything.
pub fn matches_query(card: &Card, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();

    if contains_ci(&card.name, &query)
        || contains_ci(&card.desc, &query)
        || contains_ci(&card.meaning_up, &query)
        || contains_ci(&card.meaning_rev, &query)
        || contains_ci(&card.keywords_text(), &query)
    {
        return true;
    }

    if let Some(code) = &card.short_code {
        if contains_ci(code, &query) {
            return true;
        }
    }

    if let Some(suit) = &card.suit {
        if contains_ci(suit, &query) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sample_deck() -> Deck {
        let cards = vec![
            card("The Fool", Some("major"), "New beginnings", "Recklessness", &["beginnings"]),
            card("Ace of Cups", Some("cups"), "New feelings", "Emptiness", &["love"]),
            card("Ten of Swords", Some("swords"), "An ending", "Recovery", &["ruin"]),
        ];
        Deck::new(cards, "test")
    }

    fn card(
        name: &str,
        suit: Option<&str>,
        meaning_up: &str,
        meaning_rev: &str,
        keywords: &[&str],
    ) -> Card {
        Card {
            name: name.to_string(),
            short_code: None,
            desc: String::new(),
            meaning_up: meaning_up.to_string(),
            meaning_rev: meaning_rev.to_string(),
            suit: suit.map(|s| s.to_string()),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            image_url: None,
        }
    }

    fn state_with_deck() -> DeckState {
        let mut state = DeckState::new();
        state.replace_deck(sample_deck());
        state
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let state = state_with_deck();
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_returns_only_members() {
        let mut state = state_with_deck();

        state.set_query("FOOL".to_string());
        let matches = state.filtered();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "The Fool");

        state.set_query("wands".to_string());
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_filter_covers_suit_meanings_and_keywords() {
        let mut state = state_with_deck();

        state.set_query("cups".to_string());
        assert_eq!(state.filtered()[0].name, "Ace of Cups");

        state.set_query("recovery".to_string());
        assert_eq!(state.filtered()[0].name, "Ten of Swords");

        state.set_query("love".to_string());
        assert_eq!(state.filtered()[0].name, "Ace of Cups");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut state = state_with_deck();
        state.set_query("new".to_string());

        let first: Vec<String> = state.filtered().iter().map(|c| c.name.clone()).collect();
        let second: Vec<String> = state.filtered().iter().map(|c| c.name.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["The Fool", "Ace of Cups"]);
    }

    #[test]
    fn test_draw_returns_a_deck_member() {
        let state = state_with_deck();
        let names: HashSet<String> =
            sample_deck().cards.iter().map(|c| c.name.clone()).collect();

        for _ in 0..50 {
            let drawn = state.draw_random().unwrap();
            assert!(names.contains(&drawn.name));
        }
    }

    #[test]
    fn test_draw_eventually_reaches_every_card() {
        // Non-deterministic draw; over many trials on a 3-card deck every
        // member shows up unless the selection is biased.
        let state = state_with_deck();
        let mut seen = HashSet::new();

        for _ in 0..500 {
            seen.insert(state.draw_random().unwrap().name.clone());
        }

        assert_eq!(seen.len(), sample_deck().len());
    }

    #[test]
    fn test_normalized_payload_flows_into_filtering() {
        let body = serde_json::json!({
            "cards": [{
                "name": "The Fool",
                "desc": "A young wanderer at the edge of a cliff.",
                "meaning_up": "New beginnings",
                "meaning_rev": "Recklessness",
                "image": null
            }]
        });

        let cards = crate::source::mapping::normalize_deck(
            &body,
            &crate::source::esoteric_fields(),
            None,
            false,
        )
        .unwrap();

        let mut state = DeckState::new();
        state.replace_deck(Deck::new(cards, "tarot-api-esoteric"));

        state.set_query("fool".to_string());
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].name, "The Fool");

        state.set_query("cups".to_string());
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_draw_on_empty_deck_is_an_empty_deck_error() {
        let no_deck = DeckState::new();
        assert!(matches!(no_deck.draw_random(), Err(ArcanaError::EmptyDeck)));

        let mut empty = DeckState::new();
        empty.replace_deck(Deck::new(Vec::new(), "test"));
        assert!(matches!(empty.draw_random(), Err(ArcanaError::EmptyDeck)));
    }
}
