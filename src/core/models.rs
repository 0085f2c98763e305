use chrono::{
    DateTime,
    Local,
};

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/300x500";

/// One tarot card as normalized from whichever source served it.
/// Sources differ in which fields they populate; absent fields stay
/// empty/None and render as placeholders, never as an error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub name: String,
    pub short_code: Option<String>,
    pub desc: String,
    pub meaning_up: String,
    pub meaning_rev: String,
    pub suit: Option<String>,
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
}

impl Card {
    /// Image URL to show for this card, substituting a generic placeholder
    /// built from the card name when the source had none.
    pub fn display_image_url(&self) -> String {
        match &self.image_url {
            Some(url) => url.clone(),
            None => {
                format!("{}?text={}", PLACEHOLDER_IMAGE_BASE, self.name.replace(' ', "+"))
            }
        }
    }

    pub fn keywords_text(&self) -> String {
        self.keywords.join(", ")
    }
}

/// A full card collection loaded from one source. Always replaced wholesale;
/// readers never observe a partially loaded deck.
#[derive(Debug, Clone)]
pub struct Deck {
    pub cards: Vec<Card>,
    pub source: String,
    pub loaded_at: DateTime<Local>,
}

impl Deck {
    pub fn new(cards: Vec<Card>, source: impl Into<String>) -> Self {
        Self { cards, source: source.into(), loaded_at: Local::now() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
