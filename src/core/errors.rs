use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArcanaError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Network error: {message}")]
    Network { status: Option<u16>, message: String },

    #[error("Malformed card data: {0}")]
    Parse(String),

    #[error("The deck is empty")]
    EmptyDeck,

    #[error("ArcanaError: {0}")]
    Custom(String),
}

impl ArcanaError {
    pub fn network(status: Option<u16>, message: impl Into<String>) -> Self {
        ArcanaError::Network { status, message: message.into() }
    }
}

impl From<std::io::Error> for ArcanaError {
    fn from(error: std::io::Error) -> Self {
        ArcanaError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ArcanaError {
    fn from(error: reqwest::Error) -> Self {
        ArcanaError::Reqwest(Box::new(error))
    }
}
