pub mod errors;
pub mod http;
pub mod models;
pub mod tasks;

pub use errors::ArcanaError;
pub use models::{ Card, Deck };
