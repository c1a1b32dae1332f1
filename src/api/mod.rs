// Rick and Morty character API client

mod client;
mod types;

pub use client::CharacterClient;
pub use types::{Character, CharacterPage};
