// Wire types for the Rick and Morty character API

use serde::{Deserialize, Serialize};

/// A single character record as returned by the API.
///
/// Treated as immutable once deserialized. The episode list is carried only
/// for its count; episode URLs are never fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
}

impl Character {
    /// Number of episodes this character appears in.
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

/// One page of search results.
///
/// The API also returns pagination info; only the first page is consumed,
/// so everything besides `results` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPage {
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_character_page() {
        let body = r#"{
            "info": {"count": 1, "pages": 1, "next": null, "prev": null},
            "results": [
                {
                    "id": 1,
                    "name": "Rick Sanchez",
                    "status": "Alive",
                    "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                    "episode": [
                        "https://rickandmortyapi.com/api/episode/1",
                        "https://rickandmortyapi.com/api/episode/2"
                    ]
                }
            ]
        }"#;

        let page: CharacterPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 1);
        assert_eq!(page.results[0].name, "Rick Sanchez");
        assert_eq!(page.results[0].episode_count(), 2);
    }

    #[test]
    fn test_missing_episode_list_defaults_to_empty() {
        let body = r#"{"id": 2, "name": "Morty Smith", "image": "https://example.com/2.jpeg"}"#;
        let character: Character = serde_json::from_str(body).unwrap();
        assert_eq!(character.episode_count(), 0);
    }
}
