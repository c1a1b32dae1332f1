// HTTP client for the character search endpoint

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::types::{Character, CharacterPage};

/// Search client for the character API.
///
/// Cheap to clone; each in-flight search task holds its own copy.
#[derive(Clone)]
pub struct CharacterClient {
    client: Client,
    base_url: String,
}

impl CharacterClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all characters whose name matches the given filter.
    ///
    /// Returns the records in the order the API sent them. The API answers
    /// a non-matching filter with 404, which surfaces here as an error like
    /// any other failure; the caller collapses all of them into one message.
    pub async fn search(&self, name: &str) -> Result<Vec<Character>> {
        let url = format!("{}/character/", self.base_url);
        tracing::debug!("Searching characters with name filter {:?}", name);

        let response = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .context("Failed to send character search request")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Character search failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let page: CharacterPage = response
            .json()
            .await
            .context("Failed to parse character search response")?;

        tracing::debug!("Search for {:?} returned {} characters", name, page.results.len());

        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CharacterClient::new("https://rickandmortyapi.com/api", 10);
        assert!(client.is_ok());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = CharacterClient::new("http://localhost:1234/api/", 10).unwrap();
        assert_eq!(client.base_url, "http://localhost:1234/api");
    }
}
