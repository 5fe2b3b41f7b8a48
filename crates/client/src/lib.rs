//! PokéAPI HTTP Client
//!
//! A native Rust client for the two PokéAPI resources the lookup widget
//! reads: the creature resource and the species resource it links to.
//!
//! # Quick Start
//!
//! ```no_run
//! use pokedex_client::PokeApiClient;
//! use pokedex_core::Query;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pokedex_client::Error> {
//!     let client = PokeApiClient::new("https://pokeapi.co/api/v2");
//!
//!     let query = Query::parse("Pikachu").expect("non-empty query");
//!     let result = client.lookup(&query).await?;
//!     println!("{}: {}", result.name, result.description);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Lookup pipeline
//!
//! [`PokeApiClient::lookup`] runs two dependent requests:
//!
//! 1. `GET {base}/pokemon/{query}`: failure here is the lookup's error.
//! 2. `GET {species.url}`: failure here is absorbed by
//!    [`PokeApiClient::describe`], which substitutes a fallback description.
//!
//! No retries are attempted and no timeout is set unless one is configured
//! through [`PokeApiClientBuilder::timeout`].

mod error;
mod pokemon;
mod species;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::Error;
pub use pokemon::{NamedResource, PokemonResponse, Sprites};
pub use species::{FlavorTextEntry, SpeciesResponse, english_flavor_text};

use std::time::Duration;

use pokedex_core::{LookupResult, Query};
use reqwest::Client;

/// HTTP client for the PokéAPI.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

/// Builder for configuring a [`PokeApiClient`].
#[derive(Debug)]
pub struct PokeApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    client: Option<Client>,
}

impl PokeApiClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            client: None,
        }
    }

    /// Set the request timeout. Unset means reqwest's default (none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom reqwest Client.
    ///
    /// Useful for configuring TLS, proxies, or other advanced settings.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<PokeApiClient, Error> {
        let client = match self.client {
            Some(c) => c,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| Error::Configuration(e.to_string()))?
            }
        };

        Ok(PokeApiClient {
            client,
            base_url: self.base_url,
        })
    }
}

impl PokeApiClient {
    /// Create a new client with default configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pokedex_client::PokeApiClient;
    ///
    /// let client = PokeApiClient::new("https://pokeapi.co/api/v2");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        PokeApiClientBuilder::new(base_url)
            .build()
            .expect("default client configuration should not fail")
    }

    /// Create a builder for advanced configuration.
    pub fn builder(base_url: impl Into<String>) -> PokeApiClientBuilder {
        PokeApiClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a creature and merge in its description.
    ///
    /// Only the primary fetch can fail; the species fetch always yields a
    /// description (possibly a fallback).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), pokedex_client::Error> {
    /// use pokedex_client::PokeApiClient;
    /// use pokedex_core::Query;
    ///
    /// let client = PokeApiClient::new("https://pokeapi.co/api/v2");
    /// match client.lookup(&Query::parse("ditto").unwrap()).await {
    ///     Ok(result) => println!("{}", result.description),
    ///     Err(e) => println!("Error: {e}"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup(&self, query: &Query) -> Result<LookupResult, Error> {
        let pokemon = self.get_pokemon(query).await?;
        let description = self.describe(&pokemon.species.url).await;
        Ok(pokemon.into_result(description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockApi, unreachable_url};
    use pokedex_core::{DESCRIPTION_UNAVAILABLE, NO_DESCRIPTION};

    fn pokemon_body(api: &MockApi, name: &str, id: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "sprites": { "front_default": format!("https://sprites.example/{id}.png") },
            "species": { "name": name, "url": api.url(&format!("/pokemon-species/{id}/")) }
        })
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/");
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
    }

    #[test]
    fn client_preserves_url_without_slash() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2");
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
    }

    #[test]
    fn builder_accepts_timeout() {
        let client = PokeApiClientBuilder::new("http://localhost:8080")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn lookup_merges_both_resources() {
        let api = MockApi::start().await;
        api.route("/pokemon/pikachu", 200, pokemon_body(&api, "pikachu", 25));
        api.route(
            "/pokemon-species/25/",
            200,
            serde_json::json!({
                "flavor_text_entries": [
                    { "flavor_text": "ピカチュウ...", "language": { "name": "ja", "url": "" } },
                    { "flavor_text": "When several of these POKéMON gather...", "language": { "name": "en", "url": "" } }
                ]
            }),
        );
        let client = PokeApiClient::new(api.base_url());

        let result = client.lookup(&Query::parse("pikachu").unwrap()).await.unwrap();

        assert_eq!(result.name, "pikachu");
        assert_eq!(result.sprite_url, "https://sprites.example/25.png");
        assert_eq!(result.description, "When several of these POKéMON gather...");
        assert_eq!(
            api.requests(),
            vec!["/pokemon/pikachu".to_string(), "/pokemon-species/25/".to_string()]
        );
    }

    #[tokio::test]
    async fn lookup_keeps_returned_name_casing() {
        let api = MockApi::start().await;
        api.route("/pokemon/eevee", 200, pokemon_body(&api, "Eevee", 133));
        api.route(
            "/pokemon-species/133/",
            200,
            serde_json::json!({ "flavor_text_entries": [] }),
        );
        let client = PokeApiClient::new(api.base_url());

        let result = client.lookup(&Query::parse("EEVEE").unwrap()).await.unwrap();
        assert_eq!(result.name, "Eevee");
        assert_eq!(result.description, NO_DESCRIPTION);
    }

    #[tokio::test]
    async fn lookup_not_found_skips_species() {
        let api = MockApi::start().await;
        let client = PokeApiClient::new(api.base_url());

        let err = client
            .lookup(&Query::parse("notapokemon123").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "No Pokemon found for \"notapokemon123\"");
        assert_eq!(api.requests(), vec!["/pokemon/notapokemon123".to_string()]);
    }

    #[tokio::test]
    async fn lookup_survives_species_failure() {
        let api = MockApi::start().await;
        api.route("/pokemon/ditto", 200, pokemon_body(&api, "ditto", 132));
        api.route("/pokemon-species/132/", 500, serde_json::json!({}));
        let client = PokeApiClient::new(api.base_url());

        let result = client.lookup(&Query::parse("ditto").unwrap()).await.unwrap();
        assert_eq!(result.name, "ditto");
        assert_eq!(result.description, DESCRIPTION_UNAVAILABLE);
    }

    #[tokio::test]
    async fn lookup_survives_unreachable_species_host() {
        let api = MockApi::start().await;
        let dead = unreachable_url().await;
        api.route(
            "/pokemon/ditto",
            200,
            serde_json::json!({
                "name": "ditto",
                "sprites": { "front_default": "https://sprites.example/132.png" },
                "species": { "name": "ditto", "url": format!("{dead}/pokemon-species/132/") }
            }),
        );
        let client = PokeApiClient::new(api.base_url());

        let result = client.lookup(&Query::parse("ditto").unwrap()).await.unwrap();
        assert_eq!(result.description, DESCRIPTION_UNAVAILABLE);
    }

    #[tokio::test]
    async fn lookup_unreachable_primary_is_connection_error() {
        let dead = unreachable_url().await;
        let client = PokeApiClient::new(dead);

        let err = client
            .lookup(&Query::parse("pikachu").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_connection_error());
    }
}
