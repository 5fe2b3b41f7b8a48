use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use pokedex_core::{LookupResult, Query};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, PokeApiClient};

/// Characters escaped in the `/pokemon/{query}` path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Primary creature resource (`GET /pokemon/{id or name}`).
///
/// Only the fields the widget reads are modelled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonResponse {
    /// Creature name, lowercase as served by the API.
    pub name: String,
    /// Sprite URLs.
    pub sprites: Sprites,
    /// Link to the species resource holding flavor text.
    pub species: NamedResource,
}

/// Sprite set of a creature.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Sprites {
    /// Default front-facing sprite. Null for some alternate forms.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamedResource {
    /// Resource name.
    #[serde(default)]
    pub name: String,
    /// Absolute URL of the resource.
    pub url: String,
}

impl PokemonResponse {
    /// Merge with a description into the displayed result.
    pub fn into_result(self, description: impl Into<String>) -> LookupResult {
        LookupResult::new(
            self.name,
            self.sprites.front_default.unwrap_or_default(),
            description,
        )
    }
}

impl PokeApiClient {
    /// Fetch the primary resource for `query`.
    ///
    /// The query is lowercased for the request path. Any non-success status
    /// is reported as [`Error::NotFound`] carrying the query as submitted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), pokedex_client::Error> {
    /// use pokedex_client::PokeApiClient;
    /// use pokedex_core::Query;
    ///
    /// let client = PokeApiClient::new("https://pokeapi.co/api/v2");
    /// let query = Query::parse("Pikachu").unwrap();
    /// let pokemon = client.get_pokemon(&query).await?;
    /// println!("species at {}", pokemon.species.url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_pokemon(&self, query: &Query) -> Result<PokemonResponse, Error> {
        let segment = utf8_percent_encode(&query.normalized(), PATH_SEGMENT).to_string();
        let url = format!("{}/pokemon/{segment}", self.base_url);
        debug!(%url, "fetching pokemon");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if response.status().is_success() {
            let pokemon = response
                .json::<PokemonResponse>()
                .await
                .map_err(|e| Error::Deserialization(e.to_string()))?;
            Ok(pokemon)
        } else {
            Err(Error::NotFound {
                query: query.as_str().to_string(),
                status: response.status().as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;

    #[test]
    fn into_result_keeps_name_verbatim() {
        let pokemon: PokemonResponse = serde_json::from_value(serde_json::json!({
            "name": "Pikachu",
            "sprites": { "front_default": "https://sprites.example/25.png" },
            "species": { "name": "pikachu", "url": "https://api.example/pokemon-species/25/" }
        }))
        .unwrap();

        let result = pokemon.into_result("Electric mouse.");
        assert_eq!(result.name, "Pikachu");
        assert_eq!(result.sprite_url, "https://sprites.example/25.png");
        assert_eq!(result.description, "Electric mouse.");
    }

    #[test]
    fn null_sprite_becomes_empty_url() {
        let pokemon: PokemonResponse = serde_json::from_value(serde_json::json!({
            "name": "missingno",
            "sprites": { "front_default": null },
            "species": { "url": "https://api.example/pokemon-species/0/" }
        }))
        .unwrap();

        assert_eq!(pokemon.into_result("x").sprite_url, "");
    }

    #[tokio::test]
    async fn get_pokemon_lowercases_path() {
        let api = MockApi::start().await;
        api.route(
            "/pokemon/pikachu",
            200,
            serde_json::json!({
                "name": "pikachu",
                "sprites": { "front_default": "https://sprites.example/25.png" },
                "species": { "name": "pikachu", "url": api.url("/pokemon-species/25/") }
            }),
        );

        let client = PokeApiClient::new(api.base_url());
        let query = Query::parse("PIKACHU").unwrap();
        let pokemon = client.get_pokemon(&query).await.unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(api.requests(), vec!["/pokemon/pikachu".to_string()]);
    }

    #[tokio::test]
    async fn get_pokemon_escapes_path_segment() {
        let api = MockApi::start().await;
        let client = PokeApiClient::new(api.base_url());
        let query = Query::parse("mr mime").unwrap();

        let err = client.get_pokemon(&query).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(api.requests(), vec!["/pokemon/mr%20mime".to_string()]);
    }

    #[tokio::test]
    async fn backslash_stays_inside_the_segment() {
        let api = MockApi::start().await;
        let client = PokeApiClient::new(api.base_url());

        let err = client
            .get_pokemon(&Query::parse(r"a\b[1]|c").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(api.requests(), vec!["/pokemon/a%5Cb%5B1%5D%7Cc".to_string()]);
    }

    #[tokio::test]
    async fn non_success_status_is_not_found_with_original_query() {
        let api = MockApi::start().await;
        let client = PokeApiClient::new(api.base_url());
        let query = Query::parse("NotAPokemon123").unwrap();

        let err = client.get_pokemon(&query).await.unwrap_err();
        assert_eq!(err.to_string(), "No Pokemon found for \"NotAPokemon123\"");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn server_error_is_also_not_found() {
        let api = MockApi::start().await;
        api.route("/pokemon/ditto", 500, serde_json::json!({ "detail": "boom" }));
        let client = PokeApiClient::new(api.base_url());

        let err = client
            .get_pokemon(&Query::parse("ditto").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn body_without_species_is_deserialization_error() {
        let api = MockApi::start().await;
        api.route(
            "/pokemon/ditto",
            200,
            serde_json::json!({ "name": "ditto", "sprites": {} }),
        );
        let client = PokeApiClient::new(api.base_url());

        let err = client
            .get_pokemon(&Query::parse("ditto").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }
}
