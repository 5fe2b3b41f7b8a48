use pokedex_core::{DESCRIPTION_LANGUAGE, DESCRIPTION_UNAVAILABLE, NO_DESCRIPTION};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::pokemon::NamedResource;
use crate::{Error, PokeApiClient};

/// Species resource (`GET /pokemon-species/{id}`), reduced to flavor text.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeciesResponse {
    /// Localized descriptions, in API order.
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

/// One localized description of a species.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlavorTextEntry {
    /// The description text, verbatim.
    pub flavor_text: String,
    /// Language of the text.
    pub language: NamedResource,
}

impl SpeciesResponse {
    /// First English flavor text, if any.
    pub fn english_flavor_text(&self) -> Option<&str> {
        english_flavor_text(&self.flavor_text_entries)
    }
}

/// Return the text of the first entry tagged with the display language.
pub fn english_flavor_text(entries: &[FlavorTextEntry]) -> Option<&str> {
    entries
        .iter()
        .find(|entry| entry.language.name == DESCRIPTION_LANGUAGE)
        .map(|entry| entry.flavor_text.as_str())
}

impl PokeApiClient {
    /// Fetch a species resource by its absolute URL.
    pub async fn get_species(&self, species_url: &str) -> Result<SpeciesResponse, Error> {
        debug!(url = %species_url, "fetching species");

        let response = self
            .client
            .get(species_url)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if response.status().is_success() {
            let species = response
                .json::<SpeciesResponse>()
                .await
                .map_err(|e| Error::Deserialization(e.to_string()))?;
            Ok(species)
        } else {
            Err(Error::Http {
                status: response.status().as_u16(),
                message: format!("Failed to fetch species: {}", response.status()),
            })
        }
    }

    /// Description for the species at `species_url`, never failing.
    ///
    /// A failed fetch yields [`DESCRIPTION_UNAVAILABLE`]; a species with no
    /// English entry yields [`NO_DESCRIPTION`].
    pub async fn describe(&self, species_url: &str) -> String {
        self.get_species(species_url).await.map_or_else(
            |e| {
                warn!(
                    url = %species_url,
                    error = %e,
                    "species lookup failed, using fallback description"
                );
                DESCRIPTION_UNAVAILABLE.to_string()
            },
            |species| {
                species
                    .english_flavor_text()
                    .unwrap_or(NO_DESCRIPTION)
                    .to_string()
            },
        )
    }
}
