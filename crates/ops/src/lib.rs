//! Lookup session layer for the Pokédex front ends.
//!
//! Wraps [`pokedex_client::PokeApiClient`] with configuration management and
//! owns the single [`LookupState`] container that renderers observe.

mod config;
mod error;
mod session;

pub use config::PokedexConfig;
pub use error::OpsError;
pub use session::{Pokedex, SubmitOutcome};

/// Re-export client and core types for consumers.
pub use pokedex_client;
pub use pokedex_core;

use pokedex_client::PokeApiClientBuilder;

impl Pokedex {
    /// Create a session from configuration.
    pub fn from_config(config: &PokedexConfig) -> Result<Self, OpsError> {
        let endpoint = config.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(OpsError::Configuration(format!(
                "endpoint must be an http(s) URL, got `{endpoint}`"
            )));
        }

        let mut builder = PokeApiClientBuilder::new(endpoint);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new(builder.build()?))
    }
}
