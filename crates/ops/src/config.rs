//! Configuration for the lookup session.
//!
//! Environment overrides (`POKEDEX_ENDPOINT`, `POKEDEX_TIMEOUT_SECS`) are
//! resolved by the CLI's argument parser before a config is built.

use std::time::Duration;

/// Configuration for reaching the PokéAPI.
#[derive(Debug, Clone)]
pub struct PokedexConfig {
    /// API root URL (e.g. `https://pokeapi.co/api/v2`).
    pub endpoint: String,
    /// Request timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
}

impl PokedexConfig {
    /// Create a new configuration with defaults.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    /// Override the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
