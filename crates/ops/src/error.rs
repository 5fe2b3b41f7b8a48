//! Errors raised while setting up a lookup session.

use thiserror::Error;

/// Failure to build a [`crate::Pokedex`] session.
///
/// Lookup failures never appear here; they are published as
/// `LookupState::Error` instead.
#[derive(Debug, Error)]
pub enum OpsError {
    /// The session configuration is unusable (e.g. a non-HTTP endpoint).
    #[error("invalid session configuration: {0}")]
    Configuration(String),

    /// The PokéAPI client could not be constructed.
    #[error(transparent)]
    Client(#[from] pokedex_client::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_pass_through_unchanged() {
        let err = OpsError::from(pokedex_client::Error::Configuration("no tls backend".into()));
        assert_eq!(err.to_string(), "configuration error: no tls backend");
    }

    #[test]
    fn configuration_error_names_the_session() {
        let err = OpsError::Configuration("endpoint must be an http(s) URL".into());
        assert_eq!(
            err.to_string(),
            "invalid session configuration: endpoint must be an http(s) URL"
        );
    }
}
