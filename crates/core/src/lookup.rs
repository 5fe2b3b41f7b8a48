use serde::{Deserialize, Serialize};

use crate::detail::DetailView;

/// A creature merged from the primary and species resources.
///
/// Built only once both fetches have completed; the description may be one
/// of the fallback strings when the species fetch did not yield text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Name exactly as returned by the API.
    pub name: String,
    /// URL of the default front sprite. Empty when the API has none.
    pub sprite_url: String,
    /// English flavor text, or a fallback description.
    pub description: String,
}

impl LookupResult {
    pub fn new(
        name: impl Into<String>,
        sprite_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sprite_url: sprite_url.into(),
            description: description.into(),
        }
    }

    /// Overlay shown when the sprite is selected.
    pub fn detail(&self) -> DetailView {
        DetailView::for_result(self)
    }
}

/// Lifecycle of the lookup widget.
///
/// Exactly one variant holds at a time. A lookup always leaves `Loading`
/// for either `Error` or `Success`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LookupState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The primary fetch failed with this message.
    Error(String),
    /// The last lookup produced this result.
    Success(LookupResult),
}

impl LookupState {
    /// Status line for the current state, if any.
    ///
    /// `Idle` and `Success` carry no status text.
    pub fn status_text(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Loading...".to_string()),
            Self::Error(message) => Some(format!("Error: {message}")),
            Self::Idle | Self::Success(_) => None,
        }
    }

    /// The displayed result, present only in `Success`.
    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the error message if this is an error state.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
