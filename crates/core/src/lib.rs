pub mod detail;
pub mod lookup;
pub mod query;

pub use detail::{DETAIL_SPRITE_SIZE, DetailView};
pub use lookup::{LookupResult, LookupState};
pub use query::Query;

/// Public PokéAPI v2 root.
pub const DEFAULT_ENDPOINT: &str = "https://pokeapi.co/api/v2";

/// Language tag of the flavor text shown to the user.
pub const DESCRIPTION_LANGUAGE: &str = "en";

/// Description used when the species resource could not be fetched.
pub const DESCRIPTION_UNAVAILABLE: &str = "Description not available.";

/// Description used when the species resource has no English flavor text.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Uppercase the first character of `name`, leaving the rest untouched.
///
/// Display-only; stored names keep the casing the API returned.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
