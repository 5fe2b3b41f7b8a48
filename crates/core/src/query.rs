use std::fmt;

/// A submitted creature identifier (name or national dex number).
///
/// A `Query` is never empty: [`Query::parse`] rejects blank input so that
/// callers can treat a missing query as "nothing to do".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
}

impl Query {
    /// Wrap `raw` as a query, or `None` if it is empty or whitespace-only.
    ///
    /// The text is kept exactly as typed; see [`Query::normalized`] for the
    /// form sent to the API.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self { raw })
        }
    }

    /// The query as the user submitted it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased form used in the primary resource path.
    pub fn normalized(&self) -> String {
        self.raw.to_lowercase()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
