use std::fmt;

/// Parameters for one search: a title phrase over a location.
///
/// `remote` marks the nationwide remote variant, which is filtered with the
/// remote admission path enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub phrase: String,
    pub location: String,
    pub remote: bool,
}

impl SearchQuery {
    pub fn regional(phrase: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            location: location.into(),
            remote: false,
        }
    }

    pub fn remote(phrase: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            location: location.into(),
            remote: true,
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} in {:?}", self.phrase, self.location)
    }
}
