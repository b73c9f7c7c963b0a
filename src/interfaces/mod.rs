use crate::CountryRecord;

/// Country search predicate used by the registry, isolated so that a
/// different matching policy (transliteration, fuzzy search) can be
/// swapped in easily.
pub trait CountryMatcherApi: Send + Sync {
    /// Returns whether `country` should be listed for the search `query`.
    /// The query is non-empty and already lowercased.
    fn match_country(&self, country: &CountryRecord, query: &str) -> bool;
}
