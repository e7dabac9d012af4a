use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Provider: An energy company operating in one country
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Provider {
    pub id: String,
    pub slug: String,
    pub display_name: String,
    /// Lower-case country name, also used as the routing segment.
    pub country: String,
}

impl Provider {
    /// Case-insensitive country comparison. Folds non-ASCII letters too,
    /// matching the lower-casing used by [`CountryQuery`](crate::queries::CountryQuery).
    pub fn is_in(&self, country: &str) -> bool {
        self.country == country || self.country.to_lowercase() == country.to_lowercase()
    }
}
