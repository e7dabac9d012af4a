//! Country queries derived from the provider catalog.
//!
//! The set of valid countries is exactly the set of lower-cased
//! `provider.country` values. It drives route validation and the list of
//! navigable countries.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::{OffersError, Result};

/// Query interface for the countries covered by the catalog.
pub struct CountryQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> CountryQuery<'a> {
    /// Create a new `CountryQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Distinct countries, lower-cased, in order of first appearance.
    pub fn list(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.catalog
            .providers()
            .iter()
            .map(|p| p.country.to_lowercase())
            .filter(|c| seen.insert(c.clone()))
            .collect()
    }

    /// Whether any provider operates in `country` (case-insensitive).
    pub fn contains(&self, country: &str) -> bool {
        self.catalog.providers().iter().any(|p| p.is_in(country))
    }

    /// Normalize a requested country segment.
    ///
    /// Returns the lower-cased country, or [`OffersError::InvalidCountry`]
    /// when no provider operates there.
    pub fn validate(&self, country: &str) -> Result<String> {
        let normalized = country.trim().to_lowercase();
        if !normalized.is_empty() && self.contains(&normalized) {
            Ok(normalized)
        } else {
            Err(OffersError::InvalidCountry(country.to_string()))
        }
    }

    /// Emoji flag for a country, empty when unknown.
    pub fn flag(&self, country: &str) -> &'static str {
        country_flag(country)
    }
}

pub fn country_flag(country: &str) -> &'static str {
    match country.to_lowercase().as_str() {
        "france" => "\u{1F1EB}\u{1F1F7}",
        "italy" => "\u{1F1EE}\u{1F1F9}",
        "spain" => "\u{1F1EA}\u{1F1F8}",
        _ => "",
    }
}
