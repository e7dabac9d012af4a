//! Provider lookups against the in-memory catalog.

use crate::catalog::Catalog;
use crate::models::Provider;

/// Query interface for energy providers.
pub struct ProviderQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProviderQuery<'a> {
    /// Create a new `ProviderQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// List providers in catalog order, optionally restricted to one
    /// country (case-insensitive).
    pub fn list(&self, country: Option<&str>) -> Vec<Provider> {
        self.catalog
            .providers()
            .iter()
            .filter(|p| country.map_or(true, |c| p.is_in(c)))
            .cloned()
            .collect()
    }

    /// Retrieve a provider by id.
    pub fn get(&self, id: &str) -> Option<Provider> {
        self.catalog.provider(id).cloned()
    }

    /// Retrieve a provider by its slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<Provider> {
        self.catalog
            .providers()
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
    }

    /// Count providers, optionally restricted to one country.
    pub fn count(&self, country: Option<&str>) -> usize {
        self.list(country).len()
    }
}
