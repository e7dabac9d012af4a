//! In-memory provider and offer catalogs.
//!
//! Both catalogs are validated once on construction and never mutated
//! afterwards. Provider lookups go through an id index built at the same
//! time, so joining offers to providers is linear in the number of offers.

use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::CacheManager;
use crate::config;
use crate::error::{OffersError, Result};
use crate::models::{Provider, RawOffer};

/// Validated, read-only provider and offer catalogs.
#[derive(Debug, Clone)]
pub struct Catalog {
    providers: Vec<Provider>,
    offers: Vec<RawOffer>,
    /// Provider id -> position in `providers`.
    provider_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// Fails on duplicate provider or offer ids and on negative or
    /// non-finite prices. Dangling `provider_id` references are not checked
    /// here; they surface as [`OffersError::MissingProvider`] when offers
    /// are resolved.
    pub fn new(providers: Vec<Provider>, offers: Vec<RawOffer>) -> Result<Self> {
        let mut provider_index = HashMap::with_capacity(providers.len());
        for (i, p) in providers.iter().enumerate() {
            if provider_index.insert(p.id.clone(), i).is_some() {
                return Err(OffersError::DuplicateId {
                    kind: "provider",
                    id: p.id.clone(),
                });
            }
        }

        let mut offer_ids = HashSet::with_capacity(offers.len());
        for o in &offers {
            if !offer_ids.insert(o.id.as_str()) {
                return Err(OffersError::DuplicateId {
                    kind: "offer",
                    id: o.id.clone(),
                });
            }
            check_price(&o.id, "consumption_pricing", o.consumption_pricing)?;
            check_price(&o.id, "subscription_cost", o.subscription_cost)?;
        }

        debug!(
            providers = providers.len(),
            offers = offers.len(),
            "catalog validated"
        );

        Ok(Self {
            providers,
            offers,
            provider_index,
        })
    }

    /// Load both catalog files through the cache manager.
    pub fn load(cache: &mut CacheManager) -> Result<Self> {
        let providers: Vec<Provider> = load_records(cache, "providers")?;
        let offers: Vec<RawOffer> = load_records(cache, "offers")?;
        info!(
            providers = providers.len(),
            offers = offers.len(),
            "loaded energy catalog"
        );
        Self::new(providers, offers)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn offers(&self) -> &[RawOffer] {
        &self.offers
    }

    /// Look up a provider by id through the index.
    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.provider_index.get(id).map(|&i| &self.providers[i])
    }

    pub fn offer(&self, id: &str) -> Option<&RawOffer> {
        self.offers.iter().find(|o| o.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

fn check_price(offer_id: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OffersError::InvalidCatalog(format!(
            "offer '{offer_id}' has invalid {field}: {value}"
        )))
    }
}

/// Parse one catalog file into records.
///
/// Accepts the wrapped form (`{"energy_offers": [...]}`) as well as a bare
/// top-level array.
fn load_records<T: DeserializeOwned>(cache: &mut CacheManager, name: &str) -> Result<Vec<T>> {
    let data = cache.load_json(name)?;
    let wrapper = config::json_wrappers().get(name).copied().unwrap_or(name);

    let array = match data {
        Value::Array(arr) => arr,
        Value::Object(mut map) => match map.remove(wrapper) {
            Some(Value::Array(arr)) => arr,
            _ => {
                return Err(OffersError::InvalidCatalog(format!(
                    "catalog file '{name}' has no '{wrapper}' array"
                )))
            }
        },
        _ => {
            return Err(OffersError::InvalidCatalog(format!(
                "catalog file '{name}' is neither an object nor an array"
            )))
        }
    };

    array
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(OffersError::from))
        .collect()
}
