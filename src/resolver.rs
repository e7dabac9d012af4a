//! Joins raw offers to their providers and derives their prices.
//!
//! Missing providers are fatal: resolution stops at the first offer whose
//! `provider_id` has no match and no partial result is returned.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{OffersError, Result};
use crate::models::{Provider, RawOffer, ResolvedOffer};
use crate::pricing;

/// Resolve every offer in the catalog, in catalog order.
pub fn resolve_offers(catalog: &Catalog) -> Result<Vec<ResolvedOffer>> {
    let resolved = catalog
        .offers()
        .iter()
        .map(|offer| resolve_offer(catalog, offer))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = resolved.len(), "resolved offers");
    Ok(resolved)
}

/// Resolve loose records that are not wrapped in a [`Catalog`].
///
/// Builds a throwaway id index over `providers` first.
pub fn resolve_records(raw_offers: &[RawOffer], providers: &[Provider]) -> Result<Vec<ResolvedOffer>> {
    let index: HashMap<&str, &Provider> = providers.iter().map(|p| (p.id.as_str(), p)).collect();
    raw_offers
        .iter()
        .map(|offer| join(offer, index.get(offer.provider_id.as_str()).copied()))
        .collect()
}

/// Resolve a single offer against the catalog's provider index.
pub fn resolve_offer(catalog: &Catalog, offer: &RawOffer) -> Result<ResolvedOffer> {
    join(offer, catalog.provider(&offer.provider_id))
}

fn join(offer: &RawOffer, provider: Option<&Provider>) -> Result<ResolvedOffer> {
    let provider = provider.ok_or_else(|| OffersError::MissingProvider {
        offer_id: offer.id.clone(),
        provider_id: offer.provider_id.clone(),
    })?;

    let annual_price = pricing::annual_price(offer.consumption_pricing, offer.subscription_cost);

    Ok(ResolvedOffer {
        offer: offer.clone(),
        provider: provider.clone(),
        annual_price,
        monthly_price: pricing::monthly_price(annual_price),
    })
}
