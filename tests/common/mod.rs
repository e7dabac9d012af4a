//! Shared test fixtures for the energy offers SDK integration tests.
//!
//! Provides an in-memory catalog covering three countries, the two-offer
//! France catalog, and `setup_cache_dir()` which writes the sample catalog
//! as JSON files into a temp directory for loader tests.

#![allow(dead_code)]

use energy_offers_sdk::{Catalog, EnergyOffersSdk, OfferMetadata, Provider, RawOffer};
use serde_json::{json, Value};

pub fn provider(id: &str, display_name: &str, country: &str) -> Provider {
    Provider {
        id: id.to_string(),
        slug: display_name.to_lowercase().replace(' ', "-"),
        display_name: display_name.to_string(),
        country: country.to_string(),
    }
}

pub fn offer(
    id: &str,
    provider_id: &str,
    consumption_pricing: f64,
    subscription_cost: f64,
    energy_type: &str,
    contract_duration: &str,
    price_guarantee: &str,
) -> RawOffer {
    RawOffer {
        id: id.to_string(),
        slug: format!("offer-{id}"),
        name: format!("Offer {id}"),
        description: format!("Description of offer {id}"),
        provider_id: provider_id.to_string(),
        consumption_pricing,
        subscription_cost,
        metadata: OfferMetadata {
            energy_type: energy_type.to_string(),
            contract_duration: contract_duration.to_string(),
            price_guarantee: price_guarantee.to_string(),
        },
    }
}

pub fn sample_providers() -> Vec<Provider> {
    vec![
        provider("p1", "Provider 1", "france"),
        provider("p2", "Provider 2", "france"),
        provider("p3", "Provider 3", "italy"),
        provider("p4", "Provider 4", "spain"),
    ]
}

/// Annual prices: o1 140, o2 280, o3 140, o4 138, o5 132.
pub fn sample_offers() -> Vec<RawOffer> {
    vec![
        offer("o1", "p1", 0.1, 100.0, "green", "12 months", "fixed"),
        offer("o2", "p2", 0.2, 200.0, "mixed", "24 months", "variable"),
        offer("o3", "p1", 0.15, 80.0, "mixed", "12 months", "variable"),
        offer("o4", "p3", 0.12, 90.0, "green", "12 months", "fixed"),
        offer("o5", "p4", 0.18, 60.0, "green", "24 months", "fixed"),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_providers(), sample_offers()).unwrap()
}

pub fn sample_sdk() -> EnergyOffersSdk {
    EnergyOffersSdk::from_catalog(sample_catalog())
}

/// Provider 1 / green / 12 months / fixed and Provider 2 / mixed /
/// 24 months / variable, both in France.
pub fn two_offer_catalog() -> Catalog {
    Catalog::new(
        vec![
            provider("p1", "Provider 1", "france"),
            provider("p2", "Provider 2", "france"),
        ],
        vec![
            offer("o1", "p1", 0.1, 100.0, "green", "12 months", "fixed"),
            offer("o2", "p2", 0.2, 200.0, "mixed", "24 months", "variable"),
        ],
    )
    .unwrap()
}

/// Wrapped JSON documents for the sample catalog, as stored on disk.
pub fn sample_documents() -> (Value, Value) {
    (
        json!({ "energy_providers": sample_providers() }),
        json!({ "energy_offers": sample_offers() }),
    )
}

/// Create a temp cache directory holding the sample catalog files.
///
/// The caller must keep the `TempDir` alive for the duration of the test.
pub fn setup_cache_dir() -> tempfile::TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    let (providers, offers) = sample_documents();
    std::fs::write(
        tmp_dir.path().join("energy_providers.json"),
        serde_json::to_vec_pretty(&providers).unwrap(),
    )
    .unwrap();
    std::fs::write(
        tmp_dir.path().join("energy_offers.json"),
        serde_json::to_vec_pretty(&offers).unwrap(),
    )
    .unwrap();
    tmp_dir
}
