//! Catalog validation and cache-backed loading.

mod common;

use std::io::Write;
use std::time::Duration;

use energy_offers_sdk::{CacheManager, Catalog, EnergyOffersSdk, OffersError};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::json;

fn offline_cache(dir: &std::path::Path) -> CacheManager {
    CacheManager::new(
        Some(dir.to_path_buf()),
        "http://127.0.0.1:9",
        true,
        Duration::from_secs(5),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Catalog::new validation
// ---------------------------------------------------------------------------

#[test]
fn rejects_duplicate_provider_ids() {
    let mut providers = common::sample_providers();
    providers.push(common::provider("p1", "Copy", "france"));
    let err = Catalog::new(providers, vec![]).unwrap_err();
    assert!(matches!(err, OffersError::DuplicateId { kind: "provider", ref id } if id == "p1"));
}

#[test]
fn rejects_duplicate_offer_ids() {
    let mut offers = common::sample_offers();
    offers.push(common::offer("o2", "p1", 0.1, 1.0, "green", "12 months", "fixed"));
    let err = Catalog::new(common::sample_providers(), offers).unwrap_err();
    assert!(matches!(err, OffersError::DuplicateId { kind: "offer", .. }));
}

#[test]
fn rejects_negative_or_non_finite_prices() {
    for (c, s) in [(-0.1, 10.0), (0.1, -1.0), (f64::NAN, 1.0), (0.1, f64::INFINITY)] {
        let offers = vec![common::offer("o1", "p1", c, s, "green", "12 months", "fixed")];
        let err = Catalog::new(common::sample_providers(), offers).unwrap_err();
        assert!(matches!(err, OffersError::InvalidCatalog(_)), "({c}, {s})");
    }
}

#[test]
fn accepts_dangling_reference_until_resolution() {
    let offers = vec![common::offer("o1", "ghost", 0.1, 1.0, "green", "12 months", "fixed")];
    let catalog = Catalog::new(common::sample_providers(), offers).unwrap();
    assert!(catalog.provider("ghost").is_none());
    assert!(catalog.offer("o1").is_some());
}

#[test]
fn provider_index_lookup() {
    let catalog = common::sample_catalog();
    assert_eq!(catalog.provider("p2").unwrap().display_name, "Provider 2");
    assert!(catalog.provider("p5").is_none());
}

// ---------------------------------------------------------------------------
// Loading through the cache
// ---------------------------------------------------------------------------

#[test]
fn load_reads_wrapped_catalog_files() {
    let tmp = common::setup_cache_dir();
    let mut cache = offline_cache(tmp.path());

    let catalog = Catalog::load(&mut cache).unwrap();
    assert_eq!(catalog.providers(), common::sample_providers().as_slice());
    assert_eq!(catalog.offers(), common::sample_offers().as_slice());
}

#[test]
fn load_accepts_bare_arrays() {
    let tmp = tempfile::tempdir().unwrap();
    let cache = offline_cache(tmp.path());
    cache
        .install_json("providers", &serde_json::to_vec(&common::sample_providers()).unwrap())
        .unwrap();
    cache
        .install_json("offers", &serde_json::to_vec(&common::sample_offers()).unwrap())
        .unwrap();

    let mut cache = cache;
    let catalog = Catalog::load(&mut cache).unwrap();
    assert_eq!(catalog.offers().len(), 5);
}

#[test]
fn load_reads_gzipped_files() {
    let tmp = tempfile::tempdir().unwrap();
    let (providers, offers) = common::sample_documents();
    for (file, doc) in [
        ("energy_providers.json.gz", providers),
        ("energy_offers.json.gz", offers),
    ] {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(&serde_json::to_vec(&doc).unwrap()).unwrap();
        std::fs::write(tmp.path().join(file), enc.finish().unwrap()).unwrap();
    }

    let mut cache = offline_cache(tmp.path());
    let catalog = Catalog::load(&mut cache).unwrap();
    assert_eq!(catalog.providers().len(), 4);
}

#[test]
fn load_rejects_missing_wrapper_key() {
    let tmp = common::setup_cache_dir();
    let cache = offline_cache(tmp.path());
    cache
        .install_json("offers", json!({ "offers": [] }).to_string().as_bytes())
        .unwrap();

    let mut cache = cache;
    let err = Catalog::load(&mut cache).unwrap_err();
    assert!(matches!(err, OffersError::InvalidCatalog(_)));
}

#[test]
fn offline_missing_file_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = offline_cache(tmp.path());
    let err = cache.ensure_json("providers").unwrap_err();
    assert!(matches!(err, OffersError::NotFound(_)));
}

#[test]
fn unknown_catalog_name_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = offline_cache(tmp.path());
    assert!(matches!(cache.ensure_json("tariffs"), Err(OffersError::NotFound(_))));
}

#[test]
fn corrupt_file_is_removed() {
    let tmp = common::setup_cache_dir();
    let path = tmp.path().join("energy_offers.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let mut cache = offline_cache(tmp.path());
    let err = cache.load_json("offers").unwrap_err();
    assert!(matches!(err, OffersError::NotFound(_)));
    assert!(!path.exists());
}

#[test]
fn clear_empties_cache_dir() {
    let tmp = common::setup_cache_dir();
    let cache = offline_cache(tmp.path());
    cache.clear().unwrap();
    assert!(tmp.path().exists());
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_loads_from_cache_dir() {
    let tmp = common::setup_cache_dir();
    let sdk = EnergyOffersSdk::builder()
        .cache_dir(tmp.path())
        .offline(true)
        .build()
        .unwrap();

    assert_eq!(sdk.catalog().offers().len(), 5);
    assert_eq!(sdk.cache_dir(), Some(tmp.path()));
    assert!(sdk.to_string().contains("providers=4"));
}

#[test]
fn builder_fails_offline_without_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    let err = EnergyOffersSdk::builder()
        .cache_dir(tmp.path())
        .offline(true)
        .build()
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn builder_reads_environment() {
    let tmp = common::setup_cache_dir();
    let dir = tmp.path().to_str().unwrap().to_string();
    temp_env::with_vars(
        [
            ("ENERGY_OFFERS_CACHE_DIR", Some(dir.as_str())),
            ("ENERGY_OFFERS_OFFLINE", Some("true")),
            ("ENERGY_OFFERS_BASE_URL", None),
        ],
        || {
            let sdk = EnergyOffersSdk::builder().from_env().build().unwrap();
            assert_eq!(sdk.countries().list(), vec!["france", "italy", "spain"]);
        },
    );
}
