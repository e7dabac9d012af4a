//! Energy offers SDK for Rust.
//!
//! Provides a high-level client for comparing energy offers. The provider
//! and offer catalogs are loaded once from JSON files (downloaded and cached
//! locally, or seeded from disk), then every query runs in memory: offers
//! are joined to their providers, priced for a fixed yearly consumption,
//! filtered and sorted.
//!
//! # Quick start
//!
//! ```no_run
//! use energy_offers_sdk::{EnergyOffersSdk, FilterParams};
//!
//! let sdk = EnergyOffersSdk::builder().offline(true).build().unwrap();
//!
//! // Cheapest green offers in France first
//! let params = FilterParams {
//!     country: Some("france".into()),
//!     energy_type: Some("green".into()),
//!     sort_by: Some("price-asc".into()),
//!     ..Default::default()
//! };
//! let offers = sdk.offers().search(&params).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pricing;
pub mod queries;
pub mod resolver;

#[cfg(feature = "async")]
pub use async_client::AsyncEnergyOffersSdk;
pub use cache::CacheManager;
pub use catalog::Catalog;
pub use error::{OffersError, Result};
pub use filter::{filter_offers, FilterParams, OfferFilter, SortOrder};
pub use models::{OfferFacets, OfferMetadata, PriceView, Provider, RawOffer, ResolvedOffer};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

// ---------------------------------------------------------------------------
// EnergyOffersSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`EnergyOffersSdk`] instance.
///
/// Use [`EnergyOffersSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](EnergyOffersSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct EnergyOffersSdkBuilder {
    cache_dir: Option<PathBuf>,
    base_url: String,
    offline: bool,
    timeout: Duration,
}

impl Default for EnergyOffersSdkBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            base_url: config::DEFAULT_BASE_URL.to_string(),
            offline: false,
            timeout: Duration::from_secs(120),
        }
    }
}

impl EnergyOffersSdkBuilder {
    /// Set a custom cache directory.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/energy-offers-sdk` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the base URL catalog files are downloaded from.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never downloads and only uses catalog files
    /// already present in the cache directory. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for catalog downloads.
    ///
    /// Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override settings from the environment.
    ///
    /// Reads `ENERGY_OFFERS_CACHE_DIR`, `ENERGY_OFFERS_BASE_URL` and
    /// `ENERGY_OFFERS_OFFLINE`; unset variables leave the current value.
    pub fn from_env(mut self) -> Self {
        if let Ok(dir) = std::env::var(config::ENV_CACHE_DIR) {
            self.cache_dir = Some(PathBuf::from(dir));
        }
        self.base_url = config::env_or_default(config::ENV_BASE_URL, &self.base_url);
        if std::env::var(config::ENV_OFFLINE).is_ok() {
            self.offline = config::env_flag(config::ENV_OFFLINE);
        }
        self
    }

    /// Build the SDK, loading and validating both catalogs.
    ///
    /// Missing catalog files are downloaded unless offline mode is enabled.
    pub fn build(self) -> Result<EnergyOffersSdk> {
        let mut cache = CacheManager::new(self.cache_dir, self.base_url, self.offline, self.timeout)?;
        let catalog = Catalog::load(&mut cache)?;
        cache.close();
        info!(cache_dir = %cache.cache_dir.display(), "energy offers SDK ready");
        Ok(EnergyOffersSdk {
            catalog,
            cache_dir: Some(cache.cache_dir),
        })
    }
}

// ---------------------------------------------------------------------------
// EnergyOffersSdk
// ---------------------------------------------------------------------------

/// The main entry point for the energy offers SDK.
///
/// Owns an immutable [`Catalog`] and exposes domain-specific query
/// interfaces as lightweight borrowing wrappers. The SDK is never mutated
/// after construction, so it can be shared across threads behind an `Arc`.
///
/// Created via [`EnergyOffersSdk::builder()`] or, for catalogs already in
/// memory, [`EnergyOffersSdk::from_catalog()`].
#[derive(Debug, Clone)]
pub struct EnergyOffersSdk {
    catalog: Catalog,
    cache_dir: Option<PathBuf>,
}

impl EnergyOffersSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> EnergyOffersSdkBuilder {
        EnergyOffersSdkBuilder::default()
    }

    /// Wrap a catalog that was built in memory.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            cache_dir: None,
        }
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the offer query interface.
    pub fn offers(&self) -> queries::offers::OfferQuery<'_> {
        queries::offers::OfferQuery::new(&self.catalog)
    }

    /// Access the provider query interface.
    pub fn providers(&self) -> queries::providers::ProviderQuery<'_> {
        queries::providers::ProviderQuery::new(&self.catalog)
    }

    /// Access the country query interface.
    pub fn countries(&self) -> queries::countries::CountryQuery<'_> {
        queries::countries::CountryQuery::new(&self.catalog)
    }

    /// Return a reference to the underlying [`Catalog`].
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cache directory the catalog was loaded from, if any.
    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache_dir.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for EnergyOffersSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self
            .cache_dir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        write!(
            f,
            "EnergyOffersSdk(cache_dir={}, providers={}, offers={})",
            cache,
            self.catalog.providers().len(),
            self.catalog.offers().len()
        )
    }
}
