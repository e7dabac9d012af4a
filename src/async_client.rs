//! Async wrapper around [`EnergyOffersSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Catalog loading may hit the network and the disk, so it runs on the
//! blocking thread pool via [`tokio::task::spawn_blocking`]. Queries are
//! dispatched the same way to keep the event loop free.
//!
//! # Example
//!
//! ```no_run
//! use energy_offers_sdk::{AsyncEnergyOffersSdk, FilterParams};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncEnergyOffersSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let providers = sdk.run(|s| Ok(s.providers().list(Some("france")))).await.unwrap();
//!
//!     // Convenience method for offer search
//!     let offers = sdk.search(FilterParams::default()).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{OffersError, Result};
use crate::filter::FilterParams;
use crate::models::ResolvedOffer;
use crate::queries::CountryOffers;
use crate::EnergyOffersSdk;

// ---------------------------------------------------------------------------
// AsyncEnergyOffersSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncEnergyOffersSdk`] instance.
pub struct AsyncEnergyOffersSdkBuilder {
    cache_dir: Option<PathBuf>,
    base_url: Option<String>,
    offline: bool,
    timeout: Duration,
    from_env: bool,
}

impl Default for AsyncEnergyOffersSdkBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            base_url: None,
            offline: false,
            timeout: Duration::from_secs(120),
            from_env: false,
        }
    }
}

impl AsyncEnergyOffersSdkBuilder {
    /// Set a custom cache directory.
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the base URL catalog files are downloaded from.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for catalog downloads.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Apply environment overrides after the explicit settings.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Build the async SDK, loading the catalogs.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncEnergyOffersSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = EnergyOffersSdk::builder();
            if let Some(dir) = self.cache_dir {
                builder = builder.cache_dir(dir);
            }
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            builder = builder.offline(self.offline).timeout(self.timeout);
            if self.from_env {
                builder = builder.from_env();
            }
            let sdk = builder.build()?;
            Ok(AsyncEnergyOffersSdk::new(sdk))
        })
        .await
        .map_err(|e| OffersError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncEnergyOffersSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`EnergyOffersSdk`].
///
/// The wrapped SDK is immutable, so it is shared through an [`Arc`] with no
/// lock. Cloning the wrapper is cheap.
#[derive(Clone)]
pub struct AsyncEnergyOffersSdk {
    inner: Arc<EnergyOffersSdk>,
}

impl AsyncEnergyOffersSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncEnergyOffersSdkBuilder {
        AsyncEnergyOffersSdkBuilder::default()
    }

    /// Wrap an already-built SDK.
    pub fn new(sdk: EnergyOffersSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&EnergyOffersSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&EnergyOffersSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| OffersError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Filter and sort all offers asynchronously.
    pub async fn search(&self, params: FilterParams) -> Result<Vec<ResolvedOffer>> {
        self.run(move |s| s.offers().search(&params)).await
    }

    /// Build a country page view asynchronously.
    pub async fn for_country(&self, country: &str, params: FilterParams) -> Result<CountryOffers> {
        let country = country.to_string();
        self.run(move |s| s.offers().for_country(&country, &params)).await
    }

    /// List the countries covered by the catalog.
    pub async fn countries(&self) -> Result<Vec<String>> {
        self.run(|s| Ok(s.countries().list())).await
    }

    /// Borrow the wrapped SDK for cheap synchronous lookups.
    pub fn blocking(&self) -> &EnergyOffersSdk {
        &self.inner
    }
}
