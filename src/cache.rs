//! Local catalog file cache with optional remote download.
//!
//! Catalog files live in a cache directory. When a file is missing and the
//! manager is online, it is fetched from the configured base URL; offline
//! managers only ever read what is already on disk.

use crate::config;
use crate::error::{OffersError, Result};
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Locates, downloads and parses catalog JSON files.
pub struct CacheManager {
    /// Directory where cached files are stored.
    pub cache_dir: PathBuf,
    /// Remote location catalog files are downloaded from.
    pub base_url: String,
    /// If true, never download (use cached files only).
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
}

impl CacheManager {
    /// Create a new cache manager.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist.
    pub fn new(
        cache_dir: Option<PathBuf>,
        base_url: impl Into<String>,
        offline: bool,
        timeout: Duration,
    ) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            base_url: base_url.into(),
            offline,
            timeout,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| OffersError::InvalidArgument("HTTP client unavailable".into()))
    }

    fn file_name(name: &str) -> Result<&'static str> {
        config::json_files()
            .get(name)
            .copied()
            .ok_or_else(|| OffersError::NotFound(format!("Unknown catalog file: {}", name)))
    }

    /// Return the cached copy of `filename`, preferring the plain file
    /// over a gzipped one.
    fn cached_path(&self, filename: &str) -> Option<PathBuf> {
        let plain = self.cache_dir.join(filename);
        if plain.exists() {
            return Some(plain);
        }
        let gz = self.cache_dir.join(format!("{}.gz", filename));
        gz.exists().then_some(gz)
    }

    /// Download a single file.
    ///
    /// Writes to a temp file in the destination directory and persists it
    /// on success, so an interrupted download never leaves a partial file.
    fn download_file(&mut self, filename: &str, dest: &Path) -> Result<()> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), filename);
        info!(%url, "downloading catalog file");

        let parent = dest.parent().unwrap_or(self.cache_dir.as_path()).to_path_buf();
        fs::create_dir_all(&parent)?;

        let client = self.client()?.clone();
        let resp = client.get(&url).send()?.error_for_status()?;
        let bytes = resp.bytes()?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(&bytes)?;
        tmp.persist(dest).map_err(|e| OffersError::Io(e.error))?;
        Ok(())
    }

    /// Ensure a catalog file is cached locally, downloading if needed.
    ///
    /// # Arguments
    ///
    /// * `name` - Logical file name (`"providers"` or `"offers"`).
    ///
    /// # Returns
    ///
    /// Local filesystem path to the cached JSON file.
    pub fn ensure_json(&mut self, name: &str) -> Result<PathBuf> {
        let filename = Self::file_name(name)?;

        if let Some(path) = self.cached_path(filename) {
            debug!(path = %path.display(), "catalog cache hit");
            return Ok(path);
        }

        if self.offline {
            return Err(OffersError::NotFound(format!(
                "Catalog file {} not cached and offline mode is enabled",
                filename
            )));
        }

        let local_path = self.cache_dir.join(filename);
        self.download_file(filename, &local_path)?;
        Ok(local_path)
    }

    /// Seed the cache with catalog contents, replacing any cached copy.
    ///
    /// Useful for bundling a catalog with an application or for tests.
    pub fn install_json(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let filename = Self::file_name(name)?;
        let gz = self.cache_dir.join(format!("{}.gz", filename));
        if gz.exists() {
            fs::remove_file(&gz)?;
        }
        let dest = self.cache_dir.join(filename);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.cache_dir)?;
        tmp.write_all(contents)?;
        tmp.persist(&dest).map_err(|e| OffersError::Io(e.error))?;
        Ok(dest)
    }

    /// Load and parse a catalog file (handles `.gz` transparently).
    ///
    /// If the cached file is corrupt (truncated download, disk error),
    /// it is deleted automatically so the next call re-downloads a fresh copy.
    pub fn load_json(&mut self, name: &str) -> Result<serde_json::Value> {
        let path = self.ensure_json(name)?;

        let parse_result = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(&path)?;
            let decoder = GzDecoder::new(BufReader::new(file));
            let mut contents = String::new();
            BufReader::new(decoder).read_to_string(&mut contents)?;
            serde_json::from_str(&contents).map_err(OffersError::from)
        } else {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).map_err(OffersError::from)
        };

        match parse_result {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt cache file, removing");
                let _ = fs::remove_file(&path);
                Err(OffersError::NotFound(format!(
                    "Cache file '{}' was corrupt and has been removed. \
                     Retry to re-download. Original error: {}",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown"),
                    e
                )))
            }
        }
    }

    /// Remove all cached files and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}
