use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Yearly consumption assumed when turning a per-kWh tariff into a
/// comparable annual cost.
pub const ANNUAL_CONSUMPTION_KWH: f64 = 400.0;

pub const DEFAULT_BASE_URL: &str = "https://data.energy-offers.example/v1";

pub const ENV_CACHE_DIR: &str = "ENERGY_OFFERS_CACHE_DIR";
pub const ENV_BASE_URL: &str = "ENERGY_OFFERS_BASE_URL";
pub const ENV_OFFLINE: &str = "ENERGY_OFFERS_OFFLINE";

/// Sentinel filter value meaning "do not filter on this field".
pub const FILTER_ALL: &str = "all";

pub fn json_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("providers", "energy_providers.json"),
        ("offers", "energy_offers.json"),
    ])
}

/// Top-level key wrapping the array inside each catalog file.
pub fn json_wrappers() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("providers", "energy_providers"),
        ("offers", "energy_offers"),
    ])
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("energy-offers-sdk")
    } else {
        PathBuf::from(".energy-offers-sdk-cache")
    }
}

/// Read an environment variable, falling back to `default` when unset.
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a boolean flag (`1`, `true`, `yes`, any case). Unset means `false`.
pub fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
        })
        .unwrap_or(false)
}
