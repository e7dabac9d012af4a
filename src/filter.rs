//! Filter and sort engine over resolved offers.
//!
//! [`OfferFilter`] collects equality conditions and an optional price sort
//! and applies them to a slice of offers, returning a new `Vec`. Builder
//! methods return `&mut Self` for chaining. [`FilterParams`] is the
//! string-typed form parsed from a query string; it translates into an
//! [`OfferFilter`] via [`FilterParams::to_filter`].
//!
//! # Example
//!
//! ```rust
//! use energy_offers_sdk::filter::{OfferFilter, SortOrder};
//! let mut filter = OfferFilter::new();
//! filter
//!     .country("france")
//!     .energy_type("green")
//!     .provider("all") // sentinel: no condition added
//!     .sort(SortOrder::PriceAsc);
//! assert_eq!(filter.conditions().len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FILTER_ALL;
use crate::models::ResolvedOffer;

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Ordering applied after filtering. Comparisons use `annual_price`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep input order.
    #[default]
    Unsorted,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    /// Parse a `sortBy` value. Anything unrecognised keeps input order.
    pub fn parse(value: &str) -> Self {
        match value {
            "price-asc" => SortOrder::PriceAsc,
            "price-desc" => SortOrder::PriceDesc,
            _ => SortOrder::Unsorted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Unsorted => "",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    fn compare(self, a: &ResolvedOffer, b: &ResolvedOffer) -> Ordering {
        match self {
            SortOrder::Unsorted => Ordering::Equal,
            SortOrder::PriceAsc => a.annual_price.total_cmp(&b.annual_price),
            SortOrder::PriceDesc => b.annual_price.total_cmp(&a.annual_price),
        }
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// A single equality predicate over a resolved offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `provider.country`, case-insensitive.
    Country(String),
    /// `provider.display_name`, exact.
    Provider(String),
    EnergyType(String),
    ContractDuration(String),
    PriceGuarantee(String),
}

impl Condition {
    pub fn matches(&self, offer: &ResolvedOffer) -> bool {
        let meta = &offer.offer.metadata;
        match self {
            Condition::Country(c) => offer.provider.is_in(c),
            Condition::Provider(p) => offer.provider.display_name == *p,
            Condition::EnergyType(v) => meta.energy_type == *v,
            Condition::ContractDuration(v) => meta.contract_duration == *v,
            Condition::PriceGuarantee(v) => meta.price_guarantee == *v,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Country(v) => write!(f, "country ~= {v}"),
            Condition::Provider(v) => write!(f, "provider = {v}"),
            Condition::EnergyType(v) => write!(f, "energy_type = {v}"),
            Condition::ContractDuration(v) => write!(f, "contract_duration = {v}"),
            Condition::PriceGuarantee(v) => write!(f, "price_guarantee = {v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// OfferFilter
// ---------------------------------------------------------------------------

/// Composable AND-filter plus optional sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferFilter {
    conditions: Vec<Condition>,
    sort: SortOrder,
}

impl OfferFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep offers whose provider is in `country` (case-insensitive).
    ///
    /// An empty value adds no condition. `"all"` is not a sentinel here: a
    /// country segment always names a country.
    pub fn country(&mut self, country: &str) -> &mut Self {
        if !country.is_empty() {
            self.conditions.push(Condition::Country(country.to_string()));
        }
        self
    }

    /// Keep offers from the provider with this exact display name.
    pub fn provider(&mut self, display_name: &str) -> &mut Self {
        if let Some(v) = selected(display_name) {
            self.conditions.push(Condition::Provider(v.to_string()));
        }
        self
    }

    pub fn energy_type(&mut self, energy_type: &str) -> &mut Self {
        if let Some(v) = selected(energy_type) {
            self.conditions.push(Condition::EnergyType(v.to_string()));
        }
        self
    }

    pub fn contract_duration(&mut self, duration: &str) -> &mut Self {
        if let Some(v) = selected(duration) {
            self.conditions.push(Condition::ContractDuration(v.to_string()));
        }
        self
    }

    pub fn price_guarantee(&mut self, guarantee: &str) -> &mut Self {
        if let Some(v) = selected(guarantee) {
            self.conditions.push(Condition::PriceGuarantee(v.to_string()));
        }
        self
    }

    /// Set the sort order (replaces any previous one).
    pub fn sort(&mut self, order: SortOrder) -> &mut Self {
        self.sort = order;
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Whether an offer satisfies every condition.
    pub fn matches(&self, offer: &ResolvedOffer) -> bool {
        self.conditions.iter().all(|c| c.matches(offer))
    }

    /// Filter and sort `offers` into a new `Vec`.
    ///
    /// The sort is stable, so offers with equal annual prices keep their
    /// relative input order.
    pub fn apply(&self, offers: &[ResolvedOffer]) -> Vec<ResolvedOffer> {
        let mut result: Vec<ResolvedOffer> =
            offers.iter().filter(|o| self.matches(o)).cloned().collect();

        if self.sort != SortOrder::Unsorted {
            let order = self.sort;
            result.sort_by(|a, b| order.compare(a, b));
        }

        debug!(filter = %self, input = offers.len(), output = result.len(), "applied offer filter");
        result
    }
}

impl fmt::Display for OfferFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            write!(f, "*")?;
        } else {
            let parts: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
            write!(f, "{}", parts.join(" AND "))?;
        }
        match self.sort {
            SortOrder::Unsorted => Ok(()),
            SortOrder::PriceAsc => write!(f, " ORDER BY annual_price ASC"),
            SortOrder::PriceDesc => write!(f, " ORDER BY annual_price DESC"),
        }
    }
}

/// `None` for the "no filter" values: empty or the `"all"` sentinel.
fn selected(value: &str) -> Option<&str> {
    if value.is_empty() || value == FILTER_ALL {
        None
    } else {
        Some(value)
    }
}

// ---------------------------------------------------------------------------
// FilterParams
// ---------------------------------------------------------------------------

/// Query-string form of an offer filter.
///
/// All fields are optional. When `None`, the corresponding filter is skipped.
/// Deserializes from camelCase keys; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub country: Option<String>,
    pub provider: Option<String>,
    pub energy_type: Option<String>,
    pub contract_duration: Option<String>,
    pub price_guarantee: Option<String>,
    pub sort_by: Option<String>,
}

impl FilterParams {
    /// Build params from `(key, value)` pairs such as decoded query-string
    /// entries. Later duplicates win; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "country" => &mut params.country,
                "provider" => &mut params.provider,
                "energyType" => &mut params.energy_type,
                "contractDuration" => &mut params.contract_duration,
                "priceGuarantee" => &mut params.price_guarantee,
                "sortBy" => &mut params.sort_by,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }

    /// Copy of these params scoped to `country`.
    pub fn with_country(&self, country: &str) -> Self {
        Self {
            country: Some(country.to_string()),
            ..self.clone()
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_by.as_deref().map(SortOrder::parse).unwrap_or_default()
    }

    /// Translate every field into the matching [`OfferFilter`] call.
    pub fn to_filter(&self) -> OfferFilter {
        let mut filter = OfferFilter::new();

        if let Some(ref country) = self.country {
            filter.country(country);
        }
        if let Some(ref provider) = self.provider {
            filter.provider(provider);
        }
        if let Some(ref energy_type) = self.energy_type {
            filter.energy_type(energy_type);
        }
        if let Some(ref duration) = self.contract_duration {
            filter.contract_duration(duration);
        }
        if let Some(ref guarantee) = self.price_guarantee {
            filter.price_guarantee(guarantee);
        }
        filter.sort(self.sort_order());

        filter
    }
}

/// Apply `params` to already-resolved offers.
pub fn filter_offers(resolved: &[ResolvedOffer], params: &FilterParams) -> Vec<ResolvedOffer> {
    params.to_filter().apply(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_parses_known_values() {
        assert_eq!(SortOrder::parse("price-asc"), SortOrder::PriceAsc);
        assert_eq!(SortOrder::parse("price-desc"), SortOrder::PriceDesc);
        assert_eq!(SortOrder::parse(""), SortOrder::Unsorted);
        assert_eq!(SortOrder::parse("name"), SortOrder::Unsorted);
        assert_eq!(SortOrder::parse("PRICE-ASC"), SortOrder::Unsorted);
    }

    #[test]
    fn sentinel_and_empty_values_add_no_condition() {
        let mut filter = OfferFilter::new();
        filter
            .provider("all")
            .energy_type("")
            .contract_duration("all")
            .price_guarantee("");
        assert!(filter.conditions().is_empty());
        assert_eq!(filter.to_string(), "*");
    }

    #[test]
    fn country_all_is_a_real_condition() {
        let mut filter = OfferFilter::new();
        filter.country("all");
        assert_eq!(filter.conditions(), &[Condition::Country("all".into())]);
    }

    #[test]
    fn display_lists_conditions_and_sort() {
        let mut filter = OfferFilter::new();
        filter
            .country("france")
            .energy_type("green")
            .sort(SortOrder::PriceDesc);
        assert_eq!(
            filter.to_string(),
            "country ~= france AND energy_type = green ORDER BY annual_price DESC"
        );
    }

    #[test]
    fn from_pairs_ignores_unknown_keys() {
        let params = FilterParams::from_pairs([
            ("country", "france"),
            ("energyType", "green"),
            ("utm_source", "newsletter"),
            ("sortBy", "price-asc"),
        ]);
        assert_eq!(params.country.as_deref(), Some("france"));
        assert_eq!(params.energy_type.as_deref(), Some("green"));
        assert_eq!(params.sort_order(), SortOrder::PriceAsc);
        assert!(params.provider.is_none());
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let params: FilterParams = serde_json::from_value(serde_json::json!({
            "contractDuration": "12 months",
            "priceGuarantee": "fixed",
            "page": "2"
        }))
        .unwrap();
        assert_eq!(params.contract_duration.as_deref(), Some("12 months"));
        assert_eq!(params.price_guarantee.as_deref(), Some("fixed"));
    }

    #[test]
    fn with_country_keeps_other_fields() {
        let params = FilterParams {
            provider: Some("Provider 1".into()),
            country: Some("italy".into()),
            ..Default::default()
        };
        let scoped = params.with_country("france");
        assert_eq!(scoped.country.as_deref(), Some("france"));
        assert_eq!(scoped.provider.as_deref(), Some("Provider 1"));
    }
}
