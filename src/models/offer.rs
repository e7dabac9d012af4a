use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::provider::Provider;
use crate::error::OffersError;

// ---------------------------------------------------------------------------
// OfferMetadata: Contract attributes used by the filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OfferMetadata {
    pub energy_type: String,
    pub contract_duration: String,
    pub price_guarantee: String,
}

// ---------------------------------------------------------------------------
// RawOffer: Tariff record as stored in the catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RawOffer {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub provider_id: String,
    /// Currency per kWh.
    pub consumption_pricing: f64,
    /// Currency per year.
    pub subscription_cost: f64,
    pub metadata: OfferMetadata,
}

// ---------------------------------------------------------------------------
// ResolvedOffer: RawOffer joined with its provider and derived prices
// ---------------------------------------------------------------------------

/// Serializes flat, exactly like the raw offer with three extra keys
/// (`provider`, `annual_price`, `monthly_price`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOffer {
    #[serde(flatten)]
    pub offer: RawOffer,
    pub provider: Provider,
    pub annual_price: f64,
    pub monthly_price: f64,
}

impl ResolvedOffer {
    pub fn id(&self) -> &str {
        &self.offer.id
    }

    pub fn metadata(&self) -> &OfferMetadata {
        &self.offer.metadata
    }

    /// The derived price matching the requested billing period.
    pub fn price(&self, view: PriceView) -> f64 {
        match view {
            PriceView::Monthly => self.monthly_price,
            PriceView::Annual => self.annual_price,
        }
    }

    /// True when no offer in `offers` has a lower monthly price.
    pub fn is_cheapest_in(&self, offers: &[ResolvedOffer]) -> bool {
        cheapest_monthly_price(offers).is_some_and(|min| self.monthly_price == min)
    }
}

/// Lowest monthly price in the slice, `None` when it is empty.
pub fn cheapest_monthly_price(offers: &[ResolvedOffer]) -> Option<f64> {
    offers
        .iter()
        .map(|o| o.monthly_price)
        .min_by(|a, b| a.total_cmp(b))
}

// ---------------------------------------------------------------------------
// PriceView: Billing period shown to the user
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceView {
    #[default]
    Monthly,
    Annual,
}

impl PriceView {
    /// Unit suffix used next to a displayed price.
    pub fn suffix(self) -> &'static str {
        match self {
            PriceView::Monthly => "/month",
            PriceView::Annual => "/year",
        }
    }
}

impl FromStr for PriceView {
    type Err = OffersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "monthly" => Ok(PriceView::Monthly),
            "annual" => Ok(PriceView::Annual),
            other => Err(OffersError::InvalidArgument(format!(
                "Unknown price view '{other}' (expected 'monthly' or 'annual')"
            ))),
        }
    }
}

impl fmt::Display for PriceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceView::Monthly => write!(f, "monthly"),
            PriceView::Annual => write!(f, "annual"),
        }
    }
}

// ---------------------------------------------------------------------------
// OfferFacets: Distinct values offered by the filter controls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferFacets {
    pub providers: Vec<String>,
    pub energy_types: Vec<String>,
    pub contract_durations: Vec<String>,
    pub price_guarantees: Vec<String>,
}

impl OfferFacets {
    /// Collect sorted, de-duplicated option lists from a set of offers.
    pub fn from_offers(offers: &[ResolvedOffer]) -> Self {
        let mut providers = BTreeSet::new();
        let mut energy_types = BTreeSet::new();
        let mut contract_durations = BTreeSet::new();
        let mut price_guarantees = BTreeSet::new();

        for o in offers {
            providers.insert(o.provider.display_name.clone());
            energy_types.insert(o.offer.metadata.energy_type.clone());
            contract_durations.insert(o.offer.metadata.contract_duration.clone());
            price_guarantees.insert(o.offer.metadata.price_guarantee.clone());
        }

        Self {
            providers: providers.into_iter().collect(),
            energy_types: energy_types.into_iter().collect(),
            contract_durations: contract_durations.into_iter().collect(),
            price_guarantees: price_guarantees.into_iter().collect(),
        }
    }
}
