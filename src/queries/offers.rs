//! Offer queries: resolution, filtering and the per-country page view.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::filter::{self, FilterParams};
use crate::models::{cheapest_monthly_price, OfferFacets, ResolvedOffer};
use crate::queries::countries::CountryQuery;
use crate::resolver;

// ---------------------------------------------------------------------------
// CountryOffers
// ---------------------------------------------------------------------------

/// Everything a country page needs in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryOffers {
    /// Normalized (lower-case) country.
    pub country: String,
    /// Offers matching the filters, in result order.
    pub offers: Vec<ResolvedOffer>,
    /// Filter options computed from every offer in the country, so the
    /// controls do not shrink as filters are applied.
    pub facets: OfferFacets,
    pub count: usize,
    pub cheapest_monthly_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// OfferQuery
// ---------------------------------------------------------------------------

/// Query interface for resolved energy offers.
pub struct OfferQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> OfferQuery<'a> {
    /// Create a new `OfferQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Every offer in catalog order, joined and priced.
    pub fn all(&self) -> Result<Vec<ResolvedOffer>> {
        resolver::resolve_offers(self.catalog)
    }

    /// Retrieve a single offer by id.
    pub fn get(&self, id: &str) -> Result<Option<ResolvedOffer>> {
        self.catalog
            .offer(id)
            .map(|raw| resolver::resolve_offer(self.catalog, raw))
            .transpose()
    }

    /// Retrieve a single offer by its slug.
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<ResolvedOffer>> {
        self.catalog
            .offers()
            .iter()
            .find(|o| o.slug == slug)
            .map(|raw| resolver::resolve_offer(self.catalog, raw))
            .transpose()
    }

    /// Filter and sort all offers.
    ///
    /// Zero matches is an empty `Vec`, not an error.
    pub fn search(&self, params: &FilterParams) -> Result<Vec<ResolvedOffer>> {
        let all = self.all()?;
        Ok(filter::filter_offers(&all, params))
    }

    /// Count offers matching `params`.
    pub fn count(&self, params: &FilterParams) -> Result<usize> {
        Ok(self.search(params)?.len())
    }

    /// Build the view for one country.
    ///
    /// Fails with [`OffersError::InvalidCountry`](crate::OffersError::InvalidCountry)
    /// when no provider operates in `country`. Any `country` already set on
    /// `params` is replaced by the validated one.
    pub fn for_country(&self, country: &str, params: &FilterParams) -> Result<CountryOffers> {
        let country = CountryQuery::new(self.catalog).validate(country)?;

        let all = self.all()?;
        let in_country = filter::filter_offers(&all, &FilterParams::default().with_country(&country));
        let offers = filter::filter_offers(&in_country, &params.with_country(&country));

        debug!(%country, available = in_country.len(), matched = offers.len(), "country offers");

        Ok(CountryOffers {
            facets: OfferFacets::from_offers(&in_country),
            count: offers.len(),
            cheapest_monthly_price: cheapest_monthly_price(&offers),
            country,
            offers,
        })
    }
}
