//! Query modules for the energy offers SDK.
//!
//! Each module provides a query struct that borrows from a [`Catalog`](crate::catalog::Catalog)
//! and exposes methods returning typed models. Offers always pass through the
//! resolver, so every result carries the same derived prices.

pub mod countries;
pub mod offers;
pub mod providers;

pub use countries::CountryQuery;
pub use offers::{CountryOffers, OfferQuery};
pub use providers::ProviderQuery;
