use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use energy_offers_sdk::queries::countries::country_flag;
use energy_offers_sdk::{FilterParams, PriceView};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPageParams {
    #[serde(flatten)]
    pub filters: FilterParams,
    pub price_view: Option<String>,
}

/// GET /api/countries
///
/// Countries with at least one provider, lower-cased.
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let countries = state.sdk.countries().await?;
    Ok(Json(json!(countries)))
}

/// GET /api/countries/:country/offers?provider=...&priceView=annual
///
/// Everything the country page renders: filtered offers priced for the
/// selected billing period, the filter options and the cheapest marker.
/// Unknown countries are a 404.
pub async fn country_offers(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
    Query(params): Query<CountryPageParams>,
) -> Result<Json<Value>, AppError> {
    let view: PriceView = params.price_view.as_deref().unwrap_or_default().parse()?;
    let page = state.sdk.for_country(&country, params.filters).await?;

    let offers = page
        .offers
        .iter()
        .map(|o| -> Result<Value, AppError> {
            let mut item = serde_json::to_value(o)
                .map_err(|e| AppError::internal(format!("failed to serialize offer {}: {e}", o.id())))?;
            if let Value::Object(ref mut map) = item {
                map.insert("price".into(), json!(o.price(view)));
                map.insert("price_suffix".into(), json!(view.suffix()));
                map.insert("is_cheapest".into(), json!(o.is_cheapest_in(&page.offers)));
            }
            Ok(item)
        })
        .collect::<Result<Vec<Value>, AppError>>()?;

    Ok(Json(json!({
        "country": page.country,
        "flag": country_flag(&page.country),
        "price_view": view,
        "count": page.count,
        "cheapest_monthly_price": page.cheapest_monthly_price,
        "facets": page.facets,
        "data": offers,
    })))
}
