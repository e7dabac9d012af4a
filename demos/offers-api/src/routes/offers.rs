use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use energy_offers_sdk::FilterParams;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/offers?country=france&energyType=green&sortBy=price-asc
///
/// Filter and sort offers across every country. Unknown query keys are
/// ignored; an empty match list is a normal 200 response.
pub async fn list_offers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Value>, AppError> {
    let offers = state.sdk.search(params).await?;

    let count = offers.len();
    Ok(Json(json!({ "data": offers, "count": count })))
}

/// GET /api/offers/:id
pub async fn get_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let lookup = id.clone();
    let offer = state.sdk.run(move |s| s.offers().get(&lookup)).await?;

    match offer {
        Some(o) => Ok(Json(json!({ "data": o }))),
        None => Err(AppError::not_found(format!("No offer with id '{id}'"))),
    }
}
