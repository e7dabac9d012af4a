use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListProvidersParams {
    pub country: Option<String>,
}

/// GET /api/providers?country=italy
pub async fn list_providers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListProvidersParams>,
) -> Result<Json<Value>, AppError> {
    let providers = state
        .sdk
        .blocking()
        .providers()
        .list(params.country.as_deref().filter(|c| !c.is_empty()));

    let count = providers.len();
    Ok(Json(json!({ "data": providers, "count": count })))
}
