//! Caregiver search handler.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{CaregiverSearch, CaregiverSummary};
use crate::errors::AppResult;

/// Create caregiver routes
pub fn caregiver_routes() -> Router<AppState> {
    Router::new().route("/", get(search_caregivers))
}

/// Search caregivers by service type, city, rate, and verification
#[utoipa::path(
    get,
    path = "/caregivers",
    tag = "Caregivers",
    params(CaregiverSearch),
    responses(
        (status = 200, description = "Caregivers matching every supplied filter", body = [CaregiverSummary])
    )
)]
pub async fn search_caregivers(
    State(state): State<AppState>,
    Query(criteria): Query<CaregiverSearch>,
) -> AppResult<Json<Vec<CaregiverSummary>>> {
    let results = state.caregiver_search.search(criteria).await?;
    Ok(Json(results))
}
