//! Estimate routes
//!
//! The authoritative price calculation and the pricing table behind it.

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::{EstimateRequest, EstimateResult};
use crate::error::{ApiError, ApiResult};
use crate::estimator::{self, PricingConfig};
use crate::middleware::RequestIdExt;

/// POST /calculate-estimate
///
/// Price a set of rooms and exterior surfaces. Returns `{low, high}`, which
/// is `{0, 0}` when nothing in the request is priceable.
pub async fn calculate_estimate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<EstimateRequest>,
) -> ApiResult<Json<EstimateResult>> {
    tracing::info!(
        request_id = headers.request_id_or_dash(),
        rooms = req.rooms.len(),
        exterior_items = req.exterior_items.len(),
        project_type = ?req.project_type,
        "Calculating estimate"
    );

    let unrecognized = req.unrecognized_fields();
    if !unrecognized.is_empty() {
        if state.settings.strict_enums {
            return Err(ApiError::bad_request(format!(
                "Unrecognized values: {}",
                unrecognized.join(", ")
            )));
        }
        tracing::warn!(
            fields = ?unrecognized,
            "Unrecognized values priced with fallback multipliers"
        );
    }

    Ok(Json(estimator::estimate(&req, &state.pricing)))
}

/// GET /pricing
///
/// The active pricing table.
pub async fn get_pricing(State(state): State<Arc<AppState>>) -> Json<DataResponse<PricingConfig>> {
    Json(DataResponse::new(state.pricing.as_ref().clone()))
}
