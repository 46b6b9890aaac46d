//! Budget get and full-replacement upsert

use axum::{extract::State, Json};

use pocketledger_auth::CurrentOwner;
use pocketledger_types::BudgetEnvelope;

use crate::error::{ApiJson, ApiResult};
use crate::state::AppState;

/// GET /budget: the stored mapping, or an empty one if the owner has
/// never saved a budget.
pub async fn fetch(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
) -> ApiResult<Json<BudgetEnvelope>> {
    let category_limits = state.db.budgets().get(owner.id()).await?;
    Ok(Json(BudgetEnvelope { category_limits }))
}

/// POST /budget: replace the whole mapping and echo what was saved.
/// A category omitted here loses its limit.
pub async fn save(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    ApiJson(envelope): ApiJson<BudgetEnvelope>,
) -> ApiResult<Json<BudgetEnvelope>> {
    let category_limits = state
        .db
        .budgets()
        .set(owner.id(), envelope.category_limits)
        .await?;
    Ok(Json(BudgetEnvelope { category_limits }))
}
