//! Budget-vs-actual report

use axum::{extract::State, Json};

use pocketledger_auth::CurrentOwner;
use pocketledger_insights::SpendingReport;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /insights returns per-category spending health against the owner's
/// budget, the worst overspend, and whole-ledger totals. Derived on
/// demand from the two stores, never persisted.
pub async fn fetch(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
) -> ApiResult<Json<SpendingReport>> {
    let limits = state.db.budgets().get(owner.id()).await?;
    let transactions = state.db.transactions().list(owner.id()).await?;

    Ok(Json(pocketledger_insights::report(&limits, &transactions)))
}
