//! Owner-scoped transaction CRUD
//!
//! Every handler takes the guard-resolved owner; the repository
//! filters on it again in SQL. A client-supplied owner id does not
//! exist in any payload shape.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use pocketledger_auth::CurrentOwner;
use pocketledger_types::{NewTransaction, Transaction, TransactionPatch};

use crate::error::{ApiJson, ApiResult};
use crate::state::AppState;

/// GET /transactions: the owner's ledger, most recent date first.
pub async fn list(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.db.transactions().list(owner.id()).await?;
    Ok(Json(transactions))
}

/// POST /transactions: 201 with the stored record.
pub async fn create(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    ApiJson(new): ApiJson<NewTransaction>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let transaction = state.db.transactions().create(owner.id(), new).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// PUT /transactions/:id: 200 with the updated record, 404 when the
/// id is not this owner's.
pub async fn update(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<Uuid>,
    ApiJson(patch): ApiJson<TransactionPatch>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state.db.transactions().update(owner.id(), id, patch).await?;
    Ok(Json(transaction))
}

/// DELETE /transactions/:id: 200 with an empty object, 404 when the
/// id is not this owner's.
pub async fn remove(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    state.db.transactions().delete(owner.id(), id).await?;
    Ok(Json(json!({})))
}
