//! Signup and login

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::{ApiJson, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /auth/signup: 201 with a fresh token, 400 when the email is
/// already registered.
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<Credentials>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let registration = state.auth.register(&creds.email, &creds.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: registration.token,
        }),
    ))
}

/// POST /auth/login: 200 with a fresh token, 400 for an unknown
/// email, 401 for a wrong password.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<Credentials>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.auth.authenticate(&creds.email, &creds.password).await?;
    Ok(Json(TokenResponse { token }))
}
