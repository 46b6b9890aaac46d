//! Request identity guard for axum
//!
//! The single authorization boundary: extracts the bearer token,
//! verifies it, and attaches the resolved [`Owner`] to the request
//! before any handler or store runs. Missing, malformed, expired or
//! tampered credentials short-circuit with a 401 JSON response.
//!
//! Stores still filter by owner id themselves; the guard being the
//! only token check does not make it the only ownership check.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap, StatusCode},
    response::Response,
};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use pocketledger_types::Owner;

use crate::error::AuthError;
use crate::jwt::TokenService;

/// Identity guard layer. Apply with `route_layer` to the protected
/// sub-router only; signup/login stay outside it.
#[derive(Clone)]
pub struct GuardLayer {
    tokens: Arc<TokenService>,
}

impl GuardLayer {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S> Layer<S> for GuardLayer {
    type Service = Guard<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Guard {
            inner,
            tokens: self.tokens.clone(),
        }
    }
}

/// Identity guard middleware service
#[derive(Clone)]
pub struct Guard<S> {
    inner: S,
    tokens: Arc<TokenService>,
}

impl<S> Service<Request> for Guard<S>
where
    S: Service<Request, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let tokens = self.tokens.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            match resolve_owner(req.headers(), &tokens) {
                Ok(owner) => {
                    let (mut parts, body) = req.into_parts();
                    parts.extensions.insert(owner);
                    inner.call(Request::from_parts(parts, body)).await
                }
                Err(e) => Ok(guard_error_response(e)),
            }
        })
    }
}

/// Resolve the owner identity from request headers, or fail.
fn resolve_owner(headers: &HeaderMap, tokens: &TokenService) -> Result<Owner, AuthError> {
    let token = extract_bearer(headers).ok_or(AuthError::MissingCredentials)?;
    tokens.verify(token).map(Owner)
}

/// Pull the token out of a standard `Authorization: Bearer <token>`
/// header. Anything else counts as no credential at all.
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get("Authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn guard_error_response(error: AuthError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({ "error": error.client_message() });

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

/// Extractor handing the guard-resolved owner to handlers.
///
/// Rejects with 401 when the guard did not run (a route wired outside
/// the guarded sub-router by mistake).
pub struct CurrentOwner(pub Owner);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentOwner
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Owner>()
            .copied()
            .map(CurrentOwner)
            .ok_or_else(|| guard_error_response(AuthError::MissingCredentials))
    }
}
