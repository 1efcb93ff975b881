//! REST API helpers for the clinic backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. The configured
//! timeout covers the whole exchange, body read included. Server-side (SSR)
//! and native builds: stubs returning [`ApiError::Unavailable`], since these
//! endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request re-reads the persisted session record and, when it holds a
//! token, attaches `Authorization: Bearer <token>`. No header is cached
//! between requests, so deleting the record on logout is enough to make all
//! later calls unauthenticated.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Non-2xx responses keep
//! the server's `{message}` so forms can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{ApiError, LoginResponse, RegisterRequest};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::PersistedSession;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// `Authorization` header value derived from the raw persisted record.
///
/// Unreadable records and blank tokens yield no header.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(raw_record: Option<&str>) -> Option<String> {
    let record: PersistedSession = serde_json::from_str(raw_record?).ok()?;
    let token = record.token.trim();
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {token}"))
}

/// Map a non-2xx status and its raw body to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
fn api_config() -> &'static crate::config::ApiConfig {
    static CONFIG: std::sync::OnceLock<crate::config::ApiConfig> = std::sync::OnceLock::new();
    CONFIG.get_or_init(crate::config::ApiConfig::from_build_env)
}

/// Attach JSON headers and the bearer credential, if one is persisted.
#[cfg(feature = "hydrate")]
fn prepare(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    use crate::util::storage::{BrowserStorage, DurableStorage};

    let builder = builder
        .header("Accept", "application/json")
        .header("Content-Type", "application/json");
    match bearer_header(BrowserStorage.get(crate::state::session::STORAGE_KEY).as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Race `exchange` against `deadline`; whichever finishes first decides.
#[cfg(any(test, feature = "hydrate"))]
async fn within_deadline<T, F, D>(exchange: F, deadline: D) -> Result<T, ApiError>
where
    F: std::future::Future<Output = Result<T, ApiError>>,
    D: std::future::Future<Output = ()>,
{
    use futures::future::{Either, select};

    match select(Box::pin(exchange), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Decode a 2xx login body.
#[cfg(any(test, feature = "hydrate"))]
fn decode_login(body: &str) -> Result<LoginResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send `request` and read the whole body, all under one timeout.
///
/// Returns the body text of a 2xx response.
#[cfg(feature = "hydrate")]
async fn send(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<String, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let timeout_ms = u32::try_from(api_config().timeout.as_millis()).unwrap_or(u32::MAX);

    let exchange = async move {
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if resp.ok() {
            resp.text().await.map_err(|e| ApiError::Network(e.to_string()))
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(status_error(status, &body))
        }
    };
    within_deadline(exchange, gloo_timers::future::TimeoutFuture::new(timeout_ms)).await
}

/// Exchange credentials for a user record and token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, timeout, non-2xx status, or an
/// undecodable response body.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let url = api_config().endpoint(LOGIN_PATH);
        let raw = send(prepare(gloo_net::http::Request::post(&url)).json(&body)).await?;
        decode_login(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create a customer account via `POST /auth/register`.
///
/// The response body is ignored; callers log in afterwards to get a token.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, timeout, or non-2xx status.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_config().endpoint(REGISTER_PATH);
        send(prepare(gloo_net::http::Request::post(&url)).json(request)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the remote session via `POST /auth/logout`.
///
/// Must be called before the local record is deleted, since the bearer token
/// is read from it.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, timeout, or non-2xx status.
/// The response body is ignored.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_config().endpoint(LOGOUT_PATH);
        send(prepare(gloo_net::http::Request::post(&url)).build()).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
