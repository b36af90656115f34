//! Authenticated JSON API client.
//!
//! ARCHITECTURE
//! ============
//! Every request flows through two explicit hooks composed around the
//! transport call: `attach_bearer` runs before transmission and
//! `check_authorized` runs once the response status is known, before the
//! result reaches the caller. A 401 from any request tears down the shared
//! session (idempotently) and asks the navigator for the login page, then
//! still surfaces the failure at the call site — invalidation is a side
//! effect, never a recovery.
//!
//! There is no retry, token refresh, or proactive expiry check; the client
//! learns a credential is dead only when the backend says so.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::nav::{LOGIN_PATH, Navigator};
use crate::session::SessionStore;
use crate::types::{AuthPayload, ROLE_ADMIN, ROLE_USER, User};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authorization rejected: {message}")]
    Unauthorized { message: String },
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// JSON API client bound to a fixed base URL and a shared session.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Client for the API rooted at `base_url` (e.g. `http://host:8080/api`).
    #[must_use]
    pub fn new(base_url: &str, session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
            session,
            navigator,
        }
    }

    /// Issue a request against `path` and hand back the parsed JSON body.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on a 401 (after session teardown), `Server` for any
    /// other non-success status, `Http` for transport failures.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let request = self.http.request(method, &url);
        let request = self.attach_bearer(request);
        let request = if let Some(json) = body {
            request.json(&json)
        } else {
            request
        };

        let response = request.send().await?;
        let status = response.status();
        let value = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| Value::Null);

        self.check_authorized(status, &value)?;

        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: value.to_string(),
            });
        }

        Ok(value)
    }

    /// Pre-transmission hook: attach the bearer credential when a session
    /// token is held, otherwise send the request unmodified.
    fn attach_bearer(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.session.token();
        if token.is_empty() {
            return request;
        }
        request.header(AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Post-response hook: on 401, clear the session, route to the login
    /// page, and propagate the rejection to the caller.
    fn check_authorized(&self, status: StatusCode, body: &Value) -> Result<(), ApiError> {
        if status != StatusCode::UNAUTHORIZED {
            return Ok(());
        }

        tracing::debug!("backend rejected credential; clearing session");
        self.session.logout();
        self.navigator.navigate_to(LOGIN_PATH);

        Err(ApiError::Unauthorized {
            message: body.to_string(),
        })
    }

    /// `GET` the given path.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None).await
    }

    /// `POST` the given path with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        self.request(Method::POST, path, body).await
    }

    /// `PATCH` the given path with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn patch(&self, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        self.request(Method::PATCH, path, body).await
    }

    /// `DELETE` the given path.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, None).await
    }

    /// Demo login exchange: `POST /auth/login`, adopt the returned
    /// `(user, token)` pair into the session, return the user.
    ///
    /// # Errors
    ///
    /// Request errors as in [`ApiClient::request`]; `InvalidJson` when the
    /// response is not a `{user, token}` payload.
    pub async fn login(&self, email: &str, name: &str, admin: bool) -> Result<User, ApiError> {
        let role = if admin { ROLE_ADMIN } else { ROLE_USER };
        let body = serde_json::json!({
            "email": email,
            "name": name,
            "demo": true,
            "role": role,
        });

        let value = self.request(Method::POST, "/auth/login", Some(body)).await?;
        let payload: AuthPayload = serde_json::from_value(value)?;
        self.session.set_auth(payload.user.clone(), payload.token);
        Ok(payload.user)
    }
}
