//! Client-side session and transport plumbing for the cinema booking API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend authenticates requests with opaque bearer tokens minted by
//! its login exchange. This crate keeps the current `(user, token)` pair in
//! a [`SessionStore`], persists it through a pluggable [`SessionStorage`]
//! capability, and routes every API call through an [`ApiClient`] whose
//! hooks attach the credential before transmission and tear the session
//! down when the backend answers 401.
//!
//! Nothing here retries, refreshes, or proactively expires tokens: the
//! client discovers invalidity only when the backend rejects a request,
//! performs one global teardown, and hands the failure back to the caller.

pub mod api;
pub mod nav;
pub mod session;
pub mod storage;
pub mod types;

pub use api::{ApiClient, ApiError};
pub use nav::{LOGIN_PATH, Navigator, NoopNavigator};
pub use session::SessionStore;
pub use storage::{FileStorage, MemoryStorage, NoopStorage, SessionStorage};
pub use types::{AuthPayload, ROLE_ADMIN, ROLE_USER, User};
