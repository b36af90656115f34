//! Shared data types: user identity and the login exchange payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role marker for regular users.
pub const ROLE_USER: &str = "USER";
/// Role marker for privileged (admin) users.
pub const ROLE_ADMIN: &str = "ADMIN";

/// Authenticated user identity as returned by the login exchange and as
/// persisted in durable storage.
///
/// `role` is carried verbatim; unknown markers deserialize fine and simply
/// grant no privileges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Successful login exchange result: the identity plus its bearer token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}
