//! Session value types and the operations that replace them.
//!
//! A [`Session`] is replaced as a unit by the [`SessionStore`] operations, it
//! is never patched field by field. The credential and identity live in one
//! optional pair so that one can never be present without the other.

pub mod storage;
pub mod store;

use std::fmt;

use crate::model::user::{Role, UserDto};

pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::SessionStore;

/// The authenticated account acting in this session
pub type Identity = UserDto;

/// Opaque bearer token, redacted from `Debug` output
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, `None` for a blank one
    pub fn new(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        Some(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Authenticated {
    identity: Identity,
    credential: Credential,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    auth: Option<Authenticated>,
    resolved: bool,
}

impl Session {
    /// Process start, before the persisted session has been looked at
    pub fn pending() -> Self {
        Self::default()
    }

    /// Resolved with nobody logged in
    pub fn anonymous() -> Self {
        Self {
            auth: None,
            resolved: true,
        }
    }

    pub fn authenticated(identity: Identity, credential: Credential) -> Self {
        Self {
            auth: Some(Authenticated {
                identity,
                credential,
            }),
            resolved: true,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.auth.as_ref().map(|auth| &auth.identity)
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.auth.as_ref().map(|auth| &auth.credential)
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }
}
