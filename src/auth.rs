//! Credential verification policies for the tracking service.
//!
//! The service authenticates against a pluggable [`CredentialVerifier`].
//! [`SharedSecret`] is the demo policy: one fixed secret accepted for every
//! account, exactly as the reference client expects. [`HashedSecrets`] is
//! the hardened alternative with per-user SHA-256 digests behind the same
//! seam.

use std::collections::HashMap;
use std::sync::Mutex;

use sha2::{Digest, Sha256};

use crate::model::User;

/// Checks a password for a user.
pub trait CredentialVerifier: Send + Sync {
    /// Return true if `password` is valid for `user`.
    fn verify(&self, user: &User, password: &str) -> bool;

    /// Record credentials for a newly registered user.
    ///
    /// Policies that keep no per-user state ignore this.
    fn enroll(&self, user: &User, password: &str) {
        let _ = (user, password);
    }
}

/// Accepts one fixed secret for every account.
///
/// This is intentionally a toy policy for demo sessions, not credential
/// storage; the default secret is the literal `"password"`.
#[derive(Debug, Clone)]
pub struct SharedSecret {
    secret: String,
}

impl SharedSecret {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// The reference demo secret.
    #[must_use]
    pub fn demo() -> Self {
        Self::new("password")
    }
}

impl Default for SharedSecret {
    fn default() -> Self {
        Self::demo()
    }
}

impl CredentialVerifier for SharedSecret {
    fn verify(&self, _user: &User, password: &str) -> bool {
        password == self.secret
    }
}

/// Per-user SHA-256 password digests keyed by user ID.
///
/// Digests are enrolled at registration or pre-loaded with
/// [`HashedSecrets::with_password`]. Users without a digest never verify.
#[derive(Debug, Default)]
pub struct HashedSecrets {
    digests: Mutex<HashMap<String, String>>,
}

impl HashedSecrets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a digest for an existing user.
    #[must_use]
    pub fn with_password(self, user_id: impl Into<String>, password: &str) -> Self {
        if let Ok(mut digests) = self.digests.lock() {
            digests.insert(user_id.into(), hex_digest(password));
        }
        self
    }
}

impl CredentialVerifier for HashedSecrets {
    fn verify(&self, user: &User, password: &str) -> bool {
        self.digests.lock().is_ok_and(|digests| {
            digests
                .get(&user.id)
                .is_some_and(|digest| *digest == hex_digest(password))
        })
    }

    fn enroll(&self, user: &User, password: &str) {
        if let Ok(mut digests) = self.digests.lock() {
            digests.insert(user.id.clone(), hex_digest(password));
        }
    }
}

fn hex_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
