//! Identity directory: the known users and registration of new ones.
//!
//! The directory never sees passwords. Credential policy lives behind the
//! [`crate::auth::CredentialVerifier`] seam in the service facade.

use crate::error::{Result, TrackerError};
use crate::model::User;
use crate::util::initials;

/// In-memory user directory, insertion-ordered.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    next_id: u64,
}

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a directory from seed users.
    ///
    /// Fresh IDs continue past the highest numeric seed ID.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|user| user.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self { users, next_id }
    }

    /// Look up a user by exact, case-sensitive email match.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Register a new user.
    ///
    /// The avatar is derived from the uppercase initials of `name`.
    ///
    /// # Errors
    ///
    /// Returns `EmailTaken` if the email is already registered.
    pub fn register(&mut self, name: &str, email: &str) -> Result<User> {
        if self.find_by_email(email).is_some() {
            return Err(TrackerError::EmailTaken {
                email: email.to_string(),
            });
        }

        let avatar = initials(name);
        let user = User {
            id: self.next_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: (!avatar.is_empty()).then_some(avatar),
        };
        self.next_id += 1;

        self.users.push(user.clone());
        Ok(user)
    }

    /// Full snapshot in insertion order.
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
