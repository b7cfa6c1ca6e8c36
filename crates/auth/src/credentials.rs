use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::password::{hash_password, verify_password};

/// The single built-in account.
pub const DEFAULT_USER: &str = "admin";
const DEFAULT_PASSWORD_HASH: &str =
    "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user or wrong password; the two are not told apart.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Proof of a successful login, handed to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: String,
}

/// Username to password digest.
#[derive(Debug, Clone)]
pub struct CredentialTable {
    users: HashMap<String, String>,
}

impl CredentialTable {
    pub fn empty() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Register `user` with a plaintext password, replacing any previous entry.
    pub fn insert(&mut self, user: impl Into<String>, password: &str) {
        self.users.insert(user.into(), hash_password(password));
    }

    pub fn contains(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    pub fn login(&self, user: &str, password: &str) -> Result<Session, AuthError> {
        let verified = self
            .users
            .get(user)
            .is_some_and(|stored| verify_password(stored, password));

        if !verified {
            tracing::warn!(user, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user, "login accepted");
        Ok(Session {
            user: user.to_string(),
        })
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        let mut users = HashMap::new();
        users.insert(DEFAULT_USER.to_string(), DEFAULT_PASSWORD_HASH.to_string());
        Self { users }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_account_logs_in() {
        let session = CredentialTable::default().login("admin", "password").unwrap();
        assert_eq!(session.user, "admin");
    }

    #[test]
    fn wrong_password_and_unknown_user_look_the_same() {
        let table = CredentialTable::default();
        assert_eq!(
            table.login("admin", "Password"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            table.login("root", "password"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(table.login("", ""), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn default_digest_matches_default_password() {
        assert_eq!(hash_password("password"), DEFAULT_PASSWORD_HASH);
    }

    #[test]
    fn inserted_user_replaces_previous_password() {
        let mut table = CredentialTable::empty();
        assert!(!table.contains("clerk"));

        table.insert("clerk", "one");
        table.insert("clerk", "two");

        assert!(table.login("clerk", "one").is_err());
        assert!(table.login("clerk", "two").is_ok());
    }
}
