//! `stockdesk-auth`: the login gate in front of the inventory shell.
//!
//! Decoupled from the terminal and from storage. Credentials are held as
//! SHA-256 digests; nothing here ever sees a plaintext password at rest.

pub mod credentials;
pub mod password;

pub use credentials::{AuthError, CredentialTable, DEFAULT_USER, Session};
pub use password::{hash_password, verify_password};
