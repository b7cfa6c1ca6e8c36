//! `stockdesk-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO). Every other crate in
//! the workspace reports user-facing failures through [`DomainError`].

pub mod count;
pub mod error;

pub use count::parse_count;
pub use error::{DomainError, DomainResult};
