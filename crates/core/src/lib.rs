//! `streamgate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no transport concerns).

pub mod email;
pub mod error;
pub mod id;

pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, ContentId, PackageId, ProfileId, UserId};
