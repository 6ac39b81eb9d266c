#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Gatekit collaborator SDK
//!
//! This crate defines the contracts between the invocation guard and the
//! security providers it orchestrates:
//!
//! - [`Authenticator`] - verifies presented identities
//! - [`AccessDecider`] - approves or denies protected operations
//! - [`RunAsResolver`] - optional identity substitution for one call
//! - [`AttributeSource`] - declared attribute tokens for secured targets
//! - [`AuthenticationError`] / [`AccessDeniedError`] - collaborator errors
//!
//! The guard itself lives in the `gatekit` crate; provider implementations
//! only need this SDK and the `gatekit-security` model types.

pub mod api;
pub mod error;

// Re-export main types at crate root
pub use api::{AccessDecider, AttributeSource, Authenticator, NullRunAsResolver, RunAsResolver};
pub use error::{AccessDeniedError, AuthenticationError};
