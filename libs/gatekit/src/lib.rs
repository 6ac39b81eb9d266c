#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Gatekit - guarded invocation security
//!
//! Gatekit places a guard in front of a protected operation. The guard owns
//! one sequencing contract: make sure the security context holds an
//! authenticated identity, obtain an access decision for the operation's
//! required attributes, and apply an optional run-as substitution. All
//! security judgment lives behind the `gatekit-sdk` collaborator traits;
//! the model types come from `gatekit-security`.
//!
//! - [`InvocationGuard`] - the sequencing core
//! - [`GuardConfig`] - behavior knobs
//! - [`StaticAttributeCatalog`] - declarative attribute rules
//! - [`providers`] - stock collaborator implementations
//!
//! ```ignore
//! let guard = InvocationGuard::new(authenticator, decider, catalog)
//!     .with_run_as_resolver(run_as);
//!
//! let operation = Operation::of_method("InvoiceService", "approve");
//! let attributes = guard.attributes_for_method("InvoiceService", "approve");
//! guard.guard(&mut cx, &operation, Some(&attributes)).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod guard;
pub mod providers;

pub use catalog::{StaticAttributeCatalog, StaticAttributeCatalogBuilder};
pub use config::GuardConfig;
pub use error::GuardError;
pub use guard::InvocationGuard;

// Re-export the model and SDK surface guard consumers need
pub use gatekit_security::{
    AccessAttribute, AttributeSet, ContextSnapshot, Identity, Operation, SecurityContext,
};
pub use gatekit_sdk::{
    AccessDecider, AccessDeniedError, AttributeSource, AuthenticationError, Authenticator,
    NullRunAsResolver, RunAsResolver,
};
