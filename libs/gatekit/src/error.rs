//! Guard errors.

use thiserror::Error;

use gatekit_sdk::{AccessDeniedError, AuthenticationError};

/// Errors produced by a guarded invocation.
///
/// Collaborator failures pass through transparently, so callers observe
/// exactly what the authenticator or decider signaled.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The protected operation handle does not name a target.
    #[error("protected operation handle does not name a target")]
    InvalidOperation,

    /// The required attributes demand security but no identity was placed
    /// in the context slot.
    #[error("no identity present in the security context")]
    AuthenticationRequired,

    /// A public invocation reached a guard configured to refuse them.
    #[error("public invocation of {operation} rejected by configuration")]
    PublicInvocationRejected {
        /// Rendering of the operation handle.
        operation: String,
    },

    /// The authenticator refused or failed.
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// The access decider denied the invocation.
    #[error(transparent)]
    AccessDenied(#[from] AccessDeniedError),
}
