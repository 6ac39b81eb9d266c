//! Error types signaled by gatekit collaborators.

use thiserror::Error;

/// Errors an `Authenticator` can signal.
///
/// The guard propagates these to the guarded caller unchanged; it never
/// retries, falls back, or substitutes an anonymous identity.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// The principal is unknown or the assertion does not match.
    #[error("bad credentials for principal {principal}")]
    BadCredentials {
        /// The principal that failed to authenticate.
        principal: String,
    },

    /// The principal exists but is administratively disabled.
    #[error("principal {principal} is disabled")]
    Disabled {
        /// The disabled principal.
        principal: String,
    },

    /// The presented assertion is no longer valid.
    #[error("credentials for principal {principal} have expired")]
    CredentialsExpired {
        /// The principal whose credentials expired.
        principal: String,
    },

    /// The authentication backend is not reachable or not ready.
    #[error("authentication service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal authentication error: {0}")]
    Internal(String),
}

/// Denial signaled by an `AccessDecider`.
///
/// A denial is a judgment, not a transport failure, so it is a single
/// reason-carrying type rather than a taxonomy. The guard propagates it
/// unchanged and never consults the run-as resolver afterwards.
#[derive(Debug, Error)]
#[error("access to {operation} denied: {reason}")]
pub struct AccessDeniedError {
    /// Rendering of the protected operation handle.
    pub operation: String,
    /// Why the decider refused.
    pub reason: String,
}

impl AccessDeniedError {
    /// Create a denial for the given operation rendering.
    #[must_use]
    pub fn new(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}
