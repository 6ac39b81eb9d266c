//! Collaborator traits consumed by the invocation guard.
//!
//! The guard owns sequencing only; every security judgment lives behind one
//! of these traits. Implementations are shared as `Arc<dyn ...>` and must be
//! safe to call from any task.

use async_trait::async_trait;

use gatekit_security::{AccessAttribute, AttributeSet, Identity, Operation};

use crate::error::{AccessDeniedError, AuthenticationError};

/// Verifies the identity the caller presented.
///
/// The guard hands over the identity found in the context slot and, on
/// success, stores the returned identity in its place. Implementations are
/// responsible for marking their result authenticated; the guard never
/// flips that flag itself.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange a presented identity for a verified one.
    ///
    /// # Errors
    ///
    /// - `BadCredentials` if the principal is unknown or the assertion does
    ///   not match
    /// - `Disabled` / `CredentialsExpired` for principals that exist but
    ///   must not authenticate
    /// - `ServiceUnavailable` / `Internal` for provider trouble
    async fn authenticate(&self, identity: Identity) -> Result<Identity, AuthenticationError>;
}

/// Decides whether an identity may perform a protected operation.
#[async_trait]
pub trait AccessDecider: Send + Sync {
    /// Return `Ok(())` to approve the invocation.
    ///
    /// # Errors
    ///
    /// `AccessDeniedError` when the identity does not satisfy the required
    /// attributes. The error travels to the guarded caller unchanged.
    async fn decide(
        &self,
        identity: &Identity,
        operation: &Operation,
        attributes: &AttributeSet,
    ) -> Result<(), AccessDeniedError>;
}

/// Optionally substitutes an elevated identity for the duration of one call.
///
/// Consulted only after the access decision approved the invocation.
#[async_trait]
pub trait RunAsResolver: Send + Sync {
    /// Build the substitute identity, or `None` to leave the current one in
    /// place.
    async fn build_run_as(
        &self,
        identity: &Identity,
        operation: &Operation,
        attributes: &AttributeSet,
    ) -> Option<Identity>;
}

/// Supplies the attribute tokens declared for secured types and methods.
///
/// Lookups must be pure and deterministic: the same input always yields the
/// same tokens in the same order.
pub trait AttributeSource: Send + Sync {
    /// Raw ordered tokens declared for a secured type. Empty means the type
    /// declares nothing and is public.
    fn type_attributes(&self, target: &str) -> Vec<AccessAttribute>;

    /// Raw ordered tokens declared for one method of a secured type. There
    /// is no fallback to the type-level declaration.
    fn method_attributes(&self, target: &str, method: &str) -> Vec<AccessAttribute>;
}

/// A resolver that never substitutes. The guard's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRunAsResolver;

#[async_trait]
impl RunAsResolver for NullRunAsResolver {
    async fn build_run_as(
        &self,
        _identity: &Identity,
        _operation: &Operation,
        _attributes: &AttributeSet,
    ) -> Option<Identity> {
        None
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_run_as_never_substitutes() {
        let resolver = NullRunAsResolver;
        let identity = Identity::builder()
            .principal("alice")
            .authenticated(true)
            .build();
        let operation = Operation::of_method("InvoiceService", "approve");
        let attributes = AttributeSet::from_tokens(["ROLE_SUPERVISOR"]);

        let run_as = resolver
            .build_run_as(&identity, &operation, &attributes)
            .await;

        assert!(run_as.is_none());
    }
}
