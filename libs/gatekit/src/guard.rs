//! The invocation guard.

use std::sync::Arc;

use gatekit_security::{AttributeSet, Operation, SecurityContext};
use gatekit_sdk::{
    AccessDecider, AttributeSource, Authenticator, NullRunAsResolver, RunAsResolver,
};

use crate::config::GuardConfig;
use crate::error::GuardError;

/// Guards protected operations behind an authentication check, an access
/// decision, and an optional run-as substitution.
///
/// The guard owns sequencing only; every judgment is delegated to the
/// collaborators it was built with. It keeps no state between calls, so one
/// guard can serve any number of concurrent invocations:
///
/// ```ignore
/// let guard = InvocationGuard::new(authenticator, decider, catalog)
///     .with_run_as_resolver(run_as);
///
/// let operation = Operation::of_method("InvoiceService", "approve");
/// let attributes = guard.attributes_for_method("InvoiceService", "approve");
/// guard.guard(&mut cx, &operation, Some(&attributes)).await?;
/// ```
pub struct InvocationGuard {
    authenticator: Arc<dyn Authenticator>,
    access_decider: Arc<dyn AccessDecider>,
    run_as_resolver: Arc<dyn RunAsResolver>,
    attribute_source: Arc<dyn AttributeSource>,
    always_reauthenticate: bool,
    reject_public_invocations: bool,
}

impl InvocationGuard {
    /// Create a guard over the three required collaborator roles.
    ///
    /// The run-as resolver defaults to [`NullRunAsResolver`]; both behavior
    /// flags default to off.
    #[must_use]
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        access_decider: Arc<dyn AccessDecider>,
        attribute_source: Arc<dyn AttributeSource>,
    ) -> Self {
        Self {
            authenticator,
            access_decider,
            run_as_resolver: Arc::new(NullRunAsResolver),
            attribute_source,
            always_reauthenticate: false,
            reject_public_invocations: false,
        }
    }

    /// Replace the default no-op run-as resolver.
    #[must_use]
    pub fn with_run_as_resolver(mut self, resolver: Arc<dyn RunAsResolver>) -> Self {
        self.run_as_resolver = resolver;
        self
    }

    /// Re-authenticate on every guarded call, even when the slot already
    /// holds an authenticated identity.
    #[must_use]
    pub fn with_always_reauthenticate(mut self, always: bool) -> Self {
        self.always_reauthenticate = always;
        self
    }

    /// Refuse calls whose attribute set is absent or empty instead of
    /// treating them as public.
    #[must_use]
    pub fn with_reject_public_invocations(mut self, reject: bool) -> Self {
        self.reject_public_invocations = reject;
        self
    }

    /// Apply a configuration block wholesale.
    #[must_use]
    pub fn with_config(mut self, config: &GuardConfig) -> Self {
        self.always_reauthenticate = config.always_reauthenticate;
        self.reject_public_invocations = config.reject_public_invocations;
        self
    }

    /// Guard one protected invocation.
    ///
    /// Ensures `cx` holds an authenticated identity, obtains an access
    /// decision for `operation` against `attributes`, and applies an
    /// optional run-as substitution. `None` or empty `attributes` mark the
    /// operation public: the call returns immediately and no collaborator
    /// is consulted.
    ///
    /// On success the slot holds the identity the protected operation must
    /// execute as. On failure the slot is untouched, except that a
    /// re-authentication completed before the failure stays in place.
    ///
    /// # Errors
    ///
    /// - [`GuardError::InvalidOperation`] if `operation` does not name a
    ///   target
    /// - [`GuardError::AuthenticationRequired`] if attributes demand
    ///   security but the slot is empty
    /// - [`GuardError::PublicInvocationRejected`] under
    ///   `reject_public_invocations`
    /// - [`GuardError::Authentication`] / [`GuardError::AccessDenied`]
    ///   passed through from the collaborators unchanged
    // Cognitive complexity is inflated by tracing macro expansion.
    #[allow(clippy::cognitive_complexity)]
    #[tracing::instrument(skip_all, fields(operation = %operation))]
    pub async fn guard(
        &self,
        cx: &mut SecurityContext,
        operation: &Operation,
        attributes: Option<&AttributeSet>,
    ) -> Result<(), GuardError> {
        if operation.is_unnamed() {
            return Err(GuardError::InvalidOperation);
        }

        let Some(attributes) = attributes.filter(|a| !a.is_empty()) else {
            if self.reject_public_invocations {
                tracing::debug!("public invocation refused by configuration");
                return Err(GuardError::PublicInvocationRejected {
                    operation: operation.to_string(),
                });
            }
            tracing::debug!("public operation, authentication not attempted");
            return Ok(());
        };

        tracing::debug!(attributes = %attributes, "guarding protected operation");

        let Some(current) = cx.current() else {
            tracing::debug!("no identity in the context slot");
            return Err(GuardError::AuthenticationRequired);
        };

        let authenticated = if current.is_authenticated() && !self.always_reauthenticate {
            tracing::debug!(
                principal = %current.principal(),
                "reusing previously authenticated identity"
            );
            current.clone()
        } else {
            // The slot keeps its pre-call value if authentication fails.
            let verified = self.authenticator.authenticate(current.clone()).await?;
            tracing::debug!(principal = %verified.principal(), "authentication successful");
            cx.set_current(verified.clone());
            verified
        };

        self.access_decider
            .decide(&authenticated, operation, attributes)
            .await?;
        tracing::debug!("authorization successful");

        match self
            .run_as_resolver
            .build_run_as(&authenticated, operation, attributes)
            .await
        {
            Some(run_as) => {
                tracing::debug!(
                    principal = %run_as.principal(),
                    "switching to run-as identity"
                );
                cx.set_current(run_as);
            }
            None => {
                tracing::debug!("run-as resolver left the identity unchanged");
            }
        }

        Ok(())
    }

    /// Ordered attribute set declared for a secured type.
    ///
    /// Copies the source's raw tokens, preserving declaration order and
    /// duplicates. The result may be empty, which [`Self::guard`] treats as
    /// public.
    #[must_use]
    pub fn attributes_for_type(&self, target: &str) -> AttributeSet {
        self.attribute_source
            .type_attributes(target)
            .into_iter()
            .collect()
    }

    /// Ordered attribute set declared for one method of a secured type.
    #[must_use]
    pub fn attributes_for_method(&self, target: &str, method: &str) -> AttributeSet {
        self.attribute_source
            .method_attributes(target, method)
            .into_iter()
            .collect()
    }
}
