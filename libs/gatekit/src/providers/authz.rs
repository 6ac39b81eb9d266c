//! Authority-matching access decider.

use async_trait::async_trait;

use gatekit_security::{AttributeSet, Identity, Operation};
use gatekit_sdk::{AccessDecider, AccessDeniedError};

/// Approves an invocation when the identity holds at least one granted
/// authority equal to a required attribute.
///
/// An optional prefix narrows which attributes the decider treats as its
/// own; the usual convention is `ROLE_`. When no attribute in the set falls
/// under its competence the decider denies rather than waves the call
/// through.
#[derive(Debug, Clone, Default)]
pub struct AuthorityDecider {
    prefix: Option<String>,
}

impl AuthorityDecider {
    /// Decider that considers every attribute.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decider that considers only attributes starting with `prefix`.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn supports(&self, token: &str) -> bool {
        self.prefix.as_deref().is_none_or(|p| token.starts_with(p))
    }
}

#[async_trait]
impl AccessDecider for AuthorityDecider {
    async fn decide(
        &self,
        identity: &Identity,
        operation: &Operation,
        attributes: &AttributeSet,
    ) -> Result<(), AccessDeniedError> {
        let mut considered = attributes
            .iter()
            .filter(|a| self.supports(a.as_str()))
            .peekable();

        if considered.peek().is_none() {
            return Err(AccessDeniedError::new(
                operation.to_string(),
                "no supported attributes to decide on",
            ));
        }

        if considered.any(|a| identity.has_authority(a.as_str())) {
            return Ok(());
        }

        Err(AccessDeniedError::new(
            operation.to_string(),
            format!(
                "{} holds none of the required authorities",
                identity.principal()
            ),
        ))
    }
}
