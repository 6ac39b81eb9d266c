//! Prefix-marked run-as substitution.

use async_trait::async_trait;

use gatekit_security::{AttributeSet, Identity, Operation};
use gatekit_sdk::RunAsResolver;

const DEFAULT_ATTRIBUTE_PREFIX: &str = "RUN_AS_";
const DEFAULT_ROLE_PREFIX: &str = "ROLE_";

/// Builds a run-as substitute when the required attributes carry run-as
/// markers.
///
/// Every attribute starting with the marker prefix mints one authority:
/// the role prefix followed by the full marker, so `RUN_AS_SERVER` mints
/// `ROLE_RUN_AS_SERVER` under the defaults. The substitute keeps the
/// principal and assertion, is marked authenticated, and lists the minted
/// authorities ahead of the original ones. Without any marker the resolver
/// leaves the identity alone.
#[derive(Debug, Clone)]
pub struct PrefixRunAsResolver {
    attribute_prefix: String,
    role_prefix: String,
}

impl PrefixRunAsResolver {
    /// Resolver with the `RUN_AS_` marker and `ROLE_` mint prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with custom marker and mint prefixes.
    #[must_use]
    pub fn with_prefixes(
        attribute_prefix: impl Into<String>,
        role_prefix: impl Into<String>,
    ) -> Self {
        Self {
            attribute_prefix: attribute_prefix.into(),
            role_prefix: role_prefix.into(),
        }
    }
}

impl Default for PrefixRunAsResolver {
    fn default() -> Self {
        Self {
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_owned(),
            role_prefix: DEFAULT_ROLE_PREFIX.to_owned(),
        }
    }
}

#[async_trait]
impl RunAsResolver for PrefixRunAsResolver {
    async fn build_run_as(
        &self,
        identity: &Identity,
        _operation: &Operation,
        attributes: &AttributeSet,
    ) -> Option<Identity> {
        let minted: Vec<String> = attributes
            .iter()
            .filter(|a| a.as_str().starts_with(&self.attribute_prefix))
            .map(|a| format!("{}{a}", self.role_prefix))
            .collect();

        if minted.is_empty() {
            return None;
        }

        let mut authorities = minted;
        authorities.extend(identity.authorities().iter().cloned());

        let mut builder = Identity::builder()
            .principal(identity.principal())
            .authenticated(true)
            .authorities(authorities);
        if let Some(assertion) = identity.assertion() {
            builder = builder.assertion(assertion.clone());
        }

        Some(builder.build())
    }
}
