//! Fixed-registry authenticator.

use std::collections::HashMap;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use gatekit_security::Identity;
use gatekit_sdk::{AuthenticationError, Authenticator};

/// Authenticator backed by a fixed principal registry.
///
/// Meant for development setups and tests: it exchanges an identity whose
/// assertion matches the registered secret for an authenticated identity
/// carrying the registered authorities. The assertion is not carried into
/// the result.
pub struct StaticAuthenticator {
    principals: HashMap<String, PrincipalRecord>,
}

struct PrincipalRecord {
    secret: SecretString,
    authorities: Vec<String>,
    enabled: bool,
}

impl StaticAuthenticator {
    /// Create an authenticator from configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticAuthenticatorConfig) -> Self {
        let principals = cfg
            .principals
            .iter()
            .map(|p| {
                (
                    p.principal.clone(),
                    PrincipalRecord {
                        secret: p.secret.clone().into(),
                        authorities: p.authorities.clone(),
                        enabled: p.enabled,
                    },
                )
            })
            .collect();

        Self { principals }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, identity: Identity) -> Result<Identity, AuthenticationError> {
        // Unknown principals and wrong secrets are indistinguishable to the
        // caller.
        let Some(record) = self.principals.get(identity.principal()) else {
            return Err(bad_credentials(identity.principal()));
        };
        let Some(presented) = identity.assertion() else {
            return Err(bad_credentials(identity.principal()));
        };
        if presented.expose_secret() != record.secret.expose_secret() {
            return Err(bad_credentials(identity.principal()));
        }
        if !record.enabled {
            return Err(AuthenticationError::Disabled {
                principal: identity.principal().to_owned(),
            });
        }

        Ok(Identity::builder()
            .principal(identity.principal())
            .authenticated(true)
            .authorities(record.authorities.clone())
            .build())
    }
}

fn bad_credentials(principal: &str) -> AuthenticationError {
    AuthenticationError::BadCredentials {
        principal: principal.to_owned(),
    }
}

/// Authenticator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAuthenticatorConfig {
    /// Registered principals.
    pub principals: Vec<PrincipalConfig>,
}

/// One registered principal.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrincipalConfig {
    /// Principal name the caller must present.
    pub principal: String,

    /// Expected assertion value.
    pub secret: String,

    /// Authorities granted on successful authentication.
    #[serde(default)]
    pub authorities: Vec<String>,

    /// Disabled principals fail authentication even with the right secret.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn alice_config() -> StaticAuthenticatorConfig {
        StaticAuthenticatorConfig {
            principals: vec![PrincipalConfig {
                principal: "alice".to_owned(),
                secret: "koala".to_owned(),
                authorities: vec!["ROLE_USER".to_owned(), "ROLE_AUDITOR".to_owned()],
                enabled: true,
            }],
        }
    }

    #[tokio::test]
    async fn test_matching_assertion_authenticates() {
        let authenticator = StaticAuthenticator::from_config(&alice_config());

        let verified = authenticator
            .authenticate(Identity::unauthenticated("alice", "koala".to_owned()))
            .await
            .unwrap();

        assert_eq!(verified.principal(), "alice");
        assert!(verified.is_authenticated());
        assert_eq!(verified.authorities(), &["ROLE_USER", "ROLE_AUDITOR"]);
        // The raw assertion is not carried into the verified identity.
        assert!(verified.assertion().is_none());
    }

    #[tokio::test]
    async fn test_unknown_principal_fails_with_bad_credentials() {
        let authenticator = StaticAuthenticator::from_config(&alice_config());

        let err = authenticator
            .authenticate(Identity::unauthenticated("mallory", "koala".to_owned()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthenticationError::BadCredentials { principal } if principal == "mallory"
        ));
    }

    #[tokio::test]
    async fn test_wrong_secret_fails_with_bad_credentials() {
        let authenticator = StaticAuthenticator::from_config(&alice_config());

        let err = authenticator
            .authenticate(Identity::unauthenticated("alice", "wombat".to_owned()))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthenticationError::BadCredentials { .. }));
    }

    #[tokio::test]
    async fn test_missing_assertion_fails_with_bad_credentials() {
        let authenticator = StaticAuthenticator::from_config(&alice_config());

        let err = authenticator
            .authenticate(Identity::builder().principal("alice").build())
            .await
            .unwrap_err();

        assert!(matches!(err, AuthenticationError::BadCredentials { .. }));
    }

    #[tokio::test]
    async fn test_disabled_principal_fails_with_disabled() {
        let cfg = StaticAuthenticatorConfig {
            principals: vec![PrincipalConfig {
                principal: "carol".to_owned(),
                secret: "ferret".to_owned(),
                authorities: Vec::new(),
                enabled: false,
            }],
        };
        let authenticator = StaticAuthenticator::from_config(&cfg);

        let err = authenticator
            .authenticate(Identity::unauthenticated("carol", "ferret".to_owned()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthenticationError::Disabled { principal } if principal == "carol"
        ));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let cfg: StaticAuthenticatorConfig = serde_json::from_value(serde_json::json!({
            "principals": [
                { "principal": "alice", "secret": "koala" },
            ],
        }))
        .unwrap();

        assert_eq!(cfg.principals.len(), 1);
        assert!(cfg.principals[0].enabled);
        assert!(cfg.principals[0].authorities.is_empty());
    }
}
