use secrecy::SecretString;

/// `Identity` describes a principal taking part in a guarded invocation.
///
/// Created by the caller before the guarded call, replaced by an
/// authenticator's verified output during the call, and optionally replaced
/// again by a run-as substitute for the remainder of the call.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    /// Opaque principal name (user, service, or system).
    principal: String,
    /// Raw credential or assertion presented by the caller. Never
    /// serialized/persisted. Wrapped in `SecretString` so `Debug` redacts
    /// the value automatically.
    #[serde(skip)]
    assertion: Option<SecretString>,
    /// Whether an authenticator has verified this identity. Only
    /// authenticator implementations set this; the guard itself never does.
    authenticated: bool,
    /// Granted authorities, in grant order.
    #[serde(default)]
    authorities: Vec<String>,
}

impl Identity {
    /// Create a new `Identity` builder
    #[must_use]
    pub fn builder() -> IdentityBuilder {
        IdentityBuilder::default()
    }

    /// Create an unauthenticated identity carrying a raw assertion.
    ///
    /// This is the shape callers place into the context slot before the
    /// guarded call: an authenticator later exchanges it for a verified
    /// identity.
    #[must_use]
    pub fn unauthenticated(
        principal: impl Into<String>,
        assertion: impl Into<SecretString>,
    ) -> Self {
        IdentityBuilder::default()
            .principal(principal)
            .assertion(assertion)
            .build()
    }

    /// Get the principal name.
    #[must_use]
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Get the raw assertion presented by the caller, if any.
    #[must_use]
    pub fn assertion(&self) -> Option<&SecretString> {
        self.assertion.as_ref()
    }

    /// Whether an authenticator has verified this identity.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Get the granted authorities, in grant order.
    #[must_use]
    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }

    /// Whether the identity holds the given authority.
    #[must_use]
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

#[derive(Default)]
pub struct IdentityBuilder {
    principal: Option<String>,
    assertion: Option<SecretString>,
    authenticated: bool,
    authorities: Vec<String>,
}

impl IdentityBuilder {
    #[must_use]
    pub fn principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = Some(principal.into());
        self
    }

    #[must_use]
    pub fn assertion(mut self, assertion: impl Into<SecretString>) -> Self {
        self.assertion = Some(assertion.into());
        self
    }

    #[must_use]
    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    /// Append a single authority, preserving grant order.
    #[must_use]
    pub fn authority(mut self, authority: impl Into<String>) -> Self {
        self.authorities.push(authority.into());
        self
    }

    /// Replace the authority list wholesale.
    #[must_use]
    pub fn authorities(mut self, authorities: Vec<String>) -> Self {
        self.authorities = authorities;
        self
    }

    #[must_use]
    pub fn build(self) -> Identity {
        Identity {
            principal: self.principal.unwrap_or_default(),
            assertion: self.assertion,
            authenticated: self.authenticated,
            authorities: self.authorities,
        }
    }
}
