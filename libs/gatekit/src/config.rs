//! Guard configuration.

use serde::Deserialize;

/// Behavior knobs for an invocation guard.
///
/// Both flags default to off, which gives the standard behavior: identities
/// already verified are trusted for the rest of their lifetime, and
/// operations without attributes pass untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Re-authenticate on every guarded call, even when the slot already
    /// holds an authenticated identity.
    pub always_reauthenticate: bool,

    /// Refuse calls whose attribute set is absent or empty instead of
    /// treating them as public.
    pub reject_public_invocations: bool,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_off() {
        let cfg = GuardConfig::default();

        assert!(!cfg.always_reauthenticate);
        assert!(!cfg.reject_public_invocations);
    }

    #[test]
    fn test_deserialize_full() {
        let cfg: GuardConfig = serde_json::from_value(serde_json::json!({
            "always_reauthenticate": true,
            "reject_public_invocations": true,
        }))
        .unwrap();

        assert!(cfg.always_reauthenticate);
        assert!(cfg.reject_public_invocations);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let cfg: GuardConfig = serde_json::from_value(serde_json::json!({
            "always_reauthenticate": true,
        }))
        .unwrap();

        assert!(cfg.always_reauthenticate);
        assert!(!cfg.reject_public_invocations);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<GuardConfig, _> = serde_json::from_value(serde_json::json!({
            "always_reauthenticat": true,
        }));

        assert!(result.is_err());
    }
}
