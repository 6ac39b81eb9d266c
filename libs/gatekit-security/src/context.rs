use crate::identity::Identity;

/// The security context slot for one logical call.
///
/// Holds the identity the surrounding execution currently acts as. The slot
/// is threaded explicitly through the call chain rather than living in
/// ambient task-local state; a guarded call takes it by `&mut`, so exclusive
/// access is a compile-time property and no locking is involved.
#[derive(Debug, Clone, Default)]
pub struct SecurityContext {
    current: Option<Identity>,
}

impl SecurityContext {
    /// Create an empty slot: no identity has been presented.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a slot already holding an identity.
    #[must_use]
    pub fn with_identity(identity: Identity) -> Self {
        Self {
            current: Some(identity),
        }
    }

    /// Get the identity the execution currently acts as, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Put an identity into the slot, returning the displaced one.
    pub fn set_current(&mut self, identity: Identity) -> Option<Identity> {
        self.current.replace(identity)
    }

    /// Remove and return the current identity, leaving the slot empty.
    pub fn take_current(&mut self) -> Option<Identity> {
        self.current.take()
    }

    /// Empty the slot.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Capture the slot state so the caller can restore it after a guarded
    /// call (run-as substitution lasts only for the duration of the call;
    /// putting the original identity back is the caller's job).
    #[must_use]
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            saved: self.current.clone(),
        }
    }

    /// Restore a previously captured state, discarding the present one.
    pub fn restore(&mut self, snapshot: ContextSnapshot) {
        self.current = snapshot.saved;
    }
}

/// Captured state of a [`SecurityContext`], opaque to everything but
/// [`SecurityContext::restore`].
#[derive(Debug, Clone)]
pub struct ContextSnapshot {
    saved: Option<Identity>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn alice() -> Identity {
        Identity::builder()
            .principal("alice")
            .authenticated(true)
            .build()
    }

    #[test]
    fn test_empty_slot() {
        let cx = SecurityContext::empty();

        assert!(cx.current().is_none());
    }

    #[test]
    fn test_with_identity() {
        let cx = SecurityContext::with_identity(alice());

        assert_eq!(cx.current().map(Identity::principal), Some("alice"));
    }

    #[test]
    fn test_set_current_returns_displaced() {
        let mut cx = SecurityContext::with_identity(alice());

        let displaced = cx.set_current(Identity::builder().principal("bob").build());

        assert_eq!(displaced.as_ref().map(Identity::principal), Some("alice"));
        assert_eq!(cx.current().map(Identity::principal), Some("bob"));
    }

    #[test]
    fn test_take_current_empties_slot() {
        let mut cx = SecurityContext::with_identity(alice());

        let taken = cx.take_current();

        assert_eq!(taken.as_ref().map(Identity::principal), Some("alice"));
        assert!(cx.current().is_none());
    }

    #[test]
    fn test_clear() {
        let mut cx = SecurityContext::with_identity(alice());

        cx.clear();

        assert!(cx.current().is_none());
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut cx = SecurityContext::with_identity(alice());
        let snapshot = cx.snapshot();

        cx.set_current(Identity::builder().principal("run-as-system").build());
        cx.restore(snapshot);

        assert_eq!(cx.current().map(Identity::principal), Some("alice"));
    }

    #[test]
    fn test_snapshot_of_empty_slot_restores_empty() {
        let mut cx = SecurityContext::empty();
        let snapshot = cx.snapshot();

        cx.set_current(alice());
        cx.restore(snapshot);

        assert!(cx.current().is_none());
    }
}
