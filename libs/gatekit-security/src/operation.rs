use std::fmt;

/// Opaque handle to a protected operation.
///
/// The guard checks only that the handle names a target; deciders and
/// run-as resolvers receive it as-is, and it renders into every diagnostic
/// event.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Operation {
    /// The secured type or component.
    target: String,
    /// The specific method, when the operation is method-scoped.
    method: Option<String>,
}

impl Operation {
    /// Handle covering a whole secured type.
    #[must_use]
    pub fn of_type(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            method: None,
        }
    }

    /// Handle covering one method of a secured type.
    #[must_use]
    pub fn of_method(target: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            method: Some(method.into()),
        }
    }

    /// Get the secured type or component.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get the method name, when method-scoped.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Whether the handle fails to name a target. The guard rejects
    /// unnamed handles before any security processing.
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.target.trim().is_empty()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.method {
            Some(method) => write!(f, "{}::{method}", self.target),
            None => write!(f, "{}", self.target),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_type_scoped_operation() {
        let operation = Operation::of_type("InvoiceService");

        assert_eq!(operation.target(), "InvoiceService");
        assert!(operation.method().is_none());
        assert_eq!(operation.to_string(), "InvoiceService");
    }

    #[test]
    fn test_method_scoped_operation() {
        let operation = Operation::of_method("InvoiceService", "approve");

        assert_eq!(operation.target(), "InvoiceService");
        assert_eq!(operation.method(), Some("approve"));
        assert_eq!(operation.to_string(), "InvoiceService::approve");
    }

    #[test]
    fn test_unnamed_handles() {
        assert!(Operation::of_type("").is_unnamed());
        assert!(Operation::of_type("   ").is_unnamed());
        assert!(Operation::of_method("", "approve").is_unnamed());
        assert!(!Operation::of_type("InvoiceService").is_unnamed());
    }

    #[test]
    fn test_operation_equality() {
        assert_eq!(
            Operation::of_method("A", "m"),
            Operation::of_method("A", "m"),
        );
        assert_ne!(Operation::of_type("A"), Operation::of_method("A", "m"));
    }
}
