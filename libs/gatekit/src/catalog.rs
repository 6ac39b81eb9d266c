//! Declarative attribute rules for secured types and methods.

use std::collections::HashMap;

use gatekit_security::AccessAttribute;
use gatekit_sdk::AttributeSource;

/// A fixed table of attribute declarations, built once at startup and
/// consulted on every call.
///
/// Each rule binds a secured target, or one of its methods, to the ordered
/// attribute tokens it demands. Targets without a rule are public. Method
/// rules stand on their own; they never inherit the type-level rule.
#[derive(Debug, Clone, Default)]
pub struct StaticAttributeCatalog {
    type_rules: HashMap<String, Vec<AccessAttribute>>,
    method_rules: HashMap<String, HashMap<String, Vec<AccessAttribute>>>,
}

impl StaticAttributeCatalog {
    /// Create a catalog builder.
    #[must_use]
    pub fn builder() -> StaticAttributeCatalogBuilder {
        StaticAttributeCatalogBuilder::default()
    }
}

impl AttributeSource for StaticAttributeCatalog {
    fn type_attributes(&self, target: &str) -> Vec<AccessAttribute> {
        self.type_rules.get(target).cloned().unwrap_or_default()
    }

    fn method_attributes(&self, target: &str, method: &str) -> Vec<AccessAttribute> {
        self.method_rules
            .get(target)
            .and_then(|methods| methods.get(method))
            .cloned()
            .unwrap_or_default()
    }
}

/// Builder for [`StaticAttributeCatalog`].
#[derive(Debug, Default)]
pub struct StaticAttributeCatalogBuilder {
    type_rules: HashMap<String, Vec<AccessAttribute>>,
    method_rules: HashMap<String, HashMap<String, Vec<AccessAttribute>>>,
}

impl StaticAttributeCatalogBuilder {
    /// Declare the attributes a whole type demands. Re-declaring a target
    /// replaces its rule; declaration order within the rule is kept.
    #[must_use]
    pub fn secure_type<I, T>(mut self, target: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AccessAttribute>,
    {
        self.type_rules
            .insert(target.into(), collect_tokens(tokens));
        self
    }

    /// Declare the attributes one method of a type demands.
    #[must_use]
    pub fn secure_method<I, T>(
        mut self,
        target: impl Into<String>,
        method: impl Into<String>,
        tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AccessAttribute>,
    {
        self.method_rules
            .entry(target.into())
            .or_default()
            .insert(method.into(), collect_tokens(tokens));
        self
    }

    #[must_use]
    pub fn build(self) -> StaticAttributeCatalog {
        StaticAttributeCatalog {
            type_rules: self.type_rules,
            method_rules: self.method_rules,
        }
    }
}

fn collect_tokens<I, T>(tokens: I) -> Vec<AccessAttribute>
where
    I: IntoIterator<Item = T>,
    T: Into<AccessAttribute>,
{
    tokens.into_iter().map(Into::into).collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn tokens(attributes: &[AccessAttribute]) -> Vec<&str> {
        attributes.iter().map(AccessAttribute::as_str).collect()
    }

    #[test]
    fn test_type_rule_keeps_order_and_duplicates() {
        let catalog = StaticAttributeCatalog::builder()
            .secure_type("InvoiceService", ["ROLE_B", "ROLE_A", "ROLE_B"])
            .build();

        let raw = catalog.type_attributes("InvoiceService");
        assert_eq!(tokens(&raw), ["ROLE_B", "ROLE_A", "ROLE_B"]);
    }

    #[test]
    fn test_method_rule_is_independent_of_type_rule() {
        let catalog = StaticAttributeCatalog::builder()
            .secure_type("InvoiceService", ["ROLE_USER"])
            .secure_method("InvoiceService", "approve", ["ROLE_SUPERVISOR"])
            .build();

        let raw = catalog.method_attributes("InvoiceService", "approve");
        assert_eq!(tokens(&raw), ["ROLE_SUPERVISOR"]);

        // No fallback: an undeclared method is public even if the type is not.
        assert!(catalog.method_attributes("InvoiceService", "list").is_empty());
    }

    #[test]
    fn test_unknown_target_is_public() {
        let catalog = StaticAttributeCatalog::builder().build();

        assert!(catalog.type_attributes("AnyService").is_empty());
        assert!(catalog.method_attributes("AnyService", "call").is_empty());
    }

    #[test]
    fn test_redeclaring_replaces_the_rule() {
        let catalog = StaticAttributeCatalog::builder()
            .secure_type("InvoiceService", ["ROLE_OLD"])
            .secure_type("InvoiceService", ["ROLE_NEW"])
            .build();

        let raw = catalog.type_attributes("InvoiceService");
        assert_eq!(tokens(&raw), ["ROLE_NEW"]);
    }

    #[test]
    fn test_lookups_are_deterministic() {
        let catalog = StaticAttributeCatalog::builder()
            .secure_method("InvoiceService", "approve", ["ROLE_A", "ROLE_B"])
            .build();

        assert_eq!(
            catalog.method_attributes("InvoiceService", "approve"),
            catalog.method_attributes("InvoiceService", "approve"),
        );
    }
}
