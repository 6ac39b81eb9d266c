use std::fmt;

/// An opaque access-control token demanded by a protected operation.
///
/// Gatekit never interprets the token itself. Deciders and run-as resolvers
/// give attributes their meaning: role names, clearance markers, run-as
/// directives.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AccessAttribute(String);

impl AccessAttribute {
    /// Create an attribute from a raw token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccessAttribute {
    #[inline]
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl From<String> for AccessAttribute {
    #[inline]
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// An ordered collection of [`AccessAttribute`]s attached to a protected
/// operation.
///
/// Order is declaration order and duplicates are preserved; deciders that
/// care about either get to see exactly what was declared. An empty set
/// means the operation is public.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(Vec<AccessAttribute>);

impl AttributeSet {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set by copying every token of the input, preserving order.
    #[must_use]
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AccessAttribute>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// Whether the set holds no attributes (the operation is public).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the attributes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, AccessAttribute> {
        self.0.iter()
    }

    /// View the attributes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[AccessAttribute] {
        &self.0
    }

    /// Whether the set holds an attribute with the given raw token.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|a| a.as_str() == token)
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, attribute) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{attribute}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<AccessAttribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = AccessAttribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<AccessAttribute> for AttributeSet {
    fn extend<I: IntoIterator<Item = AccessAttribute>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a AccessAttribute;
    type IntoIter = std::slice::Iter<'a, AccessAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
