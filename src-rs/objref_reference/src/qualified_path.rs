//! Qualified paths, the member-chain half of a reference.

/// A non-empty dot-separated chain of member names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedPath(String);

impl QualifiedPath {
    /// Creates a new `QualifiedPath` from its textual form.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the textual form of the qualified path.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Iterates over the member names in traversal order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let path = QualifiedPath::new("item");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["item"]);
    }

    #[test]
    fn test_multiple_segments() {
        let path = QualifiedPath::new("item.attr.inner");
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            vec!["item", "attr", "inner"]
        );
    }
}
