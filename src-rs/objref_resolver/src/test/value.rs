use indexmap::IndexMap;

use crate::MemberLookup;

/// A test value: either a leaf constant or a namespace of named members.
///
/// Namespaces stand in for loaded units and any intermediate values a
/// qualified path traverses; constants are the leaves resolution ends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestValue {
    /// A leaf value with no members
    Constant(i64),
    /// A value with named members
    Namespace(IndexMap<String, TestValue>),
}

impl TestValue {
    /// Creates a leaf constant.
    pub fn constant(value: i64) -> Self {
        Self::Constant(value)
    }

    /// Creates a namespace from an iterator of `(name, value)` pairs.
    pub fn namespace<N: Into<String>>(members: impl IntoIterator<Item = (N, Self)>) -> Self {
        Self::Namespace(
            members
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

impl MemberLookup for TestValue {
    fn member(&self, name: &str) -> Option<Self> {
        match self {
            Self::Constant(_) => None,
            Self::Namespace(members) => members.get(name).cloned(),
        }
    }
}
