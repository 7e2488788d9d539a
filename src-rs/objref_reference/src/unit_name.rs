//! Unit names, the loadable half of a reference.

/// A dot-separated unit designator, e.g. `pkg.mod` or the relative `..mod`.
///
/// A leading run of dots marks a relative name; a name consisting solely
/// of dots is valid and denotes the anchor itself (or one of its parents).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitName(String);

impl UnitName {
    /// Creates a new `UnitName` from its textual form.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the textual form of the unit name.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the length of the leading dot run (the relative depth).
    ///
    /// Absolute names have level 0. `.mod` has level 1, `..mod` level 2,
    /// and so on.
    pub fn level(&self) -> usize {
        self.0.chars().take_while(|c| *c == '.').count()
    }

    /// Returns whether the unit name is relative to an anchor.
    pub fn is_relative(&self) -> bool {
        self.0.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_name() {
        let name = UnitName::new("pkg.mod");
        assert_eq!(name.value(), "pkg.mod");
        assert_eq!(name.level(), 0);
        assert!(!name.is_relative());
    }

    #[test]
    fn test_relative_name() {
        let name = UnitName::new("..mod");
        assert_eq!(name.level(), 2);
        assert!(name.is_relative());
    }

    #[test]
    fn test_dots_only() {
        let name = UnitName::new("...");
        assert_eq!(name.level(), 3);
        assert!(name.is_relative());
    }
}
