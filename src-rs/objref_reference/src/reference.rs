//! Parsed references and the raw-or-parsed input union.

use crate::{qualified_path::QualifiedPath, unit_name::UnitName};

/// A parsed reference: a unit name plus an optional qualified path.
///
/// The qualified path is `None` when the reference is of the form
/// `pkg.mod` rather than `pkg.mod:item`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedReference {
    unit_name: UnitName,
    qualified_path: Option<QualifiedPath>,
}

impl ParsedReference {
    /// Creates a new `ParsedReference`.
    pub fn new(unit_name: UnitName, qualified_path: Option<QualifiedPath>) -> Self {
        Self {
            unit_name,
            qualified_path,
        }
    }

    /// Returns the unit name of the reference.
    pub fn unit_name(&self) -> &UnitName {
        &self.unit_name
    }

    /// Returns the qualified path of the reference, if it has one.
    pub fn qualified_path(&self) -> Option<&QualifiedPath> {
        self.qualified_path.as_ref()
    }
}

/// A reference as supplied by a caller: either still in textual form, or
/// already parsed.
///
/// Errors that occur after parsing carry this value so diagnostics can
/// report the reference exactly as the caller provided it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// A textual reference that has not been parsed yet
    Text(String),
    /// A reference that was parsed ahead of time
    Parsed(ParsedReference),
}

impl From<&str> for Reference {
    fn from(reference: &str) -> Self {
        Self::Text(reference.to_string())
    }
}

impl From<String> for Reference {
    fn from(reference: String) -> Self {
        Self::Text(reference)
    }
}

impl From<ParsedReference> for Reference {
    fn from(reference: ParsedReference) -> Self {
        Self::Parsed(reference)
    }
}
