//! Error handling for unit loading and reference resolution.

use objref_error::{AsObjrefError, Context};
use objref_parser::ParseError;
use objref_reference::{Reference, UnitName};

mod display;

/// An error produced by a unit loader.
///
/// This enum is the error contract between the resolver and
/// [`UnitLoader`](crate::UnitLoader) implementations; the resolver
/// surfaces these unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The named unit could not be located
    UnitNotFound {
        /// The absolute name of the unit that was looked up
        unit_name: String,
    },
    /// The unit name is relative but the anchor is absent or unusable
    InvalidAnchor {
        /// The relative unit name being resolved
        unit_name: String,
        /// The anchor the resolution was attempted against, if any
        anchor: Option<String>,
    },
}

impl LoadError {
    /// Creates a new `LoadError` for a unit that could not be located
    pub fn unit_not_found(unit_name: &UnitName) -> Self {
        Self::UnitNotFound {
            unit_name: unit_name.value().to_string(),
        }
    }

    /// Creates a new `LoadError` for a relative unit name without a
    /// usable anchor
    pub fn invalid_anchor(unit_name: &UnitName, anchor: Option<&str>) -> Self {
        Self::InvalidAnchor {
            unit_name: unit_name.value().to_string(),
            anchor: anchor.map(ToString::to_string),
        }
    }
}

impl AsObjrefError for LoadError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnitNotFound { .. } => vec![],
            Self::InvalidAnchor { anchor: None, .. } => vec![Context::Help(
                "supply an anchor unit to resolve relative references against".to_string(),
            )],
            Self::InvalidAnchor {
                anchor: Some(anchor),
                unit_name,
            } => vec![Context::Note(format!(
                "`{unit_name}` climbs above the top of anchor `{anchor}`"
            ))],
        }
    }
}

/// An error produced by [`find`](crate::find).
///
/// Each variant corresponds to one stage of resolution, so callers can
/// tell a malformed reference apart from a well-formed one whose target
/// is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindError {
    /// The reference text violates the grammar
    InvalidReference(ParseError),
    /// The unit loader failed
    Load(LoadError),
    /// A qualified path segment named a missing member
    MemberNotFound {
        /// The reference whose qualified path failed to resolve
        reference: Reference,
    },
}

impl FindError {
    /// Creates a new `FindError` for a qualified path that named a
    /// missing member
    pub fn member_not_found(reference: Reference) -> Self {
        Self::MemberNotFound { reference }
    }
}

impl From<ParseError> for FindError {
    fn from(error: ParseError) -> Self {
        Self::InvalidReference(error)
    }
}

impl From<LoadError> for FindError {
    fn from(error: LoadError) -> Self {
        Self::Load(error)
    }
}

impl AsObjrefError for FindError {
    fn message(&self) -> String {
        match self {
            Self::InvalidReference(error) => error.message(),
            Self::Load(error) => error.message(),
            Self::MemberNotFound { .. } => self.to_string(),
        }
    }

    fn offset(&self) -> Option<usize> {
        match self {
            Self::InvalidReference(error) => Some(error.offset()),
            Self::Load(_) | Self::MemberNotFound { .. } => None,
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidReference(error) => error.context(),
            Self::Load(error) => error.context(),
            Self::MemberNotFound { .. } => vec![],
        }
    }
}
