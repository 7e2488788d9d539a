//! Display implementations for resolution errors.

use std::fmt;

use objref_reference::Reference;

use crate::error::{FindError, LoadError};

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitNotFound { unit_name } => {
                write!(f, "unit `{unit_name}` was not found")
            }
            Self::InvalidAnchor {
                unit_name,
                anchor: Some(anchor),
            } => {
                write!(
                    f,
                    "anchor `{anchor}` cannot resolve the relative unit name `{unit_name}`"
                )
            }
            Self::InvalidAnchor {
                unit_name,
                anchor: None,
            } => {
                write!(f, "relative unit name `{unit_name}` requires an anchor")
            }
        }
    }
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReference(error) => write!(f, "{error}"),
            Self::Load(error) => write!(f, "{error}"),
            Self::MemberNotFound {
                reference: Reference::Text(text),
            } => {
                write!(f, "reference {text:?} names a missing member")
            }
            Self::MemberNotFound {
                reference: Reference::Parsed(parsed),
            } => {
                write!(f, "reference {parsed:?} names a missing member")
            }
        }
    }
}
