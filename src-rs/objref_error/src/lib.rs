//! Unified error representation for objref.
//!
//! Every error type in the workspace implements [`AsObjrefError`] so that
//! callers can convert parser and resolver failures into one displayable
//! report format, [`ObjrefError`], without matching on the individual
//! error enums.

mod context;
mod traits;

pub use context::Context;
pub use traits::AsObjrefError;

/// Unified error representation for objref
///
/// This struct represents errors in a format suitable for display to
/// users. It includes the reference text the failing operation was given,
/// a human-readable message, an optional character offset into the
/// reference for precise reporting, and optional context information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjrefError {
    /// The reference text that the failing operation was given
    reference: String,
    /// Human-readable error message
    message: String,
    /// Optional character offset into the reference text
    offset: Option<usize>,
    /// Optional context information
    context: Vec<Context>,
}

impl ObjrefError {
    /// Creates an `ObjrefError` from any error that implements
    /// [`AsObjrefError`], attaching the reference text it was about.
    pub fn from_error(error: &impl AsObjrefError, reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            message: error.message(),
            offset: error.offset(),
            context: error.context(),
        }
    }

    /// Returns the reference text the failing operation was given
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the human-readable error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the character offset into the reference text, if the error
    /// is tied to a specific position
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns the optional context information
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
