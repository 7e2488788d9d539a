use crate::Context;

/// Trait for types that can be converted to objref error messages.
///
/// This trait provides a standardized interface for error types to expose
/// their error message and associated context. It is implemented by every
/// error type in the workspace so callers get consistent error reporting
/// regardless of which resolution stage failed.
pub trait AsObjrefError {
    /// Returns the primary error message.
    ///
    /// This should be a concise, user-friendly description of what went
    /// wrong, clear enough to understand without additional context.
    fn message(&self) -> String;

    /// Returns the character offset of the error within the reference
    /// text, when the error is tied to a specific position.
    ///
    /// Only syntactic errors carry a position; resolution errors return
    /// `None`.
    fn offset(&self) -> Option<usize> {
        None
    }

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context>;
}
