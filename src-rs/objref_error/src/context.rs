/// Represents different types of contextual information that can be
/// associated with errors.
///
/// The `Context` enum provides a way to attach additional information to
/// error messages, helping users understand the context in which an error
/// occurred and how to resolve it.
///
/// # Examples
///
/// ```rust
/// use objref_error::Context;
///
/// // Adding a note to provide additional context
/// let note = Context::Note("the reference was read from configuration key `handler`".to_string());
///
/// // Adding help text to suggest a solution
/// let help = Context::Help("separate the unit name from the member path with a single `:`".to_string());
///
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information or context about the error.
    ///
    /// Notes provide supplementary details that help users understand the
    /// error better, such as where the failing reference came from or
    /// what the resolution was trying to do.
    Note(String),

    /// Helpful suggestions for resolving the error.
    ///
    /// Help text provides actionable advice on how to fix the error, such
    /// as an example of a well-formed reference.
    Help(String),
}
