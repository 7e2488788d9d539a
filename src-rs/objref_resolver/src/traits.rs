//! The two capabilities the resolver depends on: loading a unit by name
//! and looking up members on resolved values.

use objref_reference::UnitName;

use crate::error::LoadError;

/// Trait for loading units by name.
///
/// This trait is the resolver's seam to the host's module or code-loading
/// facility. Implementations receive the unit name exactly as parsed,
/// together with the optional anchor for relative names, and either
/// produce the loaded unit or report why it could not be loaded. In
/// hosts with a dynamic module system this delegates to that system; in
/// hosts without one, [`Registry`](crate::Registry) provides a
/// table-backed implementation.
///
/// Implementations that support relative names should resolve them with
/// [`resolve_unit_name`](crate::resolve_unit_name) so that all loaders
/// share one anchor semantics.
///
/// # Associated Types
///
/// - `Unit`: the type of loaded units, and of every value reachable from
///   them during qualified-path traversal
pub trait UnitLoader {
    /// The type of loaded units.
    type Unit;

    /// Loads the named unit.
    ///
    /// Loading is permitted to have whatever side effects the host's
    /// loading facility has; the resolver never caches, so repeated
    /// resolution repeats them.
    ///
    /// # Arguments
    ///
    /// * `unit_name` - The unit to load, possibly relative
    /// * `anchor` - The base unit name used to resolve relative names
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnitNotFound`] if the unit cannot be located,
    /// or [`LoadError::InvalidAnchor`] if `unit_name` is relative but
    /// `anchor` is absent or unusable as a base.
    fn load(&self, unit_name: &UnitName, anchor: Option<&str>) -> Result<Self::Unit, LoadError>;
}

/// Trait for looking up a member of a resolved value by name.
///
/// This is the reflection capability the resolver walks qualified paths
/// with. Hosts with native reflection can delegate to it; hosts without
/// can back it with an explicit member table.
pub trait MemberLookup: Sized {
    /// Returns the member with the given name, or `None` if the value
    /// has no such member.
    fn member(&self, name: &str) -> Option<Self>;
}
