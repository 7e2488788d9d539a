//! Reference resolution for objref.
//!
//! This crate turns a reference into the value it denotes. It delegates
//! unit loading to an injected [`UnitLoader`] strategy and walks the
//! qualified path with the [`MemberLookup`] capability, so the core stays
//! testable with fake loaders and usable in hosts both with and without a
//! dynamic module system.
//!
//! # Overview
//!
//! Resolution happens in two stages:
//!
//! 1. the named unit is loaded, resolving relative names against the
//!    caller's anchor, then
//! 2. each qualified path segment is looked up on the value produced by
//!    the previous one, left to right.
//!
//! The first failing stage aborts resolution; no partial results are
//! returned. Nothing is cached, so resolving the same reference twice
//! repeats the loader's work and whatever side effects it has.
//!
//! # Example
//!
//! ```rust
//! use objref_resolver::{MemberLookup, Registry, find};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Value {
//!     Number(i64),
//!     Namespace(Vec<(String, Value)>),
//! }
//!
//! impl MemberLookup for Value {
//!     fn member(&self, name: &str) -> Option<Self> {
//!         match self {
//!             Value::Number(_) => None,
//!             Value::Namespace(members) => members
//!                 .iter()
//!                 .find(|(member_name, _)| member_name == name)
//!                 .map(|(_, value)| value.clone()),
//!         }
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     "geometry.circle",
//!     Value::Namespace(vec![("TAU_DIGITS".to_string(), Value::Number(6))]),
//! );
//!
//! let value = find("geometry.circle:TAU_DIGITS", &registry, None)
//!     .expect("the reference should resolve");
//! assert_eq!(value, Value::Number(6));
//! ```

use objref_reference::Reference;

pub mod error;

mod anchor;
mod registry;
mod traits;

#[cfg(test)]
mod test;

pub use anchor::resolve_unit_name;
pub use registry::Registry;
pub use traits::{MemberLookup, UnitLoader};

use crate::error::FindError;

/// Finds the value a reference denotes.
///
/// Textual references are parsed first; pre-parsed references are used as
/// given. The named unit is then loaded through `loader` and, if the
/// reference carries a qualified path, each path segment is looked up on
/// the value produced by the previous one. Without a qualified path the
/// loaded unit itself is returned.
///
/// # Arguments
///
/// * `reference` - The reference to resolve, textual or pre-parsed
/// * `loader` - The unit loader to delegate unit loading to
/// * `anchor` - The base unit name used to resolve relative references
///
/// # Errors
///
/// Returns [`FindError::InvalidReference`] if a textual reference
/// violates the grammar, [`FindError::Load`] if the loader fails, and
/// [`FindError::MemberNotFound`] if a qualified path segment names a
/// missing member. Resolution is all-or-nothing, and the error always
/// carries the original reference for diagnostics.
pub fn find<R, L>(reference: R, loader: &L, anchor: Option<&str>) -> Result<L::Unit, FindError>
where
    R: Into<Reference>,
    L: UnitLoader,
    L::Unit: MemberLookup,
{
    let reference = reference.into();

    let parsed = match &reference {
        Reference::Text(text) => objref_parser::parse(text)?,
        Reference::Parsed(parsed) => parsed.clone(),
    };

    let unit = loader.load(parsed.unit_name(), anchor)?;

    let Some(path) = parsed.qualified_path() else {
        return Ok(unit);
    };

    let mut current = unit;
    for segment in path.segments() {
        current = match current.member(segment) {
            Some(member) => member,
            None => return Err(FindError::member_not_found(reference)),
        };
    }

    Ok(current)
}
