//! # Objref
//!
//! Resolves compact textual references like `package.module:qualified.name`
//! into the concrete values they denote. The first part of a reference
//! names a loadable *unit*; the optional part after the `:` is a
//! dot-separated *qualified path* of member lookups starting from that
//! unit. Tools that locate user-supplied callables, classes, or constants
//! from configuration strings (plugin loaders, entry-point resolvers, CLI
//! dispatch) are the intended callers.
//!
//! ## Entry points
//!
//! - [`parse`] is purely syntactic: it splits a reference into a
//!   [`UnitName`] and an optional [`QualifiedPath`], rejecting anything
//!   that violates the grammar.
//! - [`find`] resolves a reference (textual or pre-parsed) to a value:
//!   it loads the unit through an injected [`UnitLoader`] and walks the
//!   qualified path with [`MemberLookup`].
//!
//! Unit loading is a capability the host injects. Hosts with a dynamic
//! module system bind [`UnitLoader`] to it; hosts without one can
//! register their units in a [`Registry`]. Relative unit names (`.sub`,
//! `..mod`) resolve against the caller-supplied anchor.
//!
//! ## Example
//!
//! ```rust
//! use objref::{MemberLookup, Registry, find, parse};
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
//! let reference = parse("tasks.cleanup:retries").expect("the reference is well-formed");
//! assert_eq!(reference.unit_name().value(), "tasks.cleanup");
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     "tasks.cleanup",
//!     Value::Namespace(vec![("retries".to_string(), Value::Number(3))]),
//! );
//!
//! let value = find(reference, &registry, None).expect("the reference should resolve");
//! assert_eq!(value, Value::Number(3));
//! ```
//!
//! ## Errors
//!
//! Failures are all-or-nothing and non-retryable, and each resolution
//! stage has its own kind: [`ParseError`] for grammar violations,
//! [`LoadError`] for units that cannot be loaded (or relative names
//! without a usable anchor), and [`FindError`] tying the stages together.
//! Every error implements [`AsObjrefError`], so callers can render any of
//! them as a uniform [`ObjrefError`] report that preserves the original
//! reference.

pub use objref_error::{AsObjrefError, Context, ObjrefError};
pub use objref_parser::{ParseError, parse, parse_qualified_path, parse_unit_name};
pub use objref_reference::{ParsedReference, QualifiedPath, Reference, UnitName};
pub use objref_resolver::{
    MemberLookup, Registry, UnitLoader,
    error::{FindError, LoadError},
    find, resolve_unit_name,
};
