//! Test fixtures for the resolver.
//!
//! These types implement [`UnitLoader`](crate::UnitLoader) and
//! [`MemberLookup`](crate::MemberLookup) over a small in-memory value
//! tree so resolution behavior can be exercised without a real module
//! system.

mod find;
mod loader;
mod value;

pub use loader::FailingLoader;
pub use value::TestValue;
