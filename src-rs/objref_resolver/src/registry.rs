//! A table-backed unit loader for hosts without dynamic loading.

use indexmap::IndexMap;

use objref_reference::UnitName;

use crate::{anchor::resolve_unit_name, error::LoadError, traits::UnitLoader};

/// A unit loader backed by an explicit table of registered units.
///
/// Hosts without a dynamic module system register their units up front
/// under absolute dotted names; loading resolves the requested name
/// against the anchor and clones the registered unit. Registration order
/// is preserved, which keeps iteration deterministic.
#[derive(Debug, Clone)]
pub struct Registry<U> {
    units: IndexMap<String, U>,
}

impl<U: Clone> Registry<U> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            units: IndexMap::new(),
        }
    }

    /// Creates a registry from an iterator of `(name, unit)` pairs.
    pub fn from_units<N: Into<String>>(units: impl IntoIterator<Item = (N, U)>) -> Self {
        Self {
            units: units
                .into_iter()
                .map(|(name, unit)| (name.into(), unit))
                .collect(),
        }
    }

    /// Registers a unit under an absolute dotted name, replacing any unit
    /// previously registered under that name.
    pub fn register(&mut self, name: impl Into<String>, unit: U) {
        self.units.insert(name.into(), unit);
    }

    /// Returns the registered unit names in registration order.
    pub fn unit_names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }
}

impl<U: Clone> Default for Registry<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Clone> UnitLoader for Registry<U> {
    type Unit = U;

    fn load(&self, unit_name: &UnitName, anchor: Option<&str>) -> Result<Self::Unit, LoadError> {
        let absolute = resolve_unit_name(unit_name, anchor)?;

        self.units
            .get(absolute.value())
            .cloned()
            .ok_or_else(|| LoadError::unit_not_found(&absolute))
    }
}
