use objref_reference::UnitName;

use crate::{UnitLoader, error::LoadError, test::TestValue};

/// A unit loader that fails every load with a configured error kind.
///
/// This type is used to verify that loader errors surface from
/// [`find`](crate::find) unchanged.
pub enum FailingLoader {
    /// Reports every unit as not found.
    UnitNotFound,
    /// Reports every unit name as lacking a usable anchor.
    InvalidAnchor,
}

impl UnitLoader for FailingLoader {
    type Unit = TestValue;

    fn load(&self, unit_name: &UnitName, anchor: Option<&str>) -> Result<Self::Unit, LoadError> {
        match self {
            Self::UnitNotFound => Err(LoadError::unit_not_found(unit_name)),
            Self::InvalidAnchor => Err(LoadError::invalid_anchor(unit_name, anchor)),
        }
    }
}
