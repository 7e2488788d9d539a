//! Resolution of relative unit names against an anchor.

use objref_reference::UnitName;

use crate::error::LoadError;

/// Resolves a possibly-relative unit name against an anchor.
///
/// Absolute names are returned unchanged. A relative name with N leading
/// dots is resolved by trimming N - 1 trailing segments from the anchor
/// and appending the name's remainder, if any, to what is left. With
/// anchor `pkg.mod`, `.sub` resolves to `pkg.mod.sub`, `..sub` to
/// `pkg.sub`, and `.` to `pkg.mod` itself.
///
/// # Errors
///
/// Returns [`LoadError::InvalidAnchor`] if the name is relative and the
/// anchor is absent, empty, or has fewer segments than the name climbs.
pub fn resolve_unit_name(
    unit_name: &UnitName,
    anchor: Option<&str>,
) -> Result<UnitName, LoadError> {
    if !unit_name.is_relative() {
        return Ok(unit_name.clone());
    }

    let Some(anchor) = anchor else {
        return Err(LoadError::invalid_anchor(unit_name, None));
    };

    if anchor.is_empty() {
        return Err(LoadError::invalid_anchor(unit_name, Some(anchor)));
    }

    let level = unit_name.level();
    let name = &unit_name.value()[level..];

    // The first dot anchors the name inside the anchor unit; every
    // further dot climbs one segment up.
    let mut base = anchor;
    for _ in 1..level {
        match base.rfind('.') {
            Some(split) => base = &base[..split],
            None => return Err(LoadError::invalid_anchor(unit_name, Some(anchor))),
        }
    }

    if name.is_empty() {
        Ok(UnitName::new(base))
    } else {
        Ok(UnitName::new(format!("{base}.{name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(unit_name: &str, anchor: Option<&str>) -> Result<UnitName, LoadError> {
        resolve_unit_name(&UnitName::new(unit_name), anchor)
    }

    #[test]
    fn test_absolute_passthrough() {
        let resolved = resolve("pkg.mod", None).expect("absolute names should not need an anchor");
        assert_eq!(resolved, UnitName::new("pkg.mod"));
    }

    #[test]
    fn test_absolute_ignores_anchor() {
        let resolved = resolve("pkg.mod", Some("other")).expect("should resolve");
        assert_eq!(resolved, UnitName::new("pkg.mod"));
    }

    #[test]
    fn test_single_dot() {
        let resolved = resolve(".sub", Some("pkg.mod")).expect("should resolve");
        assert_eq!(resolved, UnitName::new("pkg.mod.sub"));
    }

    #[test]
    fn test_double_dot_climbs() {
        let resolved = resolve("..sub", Some("pkg.mod")).expect("should resolve");
        assert_eq!(resolved, UnitName::new("pkg.sub"));
    }

    #[test]
    fn test_dot_only_is_the_anchor() {
        let resolved = resolve(".", Some("pkg.mod")).expect("should resolve");
        assert_eq!(resolved, UnitName::new("pkg.mod"));
    }

    #[test]
    fn test_double_dot_only_is_the_parent() {
        let resolved = resolve("..", Some("pkg.mod")).expect("should resolve");
        assert_eq!(resolved, UnitName::new("pkg"));
    }

    #[test]
    fn test_missing_anchor() {
        let error = resolve(".sub", None).expect_err("should require an anchor");
        assert_eq!(
            error,
            LoadError::InvalidAnchor {
                unit_name: ".sub".to_string(),
                anchor: None,
            }
        );
    }

    #[test]
    fn test_empty_anchor() {
        let error = resolve(".sub", Some("")).expect_err("should reject an empty anchor");
        assert!(matches!(error, LoadError::InvalidAnchor { .. }));
    }

    #[test]
    fn test_climb_beyond_top() {
        let error = resolve("..sub", Some("pkg")).expect_err("should reject climbing past the top");
        assert_eq!(
            error,
            LoadError::InvalidAnchor {
                unit_name: "..sub".to_string(),
                anchor: Some("pkg".to_string()),
            }
        );
    }

    #[test]
    fn test_deep_climb() {
        let resolved = resolve("...sub", Some("a.b.c")).expect("should resolve");
        assert_eq!(resolved, UnitName::new("a.sub"));
    }
}
