// Index rules shared by group slots and segment fields

use crate::error::{Hl7StructureError, Result};

/// Access to repetition `rep` of a store currently holding `used` entries.
///
/// Returns `Ok(true)` when the caller must append one blank entry first
/// (`rep == used`), `Ok(false)` when the entry already exists. Anything more
/// than one past the end is rejected, as is a second entry for a
/// non-repeating store.
pub(crate) fn check_access(
    name: impl FnOnce() -> String,
    repeating: bool,
    rep: usize,
    used: usize,
) -> Result<bool> {
    if rep < used {
        return Ok(false);
    }
    if rep > used {
        return Err(Hl7StructureError::RepetitionIndex {
            name: name(),
            requested: rep,
            used,
        });
    }
    check_append(name, repeating, used)?;
    Ok(true)
}

/// A new entry may be appended unless the store is non-repeating and occupied.
pub(crate) fn check_append(name: impl FnOnce() -> String, repeating: bool, used: usize) -> Result<()> {
    if !repeating && used > 0 {
        return Err(Hl7StructureError::RepetitionNotAllowed {
            name: name(),
        });
    }
    Ok(())
}

/// Insertion is allowed anywhere from the front up to one past the end.
pub(crate) fn check_insert(
    name: impl FnOnce() -> String,
    repeating: bool,
    index: usize,
    used: usize,
) -> Result<()> {
    if index > used {
        return Err(Hl7StructureError::RepetitionIndex {
            name: name(),
            requested: index,
            used,
        });
    }
    check_append(name, repeating, used)
}

/// Removal needs an existing entry.
pub(crate) fn check_existing(name: impl FnOnce() -> String, index: usize, used: usize) -> Result<()> {
    if index >= used {
        return Err(Hl7StructureError::RepetitionIndex {
            name: name(),
            requested: index,
            used,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_boundary() {
        assert!(!check_access(|| "NK1".to_string(), true, 0, 2).unwrap());
        assert!(!check_access(|| "NK1".to_string(), true, 1, 2).unwrap());
        assert!(check_access(|| "NK1".to_string(), true, 2, 2).unwrap());
        assert!(matches!(
            check_access(|| "NK1".to_string(), true, 3, 2),
            Err(Hl7StructureError::RepetitionIndex {
                requested: 3,
                used: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_non_repeating_store() {
        assert!(check_access(|| "PID".to_string(), false, 0, 0).unwrap());
        assert!(!check_access(|| "PID".to_string(), false, 0, 1).unwrap());
        assert!(matches!(
            check_access(|| "PID".to_string(), false, 1, 1),
            Err(Hl7StructureError::RepetitionNotAllowed { .. })
        ));
        assert!(check_insert(|| "PID".to_string(), false, 0, 1).is_err());
    }

    #[test]
    fn test_existing_bounds() {
        assert!(check_existing(|| "OBX".to_string(), 1, 2).is_ok());
        assert!(check_existing(|| "OBX".to_string(), 2, 2).is_err());
        assert!(check_existing(|| "OBX".to_string(), 0, 0).is_err());
    }
}
