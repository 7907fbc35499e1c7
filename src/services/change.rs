//! Change evaluation
//!
//! Decides whether a submitted update is material, meaning the board moved
//! or changed hands. Only material changes earn a history entry; edits to
//! name, serial number, or notes never do.

/// Outcome of comparing a board's custody fields before and after a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The board moved or changed hands; record a history entry
    Material,
    /// Custody is unchanged; no entry
    NoChange,
}

impl ChangeOutcome {
    /// Check if this outcome requires a history entry
    pub fn is_material(&self) -> bool {
        matches!(self, Self::Material)
    }
}

/// Compare both custody fields; the single-board update rule
///
/// Comparison is exact and case-sensitive. No normalization happens here;
/// inputs are expected to be trimmed already.
pub fn evaluate(
    previous_location: &str,
    previous_custodian: &str,
    new_location: &str,
    new_custodian: &str,
) -> ChangeOutcome {
    if previous_location != new_location || previous_custodian != new_custodian {
        ChangeOutcome::Material
    } else {
        ChangeOutcome::NoChange
    }
}

/// Compare locations only; the bulk relocation rule
pub fn evaluate_relocation(previous_location: &str, new_location: &str) -> ChangeOutcome {
    if previous_location != new_location {
        ChangeOutcome::Material
    } else {
        ChangeOutcome::NoChange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_change_is_material() {
        let outcome = evaluate("Dev room", "suzuki", "Warehouse", "suzuki");
        assert_eq!(outcome, ChangeOutcome::Material);
        assert!(outcome.is_material());
    }

    #[test]
    fn test_custodian_change_is_material() {
        let outcome = evaluate("Dev room", "suzuki", "Dev room", "tanaka");
        assert_eq!(outcome, ChangeOutcome::Material);
    }

    #[test]
    fn test_both_changing_is_material() {
        let outcome = evaluate("Dev room", "suzuki", "Warehouse", "tanaka");
        assert_eq!(outcome, ChangeOutcome::Material);
    }

    #[test]
    fn test_identical_custody_is_no_change() {
        let outcome = evaluate("Dev room", "suzuki", "Dev room", "suzuki");
        assert_eq!(outcome, ChangeOutcome::NoChange);
        assert!(!outcome.is_material());
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert_eq!(
            evaluate("Dev room", "suzuki", "dev room", "suzuki"),
            ChangeOutcome::Material
        );
        assert_eq!(
            evaluate("Dev room", "Suzuki", "Dev room", "suzuki"),
            ChangeOutcome::Material
        );
    }

    #[test]
    fn test_relocation_ignores_custodian() {
        assert_eq!(
            evaluate_relocation("Dev room", "Dev room"),
            ChangeOutcome::NoChange
        );
        assert_eq!(
            evaluate_relocation("Dev room", "Warehouse"),
            ChangeOutcome::Material
        );
    }
}
