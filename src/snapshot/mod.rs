//! Export and import of calculator state.
//!
//! A snapshot is a versioned JSON record of [`CalculatorState`]. Importing
//! validates the state so a restored calculator upholds the same invariants
//! as one built from keystrokes.

use crate::core::{is_operand_text, CalculatorState, Entry};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable record of calculator state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Captured calculator state
    pub state: CalculatorState,
}

impl Snapshot {
    pub fn new(state: CalculatorState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            state,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check version and state invariants.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let state = &self.state;
        if let Entry::Input(text) = &state.current {
            if !is_operand_text(text) {
                return Err(SnapshotError::InvalidOperand {
                    field: "current",
                    text: text.clone(),
                });
            }
        }
        if !state.previous.is_empty() && !is_operand_text(&state.previous) {
            return Err(SnapshotError::InvalidOperand {
                field: "previous",
                text: state.previous.clone(),
            });
        }
        if state.operator.is_some() == state.previous.is_empty() {
            return Err(SnapshotError::UnpairedOperator);
        }
        if state.current.is_error() && state.operator.is_some() {
            return Err(SnapshotError::PendingOperationOnError);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArithmeticError, Operator};

    fn pending() -> CalculatorState {
        CalculatorState {
            current: Entry::Input("2.5".to_string()),
            previous: "10".to_string(),
            operator: Some(Operator::Divide),
        }
    }

    #[test]
    fn json_round_trip_preserves_state() {
        let snapshot = Snapshot::new(pending());
        let json = snapshot.to_json().unwrap();
        let parsed = Snapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn json_layout_is_tagged() {
        let json = r#"{
            "version": 1,
            "state": { "current": { "error": "division_by_zero" }, "previous": "", "operator": null }
        }"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(
            snapshot.state.current,
            Entry::Error(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = Snapshot::new(CalculatorState::default());
        snapshot.version = 2;
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::UnsupportedVersion {
                found: 2,
                supported: 1
            })
        ));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        assert!(matches!(
            Snapshot::from_json("{ not json"),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn operator_without_previous_is_rejected() {
        let mut state = pending();
        state.previous.clear();
        assert!(matches!(
            Snapshot::new(state).validate(),
            Err(SnapshotError::UnpairedOperator)
        ));
    }

    #[test]
    fn previous_without_operator_is_rejected() {
        let mut state = pending();
        state.operator = None;
        assert!(Snapshot::new(state).validate().is_err());
    }

    #[test]
    fn bad_current_operand_is_rejected() {
        let mut state = pending();
        state.current = Entry::Input("1.2.3".to_string());
        assert!(Snapshot::new(state.clone()).validate().is_err());

        state.current = Entry::Input(String::new());
        assert!(Snapshot::new(state).validate().is_err());
    }

    #[test]
    fn error_with_pending_operation_is_rejected() {
        let mut state = pending();
        state.current = Entry::Error(ArithmeticError::DivisionByZero);
        assert!(matches!(
            Snapshot::new(state).validate(),
            Err(SnapshotError::PendingOperationOnError)
        ));
    }

    #[test]
    fn sentinel_text_as_input_is_rejected() {
        let json = r#"{
            "version": 1,
            "state": { "current": { "input": "Error: Div by 0" }, "previous": "", "operator": null }
        }"#;
        assert!(matches!(
            Snapshot::from_json(json),
            Err(SnapshotError::InvalidOperand { field: "current", .. })
        ));
    }

    #[test]
    fn foreign_operand_text_is_rejected() {
        let json = r#"{
            "version": 1,
            "state": { "current": { "input": "abc" }, "previous": "xyz", "operator": "add" }
        }"#;
        assert!(matches!(
            Snapshot::from_json(json),
            Err(SnapshotError::InvalidOperand { field: "current", .. })
        ));

        let mut state = pending();
        state.previous = "xyz".to_string();
        assert!(matches!(
            Snapshot::new(state).validate(),
            Err(SnapshotError::InvalidOperand { field: "previous", .. })
        ));
    }

    #[test]
    fn partial_and_non_finite_operands_are_accepted() {
        let mut state = pending();
        state.previous = "-".to_string();
        state.current = Entry::Input("0.".to_string());
        assert!(Snapshot::new(state).validate().is_ok());

        let state = CalculatorState {
            current: Entry::Input("inf".to_string()),
            previous: String::new(),
            operator: None,
        };
        assert!(Snapshot::new(state).validate().is_ok());
    }
}
