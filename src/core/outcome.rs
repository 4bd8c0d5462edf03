//! Per-rule outcomes and accumulated violations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a single rule evaluation within one aggregation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Name of the rule that produced this outcome.
    pub rule: String,
    /// Whether the rule passed.
    pub passed: bool,
}

/// A rule violation collected during an evaluate-all pass.
///
/// Violations are report payload, not an error path: no operation in this
/// crate returns `Result<_, RuleViolation>`. The `Error` derive exists for
/// the display formatting of audit and report lines.
///
/// Each shipped rule describes its own failure in detail; `RuleFailed` is
/// the fallback for rules that do not override the contract's default
/// `violation` hook.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleViolation {
    #[error("credit threshold not met: needs {required} credits, has {actual}")]
    BelowCreditThreshold { required: u32, actual: u32 },

    #[error("prerequisite course '{course}' not taken")]
    MissingPrerequisite { course: String },

    #[error("rule '{rule}' rejected the subject")]
    RuleFailed { rule: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_violation_displays_required_and_actual() {
        let violation = RuleViolation::BelowCreditThreshold {
            required: 100,
            actual: 80,
        };

        assert_eq!(
            violation.to_string(),
            "credit threshold not met: needs 100 credits, has 80"
        );
    }

    #[test]
    fn prerequisite_violation_displays_the_course() {
        let violation = RuleViolation::MissingPrerequisite {
            course: "Algoritma".to_string(),
        };

        assert_eq!(
            violation.to_string(),
            "prerequisite course 'Algoritma' not taken"
        );
    }

    #[test]
    fn fallback_violation_displays_the_rule_name() {
        let violation = RuleViolation::RuleFailed {
            rule: "fee_status".to_string(),
        };

        assert_eq!(violation.to_string(), "rule 'fee_status' rejected the subject");
    }

    #[test]
    fn outcome_serializes_correctly() {
        let outcome = RuleOutcome {
            rule: "prerequisite".to_string(),
            passed: false,
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: RuleOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }

    #[test]
    fn violation_serializes_correctly() {
        let violation = RuleViolation::BelowCreditThreshold {
            required: 100,
            actual: 80,
        };

        let json = serde_json::to_string(&violation).unwrap();
        let deserialized: RuleViolation = serde_json::from_str(&json).unwrap();
        assert_eq!(violation, deserialized);
    }
}
