//! Evaluate-all aggregation over an ordered rule sequence.
//!
//! The coordinator holds no business rules of its own. It sequences the
//! injected rules and folds their judgments with `Validation` to
//! accumulate ALL violations instead of stopping at the first one.

use crate::core::{RuleOutcome, RuleViolation, ValidationRule};
use crate::registration::student::Student;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Full result of one registration pass: every per-rule outcome in
/// evaluation order, plus the violations of the rules that failed.
///
/// The aggregate verdict is derived, not stored: the pass/fail of the
/// whole report always equals the logical AND of the individual outcomes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReport {
    /// Name of the student the pass ran against.
    pub subject: String,
    /// One outcome per injected rule, in evaluation order.
    pub outcomes: Vec<RuleOutcome>,
    /// Violations of every rule that failed, in evaluation order.
    pub violations: Vec<RuleViolation>,
}

impl RegistrationReport {
    /// `true` iff every rule passed.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Runs an ordered sequence of validation rules against a student and
/// aggregates the judgments into one verdict.
///
/// Evaluation never short-circuits: every rule runs and reports even after
/// an earlier rule has failed, so one pass surfaces the complete set of
/// violations. Contrast with the checkout pipeline, whose stages are
/// dependent and stop at the first failure.
///
/// # Example
///
/// ```rust
/// use turnstile::registration::{
///     CreditThresholdRule, FeeStatusRule, PrerequisiteRule, RegistrationCoordinator, Student,
/// };
///
/// let coordinator = RegistrationCoordinator::new(vec![
///     Box::new(CreditThresholdRule),
///     Box::new(PrerequisiteRule),
///     Box::new(FeeStatusRule),
/// ]);
///
/// let reza = Student::new("Reza", 110, &["Algoritma", "Basis Data"]);
/// assert!(coordinator.register(&reza));
///
/// let alan = Student::new("Alan", 80, &["Algoritma"]);
/// assert!(!coordinator.register(&alan));
/// ```
pub struct RegistrationCoordinator {
    rules: Vec<Box<dyn ValidationRule<Student>>>,
}

impl RegistrationCoordinator {
    /// Create a coordinator from an ordered rule sequence.
    ///
    /// The vector order is the evaluation order. Rules are injected here
    /// and only here; the coordinator never constructs a rule itself.
    pub fn new(rules: Vec<Box<dyn ValidationRule<Student>>>) -> Self {
        Self { rules }
    }

    /// Evaluate every rule exactly once and accumulate all violations.
    pub fn evaluate(&self, student: &Student) -> RegistrationReport {
        tracing::info!(student = %student.name, rules = self.rules.len(), "starting registration pass");

        let mut outcomes = Vec::with_capacity(self.rules.len());
        let mut checks: Vec<Validation<(), NonEmptyVec<RuleViolation>>> =
            Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let passed = rule.validate(student);
            outcomes.push(RuleOutcome {
                rule: rule.name().to_string(),
                passed,
            });
            checks.push(if passed {
                Validation::success(())
            } else {
                Validation::fail(rule.violation(student))
            });
        }

        // Accumulate ALL failures instead of stopping at the first one.
        let violations = match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        };

        if violations.is_empty() {
            tracing::info!(student = %student.name, "registration accepted");
        } else {
            tracing::warn!(
                student = %student.name,
                violations = violations.len(),
                "registration rejected"
            );
        }

        RegistrationReport {
            subject: student.name.clone(),
            outcomes,
            violations,
        }
    }

    /// Aggregate verdict: `true` iff every rule passed.
    pub fn register(&self, student: &Student) -> bool {
        self.evaluate(student).passed()
    }
}
