//! Concrete validation rule variants for registration.
//!
//! Each variant compiles its constants in: extension means adding a new
//! variant and injecting it at construction, never parameterizing or
//! editing an existing one.

use crate::core::{RuleViolation, ValidationRule};
use crate::registration::student::Student;

/// Minimum credits a student must have passed before registering.
pub const CREDIT_THRESHOLD: u32 = 100;

/// Course every registrant must already have taken.
pub const REQUIRED_COURSE: &str = "Algoritma";

/// Passes iff the student has accumulated at least [`CREDIT_THRESHOLD`]
/// credits. The boundary value itself passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct CreditThresholdRule;

impl ValidationRule<Student> for CreditThresholdRule {
    fn name(&self) -> &'static str {
        "credit_threshold"
    }

    fn validate(&self, subject: &Student) -> bool {
        if subject.credits_passed >= CREDIT_THRESHOLD {
            tracing::info!(
                student = %subject.name,
                credits = subject.credits_passed,
                "credit check passed"
            );
            true
        } else {
            tracing::warn!(
                student = %subject.name,
                credits = subject.credits_passed,
                required = CREDIT_THRESHOLD,
                "credit check failed: not enough credits"
            );
            false
        }
    }

    fn violation(&self, subject: &Student) -> RuleViolation {
        RuleViolation::BelowCreditThreshold {
            required: CREDIT_THRESHOLD,
            actual: subject.credits_passed,
        }
    }
}

/// Passes iff [`REQUIRED_COURSE`] appears in the student's course set.
/// Membership is a case-sensitive exact match.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrerequisiteRule;

impl ValidationRule<Student> for PrerequisiteRule {
    fn name(&self) -> &'static str {
        "prerequisite"
    }

    fn validate(&self, subject: &Student) -> bool {
        if subject.courses_taken.contains(REQUIRED_COURSE) {
            tracing::info!(
                student = %subject.name,
                course = REQUIRED_COURSE,
                "prerequisite check passed"
            );
            true
        } else {
            tracing::warn!(
                student = %subject.name,
                course = REQUIRED_COURSE,
                "prerequisite check failed: course not taken"
            );
            false
        }
    }

    fn violation(&self, _subject: &Student) -> RuleViolation {
        RuleViolation::MissingPrerequisite {
            course: REQUIRED_COURSE.to_string(),
        }
    }
}

/// Always passes. Stands in for an external billing lookup and shows that
/// a new rule variant slots into the sequence without touching any other
/// rule or the coordinator.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeeStatusRule;

impl ValidationRule<Student> for FeeStatusRule {
    fn name(&self) -> &'static str {
        "fee_status"
    }

    fn validate(&self, subject: &Student) -> bool {
        // Simulated: a real implementation would query the billing system.
        tracing::info!(student = %subject.name, "fee status check passed: fees settled");
        true
    }
}
