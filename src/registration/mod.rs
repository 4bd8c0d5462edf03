//! Student registration gating.
//!
//! The subject record, the concrete rule variants, and the coordinator
//! that aggregates them with the evaluate-all policy: every rule runs,
//! every outcome is reported, and the verdict is the AND of them all.

mod coordinator;
mod rules;
mod student;

pub use coordinator::{RegistrationCoordinator, RegistrationReport};
pub use rules::{
    CreditThresholdRule, FeeStatusRule, PrerequisiteRule, CREDIT_THRESHOLD, REQUIRED_COURSE,
};
pub use student::Student;
