//! Validation rule contract for gate subjects.
//!
//! A rule is a single, self-contained pass/fail judgment. Coordinators
//! depend only on this contract, never on a concrete rule type, so new
//! policies are added by writing a new implementation and injecting it
//! at construction time.

use crate::core::outcome::RuleViolation;

/// A single pass/fail judgment over a subject record.
///
/// Implementations must be pure with respect to the subject: `validate`
/// never mutates it, and calling it twice on the same unmutated subject
/// yields the same answer. The only permitted side effect is an audit
/// emission (a `tracing` event) describing the outcome.
///
/// Failure is always the boolean `false`, never a panic or an error value.
///
/// # Example
///
/// ```rust
/// use turnstile::core::ValidationRule;
///
/// struct NonEmptyName;
///
/// impl ValidationRule<String> for NonEmptyName {
///     fn name(&self) -> &'static str {
///         "non_empty_name"
///     }
///
///     fn validate(&self, subject: &String) -> bool {
///         !subject.is_empty()
///     }
/// }
///
/// let rule = NonEmptyName;
/// assert!(rule.validate(&"Reza".to_string()));
/// assert!(!rule.validate(&String::new()));
/// ```
pub trait ValidationRule<S>: Send + Sync {
    /// Stable rule name used in audit events and reports.
    fn name(&self) -> &'static str;

    /// Judge the subject. `true` means the rule passes.
    fn validate(&self, subject: &S) -> bool;

    /// Describe the failure for the report.
    ///
    /// Coordinators call this only after `validate` has returned `false`
    /// for the same subject. Rules with a detailed failure reason override
    /// this; the default names the rule and nothing else.
    fn violation(&self, _subject: &S) -> RuleViolation {
        RuleViolation::RuleFailed {
            rule: self.name().to_string(),
        }
    }
}
