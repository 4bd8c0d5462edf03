//! Subject record for registration gating.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A student seeking registration.
///
/// The record is immutable for the duration of one validation pass: no
/// rule and no coordinator writes to it. Callers construct it, lend it to
/// exactly one coordinator call, and keep ownership afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name, used in audit events and reports.
    pub name: String,
    /// Credits accumulated so far. Never negative.
    pub credits_passed: u32,
    /// Courses already taken, matched case-sensitively by prerequisite rules.
    pub courses_taken: HashSet<String>,
}

impl Student {
    /// Convenience constructor taking the course list as string slices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::registration::Student;
    ///
    /// let student = Student::new("Reza", 110, &["Algoritma", "Basis Data"]);
    /// assert_eq!(student.credits_passed, 110);
    /// assert!(student.courses_taken.contains("Algoritma"));
    /// ```
    pub fn new(name: impl Into<String>, credits_passed: u32, courses_taken: &[&str]) -> Self {
        Self {
            name: name.into(),
            credits_passed,
            courses_taken: courses_taken.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_collects_courses_into_set() {
        let student = Student::new("Reza", 110, &["Algoritma", "Algoritma", "Basis Data"]);

        assert_eq!(student.courses_taken.len(), 2);
        assert!(student.courses_taken.contains("Algoritma"));
        assert!(student.courses_taken.contains("Basis Data"));
    }

    #[test]
    fn student_serializes_correctly() {
        let student = Student::new("Alan", 80, &["Algoritma"]);

        let json = serde_json::to_string(&student).unwrap();
        let deserialized: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(student, deserialized);
    }
}
