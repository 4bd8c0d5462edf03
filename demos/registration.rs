//! Student registration gating walkthrough.
//!
//! Three students go through the same rule sequence; one passes, two fail
//! on different rules, and every rule reports its own outcome either way.
//!
//! Run with: cargo run --example registration

use tracing_subscriber::EnvFilter;
use turnstile::registration::{
    CreditThresholdRule, FeeStatusRule, PrerequisiteRule, RegistrationCoordinator, Student,
};

fn main() {
    // Process-wide audit sink, installed once at the entry point. The
    // library itself never configures logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let coordinator = RegistrationCoordinator::new(vec![
        Box::new(CreditThresholdRule),
        Box::new(PrerequisiteRule),
        Box::new(FeeStatusRule),
    ]);

    let students = [
        Student::new("Reza", 110, &["Algoritma", "Basis Data"]),
        Student::new("Alan", 80, &["Algoritma"]),
        Student::new("Radit", 105, &["Statistika", "Matematika Diskrit"]),
    ];

    for student in &students {
        let report = coordinator.evaluate(student);
        let verdict = if report.passed() { "ACCEPTED" } else { "REJECTED" };
        println!("{}: {}", report.subject, verdict);
        for violation in &report.violations {
            println!("  - {}", violation);
        }
    }
}
