//! Turnstile: a pluggable policy gating library.
//!
//! Turnstile gates an entity through a sequence of pluggable policy checks
//! before committing a state change. It is built around two coordinating
//! pieces and the capability contracts they compose over:
//!
//! - **Rule aggregation** (`registration`): an ordered sequence of
//!   independent pass/fail rules, every one evaluated and reported, with
//!   the verdict being the logical AND. Evaluation never short-circuits,
//!   so one pass surfaces every violation at once.
//! - **Strategy pipeline** (`checkout`): dependent side-effecting stages
//!   (pay, then notify) sequenced with a status transition in between and
//!   an early exit at the first failing stage.
//!
//! Coordinators hold no business rules of their own; collaborators are
//! injected at construction. Adding a policy means implementing a contract
//! from [`core`] and injecting an instance, with no coordinator changes.
//!
//! Failure is always a boolean or report outcome, never an error value.
//! Audit output rides a `tracing` side channel: info events for passes,
//! warn/error events for failures. The library never installs a
//! subscriber; that is the entry point's job, done once.
//!
//! # Example
//!
//! ```rust
//! use turnstile::checkout::{CheckoutCoordinator, CreditCardProcessor, EmailNotifier, Order, OrderStatus};
//! use turnstile::registration::{
//!     CreditThresholdRule, FeeStatusRule, PrerequisiteRule, RegistrationCoordinator, Student,
//! };
//!
//! let registration = RegistrationCoordinator::new(vec![
//!     Box::new(CreditThresholdRule),
//!     Box::new(PrerequisiteRule),
//!     Box::new(FeeStatusRule),
//! ]);
//!
//! let reza = Student::new("Reza", 110, &["Algoritma", "Basis Data"]);
//! assert!(registration.register(&reza));
//!
//! let checkout = CheckoutCoordinator::new(Box::new(CreditCardProcessor), Box::new(EmailNotifier));
//! let mut order = Order::new("Andi", 500_000.0);
//! assert!(checkout.run_checkout(&mut order));
//! assert_eq!(order.status, OrderStatus::Paid);
//! ```

pub mod checkout;
pub mod core;
pub mod registration;

// Re-export commonly used types
pub use checkout::{CheckoutCoordinator, CheckoutReceipt, Order, OrderStatus};
pub use core::{NotificationStrategy, PaymentStrategy, RuleOutcome, RuleViolation, ValidationRule};
pub use registration::{RegistrationCoordinator, RegistrationReport, Student};
