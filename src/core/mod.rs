//! Core capability contracts and shared outcome types.
//!
//! This module contains the polymorphic seams the coordinators compose over:
//! - `ValidationRule`: a single pass/fail judgment over a subject
//! - `PaymentStrategy` / `NotificationStrategy`: the two checkout stages
//! - `RuleOutcome` / `RuleViolation`: per-rule results of an aggregation pass
//!
//! Everything here is pure apart from audit emission. Contracts are generic
//! over the record type they judge; the domain modules instantiate them.

mod outcome;
mod rule;
mod strategy;

pub use outcome::{RuleOutcome, RuleViolation};
pub use rule::ValidationRule;
pub use strategy::{NotificationStrategy, PaymentStrategy};
