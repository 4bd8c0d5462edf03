//! Two-stage checkout pipeline with short-circuit on the first failure.
//!
//! Payment and notification are dependent steps (notifying about an
//! unpaid order is meaningless), so unlike the registration aggregator
//! this coordinator stops at the first failing stage.

use crate::checkout::order::{Order, OrderStatus};
use crate::core::{NotificationStrategy, PaymentStrategy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a completed checkout: which status transition happened
/// and when.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Customer the order belongs to.
    pub customer: String,
    /// Status the order held before the transition.
    pub from: OrderStatus,
    /// Status the order holds after the transition.
    pub to: OrderStatus,
    /// When the checkout completed.
    pub completed_at: DateTime<Utc>,
}

/// Sequences one payment strategy and one notification strategy into a
/// pipeline with a status transition in between.
///
/// The coordinator exclusively owns the `Open -> Paid` transition: it is
/// written exactly once per attempt, only on the success path. On payment
/// failure the status is left untouched and the notifier never runs; the
/// order stays `Open` rather than moving to any terminal failed status.
///
/// # Example
///
/// ```rust
/// use turnstile::checkout::{
///     CheckoutCoordinator, CreditCardProcessor, EmailNotifier, Order, OrderStatus,
/// };
///
/// let coordinator =
///     CheckoutCoordinator::new(Box::new(CreditCardProcessor), Box::new(EmailNotifier));
///
/// let mut order = Order::new("Andi", 500_000.0);
/// assert!(coordinator.run_checkout(&mut order));
/// assert_eq!(order.status, OrderStatus::Paid);
/// ```
pub struct CheckoutCoordinator {
    payment: Box<dyn PaymentStrategy<Order>>,
    notifier: Box<dyn NotificationStrategy<Order>>,
}

impl CheckoutCoordinator {
    /// Create a coordinator from exactly one payment strategy and one
    /// notification strategy. Both are fixed at construction; swapping a
    /// stage means constructing a new coordinator, not editing this one.
    pub fn new(
        payment: Box<dyn PaymentStrategy<Order>>,
        notifier: Box<dyn NotificationStrategy<Order>>,
    ) -> Self {
        Self { payment, notifier }
    }

    /// Run the pipeline: pay, transition `Open -> Paid`, notify.
    ///
    /// Returns a receipt on success. On payment failure returns `None`
    /// without touching the order status or invoking the notifier.
    pub fn checkout(&self, order: &mut Order) -> Option<CheckoutReceipt> {
        tracing::info!(
            customer = %order.customer_name,
            payment = self.payment.name(),
            "starting checkout"
        );

        if !self.payment.process(order) {
            tracing::error!(
                customer = %order.customer_name,
                "payment failed, transaction cancelled"
            );
            return None;
        }

        let from = order.status;
        order.status = OrderStatus::Paid;
        tracing::info!(
            customer = %order.customer_name,
            status = order.status.name(),
            "payment settled, status updated"
        );

        self.notifier.send(order);
        tracing::info!(customer = %order.customer_name, "checkout completed");

        Some(CheckoutReceipt {
            customer: order.customer_name.clone(),
            from,
            to: order.status,
            completed_at: Utc::now(),
        })
    }

    /// Boolean form of [`Self::checkout`]: `true` iff payment settled.
    pub fn run_checkout(&self, order: &mut Order) -> bool {
        self.checkout(order).is_some()
    }
}
