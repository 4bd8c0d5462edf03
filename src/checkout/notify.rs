//! Concrete notification strategy variants.

use crate::checkout::order::Order;
use crate::core::NotificationStrategy;

/// Simulated email confirmation channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailNotifier;

impl NotificationStrategy<Order> for EmailNotifier {
    fn name(&self) -> &'static str {
        "email"
    }

    fn send(&self, order: &Order) {
        tracing::info!(
            customer = %order.customer_name,
            status = order.status.name(),
            "sending email confirmation"
        );
    }
}
