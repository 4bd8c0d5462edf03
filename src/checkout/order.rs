//! Order record and its payment status.

use serde::{Deserialize, Serialize};

/// Payment status of an order.
///
/// The only transition is `Open -> Paid`, performed by the checkout
/// coordinator on the success path. There is deliberately no terminal
/// failed status: a failed payment attempt leaves the order `Open`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Initial status: payment has not settled.
    #[default]
    Open,
    /// Payment settled.
    Paid,
}

impl OrderStatus {
    /// Get the status name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Paid => "paid",
        }
    }
}

/// A customer order moving through checkout.
///
/// Only the checkout coordinator writes `status`, exactly once per
/// successful attempt. Strategies read the record and never mutate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Customer display name, used in notifications and audit events.
    pub customer_name: String,
    /// Order total. Never negative.
    pub total_price: f64,
    /// Current payment status.
    pub status: OrderStatus,
}

impl Order {
    /// Create a new order in the initial `Open` status.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::checkout::{Order, OrderStatus};
    ///
    /// let order = Order::new("Andi", 500_000.0);
    /// assert_eq!(order.status, OrderStatus::Open);
    /// ```
    pub fn new(customer_name: impl Into<String>, total_price: f64) -> Self {
        Self {
            customer_name: customer_name.into(),
            total_price,
            status: OrderStatus::Open,
        }
    }
}
