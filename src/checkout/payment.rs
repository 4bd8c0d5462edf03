//! Concrete payment strategy variants.
//!
//! Both variants settle unconditionally. They stand in for external
//! gateways; the pipeline still treats them as fallible because the
//! contract permits `false`.

use crate::checkout::order::Order;
use crate::core::PaymentStrategy;

/// Simulated credit card gateway.
#[derive(Clone, Copy, Debug, Default)]
pub struct CreditCardProcessor;

impl PaymentStrategy<Order> for CreditCardProcessor {
    fn name(&self) -> &'static str {
        "credit_card"
    }

    fn process(&self, order: &Order) -> bool {
        tracing::info!(
            customer = %order.customer_name,
            amount = order.total_price,
            "processing credit card payment"
        );
        true
    }
}

/// Simulated QRIS payment channel. Added after the fact without touching
/// the coordinator or the other processor.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrisProcessor;

impl PaymentStrategy<Order> for QrisProcessor {
    fn name(&self) -> &'static str {
        "qris"
    }

    fn process(&self, order: &Order) -> bool {
        tracing::info!(
            customer = %order.customer_name,
            amount = order.total_price,
            "generating QRIS code for payment"
        );
        true
    }
}
