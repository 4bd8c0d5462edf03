//! Order checkout walkthrough.
//!
//! Two orders run the pay-then-notify pipeline with different payment
//! strategies injected into the same coordinator type.
//!
//! Run with: cargo run --example checkout

use tracing_subscriber::EnvFilter;
use turnstile::checkout::{
    CheckoutCoordinator, CreditCardProcessor, EmailNotifier, Order, QrisProcessor,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let card_checkout =
        CheckoutCoordinator::new(Box::new(CreditCardProcessor), Box::new(EmailNotifier));
    let mut andi_order = Order::new("Andi", 500_000.0);
    if let Some(receipt) = card_checkout.checkout(&mut andi_order) {
        println!(
            "{}: {} -> {} at {}",
            receipt.customer,
            receipt.from.name(),
            receipt.to.name(),
            receipt.completed_at
        );
    }

    let qris_checkout = CheckoutCoordinator::new(Box::new(QrisProcessor), Box::new(EmailNotifier));
    let mut budi_order = Order::new("Budi", 100_000.0);
    if let Some(receipt) = qris_checkout.checkout(&mut budi_order) {
        println!(
            "{}: {} -> {} at {}",
            receipt.customer,
            receipt.from.name(),
            receipt.to.name(),
            receipt.completed_at
        );
    }
}
