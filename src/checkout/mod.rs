//! Order checkout pipeline.
//!
//! The order record and its status, the concrete payment and notification
//! strategy variants, and the coordinator that sequences them with the
//! short-circuit policy: the first failing stage stops the run.

mod coordinator;
mod notify;
mod order;
mod payment;

pub use coordinator::{CheckoutCoordinator, CheckoutReceipt};
pub use notify::EmailNotifier;
pub use order::{Order, OrderStatus};
pub use payment::{CreditCardProcessor, QrisProcessor};
