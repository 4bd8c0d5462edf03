//! Strategy contracts for the checkout pipeline stages.
//!
//! Payment and notification are dependent, side-effecting stages. Each is
//! abstracted behind its own contract so a coordinator can sequence them
//! without knowing which concrete gateway or channel is in play.

/// Settles payment for an order.
///
/// `process` must not mutate the order; status transitions belong to the
/// coordinator alone. Callers must treat the result as fallible even when
/// a given implementation happens to always succeed: the contract permits
/// `false`, and the pipeline short-circuits on it.
pub trait PaymentStrategy<O>: Send + Sync {
    /// Stable strategy name used in audit events.
    fn name(&self) -> &'static str;

    /// Attempt to settle payment. `true` means the payment cleared.
    fn process(&self, order: &O) -> bool;
}

/// Emits a post-success notice for an order.
///
/// Runs only after payment has settled and the order status has been
/// transitioned. Success is assumed: the pipeline consumes no return
/// value from `send`.
pub trait NotificationStrategy<O>: Send + Sync {
    /// Stable strategy name used in audit events.
    fn name(&self) -> &'static str;

    /// Send the notice. Reads the order; never mutates it.
    fn send(&self, order: &O);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct AcceptAll;

    impl PaymentStrategy<u32> for AcceptAll {
        fn name(&self) -> &'static str {
            "accept_all"
        }

        fn process(&self, _order: &u32) -> bool {
            true
        }
    }

    struct CountingNotifier {
        sent: Arc<AtomicUsize>,
    }

    impl NotificationStrategy<u32> for CountingNotifier {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn send(&self, _order: &u32) {
            self.sent.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn strategies_are_usable_as_trait_objects() {
        let payment: Box<dyn PaymentStrategy<u32>> = Box::new(AcceptAll);
        assert!(payment.process(&42));
        assert_eq!(payment.name(), "accept_all");
    }

    #[test]
    fn notifier_invocations_are_observable() {
        let sent = Arc::new(AtomicUsize::new(0));
        let notifier: Box<dyn NotificationStrategy<u32>> = Box::new(CountingNotifier {
            sent: Arc::clone(&sent),
        });

        notifier.send(&1);
        notifier.send(&1);

        assert_eq!(sent.load(Ordering::SeqCst), 2);
    }
}
