use crate::core::contracts::Handler;
use crate::core::error_hub::HubError;
use crate::core::report::DeliveryReport;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Ordered registry of handlers plus a synchronous dispatcher.
///
/// The handler list is an `Arc<Vec<Handler>>` swapped under a write lock on
/// every change. `notify` clones the current `Arc` and releases the lock
/// before running any handler, so handlers may subscribe or unsubscribe from
/// inside a notification; such changes apply to the next `notify`.
#[derive(Default)]
pub struct NotificationHub {
    handlers: RwLock<Arc<Vec<Handler>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler`. Duplicates are kept and invoked once per copy.
    pub fn subscribe(&self, handler: Handler) {
        #[cfg(feature = "logging")]
        log::debug!("Hub. Subscribing handler '{}'", handler.name());

        let mut handlers = self.handlers.write();
        Arc::make_mut(&mut *handlers).push(handler);
    }

    /// Removes every entry identical to `handler` and returns how many were
    /// removed. Unknown handlers are ignored.
    pub fn unsubscribe(&self, handler: &Handler) -> usize {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        if handlers.iter().any(|h| h == handler) {
            Arc::make_mut(&mut *handlers).retain(|h| h != handler);
        }
        let removed = before - handlers.len();

        #[cfg(feature = "logging")]
        log::debug!(
            "Hub. Unsubscribed handler '{}' ({} entries removed)",
            handler.name(),
            removed
        );

        removed
    }

    /// Invokes every handler registered at call time, in registration order.
    ///
    /// A handler returning `Err` or panicking is recorded in the report and
    /// delivery continues with the next one.
    pub fn notify(&self, payload: &str) -> DeliveryReport {
        let snapshot = self.handlers.read().clone();
        let mut report = DeliveryReport::new(payload);

        for handler in snapshot.iter() {
            match catch_unwind(AssertUnwindSafe(|| handler.call(payload))) {
                Ok(Ok(())) => report.record_delivered(),
                Ok(Err(err)) => {
                    #[cfg(feature = "logging")]
                    log::warn!(
                        "Hub. Handler '{}' failed on payload '{}': {}",
                        handler.name(),
                        payload,
                        err
                    );

                    report.record_failure(HubError::HandlerFailed(
                        handler.name().to_string(),
                        payload.to_string(),
                        err.to_string(),
                    ));
                }
                Err(panic) => {
                    let message = panic_message(panic.as_ref());

                    #[cfg(feature = "logging")]
                    log::warn!(
                        "Hub. Handler '{}' panicked on payload '{}': {}",
                        handler.name(),
                        payload,
                        message
                    );

                    report.record_failure(HubError::HandlerPanicked(
                        handler.name().to_string(),
                        payload.to_string(),
                        message,
                    ));
                }
            }
        }

        report
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    pub fn clear(&self) {
        *self.handlers.write() = Arc::new(Vec::new());
    }
}

impl fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHub")
            .field("handlers", &*self.handlers.read())
            .finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
