//! Observer-style notification hub, plus the command and proxy patterns
//! built on top of it.
//!
//! ```
//! use notification_hub::{Handler, NotificationHub};
//!
//! let hub = NotificationHub::new();
//! let logger = Handler::from_fn(|payload| println!("{payload}"));
//!
//! hub.subscribe(logger.clone());
//! assert_eq!(hub.notify("User clicked button!").delivered(), 1);
//!
//! hub.unsubscribe(&logger);
//! assert!(hub.is_empty());
//! ```

pub mod command;
pub mod core;
pub mod handlers;
pub mod proxy;
pub mod triggers;

pub use crate::core::contracts::{Handler, HandlerError, INotificationHandler};
pub use crate::core::error_hub::HubError;
pub use crate::core::hub::NotificationHub;
pub use crate::core::report::DeliveryReport;
