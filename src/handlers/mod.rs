//! Example consumers of hub payloads.
pub mod logger;
pub mod toast;
