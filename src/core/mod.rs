pub mod contracts;
pub mod error_hub;
pub mod hub;
pub mod report;
