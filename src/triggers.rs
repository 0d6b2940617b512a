//! Trigger sources that publish human-readable payloads to a hub.

use crate::core::hub::NotificationHub;
use crate::core::report::DeliveryReport;
use std::sync::Arc;

pub const CLICK_MESSAGE: &str = "User clicked button!";
pub const TOGGLE_MESSAGE: &str = "User toggled switch!";

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    hub: Arc<NotificationHub>,
}

impl Button {
    pub fn new(label: impl Into<String>, hub: Arc<NotificationHub>) -> Self {
        Self {
            label: label.into(),
            hub,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn click(&self) -> DeliveryReport {
        self.hub.notify(CLICK_MESSAGE)
    }
}

#[derive(Debug)]
pub struct Switch {
    label: String,
    checked: bool,
    hub: Arc<NotificationHub>,
}

impl Switch {
    pub fn new(label: impl Into<String>, hub: Arc<NotificationHub>) -> Self {
        Self {
            label: label.into(),
            checked: false,
            hub,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn toggle(&mut self) -> DeliveryReport {
        self.checked = !self.checked;
        self.hub.notify(TOGGLE_MESSAGE)
    }
}
