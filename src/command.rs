//! Order management expressed as command objects.

use crate::core::error_hub::HubError;
use crate::core::hub::NotificationHub;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_details: String,
}

pub trait IOrderCommand {
    fn execute(&self, orders: &mut Vec<Order>) -> Result<String, HubError>;
}

pub struct PlaceOrderCommand {
    order_details: String,
    id: String,
}

impl PlaceOrderCommand {
    pub fn new(order_details: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            order_details: order_details.into(),
            id: id.into(),
        }
    }
}

impl IOrderCommand for PlaceOrderCommand {
    fn execute(&self, orders: &mut Vec<Order>) -> Result<String, HubError> {
        if orders.iter().any(|o| o.id == self.id) {
            return Err(HubError::OrderAlreadyExists(self.id.clone()));
        }
        orders.push(Order {
            id: self.id.clone(),
            order_details: self.order_details.clone(),
        });
        Ok(format!(
            "You have successfully ordered {} ({})",
            self.order_details, self.id
        ))
    }
}

pub struct CancelOrderCommand {
    id: String,
}

impl CancelOrderCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IOrderCommand for CancelOrderCommand {
    fn execute(&self, orders: &mut Vec<Order>) -> Result<String, HubError> {
        let before = orders.len();
        orders.retain(|o| o.id != self.id);
        if orders.len() == before {
            return Err(HubError::OrderNotFound(self.id.clone()));
        }
        Ok(format!("You have canceled your order {}", self.id))
    }
}

pub struct TrackOrderCommand {
    id: String,
}

impl TrackOrderCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IOrderCommand for TrackOrderCommand {
    fn execute(&self, orders: &mut Vec<Order>) -> Result<String, HubError> {
        if !orders.iter().any(|o| o.id == self.id) {
            return Err(HubError::OrderNotFound(self.id.clone()));
        }
        Ok(format!("Your order {} will arrive in 20 min", self.id))
    }
}

/// Owns the order list and runs commands against it.
///
/// With a hub attached, every successful command message is published.
#[derive(Debug, Default)]
pub struct OrderManager {
    orders: Vec<Order>,
    hub: Option<Arc<NotificationHub>>,
}

impl OrderManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hub(hub: Arc<NotificationHub>) -> Self {
        Self {
            orders: Vec::new(),
            hub: Some(hub),
        }
    }

    /// Runs `command` and publishes its message to the attached hub.
    ///
    /// A command that succeeded stays applied even when publishing fails; the
    /// failure is returned as `HubError::DeliveryIncomplete`.
    pub fn execute(&mut self, command: &dyn IOrderCommand) -> Result<String, HubError> {
        let message = command.execute(&mut self.orders)?;

        #[cfg(feature = "logging")]
        log::info!("Orders. {}", message);

        if let Some(hub) = &self.hub {
            hub.notify(&message).into_result()?;
        }
        Ok(message)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}
