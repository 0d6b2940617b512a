//! Validated, logged access to a [`Person`] through explicit wrapper methods.

use crate::core::error_hub::HubError;
use crate::core::hub::NotificationHub;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const PROPERTY_NAME: &str = "name";
const PROPERTY_AGE: &str = "age";
const PROPERTY_NATIONALITY: &str = "nationality";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub nationality: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyChange {
    pub property: &'static str,
    pub old: String,
    pub new: String,
}

impl fmt::Display for PropertyChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Changed {} from {} to {}", self.property, self.old, self.new)
    }
}

#[derive(Debug)]
pub struct PersonProxy {
    target: Person,
    hub: Option<Arc<NotificationHub>>,
}

impl PersonProxy {
    pub fn new(target: Person) -> Self {
        Self { target, hub: None }
    }

    /// Publishes every accepted change message to `hub`.
    pub fn with_hub(mut self, hub: Arc<NotificationHub>) -> Self {
        self.hub = Some(hub);
        self
    }

    pub fn name(&self) -> &str {
        log_read(PROPERTY_NAME, &self.target.name);
        &self.target.name
    }

    pub fn age(&self) -> u32 {
        log_read(PROPERTY_AGE, &self.target.age);
        self.target.age
    }

    pub fn nationality(&self) -> &str {
        log_read(PROPERTY_NATIONALITY, &self.target.nationality);
        &self.target.nationality
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<PropertyChange, HubError> {
        let name = name.into();
        if name.chars().count() < 2 {
            return Err(rejected(HubError::InvalidName(name)));
        }
        let old = std::mem::replace(&mut self.target.name, name.clone());
        self.changed(PROPERTY_NAME, old, name)
    }

    pub fn set_age(&mut self, age: u32) -> Result<PropertyChange, HubError> {
        let old = std::mem::replace(&mut self.target.age, age);
        self.changed(PROPERTY_AGE, old.to_string(), age.to_string())
    }

    pub fn set_nationality(
        &mut self,
        nationality: impl Into<String>,
    ) -> Result<PropertyChange, HubError> {
        let nationality = nationality.into();
        let old = std::mem::replace(&mut self.target.nationality, nationality.clone());
        self.changed(PROPERTY_NATIONALITY, old, nationality)
    }

    /// Reads a property by name, rendered as a string.
    pub fn get(&self, property: &str) -> Result<String, HubError> {
        match property {
            PROPERTY_NAME => Ok(self.name().to_string()),
            PROPERTY_AGE => Ok(self.age().to_string()),
            PROPERTY_NATIONALITY => Ok(self.nationality().to_string()),
            _ => Err(rejected(HubError::PropertyNotFound(property.to_string()))),
        }
    }

    /// Writes a property by name. `age` must parse as a non-negative integer.
    pub fn set(&mut self, property: &str, value: &str) -> Result<PropertyChange, HubError> {
        match property {
            PROPERTY_NAME => self.set_name(value),
            PROPERTY_AGE => {
                let age = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| rejected(HubError::InvalidAge(value.to_string())))?;
                self.set_age(age)
            }
            PROPERTY_NATIONALITY => self.set_nationality(value),
            _ => Err(rejected(HubError::PropertyNotFound(property.to_string()))),
        }
    }

    pub fn target(&self) -> &Person {
        &self.target
    }

    pub fn into_inner(self) -> Person {
        self.target
    }

    /// The write is kept even when publishing fails; the failure is
    /// returned as `HubError::DeliveryIncomplete`.
    fn changed(
        &self,
        property: &'static str,
        old: String,
        new: String,
    ) -> Result<PropertyChange, HubError> {
        let change = PropertyChange { property, old, new };

        #[cfg(feature = "logging")]
        log::info!("Proxy. {}", change);

        if let Some(hub) = &self.hub {
            hub.notify(&change.to_string()).into_result()?;
        }
        Ok(change)
    }
}

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn log_read(property: &str, value: &dyn fmt::Display) {
    #[cfg(feature = "logging")]
    log::info!("Proxy. The value of {} is {}", property, value);
}

fn rejected(err: HubError) -> HubError {
    #[cfg(feature = "logging")]
    log::warn!("Proxy. Rejected: {}", err);
    err
}
