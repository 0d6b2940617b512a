use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum HubError {
    #[error("HubError: Handler '{0}' failed on payload '{1}' error '{2}'")]
    HandlerFailed(String, String, String),

    #[error("HubError: Handler '{0}' panicked on payload '{1}' message '{2}'")]
    HandlerPanicked(String, String, String),

    #[error("HubError: Delivery of payload '{0}' incomplete: {1} of {2} handlers failed")]
    DeliveryIncomplete(String, usize, usize),

    #[error("HubError: Invalid Toast Configuration: '{0}'")]
    InvalidToastConfiguration(String),

    #[error("HubError: Unsupported toast position: '{0}'")]
    InvalidToastPosition(String),

    #[error("HubError: Toast not found by id '{0}'")]
    ToastNotFound(u64),

    #[error("HubError: Toast '{0}' cannot be closed, close button is disabled")]
    ToastNotClosable(u64),

    #[error("HubError: Order registered already by id '{0}'")]
    OrderAlreadyExists(String),

    #[error("HubError: Order not found by id '{0}'")]
    OrderNotFound(String),

    #[error("HubError: Property not found: '{0}'")]
    PropertyNotFound(String),

    #[error("HubError: Only numeric values are allowed for age, got '{0}'")]
    InvalidAge(String),

    #[error("HubError: Invalid name '{0}', at least 2 characters are required")]
    InvalidName(String),
}
