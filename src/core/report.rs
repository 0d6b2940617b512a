use crate::core::error_hub::HubError;

/// Outcome of a single [`NotificationHub::notify`](crate::core::hub::NotificationHub::notify).
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReport {
    payload: String,
    delivered: usize,
    failures: Vec<HubError>,
}

impl DeliveryReport {
    pub(crate) fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
            delivered: 0,
            failures: Vec::new(),
        }
    }

    pub(crate) fn record_delivered(&mut self) {
        self.delivered += 1;
    }

    pub(crate) fn record_failure(&mut self, error: HubError) {
        self.failures.push(error);
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn failures(&self) -> &[HubError] {
        &self.failures
    }

    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of handlers that ran to completion, or `DeliveryIncomplete`
    /// when at least one of them failed.
    pub fn into_result(self) -> Result<usize, HubError> {
        if self.is_complete() {
            Ok(self.delivered)
        } else {
            Err(HubError::DeliveryIncomplete(
                self.payload,
                self.failures.len(),
                self.delivered + self.failures.len(),
            ))
        }
    }
}
