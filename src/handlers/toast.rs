use crate::core::contracts::{HandlerError, INotificationHandler};
use crate::core::error_hub::HubError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

type Clock = dyn Fn() -> DateTime<Utc> + Send + Sync;

/// Longest accepted auto-close delay: one day.
pub const MAX_AUTO_CLOSE_MS: u64 = 86_400_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastPosition::TopLeft => write!(f, "top-left"),
            ToastPosition::TopCenter => write!(f, "top-center"),
            ToastPosition::TopRight => write!(f, "top-right"),
            ToastPosition::BottomLeft => write!(f, "bottom-left"),
            ToastPosition::BottomCenter => write!(f, "bottom-center"),
            ToastPosition::BottomRight => write!(f, "bottom-right"),
        }
    }
}

impl TryFrom<&str> for ToastPosition {
    type Error = HubError;

    fn try_from(value: &str) -> Result<Self, HubError> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "top-left" => Ok(ToastPosition::TopLeft),
            "top-center" => Ok(ToastPosition::TopCenter),
            "top-right" => Ok(ToastPosition::TopRight),
            "bottom-left" => Ok(ToastPosition::BottomLeft),
            "bottom-center" => Ok(ToastPosition::BottomCenter),
            "bottom-right" => Ok(ToastPosition::BottomRight),
            _ => Err(HubError::InvalidToastPosition(value.to_string())),
        }
    }
}

impl TryFrom<String> for ToastPosition {
    type Error = HubError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ToastConfigurationDto {
    pub position: ToastPosition,
    pub auto_close_ms: u64,
    pub close_button: bool,
}

impl Default for ToastConfigurationDto {
    fn default() -> Self {
        Self {
            position: ToastPosition::BottomRight,
            auto_close_ms: 2000,
            close_button: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastConfiguration {
    position: ToastPosition,
    auto_close: chrono::Duration,
    close_button: bool,
}

impl ToastConfiguration {
    pub fn new(dto: ToastConfigurationDto) -> Result<Self, HubError> {
        if dto.auto_close_ms < 1 || dto.auto_close_ms > MAX_AUTO_CLOSE_MS {
            return Err(HubError::InvalidToastConfiguration(format!(
                "auto_close_ms must be between 1 and {MAX_AUTO_CLOSE_MS}, got {}",
                dto.auto_close_ms
            )));
        }
        let auto_close = chrono::Duration::milliseconds(dto.auto_close_ms as i64);

        Ok(Self {
            position: dto.position,
            auto_close,
            close_button: dto.close_button,
        })
    }

    pub fn position(&self) -> ToastPosition {
        self.position
    }

    pub fn auto_close(&self) -> chrono::Duration {
        self.auto_close
    }

    pub fn close_button(&self) -> bool {
        self.close_button
    }
}

impl Default for ToastConfiguration {
    fn default() -> Self {
        Self {
            position: ToastPosition::BottomRight,
            auto_close: chrono::Duration::milliseconds(2000),
            close_button: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub position: ToastPosition,
    pub shown_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub closable: bool,
}

/// Shows every payload as a transient toast that disappears after the
/// configured auto-close delay.
pub struct ToastHandler {
    config: ToastConfiguration,
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
    clock: Box<Clock>,
}

impl ToastHandler {
    pub fn new(config: ToastConfiguration) -> Self {
        Self {
            config,
            toasts: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            clock: Box::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &ToastConfiguration {
        &self.config
    }

    /// Adds a toast for `message`, dropping toasts already expired at the
    /// time it is shown.
    pub fn show(&self, message: &str) -> Toast {
        let shown_at = (self.clock)();
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            message: message.to_string(),
            position: self.config.position,
            shown_at,
            expires_at: shown_at
                .checked_add_signed(self.config.auto_close)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            closable: self.config.close_button,
        };

        let mut toasts = self.toasts.lock();
        toasts.retain(|t| t.expires_at > shown_at);
        toasts.push(toast.clone());
        toast
    }

    /// Drops toasts that expired at or before `now` and returns the rest,
    /// oldest first.
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut toasts = self.toasts.lock();
        toasts.retain(|t| t.expires_at > now);
        toasts.clone()
    }

    pub fn dismiss(&self, id: u64) -> Result<Toast, HubError> {
        let mut toasts = self.toasts.lock();
        let Some(index) = toasts.iter().position(|t| t.id == id) else {
            return Err(HubError::ToastNotFound(id));
        };
        if !toasts[index].closable {
            return Err(HubError::ToastNotClosable(id));
        }
        Ok(toasts.remove(index))
    }
}

impl Default for ToastHandler {
    fn default() -> Self {
        Self::new(ToastConfiguration::default())
    }
}

impl INotificationHandler for ToastHandler {
    fn handle(&self, payload: &str) -> Result<(), HandlerError> {
        self.show(payload);
        Ok(())
    }
}
