use crate::core::contracts::{HandlerError, INotificationHandler};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::io::{self, Stdout, Write};

type Clock = dyn Fn() -> DateTime<Utc> + Send + Sync;

/// Writes `"<unix millis> <payload>"` lines to the wrapped writer.
pub struct LogHandler<W: Write + Send + 'static> {
    out: Mutex<W>,
    clock: Box<Clock>,
}

impl LogHandler<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + 'static> LogHandler<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            clock: Box::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send + 'static> INotificationHandler for LogHandler<W> {
    fn handle(&self, payload: &str) -> Result<(), HandlerError> {
        let millis = (self.clock)().timestamp_millis();
        let mut out = self.out.lock();
        writeln!(out, "{millis} {payload}")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contracts::Handler;
    use crate::core::hub::NotificationHub;
    use chrono::TimeZone;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn fixed_clock() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn test_writes_timestamp_and_payload() {
        let handler = LogHandler::new(Vec::new()).with_clock(fixed_clock);

        handler.handle("User clicked button!").unwrap();
        handler.handle("User toggled switch!").unwrap();

        let written = String::from_utf8(handler.into_inner()).unwrap();
        assert_eq!(
            written,
            "1700000000123 User clicked button!\n1700000000123 User toggled switch!\n"
        );
    }

    #[test]
    fn test_default_clock_uses_current_time() {
        let buffer = SharedBuffer::default();
        let before = Utc::now().timestamp_millis();
        LogHandler::new(buffer.clone()).handle("now").unwrap();
        let after = Utc::now().timestamp_millis();

        let line = buffer.contents();
        let (millis, payload) = line.trim_end().split_once(' ').unwrap();
        let millis: i64 = millis.parse().unwrap();
        assert!(millis >= before && millis <= after);
        assert_eq!(payload, "now");
    }

    #[test]
    fn test_write_error_is_reported_by_hub() {
        let hub = NotificationHub::new();
        hub.subscribe(Handler::new(LogHandler::new(BrokenPipe)));

        let report = hub.notify("lost");

        assert_eq!(report.delivered(), 0);
        assert_eq!(report.failures().len(), 1);
        assert!(report.failures()[0].to_string().contains("pipe closed"));
    }

    #[test]
    fn test_subscribed_logger_receives_notifications() {
        let buffer = SharedBuffer::default();
        let hub = NotificationHub::new();
        hub.subscribe(Handler::new(
            LogHandler::new(buffer.clone()).with_clock(fixed_clock),
        ));

        let _ = hub.notify("hello");

        assert_eq!(buffer.contents(), "1700000000123 hello\n");
    }
}
