//! Purpose: Build the per-invocation leveled line logger.
//! Exports: `Logger`, `LOG_ENV`, `LevelLineFormat`.
//! Role: Scoped `tracing` subscriber used by the CLI; never installed process-wide.
//! Invariants: Lines look like `LEVEL   : message` with the level padded to 8 columns.
//! Invariants: Default threshold is WARN; `verbose` lowers it to DEBUG.
//! Invariants: `JSON_SORT_LOG` (EnvFilter syntax) overrides both when set and valid.

use std::fmt;
use std::io;
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

pub const LOG_ENV: &str = "JSON_SORT_LOG";

/// A configured subscriber that is only active inside [`Logger::in_scope`].
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Logger writing to stderr.
    pub fn new(verbose: bool) -> Self {
        Self::with_writer(verbose, io::stderr)
    }

    pub fn with_writer<W>(verbose: bool, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_ansi(false)
            .with_writer(writer)
            .event_format(LevelLineFormat)
            .finish();
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Run `f` with this logger as the current default subscriber.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Error-level events end the run, so they are labelled `CRITICAL`.
fn level_label(level: Level) -> &'static str {
    match level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "CRITICAL",
    }
}

pub struct LevelLineFormat;

impl<S, N> FormatEvent<S, N> for LevelLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{:<8}: ", level_label(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory log sink for tests.
    #[derive(Clone, Default)]
    pub(crate) struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub(crate) fn text(&self) -> String {
            let buf = self.0.lock().unwrap_or_else(|poison| poison.into_inner());
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut inner = self.0.lock().unwrap_or_else(|poison| poison.into_inner());
            inner.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Logger;
    use super::capture::Captured;
    use tracing::{debug, error, warn};

    #[test]
    fn quiet_logger_hides_debug_lines() {
        let captured = Captured::default();
        let logger = Logger::with_writer(false, captured.clone());
        logger.in_scope(|| {
            debug!("Checking file: /tmp/x.json");
            warn!("careful");
        });
        assert_eq!(captured.text(), "WARNING : careful\n");
    }

    #[test]
    fn verbose_logger_shows_debug_lines() {
        let captured = Captured::default();
        let logger = Logger::with_writer(true, captured.clone());
        logger.in_scope(|| debug!("Saving to: /tmp/out.json"));
        assert_eq!(captured.text(), "DEBUG   : Saving to: /tmp/out.json\n");
    }

    #[test]
    fn error_events_are_labelled_critical() {
        let captured = Captured::default();
        let logger = Logger::with_writer(false, captured.clone());
        logger.in_scope(|| error!("No such file '/tmp/nope.json'"));
        assert_eq!(captured.text(), "CRITICAL: No such file '/tmp/nope.json'\n");
    }

    #[test]
    fn logger_is_inactive_outside_scope() {
        let captured = Captured::default();
        let _logger = Logger::with_writer(true, captured.clone());
        debug!("not captured");
        assert!(captured.text().is_empty());
    }
}
