//! Purpose: Report an unrecoverable failure through the active logger.
//! Exports: `critical_line`, `report_critical`.
//! Role: Single funnel for NotFound, Decode, Io and Remote failures at the CLI boundary.
//! Invariants: Exactly one critical line per failure; extra context goes to debug.
//! Invariants: Exiting is left to the caller (`main` maps the kind through `to_exit_code`).

use crate::core::error::{Error, ErrorKind};
use serde_json::Value;
use tracing::{debug, error};

/// Text logged at critical severity for `err`.
///
/// HTTP-layer failures log the message produced by the client; everything
/// else logs the full display form.
pub fn critical_line(err: &Error) -> String {
    match (err.kind(), err.message()) {
        (ErrorKind::Remote, Some(message)) => message.to_string(),
        _ => err.to_string(),
    }
}

pub fn report_critical(err: &Error) {
    error!("{}", critical_line(err));
    if let Some(hint) = err.hint() {
        debug!("hint: {hint}");
    }
    let extra = err.extra();
    if !extra.is_empty() {
        // tracing's macros bring their own `Value` into scope; build the JSON outside.
        let extra = Value::Object(extra);
        debug!("extra: {extra}");
    }
}

#[cfg(test)]
mod tests {
    use super::{critical_line, report_critical};
    use crate::core::error::{Error, ErrorKind};
    use crate::logging::Logger;
    use crate::logging::capture::Captured;

    #[test]
    fn remote_errors_log_client_message_only() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::new(ErrorKind::Remote)
            .with_message("HTTP 404")
            .with_source(io);
        assert_eq!(critical_line(&err), "HTTP 404");
    }

    #[test]
    fn other_errors_log_display_form() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad value");
        let err = Error::new(ErrorKind::Decode)
            .with_message("failed to decode JSON from '/x.json'")
            .with_source(io);
        assert_eq!(
            critical_line(&err),
            "failed to decode JSON from '/x.json': bad value"
        );
    }

    #[test]
    fn report_emits_single_critical_line_when_quiet() {
        let captured = Captured::default();
        let logger = Logger::with_writer(false, captured.clone());
        let err = Error::new(ErrorKind::NotFound)
            .with_message("No such file '/tmp/nope.json'")
            .with_path("/tmp/nope.json");

        logger.in_scope(|| report_critical(&err));
        assert_eq!(captured.text(), "CRITICAL: No such file '/tmp/nope.json'\n");
    }

    #[test]
    fn report_adds_context_when_verbose() {
        let captured = Captured::default();
        let logger = Logger::with_writer(true, captured.clone());
        let err = Error::new(ErrorKind::NotFound)
            .with_message("No such file '/tmp/nope.json'")
            .with_path("/tmp/nope.json");

        logger.in_scope(|| report_critical(&err));
        let text = captured.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#"DEBUG   : extra: {"filename":"/tmp/nope.json"}"#);
    }
}
