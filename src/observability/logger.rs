//! Structured JSON logger
//!
//! One line per event, written synchronously. Key order is
//! deterministic: `event`, then `severity`, then fields sorted by name,
//! so log output is reproducible for identical runs. ERROR and FATAL go
//! to stderr, everything else to stdout. A write failure is swallowed;
//! logging must never affect request processing.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn to_stderr(&self) -> bool {
        *self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Emits one event line at the given severity.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = render(severity, event, fields);
        let result = if severity.to_stderr() {
            let mut out = io::stderr();
            out.write_all(line.as_bytes()).and_then(|_| out.flush())
        } else {
            let mut out = io::stdout();
            out.write_all(line.as_bytes()).and_then(|_| out.flush())
        };
        let _ = result;
    }

    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
    }

    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}

/// Renders one event as a JSON line with deterministic key order.
fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut line = String::with_capacity(128);
    line.push_str("{\"event\":\"");
    escape_into(&mut line, event);
    line.push_str("\",\"severity\":\"");
    line.push_str(severity.as_str());
    line.push('"');

    let mut sorted: Vec<_> = fields.to_vec();
    sorted.sort_by_key(|(key, _)| *key);
    for (key, value) in sorted {
        line.push_str(",\"");
        escape_into(&mut line, key);
        line.push_str("\":\"");
        escape_into(&mut line, value);
        line.push('"');
    }

    line.push_str("}\n");
    line
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}
