// Diagnostic sinks for the validation core.
// The validator never writes to a global logger directly; it is handed a sink.

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Debug,
    Info,
    Warn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Receives diagnostic messages emitted while a document set is validated.
///
/// Implementations must be cheap and must not fail; diagnostics are never
/// surfaced to the caller of the validator.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, level: DiagnosticLevel, message: &str);

    fn debug(&self, message: &str) {
        self.emit(DiagnosticLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(DiagnosticLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(DiagnosticLevel::Warn, message);
    }
}

/// Forwards diagnostics to the `log` facade under the `crossdoc` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Debug => log::debug!(target: "crossdoc", "{}", message),
            DiagnosticLevel::Info => log::info!(target: "crossdoc", "{}", message),
            DiagnosticLevel::Warn => log::warn!(target: "crossdoc", "{}", message),
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _level: DiagnosticLevel, _message: &str) {}
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages_at(&self, level: DiagnosticLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|d| d.level == level)
            .map(|d| d.message)
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, level: DiagnosticLevel, message: &str) {
        let entry = Diagnostic {
            level,
            message: message.to_string(),
        };
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.info("first");
        sink.warn("second");
        sink.debug("third");

        let entries = sink.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, DiagnosticLevel::Warn);
        assert_eq!(sink.messages_at(DiagnosticLevel::Debug), vec!["third".to_string()]);
    }

    #[test]
    fn test_null_sink_is_silent() {
        let sink = NullSink;
        sink.warn("ignored");
    }
}
