pub mod diagnostics;
pub mod error;

pub use diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticSink, LogSink, MemorySink, NullSink};
pub use error::{CrossDocError, Result};
