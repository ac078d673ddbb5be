//! Diagnostic system for the FGL front end.
//!
//! Every phase reports problems as [`Diagnostic`] values through a
//! [`DiagnosticSink`]. Reporting never aborts: the lexer, the parser and the
//! checker all keep going after an error and the caller decides what to do
//! with the collected diagnostics.
//!
//! - [`ErrorCode`] for searchability (`E1001`, ...)
//! - [`DiagnosticQueue`] for limits, deduplication and ordering
//! - [`emitter::TerminalEmitter`] for human-readable output

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
mod sink;
pub mod span_utils;

pub use diagnostic::{unexpected_token, Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::{DiagnosticSink, FnSink};
