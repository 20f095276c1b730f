//! Diagnostic system for recoverable problems.
//!
//! Nothing in statbar fails hard on bad input. Malformed markup, unusable
//! option values and dangling font references are all recovered locally
//! and reported here instead:
//! - [`ErrorCode`] for searchability
//! - [`Diagnostic`] carrying message, span labels and notes
//! - [`DiagnosticSink`], the seam every producer writes through
//!
//! Producers take a `&mut impl DiagnosticSink` so tests can collect into a
//! [`DiagnosticQueue`] while the program logs through [`TracingSink`].

mod diagnostic;
mod error_code;
pub mod queue;
mod sink;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
pub use sink::{DiagnosticSink, NullSink, TracingSink};
