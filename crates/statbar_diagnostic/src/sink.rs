//! Destinations for diagnostics.

use crate::{Diagnostic, Severity};

/// Receives diagnostics from a producer.
///
/// Producers never fail on bad input; they report here and carry on.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing`, one event per diagnostic.
///
/// When given the source line, the event carries the rendered snippet
/// from [`Diagnostic::render`] instead of the one-line form.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink<'src> {
    source: Option<&'src str>,
}

impl<'src> TracingSink<'src> {
    pub fn new() -> Self {
        TracingSink { source: None }
    }

    pub fn with_source(source: &'src str) -> Self {
        TracingSink {
            source: Some(source),
        }
    }
}

impl DiagnosticSink for TracingSink<'_> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let text = match self.source {
            Some(source) => diagnostic.render(source),
            None => diagnostic.to_string(),
        };
        let code = diagnostic.code.as_str();
        match diagnostic.severity {
            Severity::Error => tracing::error!(code, "{}", text.trim_end()),
            Severity::Warning => tracing::warn!(code, "{}", text.trim_end()),
            Severity::Note => tracing::info!(code, "{}", text.trim_end()),
        }
    }
}
