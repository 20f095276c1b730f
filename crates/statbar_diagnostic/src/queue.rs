//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Limit on stored diagnostics to bound memory on pathological input
//! - Deduplication of identical diagnostics
//! - Per-severity counts that keep counting past the limit

use crate::{Diagnostic, DiagnosticSink, Severity};

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct QueueConfig {
    /// Maximum number of diagnostics kept (0 = unlimited).
    pub limit: usize,
    /// Drop a diagnostic identical to one already queued.
    pub deduplicate: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            limit: 100,
            deduplicate: true,
        }
    }
}

impl QueueConfig {
    /// No limits (for testing).
    pub fn unlimited() -> Self {
        QueueConfig {
            limit: 0,
            deduplicate: false,
        }
    }
}

/// Collects diagnostics for later inspection.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let pieces = scan_line("{Fx}", &mut queue);
/// assert_eq!(queue.warning_count(), 1);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    dropped: usize,
    config: QueueConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    pub fn with_config(config: QueueConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
            dropped: 0,
            config,
        }
    }

    /// Add a diagnostic. Returns `false` if it was deduplicated or over the limit.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Note => {}
        }

        if self.config.deduplicate && self.diagnostics.contains(&diagnostic) {
            return false;
        }
        if self.config.limit > 0 && self.diagnostics.len() >= self.config.limit {
            self.dropped += 1;
            return false;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Diagnostics discarded because the limit was reached.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Take all queued diagnostics, ordered by primary span start.
    ///
    /// Diagnostics without a span sort first; ties keep insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by_key(|d| d.primary_span().map(|span| span.start));
        self.error_count = 0;
        self.warning_count = 0;
        self.dropped = 0;
        diagnostics
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

#[cfg(test)]
mod tests;
