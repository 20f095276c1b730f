use pretty_assertions::assert_eq;
use statbar_ir::Span;

use super::*;
use crate::ErrorCode;

fn warning_at(start: u32) -> Diagnostic {
    Diagnostic::warning(ErrorCode::M0002).with_label(Span::new(start, start + 2), "here")
}

#[test]
fn test_counts_by_severity() {
    let mut queue = DiagnosticQueue::new();
    queue.emit(warning_at(0));
    queue.emit(Diagnostic::error(ErrorCode::C0001));
    queue.emit(Diagnostic::note(ErrorCode::C0002));
    assert_eq!(queue.warning_count(), 1);
    assert_eq!(queue.error_count(), 1);
    assert!(queue.has_errors());
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_duplicates_are_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(warning_at(4)));
    assert!(!queue.add(warning_at(4)));
    assert_eq!(queue.len(), 1);
    // Counting still sees both.
    assert_eq!(queue.warning_count(), 2);
}

#[test]
fn test_unlimited_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(QueueConfig::unlimited());
    queue.emit(warning_at(4));
    queue.emit(warning_at(4));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_limit_drops_overflow() {
    let mut queue = DiagnosticQueue::with_config(QueueConfig {
        limit: 2,
        deduplicate: true,
    });
    for start in 0..5 {
        queue.emit(warning_at(start * 3));
    }
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dropped(), 3);
}

#[test]
fn test_flush_sorts_by_position_and_resets() {
    let mut queue = DiagnosticQueue::new();
    queue.emit(warning_at(9));
    queue.emit(Diagnostic::note(ErrorCode::C0003));
    queue.emit(warning_at(1));

    let flushed = queue.flush();
    let starts: Vec<_> = flushed
        .iter()
        .map(|d| d.primary_span().map(|s| s.start))
        .collect();
    assert_eq!(starts, vec![None, Some(1), Some(9)]);
    assert!(queue.is_empty());
    assert_eq!(queue.warning_count(), 0);
}
