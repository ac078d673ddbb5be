use fgl_ir::Span;

use super::*;
use crate::{DiagnosticConfig, ErrorCode};

fn diag(start: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("at {start}"))
        .with_span(Span::new(start, start + 1))
}

#[test]
fn test_vec_sink_collects_in_order() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    sink.report_all([diag(3), diag(1)]);
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].start(), 3);
}

#[test]
fn test_fn_sink_calls_closure() {
    let mut seen = Vec::new();
    {
        let mut sink = FnSink(|d: Diagnostic| seen.push(d.start()));
        sink.report(diag(7));
        sink.report(diag(2));
    }
    assert_eq!(seen, vec![7, 2]);
}

#[test]
fn test_queue_sink_respects_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
    });
    queue.report(diag(0));
    queue.report(diag(5));
    assert_eq!(queue.error_count(), 1);
    assert!(queue.limit_reached());
}

#[test]
fn test_sink_through_mutable_reference() {
    fn report_twice(mut sink: impl DiagnosticSink) {
        sink.report(diag(0));
        sink.report(diag(1));
    }
    let mut sink: Vec<Diagnostic> = Vec::new();
    report_twice(&mut sink);
    assert_eq!(sink.len(), 2);
}
