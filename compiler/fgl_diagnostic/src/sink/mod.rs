//! Destinations for reported diagnostics.

use crate::{Diagnostic, DiagnosticQueue};

/// Receives diagnostics as they are produced.
///
/// Reporting never fails and never stops the reporter; a sink that wants to
/// cap output (see [`DiagnosticQueue`]) silently drops the excess.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);

    fn report_all(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>)
    where
        Self: Sized,
    {
        for diagnostic in diagnostics {
            self.report(diagnostic);
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Adapts a closure into a sink.
///
/// ```text
/// let mut count = 0;
/// let mut sink = FnSink(|_| count += 1);
/// ```
pub struct FnSink<F>(pub F);

impl<F: FnMut(Diagnostic)> DiagnosticSink for FnSink<F> {
    fn report(&mut self, diagnostic: Diagnostic) {
        (self.0)(diagnostic);
    }
}

#[cfg(test)]
mod tests;
