//! Append-only diagnostic collector.
//!
//! Unlike a reporting queue, the sink never filters, deduplicates, or
//! reorders: tooling sees every diagnostic in the order it was reported.
//!
//! ```text
//! let mut sink = ErrorSink::new();
//! sink.on_error(ErrorCode::E0200, Span::ZERO, "no Invoke method");
//! assert_eq!(sink.len(), 1);
//! ```

use crate::{Diagnostic, ErrorCode, Span};

/// Ordered collector of diagnostics for one resolution.
///
/// Owned by the caller so it stays inspectable after resolution returns.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ErrorSink {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        ErrorSink {
            diagnostics: Vec::new(),
        }
    }

    /// Record an error at `span`.
    pub fn on_error(&mut self, code: ErrorCode, span: Span, message: impl Into<String>) {
        self.push(
            Diagnostic::error(code)
                .with_message(message)
                .with_span(span),
        );
    }

    /// Append a prepared diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(code = %diagnostic.code, message = %diagnostic.message, "diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// All diagnostics in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over diagnostics with error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Iterate over all diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Check whether any error was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Number of diagnostics reported.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the sink, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a ErrorSink {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
