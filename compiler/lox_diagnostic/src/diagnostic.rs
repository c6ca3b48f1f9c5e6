use std::fmt;

use lox_ir::Span;

use crate::ErrorCode;

/// Whether a diagnostic stops the pipeline.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    /// Printed under `--verbose`; execution continues.
    Warning,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location a diagnostic points at, plus a short caption.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub caption: String,
}

/// One problem found in a script, from any stage of the pipeline.
///
/// Built with chained `with_*` calls from an error's `to_diagnostic`:
///
/// ```text
/// Diagnostic::error(code).with_message(msg).with_label(span, "here")
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Where the problem is. Runtime errors raised outside any expression
    /// have no location.
    pub location: Option<Label>,
    /// Extra lines shown under `--verbose`.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            location: None,
            notes: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point the diagnostic at `span`. A later call replaces the location.
    pub fn with_label(mut self, span: Span, caption: impl Into<String>) -> Self {
        self.location = Some(Label {
            span,
            caption: caption.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.location.as_ref().map(|label| label.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_location_and_notes() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("expected ';', found '}'")
            .with_label(Span::new(0, 3), "first guess")
            .with_label(Span::new(10, 11), "unexpected token")
            .with_note("statements end with ';'");

        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.primary_span(), Some(Span::new(10, 11)));
        assert_eq!(
            diag.location.as_ref().map(|l| l.caption.as_str()),
            Some("unexpected token")
        );
        assert_eq!(diag.notes, vec!["statements end with ';'".to_string()]);
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::warning(ErrorCode::E2009).with_message("'a' is already declared");
        assert_eq!(
            diag.to_string(),
            "warning [E2009]: 'a' is already declared"
        );
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.primary_span(), None);
    }
}
