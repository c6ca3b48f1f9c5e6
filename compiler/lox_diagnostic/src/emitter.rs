//! Line-oriented diagnostic output.
//!
//! Renders each diagnostic as `line <N>: <message>`. Warnings insert
//! `warning: ` before the message. In verbose mode the error code is
//! appended in brackets and notes follow on indented lines.

use std::io::Write;

use crate::{Diagnostic, LineOffsetTable, Severity};

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn flush(&mut self);
}

/// Emitter writing one line per diagnostic.
pub struct LineEmitter<W: Write> {
    writer: W,
    lines: LineOffsetTable,
    verbose: bool,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(writer: W, source: &str) -> Self {
        LineEmitter {
            writer,
            lines: LineOffsetTable::build(source),
            verbose: false,
        }
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for LineEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let text = render(diagnostic, &self.lines, self.verbose);
        let _ = self.writer.write_all(text.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Render a diagnostic to a string, including the trailing newline.
///
/// Diagnostics without a primary label are reported on line 1.
pub fn render(diagnostic: &Diagnostic, lines: &LineOffsetTable, verbose: bool) -> String {
    let line = diagnostic
        .primary_span()
        .map_or(1, |span| lines.line_from_offset(span.start));

    let mut out = format!("line {line}: ");
    if diagnostic.severity == Severity::Warning {
        out.push_str("warning: ");
    }
    out.push_str(&diagnostic.message);
    if verbose {
        out.push_str(" [");
        out.push_str(diagnostic.code.as_str());
        out.push(']');
    }
    out.push('\n');

    if verbose {
        for note in &diagnostic.notes {
            out.push_str("  note: ");
            out.push_str(note);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lox_ir::Span;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ErrorCode;

    fn emit_to_string(source: &str, verbose: bool, diag: &Diagnostic) -> String {
        let mut emitter = LineEmitter::new(Vec::new(), source).verbose(verbose);
        emitter.emit(diag);
        emitter.flush();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_error_uses_line_of_primary_span() {
        let source = "var a = 1;\nprint b;\n";
        let diag = Diagnostic::error(ErrorCode::E6002)
            .with_message("undefined variable 'b'")
            .with_label(Span::new(17, 18), "not defined");
        assert_eq!(
            emit_to_string(source, false, &diag),
            "line 2: undefined variable 'b'\n"
        );
    }

    #[test]
    fn test_verbose_appends_code_and_notes() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("expected ';', found end of input")
            .with_label(Span::new(7, 7), "here")
            .with_note("statements end with ';'");
        assert_eq!(
            emit_to_string("print 1", true, &diag),
            "line 1: expected ';', found end of input [E1001]\n  note: statements end with ';'\n"
        );
    }

    #[test]
    fn test_warning_prefix() {
        let diag = Diagnostic::warning(ErrorCode::E2009)
            .with_message("'a' is already declared in this scope")
            .with_label(Span::new(18, 19), "redeclared");
        assert_eq!(
            emit_to_string("{\n  var a;\n\n  var a;\n}", false, &diag),
            "line 4: warning: 'a' is already declared in this scope\n"
        );
    }

    #[test]
    fn test_missing_label_reports_line_one() {
        let diag = Diagnostic::error(ErrorCode::E6006).with_message("stack overflow");
        let lines = LineOffsetTable::build("a\nb\nc");
        assert_eq!(render(&diag, &lines, false), "line 1: stack overflow\n");
    }
}
