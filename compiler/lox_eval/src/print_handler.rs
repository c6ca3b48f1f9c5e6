//! Where `print` statements send their text.
//!
//! The CLI prints to stdout. Tests capture lines in memory so they can
//! compare whole program output at once.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Output sink for `print`.
pub enum PrintSink {
    /// Process stdout. Write errors such as a closed pipe are ignored.
    Stdout,
    /// Lines accumulated in memory, each followed by `\n`.
    Capture(Mutex<String>),
}

impl PrintSink {
    pub fn println(&self, line: &str) {
        match self {
            PrintSink::Stdout => {
                let _ = writeln!(std::io::stdout().lock(), "{line}");
            }
            PrintSink::Capture(text) => {
                let mut text = text.lock();
                text.push_str(line);
                text.push('\n');
            }
        }
    }

    /// Text captured so far; always empty for stdout.
    pub fn captured(&self) -> String {
        match self {
            PrintSink::Capture(text) => text.lock().clone(),
            PrintSink::Stdout => String::new(),
        }
    }

    pub fn flush(&self) {
        if let PrintSink::Stdout = self {
            let _ = std::io::stdout().lock().flush();
        }
    }
}

/// Sink shared by the interpreter and whoever reads the output.
pub type SharedPrintHandler = Arc<PrintSink>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintSink::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintSink::Capture(Mutex::new(String::new())))
}
