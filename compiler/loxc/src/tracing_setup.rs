//! Opt-in tracing output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped tracing subscriber on stderr.
///
/// Does nothing unless `LOX_LOG` (or, failing that, `RUST_LOG`) is set, so
/// program output on stdout is never mixed with log lines by default.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("LOX_LOG").or_else(|_| std::env::var("RUST_LOG"))
        else {
            return;
        };
        let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .try_init();
    });
}
