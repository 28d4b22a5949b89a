//! rmbr generator driver.
//!
//! Reads annotated declarations, runs every class through
//! extract → validate → resolve → emit, and writes the generated units.
//!
//! ```text
//! rmbr_ir, rmbr_diagnostic, rmbr_analysis, rmbr_codegen
//!                       ↓
//!                    rmbrc  ← this crate
//!                   /     \
//!          rmbr binary     tests
//! ```

pub mod adapter;
pub mod commands;
pub mod config;
pub mod pipeline;
pub mod sink;

pub use adapter::{AdapterError, DeclarationSource, JsonSource};
pub use config::{ConfigError, GenConfig};
pub use pipeline::{check, generate, ClassFailure, ErrorPhase, GenerateOutput};
pub use sink::{write_units, DirSink, MemorySink, OutputSink, WriteError, WriteOutcome, WriteSummary};

use rmbr_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use rmbr_diagnostic::Diagnostic;

static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Initialize the tracing subscriber once. Inactive unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Render diagnostics to a string, as the terminal emitter prints them.
pub fn render_diagnostics(diagnostics: &[Diagnostic], color: ColorMode) -> String {
    let mut buf = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut buf, color, false);
        emitter.emit_all(diagnostics);
    }
    String::from_utf8_lossy(&buf).into_owned()
}
