//! The `generate` command: run the full pipeline and write units.

use rmbr_diagnostic::{Diagnostic, ErrorCode};

use crate::{generate, write_units, DeclarationSource, DirSink, JsonSource};

use super::{report, stderr_emitter, GenerateArgs};

/// Generate every class and write the units under the output directory.
///
/// Units of successful classes are written even when other classes fail;
/// the run still counts as failed. In check mode nothing is written and any
/// unit that would change fails the run.
pub fn generate_declarations(args: &GenerateArgs) -> bool {
    let mut emitter = stderr_emitter(args.color);
    let Some(out_dir) = &args.output else {
        eprintln!("error: missing output directory");
        eprintln!("Usage: rmbr generate <input> -o <dir>");
        return false;
    };

    let decls = match JsonSource::new(&args.input).declarations() {
        Ok(decls) => decls,
        Err(err) => {
            report(&mut emitter, &[err.to_diagnostic()]);
            return false;
        }
    };

    let output = generate(&decls, &args.config);
    let mut diagnostics: Vec<_> = output.diagnostics().cloned().collect();

    let mut sink = DirSink::new(out_dir);
    if args.check {
        sink = sink.check_only();
    }
    let mut success = output.success;
    match write_units(&mut sink, &output.units) {
        Ok(summary) => {
            for path in &summary.would_write {
                eprintln!("would write: {}", out_dir.join(path).display());
            }
            success &= summary.would_write.is_empty();
            if !summary.would_write.is_empty() {
                diagnostics.push(
                    Diagnostic::error(ErrorCode::E9002).with_message(format!(
                        "{} generated file{} out of date",
                        summary.would_write.len(),
                        if summary.would_write.len() == 1 { " is" } else { "s are" }
                    )),
                );
            }
            println!(
                "{} classes generated ({} written, {} unchanged), {} failed, {} skipped",
                output.generated_classes,
                summary.written,
                summary.unchanged,
                output.failures.len(),
                output.skipped.len()
            );
        }
        Err(err) => {
            diagnostics.push(err.to_diagnostic());
            success = false;
        }
    }

    report(&mut emitter, &diagnostics);
    success
}
