//! The `check` command: extract, validate and resolve without emitting.

use crate::{check, DeclarationSource, JsonSource};

use super::{report, stderr_emitter, GenerateArgs};

/// Analyze every declaration and report all class failures.
pub fn check_declarations(args: &GenerateArgs) -> bool {
    let mut emitter = stderr_emitter(args.color);
    let decls = match JsonSource::new(&args.input).declarations() {
        Ok(decls) => decls,
        Err(err) => {
            report(&mut emitter, &[err.to_diagnostic()]);
            return false;
        }
    };

    let output = check(&decls, &args.config);
    let diagnostics: Vec<_> = output.diagnostics().cloned().collect();
    report(&mut emitter, &diagnostics);

    if output.success {
        println!(
            "OK: {} ({} classes checked, {} skipped)",
            args.input.display(),
            output.generated_classes,
            output.skipped.len()
        );
    }
    output.success
}
