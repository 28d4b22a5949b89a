//! The per-class generation pipeline.
//!
//! Classes are independent: each runs extract → validate → resolve → emit
//! on its own, possibly on the rayon pool, and results are collected in input
//! order. A failed class contributes diagnostics only; the others still
//! produce their units.

use rayon::prelude::*;
use rmbr_codegen::{emit_class, OutputUnit};
use rmbr_diagnostic::{Diagnostic, Problem};
use rmbr_ir::{ResolvedClass, TypeDecl};

use crate::GenConfig;

/// Which phase rejected a class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorPhase {
    Extract,
    Validate,
    Resolve,
}

/// One rejected class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassFailure {
    pub class: String,
    pub phase: ErrorPhase,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a generation run.
#[derive(Clone, Debug, Default)]
pub struct GenerateOutput {
    /// No class failed.
    pub success: bool,
    /// Units of every successful class, in input order.
    pub units: Vec<OutputUnit>,
    pub failures: Vec<ClassFailure>,
    /// Number of classes that passed every phase.
    pub generated_classes: usize,
    /// Declarations without a class marker.
    pub skipped: Vec<String>,
}

impl GenerateOutput {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.failures.iter().flat_map(|f| f.diagnostics.iter())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics().filter(|d| d.is_error()).count()
    }
}

enum ClassResult {
    Skipped(String),
    Done(Vec<OutputUnit>),
    Failed(ClassFailure),
}

/// Run the full pipeline and emit units.
#[tracing::instrument(level = "debug", skip_all, fields(count = decls.len()))]
pub fn generate(decls: &[TypeDecl], config: &GenConfig) -> GenerateOutput {
    let stamp = config.timestamp.then(unix_seconds);
    run(decls, config, |class| emit_class(&class, stamp))
}

/// Run extraction, validation and resolution only.
#[tracing::instrument(level = "debug", skip_all, fields(count = decls.len()))]
pub fn check(decls: &[TypeDecl], config: &GenConfig) -> GenerateOutput {
    run(decls, config, |_| Vec::new())
}

fn run<F>(decls: &[TypeDecl], config: &GenConfig, emit: F) -> GenerateOutput
where
    F: Fn(ResolvedClass) -> Vec<OutputUnit> + Sync,
{
    let process = |decl: &TypeDecl| match analyze(decl, config) {
        Ok(Some(class)) => ClassResult::Done(emit(class)),
        Ok(None) => ClassResult::Skipped(decl.qualified_name.clone()),
        Err(failure) => ClassResult::Failed(failure),
    };
    let results: Vec<ClassResult> = if config.parallel {
        decls.par_iter().map(process).collect()
    } else {
        decls.iter().map(process).collect()
    };

    let mut output = GenerateOutput::default();
    for result in results {
        match result {
            ClassResult::Skipped(name) => output.skipped.push(name),
            ClassResult::Done(units) => {
                output.generated_classes += 1;
                output.units.extend(units);
            }
            ClassResult::Failed(failure) => output.failures.push(failure),
        }
    }
    output.success = output.failures.is_empty();
    tracing::debug!(
        generated = output.generated_classes,
        failed = output.failures.len(),
        skipped = output.skipped.len(),
        "pipeline finished"
    );
    output
}

/// Analyze one declaration. `Ok(None)` means it is not annotated.
fn analyze(decl: &TypeDecl, config: &GenConfig) -> Result<Option<ResolvedClass>, ClassFailure> {
    if !decl.is_annotated() {
        tracing::debug!(class = %decl.qualified_name, "not annotated, skipped");
        return Ok(None);
    }
    let fail = |phase, problems: Vec<Problem>| ClassFailure {
        class: decl.qualified_name.clone(),
        phase,
        diagnostics: problems.into_iter().map(Problem::into_diagnostic).collect(),
    };

    let model = rmbr_analysis::extract(decl).map_err(|p| fail(ErrorPhase::Extract, p))?;
    let model = rmbr_analysis::validate(model, config.injection_mode)
        .map_err(|p| fail(ErrorPhase::Validate, vec![p]))?;
    let class = rmbr_analysis::resolve(model, config.injection_mode)
        .map_err(|p| fail(ErrorPhase::Resolve, vec![p]))?;
    Ok(Some(class))
}

fn unix_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

#[cfg(test)]
mod tests;
