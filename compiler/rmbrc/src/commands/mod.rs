//! Command handlers for the `rmbr` CLI.
//!
//! Handlers return `true` on success so the binary owns the exit status.
//! Argument parsing is separate from execution and returns
//! [`ConfigError`]s instead of exiting.

use std::path::PathBuf;

use rmbr_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use rmbr_diagnostic::Diagnostic;

use crate::config::parse_option_arg;
use crate::{ConfigError, GenConfig};

mod check;
mod explain;
mod generate;

pub use check::check_declarations;
pub use explain::explain_error;
pub use generate::generate_declarations;

/// Parsed arguments shared by `generate` and `check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Declaration file or directory.
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: GenConfig,
    /// Compare against the output directory instead of writing.
    pub check: bool,
    pub color: ColorMode,
}

/// Parse everything after the command name.
///
/// `--option` entries are applied before the dedicated flags regardless of
/// their position, so a flag always wins over an option.
pub fn parse_generate_args(args: &[String]) -> Result<GenerateArgs, ConfigError> {
    let mut input = None;
    let mut output = None;
    let mut check = false;
    let mut color = ColorMode::Auto;
    let mut options: Vec<&str> = Vec::new();
    let mut flags: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let dir = iter.next().ok_or(ConfigError::Missing {
                    what: "output directory after `-o`",
                })?;
                output = Some(PathBuf::from(dir));
            }
            "--option" => {
                let option = iter.next().ok_or(ConfigError::Missing {
                    what: "`key=value` after `--option`",
                })?;
                options.push(option);
            }
            "--check" => check = true,
            "--no-parallel" | "--timestamp" => flags.push(arg),
            other => {
                if let Some(option) = other.strip_prefix("--option=") {
                    options.push(option);
                } else if let Some(dir) = other.strip_prefix("--output=") {
                    output = Some(PathBuf::from(dir));
                } else if let Some(mode) = other.strip_prefix("--color=") {
                    color = mode.parse().map_err(|reason| ConfigError::InvalidValue {
                        key: "--color".to_string(),
                        value: mode.to_string(),
                        reason,
                    })?;
                } else if other.starts_with("--injection=") {
                    flags.push(other);
                } else if other.starts_with('-') {
                    return Err(ConfigError::UnknownFlag {
                        flag: other.to_string(),
                    });
                } else if input.is_none() {
                    input = Some(PathBuf::from(other));
                } else {
                    return Err(ConfigError::UnknownFlag {
                        flag: other.to_string(),
                    });
                }
            }
        }
    }

    let mut config = GenConfig::default();
    for option in options {
        let (key, value) = parse_option_arg(option)?;
        config.apply_option(key, value)?;
    }
    for flag in flags {
        match flag {
            "--no-parallel" => config.parallel = false,
            "--timestamp" => config.timestamp = true,
            _ => {
                if let Some(mode) = flag.strip_prefix("--injection=") {
                    config.injection_mode =
                        mode.parse().map_err(|reason| ConfigError::InvalidValue {
                            key: "--injection".to_string(),
                            value: mode.to_string(),
                            reason,
                        })?;
                }
            }
        }
    }

    Ok(GenerateArgs {
        input: input.ok_or(ConfigError::Missing {
            what: "declaration input path",
        })?,
        output,
        config,
        check,
        color,
    })
}

/// Emitter on stderr, colored when stderr is a terminal.
pub(crate) fn stderr_emitter(color: ColorMode) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    TerminalEmitter::with_color_mode(std::io::stderr(), color, is_tty)
}

/// Emit diagnostics plus the summary line. Nothing is printed for an empty list.
pub(crate) fn report(emitter: &mut impl DiagnosticEmitter, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}
