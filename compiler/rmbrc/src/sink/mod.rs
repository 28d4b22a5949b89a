//! Output sinks.
//!
//! Units are keyed by their relative path. Writing is idempotent: a unit
//! whose text matches what is already stored (ignoring the timestamp
//! trailer) is left alone.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rmbr_codegen::{strip_timestamp, OutputUnit};
use rmbr_diagnostic::{Diagnostic, ErrorCode, Location};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Stored text already matches.
    Unchanged,
    /// Check mode: the unit differs and would be written.
    WouldWrite,
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("cannot create directory `{}`: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let path = match self {
            WriteError::CreateDir { path, .. } | WriteError::Write { path, .. } => path,
        };
        Diagnostic::error(ErrorCode::E9002)
            .with_message(self.to_string())
            .with_label(Location::class(path.display().to_string()), "output")
    }
}

/// Destination for generated units.
pub trait OutputSink {
    fn write(&mut self, unit: &OutputUnit) -> Result<WriteOutcome, WriteError>;
}

/// Ordered in-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, unit: &OutputUnit) -> Result<WriteOutcome, WriteError> {
        let path = unit.relative_path();
        if self
            .files
            .get(&path)
            .is_some_and(|existing| strip_timestamp(existing) == unit.stable_text())
        {
            return Ok(WriteOutcome::Unchanged);
        }
        self.files.insert(path, unit.text.clone());
        Ok(WriteOutcome::Written)
    }
}

/// Writes units under an output root, creating namespace directories.
#[derive(Clone, Debug)]
pub struct DirSink {
    root: PathBuf,
    check: bool,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirSink {
            root: root.into(),
            check: false,
        }
    }

    /// Check mode never touches the disk.
    #[must_use]
    pub fn check_only(mut self) -> Self {
        self.check = true;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DirSink {
    #[tracing::instrument(level = "trace", skip_all, fields(unit = %unit.file_name))]
    fn write(&mut self, unit: &OutputUnit) -> Result<WriteOutcome, WriteError> {
        let path = self.root.join(unit.relative_path());
        if let Ok(existing) = fs::read_to_string(&path) {
            if strip_timestamp(&existing) == unit.stable_text() {
                return Ok(WriteOutcome::Unchanged);
            }
        }
        if self.check {
            return Ok(WriteOutcome::WouldWrite);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &unit.text).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "written");
        Ok(WriteOutcome::Written)
    }
}

/// Per-outcome counts of a write pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub unchanged: usize,
    /// Relative paths that check mode would rewrite.
    pub would_write: Vec<PathBuf>,
}

/// Write every unit, stopping at the first I/O error.
pub fn write_units<S: OutputSink + ?Sized>(
    sink: &mut S,
    units: &[OutputUnit],
) -> Result<WriteSummary, WriteError> {
    let mut summary = WriteSummary::default();
    for unit in units {
        match sink.write(unit)? {
            WriteOutcome::Written => summary.written += 1,
            WriteOutcome::Unchanged => summary.unchanged += 1,
            WriteOutcome::WouldWrite => summary.would_write.push(unit.relative_path()),
        }
    }
    Ok(summary)
}
