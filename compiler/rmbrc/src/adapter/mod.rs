//! Declaration adapters.
//!
//! A [`DeclarationSource`] yields the ordered declaration list of a run. The
//! JSON front-end reads what a host-compiler shim dumps: one declaration or
//! an array of them per file.

use std::fs;
use std::path::{Path, PathBuf};

use rmbr_diagnostic::{Diagnostic, ErrorCode, Location};
use rmbr_ir::TypeDecl;
use serde::Deserialize;

pub trait DeclarationSource {
    /// All declarations, in input order.
    fn declarations(&self) -> Result<Vec<TypeDecl>, AdapterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid declaration JSON in `{}`: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AdapterError {
    pub fn path(&self) -> &Path {
        match self {
            AdapterError::Io { path, .. } | AdapterError::Json { path, .. } => path,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001)
            .with_message(self.to_string())
            .with_label(
                Location::class(self.path().display().to_string()),
                "declaration input",
            )
    }
}

/// JSON declarations from a file, or from every `*.json` file under a
/// directory in sorted path order.
#[derive(Clone, Debug)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSource { path: path.into() }
    }

    /// Parse declarations from JSON text; `origin` names it in errors.
    pub fn parse_str(text: &str, origin: &Path) -> Result<Vec<TypeDecl>, AdapterError> {
        let json_err = |source| AdapterError::Json {
            path: origin.to_path_buf(),
            source,
        };
        let value: serde_json::Value = serde_json::from_str(text).map_err(json_err)?;
        if value.is_array() {
            Vec::<TypeDecl>::deserialize(value).map_err(json_err)
        } else {
            TypeDecl::deserialize(value).map_err(json_err).map(|decl| vec![decl])
        }
    }

    fn read_file(path: &Path) -> Result<Vec<TypeDecl>, AdapterError> {
        let text = fs::read_to_string(path).map_err(|source| AdapterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&text, path)
    }
}

impl DeclarationSource for JsonSource {
    #[tracing::instrument(level = "debug", skip_all, fields(path = %self.path.display()))]
    fn declarations(&self) -> Result<Vec<TypeDecl>, AdapterError> {
        if !self.path.is_dir() {
            return Self::read_file(&self.path);
        }
        let mut files = Vec::new();
        collect_json_files(&self.path, &mut files)?;
        files.sort();
        let mut decls = Vec::new();
        for file in &files {
            decls.extend(Self::read_file(file)?);
        }
        tracing::debug!(files = files.len(), declarations = decls.len(), "read declarations");
        Ok(decls)
    }
}

/// In-memory declarations, for embedding and tests.
impl DeclarationSource for Vec<TypeDecl> {
    fn declarations(&self) -> Result<Vec<TypeDecl>, AdapterError> {
        Ok(self.clone())
    }
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), AdapterError> {
    let io_err = |source| AdapterError::Io {
        path: dir.to_path_buf(),
        source,
    };
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(())
}
