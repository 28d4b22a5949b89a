//! Output units and the common file frame.

use std::path::PathBuf;

use crate::ImportTable;

/// First line of every generated unit.
pub const HEADER: &str = "// This file was auto-generated by rmbr. Do not modify.";

const TIMESTAMP_PREFIX: &str = "\n// Generated at ";

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputUnit {
    pub namespace: String,
    /// File stem, without extension.
    pub file_name: String,
    pub text: String,
}

impl OutputUnit {
    /// `<namespace segments>/<file_name>.kt`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.namespace.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.kt", self.file_name));
        path
    }

    /// Text without the trailing timestamp comment.
    pub fn stable_text(&self) -> &str {
        strip_timestamp(&self.text)
    }
}

/// Remove a trailing `// Generated at <secs>` line, if present.
pub fn strip_timestamp(text: &str) -> &str {
    match text.rfind(TIMESTAMP_PREFIX) {
        Some(idx) => {
            let tail = &text[idx + TIMESTAMP_PREFIX.len()..];
            let digits = tail.strip_suffix('\n').unwrap_or(tail);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                &text[..idx]
            } else {
                text
            }
        }
        None => text,
    }
}

/// Frame a unit body with header, package line, imports and optional stamp.
pub(crate) fn frame(namespace: &str, imports: &ImportTable, body: &str, stamp: Option<u64>) -> String {
    let mut out = String::with_capacity(body.len() + 256);
    out.push_str(HEADER);
    out.push_str("\n\n");
    if !namespace.is_empty() {
        out.push_str("package ");
        out.push_str(namespace);
        out.push_str("\n\n");
    }
    let imports = imports.imports();
    if !imports.is_empty() {
        for import in &imports {
            out.push_str("import ");
            out.push_str(import);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(body);
    if let Some(secs) = stamp {
        out.push_str(TIMESTAMP_PREFIX);
        out.push_str(&secs.to_string());
        out.push('\n');
    }
    out
}
