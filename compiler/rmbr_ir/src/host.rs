//! Host-language symbols referenced by generated code.

use std::borrow::Cow;

use crate::TypeRef;

/// A top-level host symbol: package plus simple name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    pub package: &'static str,
    pub name: &'static str,
}

impl Symbol {
    pub const fn new(package: &'static str, name: &'static str) -> Self {
        Symbol { package, name }
    }

    pub fn qualified(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }
}

/// How names are printed into generated text.
///
/// Codegen implements this with its import table; [`AsWritten`] prints type
/// names as declared and symbols by simple name.
pub trait RenderNames {
    fn type_name(&self, ty: &TypeRef) -> String;
    fn symbol(&self, symbol: Symbol) -> String;
}

pub struct AsWritten;

impl RenderNames for AsWritten {
    fn type_name(&self, ty: &TypeRef) -> String {
        ty.to_string()
    }

    fn symbol(&self, symbol: Symbol) -> String {
        symbol.name.to_string()
    }
}

pub const COMPOSABLE: Symbol = Symbol::new("androidx.compose.runtime", "Composable");
pub const REMEMBER: Symbol = Symbol::new("androidx.compose.runtime", "remember");
pub const REMEMBER_COROUTINE_SCOPE: Symbol =
    Symbol::new("androidx.compose.runtime", "rememberCoroutineScope");
pub const REMEMBER_SAVEABLE: Symbol =
    Symbol::new("androidx.compose.runtime.saveable", "rememberSaveable");
pub const SAVER: Symbol = Symbol::new("androidx.compose.runtime.saveable", "Saver");
pub const MAP_SAVER: Symbol = Symbol::new("androidx.compose.runtime.saveable", "mapSaver");
pub const KOIN_INJECT: Symbol = Symbol::new("org.koin.compose", "koinInject");
pub const PARAMETERS_OF: Symbol = Symbol::new("org.koin.core.parameter", "parametersOf");

/// Qualified name of the ambient-scope type.
pub const AMBIENT_SCOPE_TYPE: &str = "kotlinx.coroutines.CoroutineScope";

/// Packages whose types are visible without an import.
pub const IMPLICIT_PACKAGES: &[&str] = &[
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.jvm",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
    "java.lang",
];

pub fn is_implicit_package(package: &str) -> bool {
    IMPLICIT_PACKAGES.contains(&package)
}

/// Quote `value` as a Kotlin string literal.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Kotlin hard keywords; never valid as bare identifiers.
pub const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Identifier as it must appear in source: hard keywords are backquoted.
pub fn escape_ident(name: &str) -> Cow<'_, str> {
    if HARD_KEYWORDS.contains(&name) {
        Cow::Owned(format!("`{name}`"))
    } else {
        Cow::Borrowed(name)
    }
}
