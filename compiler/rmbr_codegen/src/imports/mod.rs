//! Per-unit import table.
//!
//! Every qualified name a unit prints is registered first. Names are then
//! printed by simple name and imported, except where two different names
//! share a simple name: those are printed fully qualified and not imported.
//! Bare (unqualified) names occupy their simple name too, so a qualified
//! type never shadows them through an import.

use rmbr_ir::host::{is_implicit_package, RenderNames, Symbol};
use rmbr_ir::{package_of, simple_name, TypeRef};
use rustc_hash::FxHashMap;

pub struct ImportTable {
    namespace: String,
    /// Simple name to the distinct names registered under it.
    by_simple: FxHashMap<String, Vec<String>>,
}

impl ImportTable {
    pub fn new(namespace: impl Into<String>) -> Self {
        ImportTable {
            namespace: namespace.into(),
            by_simple: FxHashMap::default(),
        }
    }

    /// Register a type and all its generic arguments.
    pub fn add_type(&mut self, ty: &TypeRef) {
        ty.walk(&mut |t| {
            if !t.is_star() {
                self.add_name(&t.name);
            }
        });
    }

    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.add_name(&symbol.qualified());
    }

    fn add_name(&mut self, name: &str) {
        let entry = self
            .by_simple
            .entry(simple_name(name).to_string())
            .or_default();
        if !entry.iter().any(|n| n == name) {
            entry.push(name.to_string());
        }
    }

    fn is_ambiguous(&self, simple: &str) -> bool {
        self.by_simple.get(simple).is_some_and(|names| names.len() > 1)
    }

    /// Printed form of a registered name.
    pub fn name_for(&self, name: &str) -> String {
        let simple = simple_name(name);
        if simple.len() == name.len() || !self.is_ambiguous(simple) {
            simple.to_string()
        } else {
            name.to_string()
        }
    }

    /// Sorted, de-duplicated import list.
    pub fn imports(&self) -> Vec<String> {
        let mut imports: Vec<String> = self
            .by_simple
            .iter()
            .filter(|(_, names)| names.len() == 1)
            .flat_map(|(_, names)| names.iter())
            .filter(|name| {
                let package = package_of(name);
                !package.is_empty()
                    && package != self.namespace
                    && !is_implicit_package(package)
            })
            .cloned()
            .collect();
        imports.sort();
        imports
    }
}

impl RenderNames for ImportTable {
    fn type_name(&self, ty: &TypeRef) -> String {
        ty.render_with(&|t| self.name_for(&t.name))
    }

    fn symbol(&self, symbol: Symbol) -> String {
        self.name_for(&symbol.qualified())
    }
}
