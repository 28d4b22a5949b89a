//! Declaration input contract.
//!
//! These types are what a front-end hands to the generator. They mirror the
//! host declaration closely and carry markers exactly as written; nothing here
//! is validated. Serde derives define the JSON dump format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// One type declaration as seen by a front-end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDecl {
    pub qualified_name: String,
    /// Originating namespace. Derived from `qualified_name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Primary-constructor parameters in declaration order.
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
    #[serde(default)]
    pub markers: Vec<ClassMarker>,
}

impl TypeDecl {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        TypeDecl {
            qualified_name: qualified_name.into(),
            namespace: None,
            params: Vec::new(),
            properties: Vec::new(),
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: ClassMarker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn namespace(&self) -> &str {
        match &self.namespace {
            Some(ns) => ns,
            None => crate::package_of(&self.qualified_name),
        }
    }

    pub fn simple_name(&self) -> &str {
        crate::simple_name(&self.qualified_name)
    }

    /// Carries `remember` or `remember-saveable`.
    pub fn is_annotated(&self) -> bool {
        self.markers
            .iter()
            .any(|m| matches!(m, ClassMarker::Remember | ClassMarker::RememberSaveable))
    }
}

/// Constructor parameter as declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        ParamDecl {
            name: name.into(),
            ty,
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }
}

/// Declared property. Only `persisted-key` markers matter on properties;
/// anything else is ignored by extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>) -> Self {
        PropertyDecl {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }
}

/// Parameter or property marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Marker {
    /// Host source expression, spliced verbatim.
    LiteralValue { expr: String },
    LiteralInt { value: i64 },
    LiteralString { value: String },
    LiteralBool { value: bool },
    FrameworkInject {
        #[serde(default)]
        args: Vec<String>,
    },
    NamedInject {
        #[serde(default)]
        args: Vec<String>,
    },
    CustomProvide {
        provider: String,
        #[serde(default)]
        args: Vec<String>,
    },
    InvalidationKey,
    PersistedKey { key: String },
}

impl Marker {
    /// Kebab-case marker name, as used in diagnostics and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Marker::LiteralValue { .. } => "literal-value",
            Marker::LiteralInt { .. } => "literal-int",
            Marker::LiteralString { .. } => "literal-string",
            Marker::LiteralBool { .. } => "literal-bool",
            Marker::FrameworkInject { .. } => "framework-inject",
            Marker::NamedInject { .. } => "named-inject",
            Marker::CustomProvide { .. } => "custom-provide",
            Marker::InvalidationKey => "invalidation-key",
            Marker::PersistedKey { .. } => "persisted-key",
        }
    }

    /// Markers of which at most one may appear on a parameter.
    pub fn is_exclusive(&self) -> bool {
        !matches!(self, Marker::InvalidationKey)
    }
}

/// Class-level marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ClassMarker {
    Remember,
    RememberSaveable,
    Injector { name: String },
    InjectionMode { mode: InjectionMode },
}

/// Whether ambient framework injection may be emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InjectionMode {
    #[default]
    None,
    FrameworkCall,
}

impl InjectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InjectionMode::None => "none",
            InjectionMode::FrameworkCall => "frameworkCall",
        }
    }

    pub fn allows_framework(self) -> bool {
        self == InjectionMode::FrameworkCall
    }
}

impl fmt::Display for InjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InjectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(InjectionMode::None),
            "frameworkCall" | "framework" | "koin" => Ok(InjectionMode::FrameworkCall),
            other => Err(format!(
                "unknown injection mode `{other}` (expected `none`, `framework` or `koin`)"
            )),
        }
    }
}

impl TryFrom<String> for InjectionMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InjectionMode> for String {
    fn from(mode: InjectionMode) -> Self {
        mode.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn namespace_falls_back_to_qualified_prefix() {
        let decl = TypeDecl::new("com.example.Counter");
        assert_eq!(decl.namespace(), "com.example");
        assert_eq!(decl.simple_name(), "Counter");
    }

    #[test]
    fn explicit_namespace_wins() {
        let mut decl = TypeDecl::new("com.example.Outer.Inner");
        decl.namespace = Some("com.example".to_string());
        assert_eq!(decl.namespace(), "com.example");
    }

    #[test]
    fn deserialize_declaration() {
        let json = r#"{
            "qualifiedName": "com.example.Counter",
            "params": [
                {"name": "start", "type": "Int", "markers": [
                    {"kind": "literal-value", "expr": "10"},
                    {"kind": "invalidation-key"}
                ]},
                {"name": "repo", "type": "com.example.Repo", "markers": [
                    {"kind": "custom-provide", "provider": "injectClass"}
                ]}
            ],
            "markers": [{"kind": "remember"}, {"kind": "injection-mode", "mode": "koin"}]
        }"#;
        let decl: TypeDecl = serde_json::from_str(json).unwrap();
        assert!(decl.is_annotated());
        assert_eq!(decl.params.len(), 2);
        assert_eq!(
            decl.params[1].markers[0],
            Marker::CustomProvide {
                provider: "injectClass".to_string(),
                args: Vec::new(),
            }
        );
        assert_eq!(
            decl.markers[1],
            ClassMarker::InjectionMode {
                mode: InjectionMode::FrameworkCall
            }
        );
    }

    #[test]
    fn unannotated_declaration() {
        let decl = TypeDecl::new("a.B").with_marker(ClassMarker::Injector {
            name: "inject".to_string(),
        });
        assert!(!decl.is_annotated());
    }

    #[test]
    fn injection_mode_parse() {
        assert_eq!("none".parse(), Ok(InjectionMode::None));
        assert_eq!("koin".parse(), Ok(InjectionMode::FrameworkCall));
        assert!("guice".parse::<InjectionMode>().is_err());
    }
}
