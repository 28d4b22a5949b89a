//! Typed class model produced by extraction.

use std::fmt;

use crate::{InjectionMode, TypeRef};

/// Default-value policy of one constructor parameter.
///
/// Extraction guarantees exactly one policy per parameter; emitters match on
/// this enum and never look at marker payloads.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefaultPolicy {
    /// Caller must supply the value.
    None,
    /// Host source expression, spliced verbatim.
    Literal(String),
    FrameworkInject { args: Vec<String> },
    NamedInject { args: Vec<String> },
    CustomProvide { provider: String, args: Vec<String> },
    /// Inferred from the parameter type, never declared.
    AmbientScope,
}

impl DefaultPolicy {
    pub fn kind(&self) -> &'static str {
        match self {
            DefaultPolicy::None => "none",
            DefaultPolicy::Literal(_) => "literal",
            DefaultPolicy::FrameworkInject { .. } => "framework-inject",
            DefaultPolicy::NamedInject { .. } => "named-inject",
            DefaultPolicy::CustomProvide { .. } => "custom-provide",
            DefaultPolicy::AmbientScope => "ambient-scope",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, DefaultPolicy::None)
    }
}

/// One constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamSpec {
    pub name: String,
    pub ty: TypeRef,
    pub default_policy: DefaultPolicy,
    pub is_invalidation_key: bool,
    pub saveable_key: Option<String>,
}

impl ParamSpec {
    /// Required, non-key, non-persisted parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        ParamSpec {
            name: name.into(),
            ty,
            default_policy: DefaultPolicy::None,
            is_invalidation_key: false,
            saveable_key: None,
        }
    }
}

/// A property that participates in the save map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertySaveSpec {
    pub name: String,
    pub saveable_key: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// Memoized factory only.
    Plain,
    /// Memoized factory plus saver and persistence-aware factory.
    Persistent,
}

impl GenerationMode {
    pub fn is_persistent(self) -> bool {
        self == GenerationMode::Persistent
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Plain => f.write_str("plain"),
            GenerationMode::Persistent => f.write_str("persistent"),
        }
    }
}

/// One annotated type, ready for validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassModel {
    pub qualified_name: String,
    pub namespace: String,
    /// Declaration order, preserved through emission.
    pub params: Vec<ParamSpec>,
    pub saveable_properties: Vec<PropertySaveSpec>,
    pub has_ambient_scope_param: bool,
    pub injector_name: Option<String>,
    pub mode: GenerationMode,
    /// Class-level override of the run's injection mode.
    pub injection_mode: Option<InjectionMode>,
}

impl ClassModel {
    pub fn new(qualified_name: impl Into<String>, mode: GenerationMode) -> Self {
        let qualified_name = qualified_name.into();
        let namespace = crate::package_of(&qualified_name).to_string();
        ClassModel {
            qualified_name,
            namespace,
            params: Vec::new(),
            saveable_properties: Vec::new(),
            has_ambient_scope_param: false,
            injector_name: None,
            mode,
            injection_mode: None,
        }
    }

    pub fn simple_name(&self) -> &str {
        crate::simple_name(&self.qualified_name)
    }

    /// Invalidation-key parameters, in declaration order.
    pub fn invalidation_keys(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.is_invalidation_key)
    }

    /// Parameters restored from the save map.
    pub fn persisted_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.saveable_key.is_some())
    }

    /// Parameters the saver needs from its caller.
    pub fn carried_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.saveable_key.is_none())
    }

    /// Injection mode in effect for this class.
    pub fn effective_injection_mode(&self, run: InjectionMode) -> InjectionMode {
        self.injection_mode.unwrap_or(run)
    }
}
