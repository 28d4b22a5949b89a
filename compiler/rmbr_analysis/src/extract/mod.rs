//! Marker classification.

use rmbr_diagnostic::Problem;
use rmbr_ir::host::{quote_string, AMBIENT_SCOPE_TYPE};
use rmbr_ir::{
    simple_name, ClassMarker, ClassModel, DefaultPolicy, GenerationMode, Marker, ParamDecl,
    ParamSpec, PropertySaveSpec, TypeDecl,
};

/// Build the class model of an annotated declaration.
///
/// `remember-saveable` selects persistent mode, anything else plain mode;
/// callers skip declarations that are not annotated at all. Every parameter
/// is checked, so the error list names all offending parameters at once.
#[tracing::instrument(level = "debug", skip_all, fields(class = %decl.qualified_name))]
pub fn extract(decl: &TypeDecl) -> Result<ClassModel, Vec<Problem>> {
    let class = decl.qualified_name.as_str();
    let mut params = Vec::with_capacity(decl.params.len());
    let mut problems = Vec::new();

    for param in &decl.params {
        match extract_param(class, param) {
            Ok(spec) => params.push(spec),
            Err(problem) => problems.push(problem),
        }
    }

    let mut mode = GenerationMode::Plain;
    let mut injectors: Vec<&str> = Vec::new();
    let mut injection_mode = None;
    for marker in &decl.markers {
        match marker {
            ClassMarker::Remember => {}
            ClassMarker::RememberSaveable => mode = GenerationMode::Persistent,
            // An empty name is treated as no injector; repeating a name is harmless.
            ClassMarker::Injector { name } if !name.is_empty() => {
                if !injectors.contains(&name.as_str()) {
                    injectors.push(name);
                }
            }
            ClassMarker::Injector { .. } => {}
            ClassMarker::InjectionMode { mode } => injection_mode = Some(*mode),
        }
    }
    if injectors.len() > 1 {
        problems.push(Problem::ConflictingInjector {
            class: class.to_string(),
            names: injectors.iter().map(ToString::to_string).collect(),
        });
    }

    if !problems.is_empty() {
        tracing::debug!(count = problems.len(), "extraction failed");
        return Err(problems);
    }

    let saveable_properties = decl
        .properties
        .iter()
        .flat_map(|prop| {
            prop.markers.iter().filter_map(|m| match m {
                Marker::PersistedKey { key } => Some(PropertySaveSpec {
                    name: prop.name.clone(),
                    saveable_key: key.clone(),
                }),
                _ => None,
            })
        })
        .collect();

    let has_ambient_scope_param = params
        .iter()
        .any(|p: &ParamSpec| p.default_policy == DefaultPolicy::AmbientScope);

    Ok(ClassModel {
        qualified_name: decl.qualified_name.clone(),
        namespace: decl.namespace().to_string(),
        params,
        saveable_properties,
        has_ambient_scope_param,
        injector_name: injectors.first().map(ToString::to_string),
        mode,
        injection_mode,
    })
}

fn extract_param(class: &str, param: &ParamDecl) -> Result<ParamSpec, Problem> {
    let exclusive: Vec<&Marker> = param.markers.iter().filter(|m| m.is_exclusive()).collect();
    if exclusive.len() > 1 {
        return Err(Problem::ConflictingDefaultPolicy {
            class: class.to_string(),
            param: param.name.clone(),
            markers: exclusive.iter().map(|m| m.name()).collect(),
        });
    }

    let is_ambient = param.ty.simple_name() == simple_name(AMBIENT_SCOPE_TYPE);
    let mut saveable_key = None;
    let default_policy = match exclusive.first() {
        None if is_ambient => DefaultPolicy::AmbientScope,
        None => DefaultPolicy::None,
        Some(Marker::PersistedKey { .. }) if is_ambient => {
            return Err(Problem::InvalidAmbientScopeUsage {
                class: class.to_string(),
                param: param.name.clone(),
            });
        }
        Some(Marker::PersistedKey { key }) => {
            saveable_key = Some(key.clone());
            DefaultPolicy::None
        }
        Some(Marker::LiteralValue { expr }) => DefaultPolicy::Literal(expr.clone()),
        Some(Marker::LiteralInt { value }) => DefaultPolicy::Literal(value.to_string()),
        Some(Marker::LiteralString { value }) => DefaultPolicy::Literal(quote_string(value)),
        Some(Marker::LiteralBool { value }) => DefaultPolicy::Literal(value.to_string()),
        Some(Marker::FrameworkInject { args }) => DefaultPolicy::FrameworkInject { args: args.clone() },
        Some(Marker::NamedInject { args }) => DefaultPolicy::NamedInject { args: args.clone() },
        Some(Marker::CustomProvide { provider, args }) => DefaultPolicy::CustomProvide {
            provider: provider.clone(),
            args: args.clone(),
        },
        Some(Marker::InvalidationKey) => DefaultPolicy::None,
    };

    Ok(ParamSpec {
        name: param.name.clone(),
        ty: param.ty.clone(),
        default_policy,
        is_invalidation_key: param.markers.contains(&Marker::InvalidationKey),
        saveable_key,
    })
}
