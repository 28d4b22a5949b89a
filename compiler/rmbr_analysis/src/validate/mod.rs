//! Cross-member consistency checks.

use rmbr_diagnostic::Problem;
use rmbr_ir::{ClassModel, DefaultPolicy, InjectionMode};
use rustc_hash::FxHashMap;

/// Check a class model, returning it unchanged on success.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. saveable keys (persistent mode only),
/// 2. injected defaults have an injector or framework injection,
/// 3. custom providers are named.
///
/// `run_mode` is the run's injection mode; a class-level `injection-mode`
/// marker overrides it.
#[tracing::instrument(level = "debug", skip_all, fields(class = %model.qualified_name))]
pub fn validate(model: ClassModel, run_mode: InjectionMode) -> Result<ClassModel, Problem> {
    if model.mode.is_persistent() {
        check_saveable_keys(&model)?;
    }
    check_injection(&model, model.effective_injection_mode(run_mode))?;
    check_providers(&model)?;
    Ok(model)
}

fn check_saveable_keys(model: &ClassModel) -> Result<(), Problem> {
    for param in &model.params {
        let Some(key) = &param.saveable_key else {
            continue;
        };
        if !model.saveable_properties.iter().any(|p| &p.saveable_key == key) {
            return Err(Problem::MissingSaveableProperty {
                class: model.qualified_name.clone(),
                param: param.name.clone(),
                key: key.clone(),
            });
        }
    }

    // (params, properties) per key; order records first appearance.
    let mut counts: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    let mut order = Vec::new();
    let param_keys = model.params.iter().filter_map(|p| p.saveable_key.as_deref());
    for key in param_keys {
        let entry = counts.entry(key).or_insert_with(|| {
            order.push(key);
            (0, 0)
        });
        entry.0 += 1;
    }
    for prop in &model.saveable_properties {
        let key = prop.saveable_key.as_str();
        let entry = counts.entry(key).or_insert_with(|| {
            order.push(key);
            (0, 0)
        });
        entry.1 += 1;
    }

    for key in order {
        let (param_count, property_count) = counts.get(key).copied().unwrap_or_default();
        if param_count != property_count {
            return Err(Problem::SaveableKeyMismatch {
                class: model.qualified_name.clone(),
                key: key.to_string(),
                param_count,
                property_count,
            });
        }
    }
    Ok(())
}

fn check_injection(model: &ClassModel, mode: InjectionMode) -> Result<(), Problem> {
    for param in &model.params {
        let unresolvable = match &param.default_policy {
            DefaultPolicy::NamedInject { .. } => {
                model.injector_name.is_none() && !mode.allows_framework()
            }
            DefaultPolicy::FrameworkInject { .. } => !mode.allows_framework(),
            _ => false,
        };
        if unresolvable {
            return Err(Problem::UnresolvableDefault {
                class: model.qualified_name.clone(),
                param: param.name.clone(),
                policy: param.default_policy.kind(),
            });
        }
    }
    Ok(())
}

fn check_providers(model: &ClassModel) -> Result<(), Problem> {
    for param in &model.params {
        if let DefaultPolicy::CustomProvide { provider, .. } = &param.default_policy {
            if provider.trim().is_empty() {
                return Err(Problem::MissingProviderName {
                    class: model.qualified_name.clone(),
                    param: param.name.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
