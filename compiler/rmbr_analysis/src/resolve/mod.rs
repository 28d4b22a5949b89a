//! Default-strategy resolution.

use rmbr_diagnostic::Problem;
use rmbr_ir::{
    ClassModel, DefaultExpr, DefaultPolicy, InjectionMode, ParamSpec, ResolvedClass,
    ResolvedDefault,
};

/// Class-level facts a parameter's default may depend on.
#[derive(Copy, Clone, Debug)]
pub struct ResolveContext<'a> {
    pub class: &'a str,
    pub injector_name: Option<&'a str>,
    pub injection_mode: InjectionMode,
}

impl<'a> ResolveContext<'a> {
    pub fn for_class(model: &'a ClassModel, run_mode: InjectionMode) -> Self {
        ResolveContext {
            class: &model.qualified_name,
            injector_name: model.injector_name.as_deref(),
            injection_mode: model.effective_injection_mode(run_mode),
        }
    }
}

/// Resolve one parameter.
///
/// `NamedInject` without an injector falls back to framework injection when
/// the mode allows it.
pub fn resolve_param(param: &ParamSpec, ctx: &ResolveContext<'_>) -> Result<ResolvedDefault, Problem> {
    let unresolvable = || Problem::UnresolvableDefault {
        class: ctx.class.to_string(),
        param: param.name.clone(),
        policy: param.default_policy.kind(),
    };
    let framework = ctx.injection_mode.allows_framework();

    let expr = match &param.default_policy {
        DefaultPolicy::None => return Ok(ResolvedDefault::Required),
        DefaultPolicy::Literal(expr) => DefaultExpr::Verbatim(expr.clone()),
        DefaultPolicy::FrameworkInject { args } if framework => {
            DefaultExpr::FrameworkCall { args: args.clone() }
        }
        DefaultPolicy::FrameworkInject { .. } => return Err(unresolvable()),
        DefaultPolicy::NamedInject { args } => match ctx.injector_name {
            Some(injector) => DefaultExpr::InjectorCall {
                injector: injector.to_string(),
                ty: param.ty.clone(),
                args: args.clone(),
            },
            None if framework => DefaultExpr::FrameworkCall { args: args.clone() },
            None => return Err(unresolvable()),
        },
        DefaultPolicy::CustomProvide { provider, .. } if provider.trim().is_empty() => {
            return Err(Problem::MissingProviderName {
                class: ctx.class.to_string(),
                param: param.name.clone(),
            });
        }
        DefaultPolicy::CustomProvide { provider, args } => DefaultExpr::ProviderCall {
            provider: provider.clone(),
            args: args.clone(),
        },
        DefaultPolicy::AmbientScope => DefaultExpr::AmbientScope,
    };
    Ok(ResolvedDefault::Expr(expr))
}

/// Resolve every parameter of a validated class.
#[tracing::instrument(level = "debug", skip_all, fields(class = %model.qualified_name))]
pub fn resolve(model: ClassModel, run_mode: InjectionMode) -> Result<ResolvedClass, Problem> {
    let ctx = ResolveContext::for_class(&model, run_mode);
    let defaults = model
        .params
        .iter()
        .map(|p| resolve_param(p, &ctx))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(?defaults, "resolved defaults");
    Ok(ResolvedClass { model, defaults })
}
