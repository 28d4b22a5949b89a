//! Resolved default expressions.

use std::fmt;

use crate::host::{self, AsWritten, RenderNames, Symbol};
use crate::{ClassModel, TypeRef};

/// Outcome of resolving one parameter's default policy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedDefault {
    /// No default; the parameter is required in the generated signature.
    Required,
    Expr(DefaultExpr),
}

impl ResolvedDefault {
    pub fn expr(&self) -> Option<&DefaultExpr> {
        match self {
            ResolvedDefault::Required => None,
            ResolvedDefault::Expr(expr) => Some(expr),
        }
    }
}

/// A default expression, kept structured so codegen can render type arguments
/// with its own import table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefaultExpr {
    Verbatim(String),
    /// Ambient framework injection entry point.
    FrameworkCall { args: Vec<String> },
    /// `injector<T>(args)`.
    InjectorCall {
        injector: String,
        ty: TypeRef,
        args: Vec<String>,
    },
    /// `provider(args)`.
    ProviderCall { provider: String, args: Vec<String> },
    AmbientScope,
}

impl DefaultExpr {
    /// Render as host source.
    pub fn render(&self, names: &dyn RenderNames) -> String {
        match self {
            DefaultExpr::Verbatim(expr) => expr.clone(),
            DefaultExpr::FrameworkCall { args } if args.is_empty() => {
                format!("{}()", names.symbol(host::KOIN_INJECT))
            }
            DefaultExpr::FrameworkCall { args } => format!(
                "{} {{ {}({}) }}",
                names.symbol(host::KOIN_INJECT),
                names.symbol(host::PARAMETERS_OF),
                args.join(", ")
            ),
            DefaultExpr::InjectorCall { injector, ty, args } => {
                format!("{injector}<{}>({})", names.type_name(ty), args.join(", "))
            }
            DefaultExpr::ProviderCall { provider, args } => {
                format!("{provider}({})", args.join(", "))
            }
            DefaultExpr::AmbientScope => {
                format!("{}()", names.symbol(host::REMEMBER_COROUTINE_SCOPE))
            }
        }
    }

    /// Host symbols this expression calls.
    pub fn symbols(&self) -> Vec<Symbol> {
        match self {
            DefaultExpr::FrameworkCall { args } if args.is_empty() => vec![host::KOIN_INJECT],
            DefaultExpr::FrameworkCall { .. } => vec![host::KOIN_INJECT, host::PARAMETERS_OF],
            DefaultExpr::AmbientScope => vec![host::REMEMBER_COROUTINE_SCOPE],
            DefaultExpr::Verbatim(_)
            | DefaultExpr::InjectorCall { .. }
            | DefaultExpr::ProviderCall { .. } => Vec::new(),
        }
    }

    /// Type argument spliced into the expression, if any.
    pub fn type_arg(&self) -> Option<&TypeRef> {
        match self {
            DefaultExpr::InjectorCall { ty, .. } => Some(ty),
            _ => None,
        }
    }
}

impl fmt::Display for DefaultExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&AsWritten))
    }
}

/// A validated class with one resolved default per parameter, index-aligned
/// with `model.params`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedClass {
    pub model: ClassModel,
    pub defaults: Vec<ResolvedDefault>,
}

impl ResolvedClass {
    /// Parameters paired with their resolved defaults.
    pub fn params(&self) -> impl Iterator<Item = (&crate::ParamSpec, &ResolvedDefault)> {
        self.model.params.iter().zip(&self.defaults)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_shapes() {
        assert_eq!(DefaultExpr::Verbatim("10".into()).to_string(), "10");
        assert_eq!(
            DefaultExpr::FrameworkCall { args: Vec::new() }.to_string(),
            "koinInject()"
        );
        assert_eq!(
            DefaultExpr::FrameworkCall {
                args: vec!["id".into(), "\"x\"".into()]
            }
            .to_string(),
            "koinInject { parametersOf(id, \"x\") }"
        );
        assert_eq!(
            DefaultExpr::InjectorCall {
                injector: "inject".into(),
                ty: TypeRef::named("com.x.Repo"),
                args: Vec::new(),
            }
            .to_string(),
            "inject<com.x.Repo>()"
        );
        assert_eq!(
            DefaultExpr::ProviderCall {
                provider: "injectClass".into(),
                args: vec!["1".into()],
            }
            .to_string(),
            "injectClass(1)"
        );
        assert_eq!(DefaultExpr::AmbientScope.to_string(), "rememberCoroutineScope()");
    }

    struct Qualified;

    impl RenderNames for Qualified {
        fn type_name(&self, ty: &TypeRef) -> String {
            ty.simple_name().to_string()
        }

        fn symbol(&self, symbol: Symbol) -> String {
            symbol.qualified()
        }
    }

    #[test]
    fn render_goes_through_names() {
        let expr = DefaultExpr::InjectorCall {
            injector: "inject".into(),
            ty: TypeRef::named("com.x.Repo"),
            args: Vec::new(),
        };
        assert_eq!(expr.render(&Qualified), "inject<Repo>()");
        assert_eq!(
            DefaultExpr::AmbientScope.render(&Qualified),
            "androidx.compose.runtime.rememberCoroutineScope()"
        );
        assert_eq!(expr.type_arg(), Some(&TypeRef::named("com.x.Repo")));
        assert_eq!(
            DefaultExpr::FrameworkCall { args: vec!["a".into()] }.symbols(),
            vec![host::KOIN_INJECT, host::PARAMETERS_OF]
        );
    }
}
