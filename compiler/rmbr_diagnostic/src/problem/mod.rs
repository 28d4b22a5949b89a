//! Structured per-class problems.
//!
//! A [`Problem`] is the data of one failure: its kind, the class, and the
//! member involved. [`Problem::into_diagnostic`] owns the presentation.

use crate::{Diagnostic, ErrorCode, Location};

/// A static-shape error that aborts generation for one class.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Problem {
    #[error("parameter `{param}` of `{class}` has conflicting default markers: {}", .markers.join(", "))]
    ConflictingDefaultPolicy {
        class: String,
        param: String,
        markers: Vec<&'static str>,
    },

    #[error("ambient-scope parameter `{param}` of `{class}` cannot be persisted")]
    InvalidAmbientScopeUsage { class: String, param: String },

    #[error("`{class}` declares conflicting injectors: {}", .names.join(", "))]
    ConflictingInjector { class: String, names: Vec<String> },

    #[error("no injector or framework injection available for parameter `{param}` of `{class}` ({policy})")]
    UnresolvableDefault {
        class: String,
        param: String,
        policy: &'static str,
    },

    #[error("custom-provide marker on parameter `{param}` of `{class}` has no provider name")]
    MissingProviderName { class: String, param: String },

    #[error("saveable keys of `{class}` differ between parameters and properties at key \"{key}\" ({param_count} parameter(s), {property_count} property(ies))")]
    SaveableKeyMismatch {
        class: String,
        key: String,
        param_count: usize,
        property_count: usize,
    },

    #[error("no property of `{class}` carries saveable key \"{key}\" of parameter `{param}`")]
    MissingSaveableProperty {
        class: String,
        param: String,
        key: String,
    },
}

impl Problem {
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::ConflictingDefaultPolicy { .. } => ErrorCode::E1001,
            Problem::InvalidAmbientScopeUsage { .. } => ErrorCode::E1002,
            Problem::ConflictingInjector { .. } => ErrorCode::E1003,
            Problem::UnresolvableDefault { .. } => ErrorCode::E2001,
            Problem::MissingProviderName { .. } => ErrorCode::E2002,
            Problem::SaveableKeyMismatch { .. } => ErrorCode::E3001,
            Problem::MissingSaveableProperty { .. } => ErrorCode::E3002,
        }
    }

    /// Qualified name of the offending class.
    pub fn class(&self) -> &str {
        match self {
            Problem::ConflictingDefaultPolicy { class, .. }
            | Problem::InvalidAmbientScopeUsage { class, .. }
            | Problem::ConflictingInjector { class, .. }
            | Problem::UnresolvableDefault { class, .. }
            | Problem::MissingProviderName { class, .. }
            | Problem::SaveableKeyMismatch { class, .. }
            | Problem::MissingSaveableProperty { class, .. } => class,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let base = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            Problem::ConflictingDefaultPolicy { class, param, .. } => base
                .with_label(Location::param(&class, param), "more than one default marker")
                .with_note("a parameter takes at most one of literal-value, framework-inject, named-inject, custom-provide, persisted-key")
                .with_suggestion("keep exactly one of the markers"),
            Problem::InvalidAmbientScopeUsage { class, param } => base
                .with_label(Location::param(&class, param), "ambient scope marked for persistence")
                .with_note("the ambient scope is captured from the caller and cannot be saved")
                .with_suggestion("remove the persisted-key marker"),
            Problem::ConflictingInjector { class, .. } => base
                .with_label(Location::class(class), "more than one injector name")
                .with_note("one injector serves every named-inject parameter of a class")
                .with_suggestion("keep a single injector marker"),
            Problem::UnresolvableDefault { class, param, policy } => base
                .with_label(Location::param(&class, param), format!("{policy} requested here"))
                .with_secondary_label(Location::class(class), "class declares no injector")
                .with_suggestion("declare an injector on the class or enable framework injection (--injection=framework)"),
            Problem::MissingProviderName { class, param } => base
                .with_label(Location::param(&class, param), "empty provider name")
                .with_suggestion("name the function that provides the default"),
            Problem::SaveableKeyMismatch { class, key, .. } => base
                .with_label(Location::key(&class, key), "unbalanced key")
                .with_note("each saveable key must appear equally often on parameters and properties"),
            Problem::MissingSaveableProperty { class, param, key } => base
                .with_label(Location::param(&class, param), format!("persisted under \"{key}\""))
                .with_secondary_label(Location::class(class), "no property carries this key")
                .with_suggestion(format!("mark a property with persisted-key(\"{key}\")")),
        }
    }
}

impl From<Problem> for Diagnostic {
    fn from(problem: Problem) -> Self {
        problem.into_diagnostic()
    }
}
