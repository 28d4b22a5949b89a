#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use rmbr_ir::{GenerationMode, ParamSpec, PropertySaveSpec, TypeRef};

use super::*;

const CLASS: &str = "com.example.Pager";

fn persisted(name: &str, key: &str) -> ParamSpec {
    let mut p = ParamSpec::new(name, TypeRef::named("Int"));
    p.saveable_key = Some(key.to_string());
    p
}

fn prop(name: &str, key: &str) -> PropertySaveSpec {
    PropertySaveSpec {
        name: name.to_string(),
        saveable_key: key.to_string(),
    }
}

fn model(params: Vec<ParamSpec>, props: Vec<PropertySaveSpec>) -> ClassModel {
    let mut model = ClassModel::new(CLASS, GenerationMode::Persistent);
    model.params = params;
    model.saveable_properties = props;
    model
}

fn with_policy(name: &str, policy: DefaultPolicy) -> ParamSpec {
    let mut p = ParamSpec::new(name, TypeRef::named("com.example.Repo"));
    p.default_policy = policy;
    p
}

// === Saveable keys ===

#[test]
fn matching_keys_pass() {
    let m = model(vec![persisted("index", "index")], vec![prop("index", "index")]);
    assert_eq!(validate(m.clone(), InjectionMode::None), Ok(m));
}

#[test]
fn missing_property_is_reported_first() {
    let m = model(vec![persisted("x", "x")], vec![prop("y", "y")]);
    assert_eq!(
        validate(m, InjectionMode::None),
        Err(Problem::MissingSaveableProperty {
            class: CLASS.into(),
            param: "x".into(),
            key: "x".into(),
        })
    );
}

#[test]
fn extra_property_key_is_a_mismatch() {
    let m = model(
        vec![persisted("index", "index")],
        vec![prop("index", "index"), prop("extra", "extra")],
    );
    assert_eq!(
        validate(m, InjectionMode::None),
        Err(Problem::SaveableKeyMismatch {
            class: CLASS.into(),
            key: "extra".into(),
            param_count: 0,
            property_count: 1,
        })
    );
}

#[test]
fn duplicate_count_difference_is_a_mismatch() {
    let m = model(
        vec![persisted("a", "k"), persisted("b", "k")],
        vec![prop("a", "k")],
    );
    assert!(matches!(
        validate(m, InjectionMode::None),
        Err(Problem::SaveableKeyMismatch { param_count: 2, property_count: 1, .. })
    ));
}

#[test]
fn keys_are_case_sensitive() {
    let m = model(vec![persisted("a", "Key")], vec![prop("a", "key")]);
    assert!(matches!(
        validate(m, InjectionMode::None),
        Err(Problem::MissingSaveableProperty { .. })
    ));
}

#[test]
fn plain_mode_skips_key_check() {
    let mut m = model(vec![persisted("x", "x")], vec![]);
    m.mode = GenerationMode::Plain;
    assert!(validate(m, InjectionMode::None).is_ok());
}

// === Injection ===

#[test]
fn named_inject_needs_injector_or_framework() {
    let param = with_policy("repo", DefaultPolicy::NamedInject { args: vec![] });
    let m = model(vec![param], vec![]);

    assert_eq!(
        validate(m.clone(), InjectionMode::None),
        Err(Problem::UnresolvableDefault {
            class: CLASS.into(),
            param: "repo".into(),
            policy: "named-inject",
        })
    );
    assert!(validate(m.clone(), InjectionMode::FrameworkCall).is_ok());

    let mut with_injector = m;
    with_injector.injector_name = Some("inject".into());
    assert!(validate(with_injector, InjectionMode::None).is_ok());
}

#[test]
fn framework_inject_needs_framework_mode() {
    let param = with_policy("repo", DefaultPolicy::FrameworkInject { args: vec![] });
    let mut m = model(vec![param], vec![]);
    m.injector_name = Some("inject".into());
    assert!(matches!(
        validate(m.clone(), InjectionMode::None),
        Err(Problem::UnresolvableDefault { policy: "framework-inject", .. })
    ));

    m.injection_mode = Some(InjectionMode::FrameworkCall);
    assert!(validate(m, InjectionMode::None).is_ok());
}

#[test]
fn class_mode_overrides_run_mode() {
    let param = with_policy("repo", DefaultPolicy::FrameworkInject { args: vec![] });
    let mut m = model(vec![param], vec![]);
    m.injection_mode = Some(InjectionMode::None);
    assert!(validate(m, InjectionMode::FrameworkCall).is_err());
}

// === Providers ===

#[test]
fn empty_provider_name() {
    let param = with_policy(
        "repo",
        DefaultPolicy::CustomProvide { provider: " ".into(), args: vec![] },
    );
    assert_eq!(
        validate(model(vec![param], vec![]), InjectionMode::None),
        Err(Problem::MissingProviderName {
            class: CLASS.into(),
            param: "repo".into(),
        })
    );
}

#[test]
fn first_failing_check_wins() {
    let params = vec![
        persisted("x", "x"),
        with_policy("repo", DefaultPolicy::CustomProvide { provider: String::new(), args: vec![] }),
    ];
    assert!(matches!(
        validate(model(params, vec![]), InjectionMode::None),
        Err(Problem::MissingSaveableProperty { .. })
    ));
}
