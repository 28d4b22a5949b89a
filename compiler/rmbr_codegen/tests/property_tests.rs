//! Property-based tests for the emitters.
//!
//! 1. The factory signature lists every parameter, in order, once.
//! 2. The memoization key list is exactly the invalidation keys, in order.
//! 3. Saver round-trip: restore(save(x)) agrees with x on persisted properties.
//! 4. Emission is deterministic.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use rmbr_codegen::{emit_class, emit_factory, RestoreSource, SaverPlan};
use rmbr_ir::{
    ClassModel, DefaultExpr, GenerationMode, ParamSpec, PropertySaveSpec, ResolvedClass,
    ResolvedDefault, TypeRef,
};

#[derive(Clone, Debug)]
struct GenParam {
    ty: &'static str,
    key: bool,
    persisted: bool,
    literal: Option<i32>,
}

fn gen_param() -> impl Strategy<Value = GenParam> {
    (
        prop_oneof![
            Just("Int"),
            Just("String?"),
            Just("com.example.data.Repo"),
            Just("kotlin.collections.List<com.x.Item>")
        ],
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(any::<i32>()),
    )
        .prop_map(|(ty, key, persisted, literal)| GenParam {
            ty,
            key,
            persisted,
            literal,
        })
}

/// Parameters are named `p0..pN`; persisted ones use key `kI` and a property
/// `propI`.
fn build(params: &[GenParam], mode: GenerationMode) -> ResolvedClass {
    let mut model = ClassModel::new("com.example.Gen", mode);
    let mut defaults = Vec::new();
    for (i, g) in params.iter().enumerate() {
        let mut spec = ParamSpec::new(format!("p{i}"), g.ty.parse::<TypeRef>().unwrap());
        spec.is_invalidation_key = g.key;
        if g.persisted {
            spec.saveable_key = Some(format!("k{i}"));
            model.saveable_properties.push(PropertySaveSpec {
                name: format!("prop{i}"),
                saveable_key: format!("k{i}"),
            });
            defaults.push(ResolvedDefault::Required);
        } else {
            defaults.push(match g.literal {
                Some(v) => ResolvedDefault::Expr(DefaultExpr::Verbatim(v.to_string())),
                None => ResolvedDefault::Required,
            });
        }
        model.params.push(spec);
    }
    ResolvedClass { model, defaults }
}

fn signature_names(text: &str) -> Vec<String> {
    let start = text.find("internal fun rememberGen(").unwrap();
    let sig = &text[start..];
    let end = sig.find("): Gen").unwrap();
    sig[..end]
        .lines()
        .skip(1)
        .filter_map(|line| line.trim().split(':').next().map(String::from))
        .collect()
}

fn key_list(text: &str) -> Vec<String> {
    let line = text.lines().find(|l| l.contains(": Gen = remember")).unwrap();
    let call = &line[line.find("= remember").unwrap()..];
    match (call.find('('), call.rfind(')')) {
        (Some(open), Some(close)) if close > open => call[open + 1..close]
            .split(", ")
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

proptest! {
    #[test]
    fn factory_signature_preserves_parameters(params in prop::collection::vec(gen_param(), 0..10)) {
        let class = build(&params, GenerationMode::Plain);
        let text = emit_factory(&class, None).text;
        let expected: Vec<String> = (0..params.len()).map(|i| format!("p{i}")).collect();
        prop_assert_eq!(signature_names(&text), expected);
    }

    #[test]
    fn key_list_is_ordered_invalidation_keys(params in prop::collection::vec(gen_param(), 0..10)) {
        let class = build(&params, GenerationMode::Plain);
        let text = emit_factory(&class, None).text;
        let expected: Vec<String> = params
            .iter()
            .enumerate()
            .filter(|(_, g)| g.key)
            .map(|(i, _)| format!("p{i}"))
            .collect();
        prop_assert_eq!(key_list(&text), expected);
    }

    #[test]
    fn saver_round_trip(
        params in prop::collection::vec(gen_param(), 0..10),
        values in prop::collection::vec(any::<i64>(), 10),
    ) {
        let class = build(&params, GenerationMode::Persistent);
        let model = &class.model;
        let plan = SaverPlan::new(model);

        let args: BTreeMap<&str, i64> = model
            .params
            .iter()
            .zip(&values)
            .map(|(p, v)| (p.name.as_str(), *v))
            .collect();
        // A constructed instance exposes each persisted parameter through the
        // property sharing its key.
        let construct = |args: &BTreeMap<&str, i64>| -> BTreeMap<String, i64> {
            model
                .saveable_properties
                .iter()
                .map(|prop| {
                    let param = model
                        .params
                        .iter()
                        .find(|p| p.saveable_key.as_deref() == Some(prop.saveable_key.as_str()))
                        .unwrap();
                    (prop.name.clone(), args[param.name.as_str()])
                })
                .collect()
        };

        let instance = construct(&args);
        let saved: BTreeMap<&str, i64> = plan
            .save
            .iter()
            .map(|entry| (entry.key.as_str(), instance[&entry.property]))
            .collect();
        let restored_args: BTreeMap<&str, i64> = plan
            .restore
            .iter()
            .map(|arg| {
                let value = match &arg.source {
                    RestoreSource::Map { key } => saved[key.as_str()],
                    RestoreSource::Forward => args[arg.param.as_str()],
                };
                (arg.param.as_str(), value)
            })
            .collect();
        prop_assert_eq!(construct(&restored_args), instance);
    }

    #[test]
    fn emission_is_deterministic(params in prop::collection::vec(gen_param(), 0..8)) {
        let class = build(&params, GenerationMode::Persistent);
        let first = emit_class(&class, None);
        let second = emit_class(&class.clone(), Some(1_234));
        prop_assert_eq!(first.len(), 2);
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.stable_text(), b.stable_text());
        }
    }
}
