#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use rmbr_ir::{
    ClassModel, DefaultExpr, GenerationMode, ParamSpec, ResolvedDefault, TypeRef,
};

use super::*;
use crate::HEADER;

fn param(name: &str, ty: &str, key: bool) -> ParamSpec {
    let mut p = ParamSpec::new(name, ty.parse::<TypeRef>().unwrap());
    p.is_invalidation_key = key;
    p
}

fn class(params: Vec<(ParamSpec, ResolvedDefault)>) -> ResolvedClass {
    let mut model = ClassModel::new("com.example.Counter", GenerationMode::Plain);
    let (params, defaults) = params.into_iter().unzip();
    model.params = params;
    ResolvedClass { model, defaults }
}

fn expr(e: DefaultExpr) -> ResolvedDefault {
    ResolvedDefault::Expr(e)
}

#[test]
fn literal_and_provider_defaults() {
    let class = class(vec![
        (param("count", "Int", true), expr(DefaultExpr::Verbatim("10".into()))),
        (
            param("repo", "com.example.data.Repo", false),
            expr(DefaultExpr::ProviderCall { provider: "injectClass".into(), args: vec![] }),
        ),
    ]);
    let unit = emit_factory(&class, None);
    assert_eq!(unit.file_name, "RememberCounter");
    assert_eq!(unit.namespace, "com.example");
    assert_eq!(
        unit.text,
        format!(
            "{HEADER}

package com.example

import androidx.compose.runtime.Composable
import androidx.compose.runtime.remember
import com.example.data.Repo

@Composable
internal fun rememberCounter(
    count: Int = 10,
    repo: Repo = injectClass(),
): Counter = remember(count) {{
    Counter(
        count = count,
        repo = repo,
    )
}}
"
        )
    );
}

#[test]
fn no_keys_remembers_once() {
    let class = class(vec![(param("a", "Int", false), ResolvedDefault::Required)]);
    let text = emit_factory(&class, None).text;
    assert!(text.contains("): Counter = remember {\n"));
    assert!(text.contains("    a: Int,\n"));
}

#[test]
fn no_params() {
    let class = class(vec![]);
    let text = emit_factory(&class, None).text;
    assert!(text.contains("internal fun rememberCounter(): Counter = remember {\n    Counter()\n}\n"));
}

#[test]
fn keys_keep_declaration_order() {
    let class = class(vec![
        (param("b", "Int", true), ResolvedDefault::Required),
        (param("a", "Int", false), ResolvedDefault::Required),
        (param("c", "Int", true), ResolvedDefault::Required),
    ]);
    assert!(emit_factory(&class, None).text.contains("remember(b, c) {"));
}

#[test]
fn injection_defaults_import_their_symbols() {
    let class = class(vec![
        (param("scope", "kotlinx.coroutines.CoroutineScope", false), expr(DefaultExpr::AmbientScope)),
        (
            param("vm", "com.example.ui.CounterViewModel", false),
            expr(DefaultExpr::FrameworkCall { args: vec!["id".into()] }),
        ),
        (
            param("repo", "com.example.data.Repo", false),
            expr(DefaultExpr::InjectorCall {
                injector: "inject".into(),
                ty: "com.example.data.Repo".parse().unwrap(),
                args: vec![],
            }),
        ),
    ]);
    let text = emit_factory(&class, None).text;
    for import in [
        "import androidx.compose.runtime.rememberCoroutineScope\n",
        "import kotlinx.coroutines.CoroutineScope\n",
        "import org.koin.compose.koinInject\n",
        "import org.koin.core.parameter.parametersOf\n",
        "import com.example.ui.CounterViewModel\n",
    ] {
        assert!(text.contains(import), "missing {import}");
    }
    assert!(text.contains("    scope: CoroutineScope = rememberCoroutineScope(),\n"));
    assert!(text.contains("    vm: CounterViewModel = koinInject { parametersOf(id) },\n"));
    assert!(text.contains("    repo: Repo = inject<Repo>(),\n"));
}

#[test]
fn colliding_types_are_qualified() {
    let class = class(vec![
        (param("a", "com.a.User", false), ResolvedDefault::Required),
        (param("b", "com.b.User?", false), ResolvedDefault::Required),
    ]);
    let text = emit_factory(&class, None).text;
    assert!(!text.contains("import com.a.User"));
    assert!(text.contains("    a: com.a.User,\n    b: com.b.User?,\n"));
}

#[test]
fn deterministic_output() {
    let class = class(vec![(param("a", "Int", true), ResolvedDefault::Required)]);
    assert_eq!(emit_factory(&class, None), emit_factory(&class, None));
    let stamped = emit_factory(&class, Some(42));
    assert_eq!(stamped.stable_text(), emit_factory(&class, None).text);
}

#[test]
fn root_namespace_has_no_package_line() {
    let mut class = class(vec![]);
    class.model.qualified_name = "Counter".into();
    class.model.namespace = String::new();
    let text = emit_factory(&class, None).text;
    assert!(!text.contains("package"));
}

#[test]
fn keyword_names_are_backquoted() {
    let class = class(vec![
        (param("object", "Int", true), ResolvedDefault::Required),
        (param("value", "Int", false), ResolvedDefault::Required),
    ]);
    let text = emit_factory(&class, None).text;
    assert!(text.contains("    `object`: Int,\n    value: Int,\n"));
    assert!(text.contains("): Counter = remember(`object`) {\n"));
    assert!(text.contains("        `object` = `object`,\n        value = value,\n"));
}
