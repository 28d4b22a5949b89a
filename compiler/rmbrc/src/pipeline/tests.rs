use pretty_assertions::assert_eq;
use rmbr_diagnostic::ErrorCode;
use rmbr_ir::{ClassMarker, InjectionMode, Marker, ParamDecl, TypeRef};

use super::*;

fn remember(name: &str) -> TypeDecl {
    TypeDecl::new(name).with_marker(ClassMarker::Remember)
}

fn int_param(name: &str) -> ParamDecl {
    ParamDecl::new(name, TypeRef::named("Int"))
}

fn sequential() -> GenConfig {
    GenConfig {
        parallel: false,
        ..GenConfig::default()
    }
}

#[test]
fn unannotated_declarations_are_skipped() {
    let decls = vec![TypeDecl::new("a.Plain"), remember("a.Counter")];
    let output = generate(&decls, &sequential());
    assert!(output.success);
    assert_eq!(output.skipped, vec!["a.Plain".to_string()]);
    assert_eq!(output.generated_classes, 1);
    assert_eq!(output.units.len(), 1);
}

#[test]
fn failure_is_isolated_to_its_class() {
    let broken = remember("a.Broken").with_param(
        int_param("x")
            .with_marker(Marker::LiteralInt { value: 1 })
            .with_marker(Marker::LiteralBool { value: false }),
    );
    let decls = vec![remember("a.First"), broken, remember("a.Last")];
    let output = generate(&decls, &sequential());

    assert!(!output.success);
    let files: Vec<_> = output.units.iter().map(|u| u.file_name.as_str()).collect();
    assert_eq!(files, vec!["RememberFirst", "RememberLast"]);
    assert_eq!(output.failures.len(), 1);
    assert_eq!(output.failures[0].class, "a.Broken");
    assert_eq!(output.failures[0].phase, ErrorPhase::Extract);
    assert_eq!(output.error_count(), 1);
}

#[test]
fn phases_are_reported() {
    let unresolvable = remember("a.Inject")
        .with_param(int_param("x").with_marker(Marker::FrameworkInject { args: vec![] }));
    let output = generate(&[unresolvable.clone()], &sequential());
    assert_eq!(output.failures[0].phase, ErrorPhase::Validate);
    assert_eq!(output.failures[0].diagnostics[0].code, ErrorCode::E2001);

    let config = GenConfig {
        injection_mode: InjectionMode::FrameworkCall,
        ..sequential()
    };
    assert!(generate(&[unresolvable], &config).success);
}

#[test]
fn persistent_class_emits_two_units() {
    let decl = TypeDecl::new("a.Pager").with_marker(ClassMarker::RememberSaveable);
    let output = generate(&[decl], &sequential());
    let files: Vec<_> = output.units.iter().map(|u| u.file_name.as_str()).collect();
    assert_eq!(files, vec!["RememberPager", "RememberSaveablePager"]);
}

#[test]
fn parallel_matches_sequential() {
    let decls: Vec<TypeDecl> = (0..32)
        .map(|i| remember(&format!("p.C{i}")).with_param(int_param("n").with_marker(Marker::InvalidationKey)))
        .collect();
    let parallel = generate(&decls, &GenConfig::default());
    let serial = generate(&decls, &sequential());
    assert_eq!(parallel.units, serial.units);
}

#[test]
fn check_emits_nothing() {
    let output = check(&[remember("a.Counter")], &sequential());
    assert!(output.success);
    assert_eq!(output.generated_classes, 1);
    assert!(output.units.is_empty());
}

#[test]
fn timestamp_is_applied_when_enabled() {
    let config = GenConfig {
        timestamp: true,
        ..sequential()
    };
    let output = generate(&[remember("a.Counter")], &config);
    assert!(output.units[0].text.contains("// Generated at "));
    assert_ne!(output.units[0].text, output.units[0].stable_text());
}
