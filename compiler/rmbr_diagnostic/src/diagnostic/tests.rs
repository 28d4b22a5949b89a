use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder() {
    let diag = Diagnostic::error(ErrorCode::E3002)
        .with_message("no property carries saveable key \"x\"")
        .with_label(Location::key("a.Counter", "x"), "declared here")
        .with_secondary_label(Location::class("a.Counter"), "in this class")
        .with_note("a note")
        .with_suggestion("add a property");

    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_location(), Some(&Location::key("a.Counter", "x")));
    assert_eq!(diag.notes, vec!["a note".to_string()]);
    assert_eq!(diag.suggestions, vec!["add a property".to_string()]);
}

#[test]
fn test_display() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("conflicting markers");
    assert_eq!(diag.to_string(), "error [E1001]: conflicting markers");
}

#[test]
fn test_location_display() {
    assert_eq!(Location::class("a.B").to_string(), "a.B");
    assert_eq!(
        Location::param("a.B", "count").to_string(),
        "a.B, parameter `count`"
    );
    assert_eq!(
        Location::property("a.B", "count").to_string(),
        "a.B, property `count`"
    );
    assert_eq!(Location::key("a.B", "k").to_string(), "a.B, saveable key \"k\"");
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E9002);
    assert!(!diag.is_error());
    assert_eq!(diag.primary_location(), None);
}
