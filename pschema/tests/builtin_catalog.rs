use pschema::prelude::*;
use pschema::{builtin, check_definition};

#[test]
fn every_builtin_tool_passes_authoring_checks() {
    let families = [
        builtin::organize_tools(),
        builtin::edit_tools(),
        builtin::security_tools(),
        builtin::convert_tools(),
    ];

    for tool in families.iter().flatten() {
        check_definition(tool).unwrap_or_else(|error| panic!("{} failed: {error}", tool.id));
    }
}

#[test]
fn builtin_tool_ids_are_unique_across_families() {
    let catalog = builtin::catalog().expect("catalog should build");
    let total = builtin::organize_tools().len()
        + builtin::edit_tools().len()
        + builtin::security_tools().len()
        + builtin::convert_tools().len();

    assert_eq!(catalog.len(), total);
}

#[test]
fn split_ranges_option_is_gated_on_split_type() {
    let catalog = builtin::catalog().expect("catalog should build");
    let split = catalog.require("split").expect("split is built in");

    let ranges = split.option("ranges").expect("ranges option");
    let condition = ranges.visibility.as_ref().expect("ranges is conditional");
    let requirements: Vec<_> = condition.requirements().collect();

    assert_eq!(requirements, vec![("splitType", &OptionValue::from("ranges"))]);
    assert!(!split.option("splitType").expect("splitType").is_conditional());
}

#[test]
fn protect_declares_secret_password_with_min_length_rule() {
    let catalog = builtin::catalog().expect("catalog should build");
    let protect = catalog.require("protect").expect("protect is built in");

    let password = protect.option("password").expect("password option");
    assert!(password.kind.is_secret());
    assert!(password.required);
    assert!(password.default.is_none());

    assert_eq!(protect.rules.len(), 1);
    assert_eq!(protect.rules[0].key(), "password");
}

#[test]
fn watermark_numeric_constraints_are_declared() {
    let catalog = builtin::catalog().expect("catalog should build");
    let watermark = catalog.require("watermark").expect("watermark is built in");

    let opacity = watermark.option("opacity").expect("opacity option");
    let range = opacity.kind.range().expect("slider range");
    assert_eq!(range.min, Some(0.1));
    assert_eq!(range.max, Some(1.0));
    assert_eq!(range.step, Some(0.1));
    assert_eq!(opacity.default, Some(OptionValue::from(0.3)));

    let font = watermark.option("fontSize").expect("fontSize option");
    assert_eq!(font.kind.name(), "number");
    assert_eq!(font.default.as_ref().and_then(OptionValue::as_number), Some(50.0));
}

#[test]
fn convert_tools_accept_family_specific_types() {
    let catalog = builtin::catalog().expect("catalog should build");

    let word = catalog.require("word-to-pdf").expect("word-to-pdf");
    assert!(word.accepts_file("report.docx", "application/octet-stream"));
    assert!(!word.accepts_file("report.pdf", "application/pdf"));

    let jpg = catalog.require("pdf-to-jpg").expect("pdf-to-jpg");
    assert!(jpg.accepts_file("deck.pdf", "application/pdf"));
    assert_eq!(jpg.category, ToolCategory::Convert);
}
