use pform::prelude::*;
use pschema::{FilePolicy, ToolDefinition, builtin};

fn tools() -> Vec<ToolDefinition> {
    [
        builtin::organize_tools(),
        builtin::edit_tools(),
        builtin::security_tools(),
        builtin::convert_tools(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn file_count_for(tool: &ToolDefinition) -> usize {
    match tool.file_policy() {
        FilePolicy::Single => 1,
        FilePolicy::UpTo(_) => 1,
        FilePolicy::Exactly(count) => count,
    }
}

#[test]
fn seeded_values_report_exactly_the_required_options_without_defaults() {
    for tool in tools() {
        let values = OptionValues::seeded(&tool);
        let flagged: Vec<_> = validate(&tool, &values, file_count_for(&tool))
            .into_iter()
            .filter_map(|violation| violation.option_key)
            .collect();

        let expected: Vec<_> = visible_options(&tool, &values)
            .into_iter()
            .filter(|option| option.required && option.default.is_none())
            .map(|option| option.key.clone())
            .collect();

        assert_eq!(flagged, expected, "tool {}", tool.id);
    }
}

#[test]
fn hidden_values_survive_being_hidden_and_shown_again() {
    let split = builtin::organize_tools()
        .into_iter()
        .find(|tool| tool.id.as_str() == "split")
        .expect("split tool");

    let mut values = OptionValues::seeded(&split);
    values.insert("splitType", "ranges");
    values.insert("ranges", r#"[{"start":1,"end":3}]"#);
    assert!(visible_options(&split, &values).iter().any(|option| option.key == "ranges"));

    values.insert("splitType", "pages");
    assert!(visible_options(&split, &values).iter().all(|option| option.key != "ranges"));
    assert!(values.contains_key("ranges"));

    values.insert("splitType", "ranges");
    assert_eq!(
        values.get("ranges").and_then(|value| value.as_text()),
        Some(r#"[{"start":1,"end":3}]"#)
    );
}

#[test]
fn hidden_required_options_are_not_reported() {
    let tool = ToolDefinition::new("split", pschema::ToolCategory::Organize, "/api/organize/split")
        .with_option(pschema::OptionDefinition::short_text("mode", "Mode").with_default("simple"))
        .with_option(
            pschema::OptionDefinition::short_text("expression", "Expression")
                .required()
                .visible_when("mode", "advanced"),
        );

    let mut values = OptionValues::seeded(&tool);
    assert!(validate(&tool, &values, 1).is_empty());

    values.insert("mode", "advanced");
    let violations = validate(&tool, &values, 1);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message, "Expression is required");
}

#[test]
fn exact_count_tools_reject_every_other_count() {
    for expected in 2..=5 {
        let tool = ToolDefinition::new("compare", pschema::ToolCategory::Security, "/api/security/compare")
            .with_max_files(expected);

        for attached in 0..=expected + 2 {
            let violations = validate(&tool, &OptionValues::new(), attached);
            assert_eq!(
                violations.is_empty(),
                attached == expected,
                "expected {expected}, attached {attached}"
            );
        }
    }
}

#[test]
fn merge_accepts_any_count_up_to_its_limit() {
    let merge = builtin::organize_tools()
        .into_iter()
        .find(|tool| tool.id.as_str() == "merge")
        .expect("merge tool");

    let values = OptionValues::seeded(&merge);
    assert!(validate(&merge, &values, 3).is_empty());
    assert!(validate(&merge, &values, 10).is_empty());
    assert_eq!(
        validate(&merge, &values, 11)[0].reason,
        ViolationReason::FileCount
    );
}

#[test]
fn protect_with_short_password_reports_single_violation() {
    let protect = builtin::security_tools()
        .into_iter()
        .find(|tool| tool.id.as_str() == "protect")
        .expect("protect tool");

    let values = OptionValues::seeded(&protect).with("password", "abc");
    let violations = validate(&protect, &values, 1);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].option_key.as_deref(), Some("password"));
    assert_eq!(violations[0].message, "Password must be at least 4 characters long");
}
