//! Authoring-time checks for a tool definition.
//!
//! These run once when a tool is registered, so the runtime evaluator can
//! assume unique keys, resolvable visibility references, and an acyclic
//! visibility graph.

use std::collections::{HashMap, HashSet};

use crate::{OptionDefinition, OptionKind, OptionValue, SchemaError, ToolDefinition};

pub fn check_definition(tool: &ToolDefinition) -> Result<(), SchemaError> {
    check_definition_inner(tool).map_err(|error| error.with_tool_id(tool.id.as_str()))
}

fn check_definition_inner(tool: &ToolDefinition) -> Result<(), SchemaError> {
    if tool.id.as_str().trim().is_empty() {
        return Err(SchemaError::invalid_constraint("tool id must not be empty"));
    }

    if tool.max_files == 0 {
        return Err(SchemaError::invalid_file_limits(
            "max_files must be at least 1",
        ));
    }

    let mut keys = HashSet::new();
    for option in &tool.options {
        if option.key.trim().is_empty() {
            return Err(SchemaError::invalid_constraint(
                "option key must not be empty",
            ));
        }

        if !keys.insert(option.key.as_str()) {
            return Err(SchemaError::duplicate_option_key(format!(
                "option key '{}' is declared more than once",
                option.key
            )));
        }
    }

    for option in &tool.options {
        check_constraints(option)?;
        check_condition_references(option, &keys)?;
    }

    check_condition_cycles(tool)?;

    for rule in &tool.rules {
        if !keys.contains(rule.key()) {
            return Err(SchemaError::unknown_rule_key(format!(
                "rule references unknown option '{}'",
                rule.key()
            )));
        }
    }

    Ok(())
}

fn check_constraints(option: &OptionDefinition) -> Result<(), SchemaError> {
    match &option.kind {
        OptionKind::Number(range) | OptionKind::Slider(range) => {
            if let (Some(min), Some(max)) = (range.min, range.max) {
                if min > max {
                    return Err(SchemaError::invalid_constraint(format!(
                        "option '{}' has min {min} greater than max {max}",
                        option.key
                    )));
                }
            }

            if range.step.is_some_and(|step| step <= 0.0) {
                return Err(SchemaError::invalid_constraint(format!(
                    "option '{}' step must be positive",
                    option.key
                )));
            }

            if let Some(default) = &option.default {
                let Some(value) = default.as_number() else {
                    return Err(SchemaError::invalid_constraint(format!(
                        "option '{}' default is not numeric",
                        option.key
                    )));
                };

                if !range.contains(value) {
                    return Err(SchemaError::invalid_constraint(format!(
                        "option '{}' default {value} is outside its range",
                        option.key
                    )));
                }
            }
        }
        OptionKind::SingleSelect(choices) => {
            if choices.is_empty() {
                return Err(SchemaError::invalid_constraint(format!(
                    "select option '{}' declares no choices",
                    option.key
                )));
            }

            let mut seen = HashSet::new();
            for choice in choices {
                if !seen.insert(choice.value.as_str()) {
                    return Err(SchemaError::invalid_constraint(format!(
                        "select option '{}' repeats choice '{}'",
                        option.key, choice.value
                    )));
                }
            }

            if let Some(default) = &option.default {
                let is_known = default
                    .as_text()
                    .is_some_and(|value| seen.contains(value));
                if !is_known {
                    return Err(SchemaError::invalid_constraint(format!(
                        "select option '{}' default '{default}' is not one of its choices",
                        option.key
                    )));
                }
            }
        }
        OptionKind::ShortText | OptionKind::LongText | OptionKind::SecretText => {
            if matches!(option.default, Some(OptionValue::Number(_))) {
                return Err(SchemaError::invalid_constraint(format!(
                    "text option '{}' has a numeric default",
                    option.key
                )));
            }
        }
    }

    Ok(())
}

fn check_condition_references(
    option: &OptionDefinition,
    keys: &HashSet<&str>,
) -> Result<(), SchemaError> {
    let Some(condition) = &option.visibility else {
        return Ok(());
    };

    for key in condition.keys() {
        if key == option.key {
            return Err(SchemaError::self_reference(format!(
                "option '{}' is conditional on itself",
                option.key
            )));
        }

        if !keys.contains(key) {
            return Err(SchemaError::unknown_condition_key(format!(
                "option '{}' is conditional on unknown option '{key}'",
                option.key
            )));
        }
    }

    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

fn check_condition_cycles(tool: &ToolDefinition) -> Result<(), SchemaError> {
    let edges: HashMap<&str, Vec<&str>> = tool
        .options
        .iter()
        .map(|option| {
            let targets = option
                .visibility
                .as_ref()
                .map(|condition| condition.keys().collect())
                .unwrap_or_default();
            (option.key.as_str(), targets)
        })
        .collect();

    let mut marks = HashMap::new();
    for option in &tool.options {
        let mut path = Vec::new();
        visit(option.key.as_str(), &edges, &mut marks, &mut path)?;
    }

    Ok(())
}

fn visit<'a>(
    key: &'a str,
    edges: &HashMap<&'a str, Vec<&'a str>>,
    marks: &mut HashMap<&'a str, Mark>,
    path: &mut Vec<&'a str>,
) -> Result<(), SchemaError> {
    match marks.get(key) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            path.push(key);
            return Err(SchemaError::condition_cycle(format!(
                "visibility conditions form a cycle: {}",
                path.join(" -> ")
            )));
        }
        None => {}
    }

    marks.insert(key, Mark::Visiting);
    path.push(key);
    for &next in edges.get(key).into_iter().flatten() {
        visit(next, edges, marks, path)?;
    }
    path.pop();
    marks.insert(key, Mark::Done);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Choice, ExtraRule, NumericRange, SchemaErrorKind, ToolCategory};

    fn tool() -> ToolDefinition {
        ToolDefinition::new("split", ToolCategory::Organize, "/api/organize/split")
    }

    #[test]
    fn accepts_conditional_option_referencing_earlier_select() {
        let definition = tool()
            .with_option(
                OptionDefinition::select(
                    "splitType",
                    "Split Type",
                    vec![Choice::new("pages", "Pages"), Choice::new("ranges", "Ranges")],
                )
                .with_default("pages"),
            )
            .with_option(
                OptionDefinition::short_text("ranges", "Ranges").visible_when("splitType", "ranges"),
            );

        assert!(check_definition(&definition).is_ok());
    }

    #[test]
    fn rejects_duplicate_keys_and_zero_file_limit() {
        let duplicate = tool()
            .with_option(OptionDefinition::short_text("pages", "Pages"))
            .with_option(OptionDefinition::short_text("pages", "Pages again"));
        let error = check_definition(&duplicate).expect_err("duplicate should fail");
        assert_eq!(error.kind, SchemaErrorKind::DuplicateOptionKey);
        assert_eq!(error.tool_id.as_deref(), Some("split"));

        let zero = tool().with_max_files(0);
        let error = check_definition(&zero).expect_err("zero max_files should fail");
        assert_eq!(error.kind, SchemaErrorKind::InvalidFileLimits);
    }

    #[test]
    fn rejects_unknown_and_self_references() {
        let unknown = tool()
            .with_option(OptionDefinition::short_text("ranges", "Ranges").visible_when("mode", "x"));
        assert_eq!(
            check_definition(&unknown).expect_err("unknown").kind,
            SchemaErrorKind::UnknownConditionKey
        );

        let own = tool()
            .with_option(OptionDefinition::short_text("ranges", "Ranges").visible_when("ranges", "x"));
        assert_eq!(
            check_definition(&own).expect_err("self").kind,
            SchemaErrorKind::SelfReference
        );
    }

    #[test]
    fn rejects_mutual_visibility_dependencies() {
        let cyclic = tool()
            .with_option(OptionDefinition::short_text("a", "A").visible_when("b", "on"))
            .with_option(OptionDefinition::short_text("b", "B").visible_when("c", "on"))
            .with_option(OptionDefinition::short_text("c", "C").visible_when("a", "on"));

        let error = check_definition(&cyclic).expect_err("cycle should fail");
        assert_eq!(error.kind, SchemaErrorKind::ConditionCycle);
        assert!(error.message.contains("a -> b -> c -> a"));
    }

    #[test]
    fn rejects_inconsistent_constraints() {
        let inverted = tool().with_option(OptionDefinition::number(
            "fontSize",
            "Font Size",
            NumericRange::bounded(100.0, 12.0),
        ));
        assert_eq!(
            check_definition(&inverted).expect_err("inverted").kind,
            SchemaErrorKind::InvalidConstraint
        );

        let bad_default = tool().with_option(
            OptionDefinition::select("rotation", "Rotation", vec![Choice::new("90", "90")])
                .with_default("45"),
        );
        assert_eq!(
            check_definition(&bad_default).expect_err("default").kind,
            SchemaErrorKind::InvalidConstraint
        );

        let out_of_range = tool().with_option(
            OptionDefinition::slider("opacity", "Opacity", NumericRange::bounded(0.1, 1.0))
                .with_default(3),
        );
        assert_eq!(
            check_definition(&out_of_range).expect_err("range").kind,
            SchemaErrorKind::InvalidConstraint
        );
    }

    #[test]
    fn rejects_rules_for_missing_options() {
        let definition = tool().with_rule(ExtraRule::min_length("password", 4));
        assert_eq!(
            check_definition(&definition).expect_err("rule").kind,
            SchemaErrorKind::UnknownRuleKey
        );
    }
}
