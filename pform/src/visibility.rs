//! Visibility evaluation for conditional options.

use pschema::{OptionDefinition, OptionValue, ToolDefinition};

use crate::OptionValues;

/// Options of `tool` whose visibility condition holds for `values`, in
/// declaration order.
pub fn visible_options<'a>(
    tool: &'a ToolDefinition,
    values: &OptionValues,
) -> Vec<&'a OptionDefinition> {
    tool.options
        .iter()
        .filter(|option| is_visible(option, values))
        .collect()
}

/// Every requirement must match the current value exactly; a missing value
/// never matches.
pub fn is_visible(option: &OptionDefinition, values: &OptionValues) -> bool {
    let Some(condition) = &option.visibility else {
        return true;
    };

    condition.requirements().all(|(key, expected)| {
        values
            .get(key)
            .is_some_and(|current| values_match(current, expected))
    })
}

// Text "90" and number 90 are the same form value.
fn values_match(current: &OptionValue, expected: &OptionValue) -> bool {
    current == expected || current.to_form_value() == expected.to_form_value()
}
