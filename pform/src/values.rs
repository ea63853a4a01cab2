//! Current option values for the active tool.
//!
//! ```rust
//! use pform::OptionValues;
//! use pschema::{OptionDefinition, OptionValue, ToolCategory, ToolDefinition};
//!
//! let rotate = ToolDefinition::new("rotate-pages", ToolCategory::Edit, "/api/edit/rotate")
//!     .with_option(OptionDefinition::short_text("pages", "Pages").with_default("all"))
//!     .with_option(OptionDefinition::short_text("note", "Note"));
//!
//! let values = OptionValues::seeded(&rotate);
//! assert_eq!(values.get("pages"), Some(&OptionValue::from("all")));
//! assert!(!values.contains_key("note"));
//! ```

use std::collections::BTreeMap;

use pschema::{OptionValue, ToolDefinition};

use crate::visibility::is_visible;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionValues {
    entries: BTreeMap<String, OptionValue>,
}

impl OptionValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values a freshly activated tool starts with.
    ///
    /// An option with a default is seeded once it is visible under the values
    /// seeded so far, so a gate that stays hidden never unlocks the options it
    /// controls. Options without a default start absent.
    pub fn seeded(tool: &ToolDefinition) -> Self {
        let mut seeded = Self::new();

        loop {
            let ready: Vec<(String, OptionValue)> = tool
                .options
                .iter()
                .filter(|option| !seeded.contains_key(&option.key))
                .filter(|option| is_visible(option, &seeded))
                .filter_map(|option| {
                    option
                        .default
                        .clone()
                        .map(|value| (option.key.clone(), value))
                })
                .collect();

            if ready.is_empty() {
                return seeded;
            }
            seeded.entries.extend(ready);
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when the key is absent or its value is blank.
    pub fn is_blank(&self, key: &str) -> bool {
        self.get(key).is_none_or(OptionValue::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Entries in the tool's declared option order, followed by any keys the
    /// tool does not declare.
    pub fn in_schema_order<'a>(
        &'a self,
        tool: &'a ToolDefinition,
    ) -> impl Iterator<Item = (&'a str, &'a OptionValue)> + 'a {
        let declared = tool.options.iter().filter_map(|option| {
            self.entries
                .get_key_value(option.key.as_str())
                .map(|(key, value)| (key.as_str(), value))
        });
        let undeclared = self
            .iter()
            .filter(|(key, _)| tool.option(key).is_none());

        declared.chain(undeclared)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OptionValues
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
