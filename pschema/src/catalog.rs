//! Tool catalog for lookup by tool id.

use std::sync::Arc;

use pcommon::{Registry, ToolId};

use crate::{SchemaError, ToolCategory, ToolDefinition, check_definition};

#[derive(Debug, Default, Clone)]
pub struct ToolCatalog {
    tools: Registry<ToolId, Arc<ToolDefinition>>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the definition against the authoring contract and registers it.
    pub fn register(&mut self, tool: ToolDefinition) -> Result<(), SchemaError> {
        check_definition(&tool)?;

        if self.tools.contains_key(&tool.id) {
            return Err(SchemaError::duplicate_tool(format!(
                "tool '{}' is already registered",
                tool.id
            )));
        }

        self.tools.insert(tool.id.clone(), Arc::new(tool));
        Ok(())
    }

    pub fn register_all<I>(&mut self, tools: I) -> Result<(), SchemaError>
    where
        I: IntoIterator<Item = ToolDefinition>,
    {
        for tool in tools {
            self.register(tool)?;
        }

        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<ToolDefinition>> {
        self.tools.get(id).cloned()
    }

    pub fn require(&self, id: &str) -> Result<Arc<ToolDefinition>, SchemaError> {
        self.get(id)
            .ok_or_else(|| SchemaError::not_found(format!("tool '{id}' is not registered")))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Arc<ToolDefinition>> {
        self.tools.remove(id)
    }

    pub fn definitions(&self) -> Vec<Arc<ToolDefinition>> {
        self.tools.values().cloned().collect()
    }

    pub fn in_category(&self, category: ToolCategory) -> Vec<Arc<ToolDefinition>> {
        self.tools
            .values()
            .filter(|tool| tool.category == category)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
