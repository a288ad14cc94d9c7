use crate::domain::ports::ConfigStore;
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Configuration store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    values: HashMap<String, Value>,
    project_group_id: String,
    project_version: String,
}

impl MemoryConfigStore {
    pub fn new(project_group_id: impl Into<String>, project_version: impl Into<String>) -> Self {
        Self {
            values: HashMap::new(),
            project_group_id: project_group_id.into(),
            project_version: project_version.into(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn set_project_group_id(&mut self, group_id: impl Into<String>) {
        self.project_group_id = group_id.into();
    }

    pub fn set_project_version(&mut self, version: impl Into<String>) {
        self.project_version = version.into();
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn project_group_id(&self) -> &str {
        &self.project_group_id
    }

    fn project_version(&self) -> &str {
        &self.project_version
    }
}
