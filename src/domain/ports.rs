use crate::utils::error::Result;
use serde_json::Value;

/// Key/value configuration store a registry persists into.
///
/// `project_group_id` and `project_version` are read at call time so that
/// placeholder resolution always sees the current project coordinates.
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
    fn project_group_id(&self) -> &str;
    fn project_version(&self) -> &str;
}

impl<T: ConfigStore + ?Sized> ConfigStore for &mut T {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        (**self).set(key, value)
    }

    fn project_group_id(&self) -> &str {
        (**self).project_group_id()
    }

    fn project_version(&self) -> &str {
        (**self).project_version()
    }
}
