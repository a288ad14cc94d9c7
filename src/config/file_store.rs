use crate::domain::ports::ConfigStore;
use crate::utils::error::{RegistryError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECT_GROUP_ID_KEY: &str = "projectGroupId";
pub const PROJECT_VERSION_KEY: &str = "projectVersion";

/// JSON configuration file shared by several generators, one object per namespace.
///
/// ```json
/// { "generator-alfresco": { "projectGroupId": "org.alfresco", "moduleRegistry": [] } }
/// ```
///
/// Every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
    namespace: String,
    document: Map<String, Value>,
}

impl FileConfigStore {
    pub fn open(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let namespace = namespace.into();

        let document = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&content)? {
                    Value::Object(map) => map,
                    _ => {
                        return Err(RegistryError::ConfigError {
                            message: format!("{} does not contain a JSON object", path.display()),
                        })
                    }
                }
            }
        } else {
            tracing::debug!("Config file {} not found, starting empty", path.display());
            Map::new()
        };

        if let Some(section) = document.get(&namespace) {
            if !section.is_object() {
                return Err(RegistryError::ConfigError {
                    message: format!("Namespace '{}' is not a JSON object", namespace),
                });
            }
        }

        Ok(Self {
            path,
            namespace,
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn section(&self) -> Option<&Map<String, Value>> {
        self.document.get(&self.namespace).and_then(Value::as_object)
    }

    fn section_str(&self, key: &str) -> &str {
        self.section()
            .and_then(|section| section.get(key))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, content + "\n")?;
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.section().and_then(|section| section.get(key)).cloned()
    }

    /// The in-memory document only changes once the file has been written.
    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut document = self.document.clone();
        let section = document
            .entry(self.namespace.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = section {
            map.insert(key.to_string(), value);
        }

        self.write_document(&document)?;
        self.document = document;
        Ok(())
    }

    fn project_group_id(&self) -> &str {
        self.section_str(PROJECT_GROUP_ID_KEY)
    }

    fn project_version(&self) -> &str {
        self.section_str(PROJECT_VERSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".yo-rc.json");
        let store = FileConfigStore::open(&path, "generator-alfresco").unwrap();

        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.namespace(), "generator-alfresco");
        assert!(store.get("moduleRegistry").is_none());
        assert_eq!(store.project_group_id(), "");
        assert_eq!(store.project_version(), "");
    }

    #[test]
    fn test_reads_project_coordinates_from_namespace() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = json!({
            "generator-alfresco": {
                "projectGroupId": "org.alfresco",
                "projectVersion": "1.0.0-SNAPSHOT"
            },
            "other-generator": { "projectGroupId": "com.example" }
        });
        temp_file.write_all(content.to_string().as_bytes()).unwrap();

        let store = FileConfigStore::open(temp_file.path(), "generator-alfresco").unwrap();
        assert_eq!(store.project_group_id(), "org.alfresco");
        assert_eq!(store.project_version(), "1.0.0-SNAPSHOT");
    }

    #[test]
    fn test_set_writes_through_and_keeps_other_namespaces() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{"other-generator": {"answer": 42}}"#)
            .unwrap();

        let mut store = FileConfigStore::open(temp_file.path(), "generator-alfresco").unwrap();
        store.set("moduleRegistry", json!([])).unwrap();

        let reopened = FileConfigStore::open(temp_file.path(), "generator-alfresco").unwrap();
        assert_eq!(reopened.get("moduleRegistry"), Some(json!([])));

        let other = FileConfigStore::open(temp_file.path(), "other-generator").unwrap();
        assert_eq!(other.get("answer"), Some(json!(42)));
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project").join(".yo-rc.json");

        let mut store = FileConfigStore::open(&path, "generator-alfresco").unwrap();
        store.set("projectVersion", json!("2.0.0")).unwrap();

        assert!(path.exists());
        assert_eq!(store.project_version(), "2.0.0");
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".yo-rc.json");

        let mut store = FileConfigStore::open(&path, "generator-alfresco").unwrap();
        store.set("projectVersion", json!("1.0.0")).unwrap();

        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let result = store.set("projectVersion", json!("2.0.0"));
        assert!(matches!(result, Err(RegistryError::IoError(_))));
        assert_eq!(store.project_version(), "1.0.0");
        assert_eq!(store.get("projectVersion"), Some(json!("1.0.0")));
    }

    #[test]
    fn test_rejects_non_object_document() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[1, 2, 3]").unwrap();

        let result = FileConfigStore::open(temp_file.path(), "generator-alfresco");
        assert!(matches!(result, Err(RegistryError::ConfigError { .. })));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{not json").unwrap();

        let result = FileConfigStore::open(temp_file.path(), "generator-alfresco");
        assert!(matches!(result, Err(RegistryError::SerializationError(_))));
    }
}
