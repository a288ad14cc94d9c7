use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys of a module record, in positional order.
pub const MODULE_FIELDS: [&str; 7] = [
    "groupId",
    "artifactId",
    "version",
    "packaging",
    "war",
    "location",
    "path",
];

/// A packaged artifact contributed to a generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub war: String,
    pub location: String,
    pub path: String,
}

impl ModuleRecord {
    pub fn key(&self) -> ModuleKey {
        ModuleKey {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
            packaging: self.packaging.clone(),
            war: self.war.clone(),
            location: self.location.clone(),
        }
    }

    /// True when every identity field matches; `path` is not compared.
    pub fn matches(&self, key: &ModuleKey) -> bool {
        self.group_id == key.group_id
            && self.artifact_id == key.artifact_id
            && self.version == key.version
            && self.packaging == key.packaging
            && self.war == key.war
            && self.location == key.location
    }
}

/// Identity of a module record: every field except `path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleKey {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub war: String,
    pub location: String,
}

impl std::fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.packaging, self.war, self.location
        )
    }
}

/// Display projection of a record with project placeholders resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedModule {
    pub name: String,
    pub module: ModuleRecord,
}

/// Raw module input, either as positional values or as a keyed object.
///
/// Both shapes are funnelled through [`ModuleInput::to_record`] and
/// [`ModuleInput::to_key`]; missing, non-string and empty values all count as
/// absent.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleInput {
    Positional(Vec<Option<String>>),
    Keyed(Map<String, Value>),
}

impl ModuleInput {
    /// Input with no values at all.
    pub fn empty() -> Self {
        ModuleInput::Positional(Vec::new())
    }

    fn field(&self, index: usize) -> Option<&str> {
        let value = match self {
            ModuleInput::Positional(values) => values.get(index).and_then(|v| v.as_deref()),
            ModuleInput::Keyed(map) => map.get(MODULE_FIELDS[index]).and_then(Value::as_str),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Identity fields only; `path` may be missing.
    pub fn to_key(&self) -> Option<ModuleKey> {
        Some(ModuleKey {
            group_id: self.field(0)?.to_string(),
            artifact_id: self.field(1)?.to_string(),
            version: self.field(2)?.to_string(),
            packaging: self.field(3)?.to_string(),
            war: self.field(4)?.to_string(),
            location: self.field(5)?.to_string(),
        })
    }

    /// Complete record with a slash-separated path, or `None` if any field is absent.
    pub fn to_record(&self) -> Option<ModuleRecord> {
        let key = self.to_key()?;
        let path = self.field(6)?;
        Some(ModuleRecord {
            group_id: key.group_id,
            artifact_id: key.artifact_id,
            version: key.version,
            packaging: key.packaging,
            war: key.war,
            location: key.location,
            path: normalize_path(path),
        })
    }
}

impl Default for ModuleInput {
    fn default() -> Self {
        Self::empty()
    }
}

pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

impl<const N: usize> From<[&str; N]> for ModuleInput {
    fn from(values: [&str; N]) -> Self {
        ModuleInput::Positional(values.iter().map(|v| Some(v.to_string())).collect())
    }
}

impl<const N: usize> From<[Option<&str>; N]> for ModuleInput {
    fn from(values: [Option<&str>; N]) -> Self {
        ModuleInput::Positional(values.iter().map(|v| v.map(str::to_string)).collect())
    }
}

impl From<Vec<&str>> for ModuleInput {
    fn from(values: Vec<&str>) -> Self {
        ModuleInput::Positional(values.into_iter().map(|v| Some(v.to_string())).collect())
    }
}

impl From<Vec<Option<String>>> for ModuleInput {
    fn from(values: Vec<Option<String>>) -> Self {
        ModuleInput::Positional(values)
    }
}

impl From<Map<String, Value>> for ModuleInput {
    fn from(map: Map<String, Value>) -> Self {
        ModuleInput::Keyed(map)
    }
}

impl From<Value> for ModuleInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ModuleInput::Keyed(map),
            Value::Array(items) => ModuleInput::Positional(
                items
                    .into_iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => ModuleInput::empty(),
        }
    }
}

impl From<&ModuleRecord> for ModuleInput {
    fn from(record: &ModuleRecord) -> Self {
        ModuleInput::from([
            record.group_id.as_str(),
            record.artifact_id.as_str(),
            record.version.as_str(),
            record.packaging.as_str(),
            record.war.as_str(),
            record.location.as_str(),
            record.path.as_str(),
        ])
    }
}

impl From<ModuleRecord> for ModuleInput {
    fn from(record: ModuleRecord) -> Self {
        ModuleInput::from(&record)
    }
}

impl From<&ModuleKey> for ModuleInput {
    fn from(key: &ModuleKey) -> Self {
        ModuleInput::from([
            key.group_id.as_str(),
            key.artifact_id.as_str(),
            key.version.as_str(),
            key.packaging.as_str(),
            key.war.as_str(),
            key.location.as_str(),
        ])
    }
}
