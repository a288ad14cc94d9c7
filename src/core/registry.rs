use crate::domain::model::{normalize_path, ModuleInput, ModuleRecord, NamedModule};
use crate::domain::ports::ConfigStore;
use crate::utils::error::{RegistryError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Store key under which the module list is persisted.
pub const MODULE_REGISTRY_KEY: &str = "moduleRegistry";

static PROJECT_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{project\.(groupId|version)\}").expect("placeholder pattern is valid")
});

/// Ordered list of module records bound to one configuration store.
///
/// The list is read from the store once at construction. Mutations stay in
/// memory until [`ModuleRegistry::save`] writes the whole list back.
pub struct ModuleRegistry<S: ConfigStore> {
    store: S,
    modules: Vec<ModuleRecord>,
}

impl<S: ConfigStore> ModuleRegistry<S> {
    pub fn new(store: S) -> Result<Self> {
        let modules = match store.get(MODULE_REGISTRY_KEY) {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => {
                let mut modules: Vec<ModuleRecord> = serde_json::from_value(value)?;
                for module in modules.iter_mut() {
                    if module.path.contains('\\') {
                        tracing::warn!(
                            "Rewriting Windows path '{}' for module {}",
                            module.path,
                            module.artifact_id
                        );
                        module.path = normalize_path(&module.path);
                    }
                }
                modules
            }
        };

        tracing::debug!("Loaded {} module(s) from configuration", modules.len());
        Ok(Self { store, modules })
    }

    /// Canonical record for either input shape, or `None` when a field is missing.
    pub fn normalize(&self, input: impl Into<ModuleInput>) -> Option<ModuleRecord> {
        input.into().to_record()
    }

    pub fn get_modules(&self) -> &[ModuleRecord] {
        &self.modules
    }

    /// Records paired with their coordinate string, placeholders resolved
    /// against the store's current project values.
    pub fn get_named_modules(&self) -> Vec<NamedModule> {
        self.modules
            .iter()
            .map(|module| NamedModule {
                name: format!(
                    "{}:{}:{}:{}:{}:{}",
                    self.resolve_placeholders(&module.group_id),
                    module.artifact_id,
                    self.resolve_placeholders(&module.version),
                    module.packaging,
                    module.war,
                    module.location
                ),
                module: module.clone(),
            })
            .collect()
    }

    fn resolve_placeholders(&self, value: &str) -> String {
        PROJECT_PLACEHOLDER
            .replace_all(value, |caps: &regex::Captures| match &caps[1] {
                "groupId" => self.store.project_group_id().to_string(),
                _ => self.store.project_version().to_string(),
            })
            .into_owned()
    }

    /// First record whose identity matches; `path` is optional and ignored.
    pub fn find_module(&self, input: impl Into<ModuleInput>) -> Option<&ModuleRecord> {
        let key = input.into().to_key()?;
        self.modules.iter().find(|module| module.matches(&key))
    }

    pub fn contains_artifact_id(&self, artifact_id: &str) -> bool {
        self.modules
            .iter()
            .any(|module| module.artifact_id == artifact_id)
    }

    /// Appends a record. Adding an identity that is already present does nothing.
    pub fn add_module(&mut self, input: impl Into<ModuleInput>) -> Result<()> {
        let module = input
            .into()
            .to_record()
            .ok_or_else(|| RegistryError::InvalidArgument {
                message: "cannot add an incomplete module".to_string(),
            })?;

        let key = module.key();
        if self.modules.iter().any(|existing| existing.matches(&key)) {
            tracing::debug!("Module {} already registered, ignoring", key);
            return Ok(());
        }

        tracing::debug!("Registering module {}", key);
        self.modules.push(module);
        Ok(())
    }

    pub fn remove_module(&mut self, input: impl Into<ModuleInput>) -> Result<ModuleRecord> {
        let module = input
            .into()
            .to_record()
            .ok_or_else(|| RegistryError::InvalidArgument {
                message: "cannot remove an incomplete module".to_string(),
            })?;

        let key = module.key();
        let index = self
            .modules
            .iter()
            .position(|existing| existing.matches(&key))
            .ok_or_else(|| RegistryError::NotFound {
                name: key.to_string(),
            })?;

        tracing::debug!("Removing module {}", key);
        Ok(self.modules.remove(index))
    }

    /// Replaces the persisted list with the in-memory one.
    pub fn save(&mut self) -> Result<()> {
        let value = serde_json::to_value(&self.modules)?;
        self.store.set(MODULE_REGISTRY_KEY, value)?;
        tracing::debug!("Saved {} module(s)", self.modules.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
