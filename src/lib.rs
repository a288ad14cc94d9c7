pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{file_store::FileConfigStore, memory::MemoryConfigStore};
pub use crate::core::registry::{ModuleRegistry, MODULE_REGISTRY_KEY};
pub use crate::core::validators::{
    is_not_empty, sequential_validator_factory, unique_artifact_id, BoundValidator, NotEmpty,
    SequentialValidator, UniqueArtifactId, Validation, Validator,
};
pub use domain::model::{ModuleInput, ModuleKey, ModuleRecord, NamedModule};
pub use domain::ports::ConfigStore;
pub use utils::error::{RegistryError, Result};
