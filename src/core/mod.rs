pub mod registry;
pub mod validators;

pub use crate::domain::model::{ModuleInput, ModuleKey, ModuleRecord, NamedModule};
pub use crate::domain::ports::ConfigStore;
pub use crate::utils::error::Result;
