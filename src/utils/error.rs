use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Module not found: {name}")]
    NotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RegistryError {
    /// Short message suitable for printing to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::InvalidArgument { .. } => {
                "A module needs groupId, artifactId, version, packaging, war, location and path"
                    .to_string()
            }
            RegistryError::NotFound { name } => format!("No module registered as {}", name),
            RegistryError::IoError(e) => format!("Could not access the configuration file: {}", e),
            RegistryError::SerializationError(e) => {
                format!("The configuration file is not valid JSON: {}", e)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
