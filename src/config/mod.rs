pub mod file_store;
pub mod memory;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, ModuleArgs, ModuleKeyArgs};

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::model::ModuleInput;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
    use clap::{Args, Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "module-registry")]
    #[command(about = "Inspect and edit the module registry of a generated project")]
    pub struct CliConfig {
        #[arg(long, default_value = ".yo-rc.json")]
        pub config: String,

        #[arg(long, default_value = "generator-alfresco")]
        pub namespace: String,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// List registered modules
        List {
            #[arg(long, help = "Print the named modules as JSON")]
            json: bool,
        },
        /// Register a module and save the registry
        Add(ModuleArgs),
        /// Remove a module and save the registry
        Remove(ModuleArgs),
        /// Look a module up by its coordinates
        Find(ModuleKeyArgs),
        /// Check that an artifact id is non-empty and not yet registered
        CheckArtifactId { artifact_id: Option<String> },
    }

    #[derive(Debug, Clone, Args)]
    pub struct ModuleKeyArgs {
        pub group_id: String,
        pub artifact_id: String,
        pub version: String,
        pub packaging: String,
        pub war: String,
        pub location: String,
        #[arg(long)]
        pub path: Option<String>,
    }

    #[derive(Debug, Clone, Args)]
    pub struct ModuleArgs {
        pub group_id: String,
        pub artifact_id: String,
        pub version: String,
        pub packaging: String,
        pub war: String,
        pub location: String,
        pub path: String,
    }

    impl From<&ModuleKeyArgs> for ModuleInput {
        fn from(args: &ModuleKeyArgs) -> Self {
            ModuleInput::Positional(vec![
                Some(args.group_id.clone()),
                Some(args.artifact_id.clone()),
                Some(args.version.clone()),
                Some(args.packaging.clone()),
                Some(args.war.clone()),
                Some(args.location.clone()),
                args.path.clone(),
            ])
        }
    }

    impl From<&ModuleArgs> for ModuleInput {
        fn from(args: &ModuleArgs) -> Self {
            ModuleInput::from([
                args.group_id.as_str(),
                args.artifact_id.as_str(),
                args.version.as_str(),
                args.packaging.as_str(),
                args.war.as_str(),
                args.location.as_str(),
                args.path.as_str(),
            ])
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("config", &self.config)?;
            validate_non_empty_string("namespace", &self.namespace)?;
            Ok(())
        }
    }

}
