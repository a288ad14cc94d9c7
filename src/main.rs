use anyhow::Context;
use clap::Parser;
use module_registry::config::Command;
use module_registry::utils::{logger, validation::Validate};
use module_registry::{
    sequential_validator_factory, CliConfig, FileConfigStore, ModuleInput, ModuleRegistry,
    NotEmpty, UniqueArtifactId, Validation,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = FileConfigStore::open(&config.config, &config.namespace)
        .with_context(|| format!("failed to open {}", config.config))?;
    let mut registry = ModuleRegistry::new(store)?;

    match &config.command {
        Command::List { json } => {
            let named = registry.get_named_modules();
            if *json {
                println!("{}", serde_json::to_string_pretty(&named)?);
            } else if named.is_empty() {
                println!("No modules registered");
            } else {
                for module in named {
                    println!("{}  {}", module.name, module.module.path);
                }
            }
        }
        Command::Add(args) => {
            registry.add_module(ModuleInput::from(args))?;
            registry.save()?;
            println!("✅ {} module(s) registered", registry.len());
        }
        Command::Remove(args) => match registry.remove_module(ModuleInput::from(args)) {
            Ok(removed) => {
                registry.save()?;
                println!("🗑️  Removed {}", removed.key());
            }
            Err(e) => {
                tracing::error!("Remove failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        Command::Find(args) => match registry.find_module(ModuleInput::from(args)) {
            Some(module) => println!("{}", serde_json::to_string_pretty(module)?),
            None => {
                eprintln!("❌ Module not found");
                std::process::exit(1);
            }
        },
        Command::CheckArtifactId { artifact_id } => {
            let chain = sequential_validator_factory::<ModuleRegistry<FileConfigStore>>(vec![
                Box::new(UniqueArtifactId),
                Box::new(NotEmpty),
            ]);
            match chain.bind(&registry).validate(artifact_id.as_deref()) {
                Some(Validation::Accepted) => println!("✅ Artifact Id is available"),
                verdict => {
                    let message = verdict
                        .map_or_else(|| "No validators ran".to_string(), |v| v.to_string());
                    eprintln!("❌ {}", message);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
