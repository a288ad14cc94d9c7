use anyhow::Result;
use module_registry::{
    ConfigStore, FileConfigStore, MemoryConfigStore, ModuleRegistry, MODULE_REGISTRY_KEY,
};
use serde_json::json;
use tempfile::TempDir;

const NAMESPACE: &str = "generator-alfresco";

/// Windows separators are rewritten on add and stay rewritten after a save/reload cycle.
#[test]
fn test_windows_path_survives_reload() -> Result<()> {
    let mut store = MemoryConfigStore::new("org.alfresco", "1.0.0-SNAPSHOT");

    let mut repo = ModuleRegistry::new(&mut store)?;
    repo.add_module([
        "groupId",
        "artifactId",
        "version",
        "packaging",
        "war",
        "location",
        "customizations\\path",
    ])?;
    repo.save()?;
    drop(repo);

    let persisted = store.get(MODULE_REGISTRY_KEY).unwrap();
    assert_eq!(persisted[0]["path"], "customizations/path");

    let repo = ModuleRegistry::new(&mut store)?;
    assert_eq!(repo.get_modules().len(), 1);
    assert_eq!(repo.get_modules()[0].path, "customizations/path");
    Ok(())
}

#[test]
fn test_save_replaces_whole_list() -> Result<()> {
    let mut store = MemoryConfigStore::new("org.alfresco", "1.0.0-SNAPSHOT");

    let mut repo = ModuleRegistry::new(&mut store)?;
    repo.add_module(["g", "a1", "v", "amp", "repo", "source", "p1"])?;
    repo.add_module(["g", "a2", "v", "amp", "repo", "source", "p2"])?;
    repo.save()?;
    repo.remove_module(["g", "a1", "v", "amp", "repo", "source", "p1"])?;
    repo.save()?;
    drop(repo);

    let persisted = store.get(MODULE_REGISTRY_KEY).unwrap();
    assert_eq!(
        persisted,
        json!([{
            "groupId": "g",
            "artifactId": "a2",
            "version": "v",
            "packaging": "amp",
            "war": "repo",
            "location": "source",
            "path": "p2"
        }])
    );
    Ok(())
}

#[test]
fn test_file_store_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join(".yo-rc.json");
    std::fs::write(
        &config_path,
        json!({
            NAMESPACE: {
                "projectGroupId": "org.alfresco",
                "projectVersion": "1.0.0-SNAPSHOT"
            }
        })
        .to_string(),
    )?;

    let mut repo = ModuleRegistry::new(FileConfigStore::open(&config_path, NAMESPACE)?)?;
    repo.add_module(json!({
        "groupId": "${project.groupId}",
        "artifactId": "repo-amp",
        "version": "${project.version}",
        "packaging": "amp",
        "war": "repo",
        "location": "source",
        "path": "customizations\\repo-amp"
    }))?;
    repo.save()?;

    let reloaded = ModuleRegistry::new(FileConfigStore::open(&config_path, NAMESPACE)?)?;
    let named = reloaded.get_named_modules();
    assert_eq!(named.len(), 1);
    assert_eq!(
        named[0].name,
        "org.alfresco:repo-amp:1.0.0-SNAPSHOT:amp:repo:source"
    );
    assert_eq!(named[0].module.group_id, "${project.groupId}");
    assert_eq!(named[0].module.path, "customizations/repo-amp");

    let on_disk: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
    assert_eq!(on_disk[NAMESPACE]["projectGroupId"], "org.alfresco");
    assert_eq!(on_disk[NAMESPACE][MODULE_REGISTRY_KEY][0]["artifactId"], "repo-amp");
    Ok(())
}

/// Two registries on the same store do not see each other's unsaved changes.
#[test]
fn test_registries_are_not_synchronised() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join(".yo-rc.json");

    let mut first = ModuleRegistry::new(FileConfigStore::open(&config_path, NAMESPACE)?)?;
    let second = ModuleRegistry::new(FileConfigStore::open(&config_path, NAMESPACE)?)?;

    first.add_module(["g", "a", "v", "amp", "repo", "source", "p"])?;
    first.save()?;

    assert!(second.is_empty());
    assert_eq!(
        ModuleRegistry::new(FileConfigStore::open(&config_path, NAMESPACE)?)?.len(),
        1
    );
    Ok(())
}
