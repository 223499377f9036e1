use anyhow::Context;
use talent_core::{config::HubConfig, dataset::Dataset, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing talent hub in: {}", root.display());

    let hub_dir = paths::hub_dir(root);
    io::ensure_dir(&hub_dir)
        .with_context(|| format!("failed to create {}", hub_dir.display()))?;

    let created = io::write_yaml_if_missing(&paths::config_path(root), &HubConfig::default())
        .context("failed to write config.yaml")?;
    report(created, paths::CONFIG_FILE);

    let builtin = Dataset::builtin().context("built-in dataset is malformed")?;
    let created = io::write_yaml_if_missing(&paths::default_dataset_path(root), &builtin)
        .context("failed to write dataset.yaml")?;
    report(created, paths::DATASET_FILE);

    println!("\nNext: hub validate, then hub serve");
    Ok(())
}

fn report(created: bool, file: &str) {
    if created {
        println!("  created: {file}");
    } else {
        println!("  exists:  {file}");
    }
}
