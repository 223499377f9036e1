use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use talent_core::config::{HubConfig, WarnLevel};
use talent_core::dataset::Dataset;

/// Check config and dataset. Loads the dataset without enforcing the totals
/// policy so every finding is reported, not just the first error.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = HubConfig::load_or_default(root).context("failed to load config")?;
    let dataset = Dataset::for_project(root, &config).context("failed to load dataset")?;

    let config_warnings = config.validate();
    let dataset_warnings = dataset.validate(config.totals_policy);

    if json {
        let value = serde_json::json!({
            "config": config_warnings,
            "dataset": dataset_warnings,
        });
        print_json(&value)?;
    } else if config_warnings.is_empty() && dataset_warnings.is_empty() {
        println!("Config and dataset are valid. No warnings.");
    } else {
        let all = config_warnings
            .iter()
            .map(|w| (w.level, &w.message))
            .chain(dataset_warnings.iter().map(|w| (w.level, &w.message)));
        for (level, message) in all {
            let prefix = match level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {message}");
        }
    }

    let errors = config_warnings
        .iter()
        .filter(|w| w.level == WarnLevel::Error)
        .count()
        + dataset_warnings
            .iter()
            .filter(|w| w.level == WarnLevel::Error)
            .count();
    if errors > 0 {
        anyhow::bail!("validation found {errors} error(s)");
    }

    Ok(())
}
