use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use talent_core::config::HubConfig;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration (defaults filled in)
    Show,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = HubConfig::load_or_default(root).context("failed to load config")?;

    if json {
        return print_json(&config);
    }

    println!("title:         {}", config.title);
    println!("subtitle:      {}", config.subtitle);
    match config.dataset_path(root) {
        Some(p) => println!("dataset:       {}", p.display()),
        None => println!("dataset:       (project default or built-in)"),
    }
    println!("totals_policy: {}", serde_yaml::to_string(&config.totals_policy)?.trim());
    println!("badge_hashing: {}", serde_yaml::to_string(&config.badge_hashing)?.trim());
    println!("server.port:   {}", config.server.port);
    Ok(())
}
