pub mod chart;
pub mod config;
pub mod init;
pub mod render;
pub mod serve;
pub mod table;
pub mod validate;

use anyhow::Context;
use std::path::Path;
use talent_core::dashboard::HubContext;

/// Load config and dataset for `root`, validated under the configured policy.
pub(crate) fn load_context(root: &Path) -> anyhow::Result<HubContext> {
    HubContext::load(root)
        .with_context(|| format!("failed to load talent hub data from {}", root.display()))
}
