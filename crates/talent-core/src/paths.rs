use crate::error::{HubError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const HUB_DIR: &str = ".talent";
pub const CONFIG_FILE: &str = ".talent/config.yaml";
pub const DATASET_FILE: &str = ".talent/dataset.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn hub_dir(root: &Path) -> PathBuf {
    root.join(HUB_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn default_dataset_path(root: &Path) -> PathBuf {
    root.join(DATASET_FILE)
}

// ---------------------------------------------------------------------------
// Service line code validation
// ---------------------------------------------------------------------------

static CODE_RE: OnceLock<Regex> = OnceLock::new();

fn code_re() -> &'static Regex {
    CODE_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*$").unwrap())
}

pub fn validate_code(code: &str) -> Result<()> {
    if code.is_empty() || code.len() > 32 || !code_re().is_match(code) {
        return Err(HubError::InvalidCode(code.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
