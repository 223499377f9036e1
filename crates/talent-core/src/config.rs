use crate::error::{HubError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// TotalsPolicy
// ---------------------------------------------------------------------------

/// What to do when a service line's sub-counts exceed its total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalsPolicy {
    /// Reject the dataset.
    Enforce,
    /// Report and render anyway.
    #[default]
    Warn,
}

impl TotalsPolicy {
    pub fn level(self) -> WarnLevel {
        match self {
            TotalsPolicy::Enforce => WarnLevel::Error,
            TotalsPolicy::Warn => WarnLevel::Warning,
        }
    }
}

// ---------------------------------------------------------------------------
// BadgeHashing
// ---------------------------------------------------------------------------

/// How a skill string is mapped onto the badge palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeHashing {
    /// `chars mod 6`. Collides for equal-length skills; kept for visual stability.
    #[default]
    Length,
    /// FNV-1a over the UTF-8 bytes.
    Fnv,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// HubConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Dataset file, relative to the project root. `None` uses the built-in data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
    #[serde(default)]
    pub totals_policy: TotalsPolicy,
    #[serde(default)]
    pub badge_hashing: BadgeHashing,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_version() -> u32 {
    1
}

fn default_title() -> String {
    "Internal Talent & Bench Management Hub".to_string()
}

fn default_subtitle() -> String {
    "A single source of truth for our internal talent landscape.".to_string()
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            title: default_title(),
            subtitle: default_subtitle(),
            dataset: None,
            totals_policy: TotalsPolicy::default(),
            badge_hashing: BadgeHashing::default(),
            server: ServerConfig::default(),
        }
    }
}

impl HubConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(HubError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: HubConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Like [`HubConfig::load`], but an uninitialized root yields the defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(HubError::NotInitialized) => {
                tracing::debug!(root = %root.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_yaml(&paths::config_path(root), self)
    }

    /// Absolute dataset path, if one is configured.
    pub fn dataset_path(&self, root: &Path) -> Option<PathBuf> {
        self.dataset.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        })
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.version != 1 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("unsupported config version {}", self.version),
            });
        }

        if self.title.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "title is empty; the page header will be blank".to_string(),
            });
        }

        if self.server.port == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "server.port is 0; an ephemeral port will be chosen".to_string(),
            });
        }

        if let Some(ref p) = self.dataset {
            if p.as_os_str().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: "dataset path is empty".to_string(),
                });
            }
        }

        warnings
    }
}
