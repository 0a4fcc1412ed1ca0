//! Configuration for installer path resolution
//!
//! Configuration is an optional JSON file. Every field has a default, so a
//! missing file or an empty object yields the builtin behavior.
//!
//! ```json
//! {
//!   "installer_paths": {
//!     "web/app/plugins/{name}": ["type:wordpress-plugin"],
//!     "custom/{vendor}/{name}": ["acme/special", "vendor:internal"]
//!   },
//!   "disabled_frameworks": ["cakephp"],
//!   "frameworks": {
//!     "acme": { "module": "acme/modules/{name}" },
//!     "legacy": "old-libs/{name}"
//!   }
//! }
//! ```
//!
//! The file is looked up at `$INSTALLER_PATHS_CONFIG`, falling back to
//! `<config dir>/installer-paths/config.json`. `INSTALLER_PATHS_DISABLE`
//! (comma separated) adds to `disabled_frameworks`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{InstallerError, Result};
use crate::frameworks::{validate_entry, FrameworkEntry, FrameworkRegistry, LocatorSpec};
use crate::resolver::PathOverride;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "INSTALLER_PATHS_CONFIG";
/// Environment variable listing additional frameworks to disable.
pub const DISABLE_ENV: &str = "INSTALLER_PATHS_DISABLE";
/// `disabled_frameworks` entry that disables every builtin framework.
pub const DISABLE_ALL: &str = "all";

/// Installer path configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Custom install paths: template → package selectors.
    pub installer_paths: BTreeMap<String, Vec<String>>,

    /// Builtin frameworks to remove from the registry. `"all"` removes
    /// every builtin; custom `frameworks` are still registered.
    pub disabled_frameworks: Vec<String>,

    /// Additional frameworks, or replacements for builtin ones.
    pub frameworks: BTreeMap<String, LocatorSpec>,
}

impl Config {
    /// Default config file location.
    pub fn path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("installer-paths")
            .join("config.json")
    }

    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::path())?;
        config.apply_env();
        Ok(config)
    }

    /// Apply `INSTALLER_PATHS_DISABLE` to a loaded config.
    pub fn apply_env(&mut self) {
        if let Ok(raw) = std::env::var(DISABLE_ENV) {
            debug!(disabled = %raw, "Disabling frameworks from environment");
            self.add_disabled(&raw);
        }
    }

    /// Load from `path`. A missing file yields the default config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            InstallerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;

        info!(
            path = %path.display(),
            overrides = config.installer_paths.len(),
            frameworks = config.frameworks.len(),
            disabled = config.disabled_frameworks.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Add comma separated framework keys to `disabled_frameworks`.
    pub fn add_disabled(&mut self, raw: &str) {
        for key in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            if !self.disabled_frameworks.iter().any(|k| k == key) {
                self.disabled_frameworks.push(key.to_string());
            }
        }
    }

    /// Check every template, selector and framework definition.
    ///
    /// Does not build a registry; `build_registry` does that once.
    pub fn validate(&self) -> Result<()> {
        self.path_overrides()?;
        for (key, locator) in &self.frameworks {
            validate_entry(&FrameworkEntry::new(key.clone(), locator.clone()))?;
        }
        Ok(())
    }

    /// Build the framework registry this config describes.
    pub fn build_registry(&self) -> Result<FrameworkRegistry> {
        let mut registry = FrameworkRegistry::builtin();

        for key in &self.disabled_frameworks {
            if key == DISABLE_ALL {
                registry.clear();
                info!("Disabled all builtin frameworks");
                break;
            }
            if !registry.remove(key) {
                warn!(framework = %key, "Cannot disable unknown framework, ignoring");
            }
        }

        for (key, locator) in &self.frameworks {
            registry.register(FrameworkEntry::new(key.clone(), locator.clone()))?;
        }

        Ok(registry)
    }

    /// Parse `installer_paths` into overrides, in template order.
    pub fn path_overrides(&self) -> Result<Vec<PathOverride>> {
        self.installer_paths
            .iter()
            .map(|(template, selectors)| PathOverride::parse(template, selectors.as_slice()))
            .collect()
    }
}
