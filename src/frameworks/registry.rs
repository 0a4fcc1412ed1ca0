//! Framework registry
//!
//! This module provides the `FrameworkRegistry` struct, the catalog of
//! frameworks and their locator specs. The builtin catalog is constructed once
//! and shared read-only; custom registries can add or remove frameworks before
//! being handed to a resolver.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::{InstallerError, Result};
use crate::template::validate_template;

use super::builtin::BUILTIN_FRAMEWORKS;
use super::types::{FrameworkEntry, LocatorSpec};

static FRAMEWORK_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_]{0,63}$").expect("framework key regex is valid"));

/// The process-wide builtin registry.
pub static BUILTIN_REGISTRY: Lazy<FrameworkRegistry> = Lazy::new(FrameworkRegistry::builtin);

/// A registry mapping framework keys to their install locations.
///
/// # Example
///
/// ```rust
/// use installer_paths::frameworks::{FrameworkEntry, FrameworkRegistry, LocatorSpec};
///
/// let mut registry = FrameworkRegistry::builtin();
/// assert!(registry.is_supported("wordpress"));
///
/// registry
///     .register(FrameworkEntry::new(
///         "acme",
///         LocatorSpec::Fixed("acme/{vendor}/{name}".to_string()),
///     ))
///     .unwrap();
/// assert!(registry.is_supported("acme"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameworkRegistry {
    frameworks: BTreeMap<String, FrameworkEntry>,
}

impl FrameworkRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every builtin framework.
    pub fn builtin() -> Self {
        let frameworks = BUILTIN_FRAMEWORKS
            .iter()
            .map(|spec| (spec.key.to_string(), FrameworkEntry::from(spec)))
            .collect();
        Self { frameworks }
    }

    /// Register a framework.
    ///
    /// The key must be lowercase alphanumeric (underscores allowed, no
    /// hyphens, since the package type is split at its first hyphen), and
    /// every template must pass `validate_template`. Registering an existing
    /// key replaces the previous entry.
    pub fn register(&mut self, entry: FrameworkEntry) -> Result<()> {
        validate_entry(&entry)?;

        let replaced = self.frameworks.contains_key(&entry.key);
        info!(
            framework = %entry.key,
            subtypes = entry.locator.subtypes().len(),
            replaced,
            "Registered framework"
        );

        self.frameworks.insert(entry.key.clone(), entry);
        Ok(())
    }

    /// Remove a framework. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.frameworks.remove(key).is_some();
        if removed {
            info!(framework = %key, "Removed framework");
        }
        removed
    }

    /// Remove every framework.
    pub fn clear(&mut self) {
        self.frameworks.clear();
    }

    /// Whether `key` is a registered framework. Exact match.
    pub fn is_supported(&self, key: &str) -> bool {
        self.frameworks.contains_key(key)
    }

    /// Get a registered framework.
    pub fn get(&self, key: &str) -> Option<&FrameworkEntry> {
        self.frameworks.get(key)
    }

    /// Get the locator spec for a framework.
    ///
    /// # Errors
    /// `InstallerError::UnknownFramework` if `key` is not registered.
    pub fn get_locator_spec(&self, key: &str) -> Result<&LocatorSpec> {
        self.get(key)
            .map(|entry| &entry.locator)
            .ok_or_else(|| InstallerError::UnknownFramework(key.to_string()))
    }

    /// Registered framework keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.frameworks.keys().map(|k| k.as_str()).collect()
    }

    /// Iterate over registered frameworks in key order.
    pub fn iter(&self) -> impl Iterator<Item = &FrameworkEntry> {
        self.frameworks.values()
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }
}

/// Check a framework entry without registering it: key, locations and
/// every template.
pub fn validate_entry(entry: &FrameworkEntry) -> Result<()> {
    validate_framework_key(&entry.key)?;

    if let LocatorSpec::BySubtype(map) = &entry.locator {
        if map.is_empty() {
            return Err(InstallerError::Config(format!(
                "Framework '{}' must define at least one location",
                entry.key
            )));
        }
        if let Some(subtype) = map.keys().find(|s| s.trim().is_empty()) {
            return Err(InstallerError::Config(format!(
                "Framework '{}' has an empty subtype '{}'",
                entry.key, subtype
            )));
        }
    }

    for template in entry.locator.templates() {
        validate_template(template)?;
    }
    Ok(())
}

/// Check that a framework key is usable as a package type prefix.
pub fn validate_framework_key(key: &str) -> Result<()> {
    if !FRAMEWORK_KEY_RE.is_match(key) {
        return Err(InstallerError::Config(format!(
            "Invalid framework key '{}': must be 1-64 lowercase alphanumeric characters and underscores",
            key
        )));
    }
    Ok(())
}
