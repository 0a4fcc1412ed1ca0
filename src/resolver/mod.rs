//! Install path resolution
//!
//! Turns a package type string and package identity into the relative
//! directory the host should install the package into:
//!
//! ```text
//! "phpbb-extension", vendor "test", name "foo"
//!   -> framework "phpbb", subtype "extension"
//!   -> template "ext/{vendor}/{name}"
//!   -> "ext/test/foo/"
//! ```
//!
//! `supports` only checks the framework portion of the type. A type with a
//! known framework but an unknown subtype passes `supports` and then fails in
//! `resolve` with `InstallerError::UnsupportedSubtype`.

pub mod overrides;

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::error::{InstallerError, Result};
use crate::frameworks::FrameworkRegistry;
use crate::installer::Installer;
use crate::package::PackageIdentity;
use crate::template::{placeholders, render_dir, TemplateVars};

pub use overrides::{find_override, PackageSelector, PathOverride};

/// Split a package type at its first hyphen into `(framework, subtype)`.
///
/// Returns `None` if there is no hyphen or either side is empty.
pub fn split_package_type(package_type: &str) -> Option<(&str, &str)> {
    let (framework, subtype) = package_type.split_once('-')?;
    if framework.is_empty() || subtype.is_empty() {
        return None;
    }
    Some((framework, subtype))
}

/// Check that `vars` can fill `template` with real path segments.
///
/// The name must always be usable; the vendor only when the template
/// references `{vendor}`.
fn check_segments(template: &str, vars: &TemplateVars) -> Result<()> {
    let invalid = |reason: String| InstallerError::InvalidPackage {
        package: if vars.vendor.is_empty() {
            vars.name.clone()
        } else {
            format!("{}/{}", vars.vendor, vars.name)
        },
        reason,
    };

    if let Some(reason) = segment_problem("name", &vars.name) {
        return Err(invalid(reason));
    }
    if placeholders(template).contains(&"vendor") {
        if let Some(reason) = segment_problem("vendor", &vars.vendor) {
            return Err(invalid(reason));
        }
    }
    Ok(())
}

fn segment_problem(field: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is empty", field))
    } else if value == "." || value == ".." {
        Some(format!("{} '{}' is not a directory name", field, value))
    } else if value.contains(['/', '\\']) {
        Some(format!("{} '{}' contains a path separator", field, value))
    } else {
        None
    }
}

/// Resolves install paths against a framework registry.
///
/// Holds no mutable state: every call is independent, and the resolver can
/// be cloned or shared across threads freely.
///
/// # Example
///
/// ```rust
/// use installer_paths::InstallPathResolver;
///
/// let resolver = InstallPathResolver::new();
/// assert!(resolver.supports("wordpress-plugin"));
/// assert_eq!(
///     resolver.resolve("wordpress-plugin", "shama", "my_plugin").unwrap(),
///     "wp-content/plugins/my_plugin/"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct InstallPathResolver {
    registry: Arc<FrameworkRegistry>,
    overrides: Vec<PathOverride>,
}

impl InstallPathResolver {
    /// Create a resolver over the builtin frameworks.
    pub fn new() -> Self {
        Self::with_registry(FrameworkRegistry::builtin())
    }

    /// Create a resolver over a custom registry.
    pub fn with_registry(registry: FrameworkRegistry) -> Self {
        Self::with_shared_registry(Arc::new(registry))
    }

    /// Create a resolver over a registry shared with other resolvers.
    pub fn with_shared_registry(registry: Arc<FrameworkRegistry>) -> Self {
        Self {
            registry,
            overrides: Vec::new(),
        }
    }

    /// Build a resolver from configuration: builtin frameworks, minus the
    /// disabled ones, plus custom frameworks and install path overrides.
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = config.build_registry()?;
        let overrides = config.path_overrides()?;
        Ok(Self::with_registry(registry).with_overrides(overrides))
    }

    /// Replace the install path overrides.
    pub fn with_overrides(mut self, overrides: Vec<PathOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn registry(&self) -> &FrameworkRegistry {
        &self.registry
    }

    pub fn overrides(&self) -> &[PathOverride] {
        &self.overrides
    }

    /// Whether the framework portion of `package_type` is registered.
    ///
    /// This is a framework-level check only; the subtype is not validated.
    pub fn supports(&self, package_type: &str) -> bool {
        split_package_type(package_type)
            .map(|(framework, _)| self.registry.is_supported(framework))
            .unwrap_or(false)
    }

    /// Resolve the relative install directory for a package.
    ///
    /// The result has a trailing `/` and no leading `/`.
    ///
    /// # Errors
    /// - `InstallerError::InvalidTypeFormat` if the type has no `<framework>-<subtype>` split
    /// - `InstallerError::UnknownFramework` if the framework is not registered
    /// - `InstallerError::UnsupportedSubtype` if the framework has no location for the subtype
    /// - `InstallerError::InvalidPackage` if the name (or the vendor, when the
    ///   template uses it) is empty or not a single path segment
    pub fn resolve(&self, package_type: &str, vendor: &str, name: &str) -> Result<String> {
        let (framework, subtype) = split_package_type(package_type)
            .ok_or_else(|| InstallerError::InvalidTypeFormat(package_type.to_string()))?;

        let entry = self
            .registry
            .get(framework)
            .ok_or_else(|| InstallerError::UnknownFramework(framework.to_string()))?;

        let vars = TemplateVars::new(vendor, entry.transform_name(name));

        if !self.overrides.is_empty() {
            let package = PackageIdentity::new(package_type, vendor, name);
            if let Some(custom) = find_override(&self.overrides, &package) {
                check_segments(custom.template(), &vars)?;
                let path = render_dir(custom.template(), &vars);
                debug!(
                    package_type,
                    package = %package.pretty_name(),
                    template = %custom.template(),
                    path = %path,
                    "Resolved install path from override"
                );
                return Ok(path);
            }
        }

        let template = entry.locator.template_for(subtype).ok_or_else(|| {
            InstallerError::UnsupportedSubtype {
                package_type: package_type.to_string(),
                framework: framework.to_string(),
                subtype: subtype.to_string(),
            }
        })?;

        check_segments(template, &vars)?;
        let path = render_dir(template, &vars);
        debug!(package_type, vendor, name, path = %path, "Resolved install path");
        Ok(path)
    }

    /// Resolve the install directory for a package identity.
    pub fn install_path(&self, package: &PackageIdentity) -> Result<String> {
        self.resolve(&package.package_type, &package.vendor, &package.name)
    }
}

impl Default for InstallPathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer for InstallPathResolver {
    fn supports(&self, package_type: &str) -> bool {
        InstallPathResolver::supports(self, package_type)
    }

    fn install_path(&self, package: &PackageIdentity) -> Result<String> {
        InstallPathResolver::install_path(self, package)
    }
}
