//! Package identity as supplied by the host package manager.

use serde::{Deserialize, Serialize};

/// The parts of a package's metadata that determine its install path.
///
/// Resolution rejects an empty or path-like name, and an empty vendor when
/// the selected template uses `{vendor}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageIdentity {
    /// Declared package type, e.g. `wordpress-plugin`.
    #[serde(rename = "type")]
    pub package_type: String,
    pub vendor: String,
    pub name: String,
}

impl PackageIdentity {
    pub fn new(
        package_type: impl Into<String>,
        vendor: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package_type: package_type.into(),
            vendor: vendor.into(),
            name: name.into(),
        }
    }

    /// Build an identity from a `vendor/name` pretty name.
    ///
    /// The pretty name is split at its first `/`. Without a `/` the vendor
    /// is empty and the whole string is the name.
    pub fn from_pretty_name(package_type: impl Into<String>, pretty_name: &str) -> Self {
        let (vendor, name) = match pretty_name.split_once('/') {
            Some((vendor, name)) => (vendor, name),
            None => ("", pretty_name),
        };
        Self::new(package_type, vendor, name)
    }

    /// `vendor/name`, or just the name when there is no vendor.
    pub fn pretty_name(&self) -> String {
        if self.vendor.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.vendor, self.name)
        }
    }
}
