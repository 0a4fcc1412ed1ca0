//! Framework registry types
//!
//! Defines the locator specs that map a framework's package subtypes to path
//! templates, both as `'static` builtin data and as owned registry entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Transform applied to a package name before placeholder substitution.
pub type NameTransform = fn(&str) -> String;

/// The rule determining install path shape for one framework.
///
/// Deserializes from either a plain string (a single fixed template) or an
/// object mapping subtypes to templates:
///
/// ```json
/// { "acme": "vendor-code/{name}", "other": { "module": "mods/{name}" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocatorSpec {
    /// One template used for every subtype.
    Fixed(String),
    /// A distinct template per subtype. Unknown subtypes are rejected.
    BySubtype(BTreeMap<String, String>),
}

impl LocatorSpec {
    /// Select the template for `subtype`.
    ///
    /// A fixed locator ignores the subtype entirely. Subtype lookup is an
    /// exact, case-sensitive match.
    pub fn template_for(&self, subtype: &str) -> Option<&str> {
        match self {
            LocatorSpec::Fixed(template) => Some(template.as_str()),
            LocatorSpec::BySubtype(map) => map.get(subtype).map(|t| t.as_str()),
        }
    }

    /// Enumerated subtypes, empty for a fixed locator.
    pub fn subtypes(&self) -> Vec<&str> {
        match self {
            LocatorSpec::Fixed(_) => Vec::new(),
            LocatorSpec::BySubtype(map) => map.keys().map(|k| k.as_str()).collect(),
        }
    }

    /// Every template this locator can produce.
    pub fn templates(&self) -> Vec<&str> {
        match self {
            LocatorSpec::Fixed(template) => vec![template.as_str()],
            LocatorSpec::BySubtype(map) => map.values().map(|t| t.as_str()).collect(),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, LocatorSpec::Fixed(_))
    }
}

/// Locator data for the builtin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinLocator {
    Fixed(&'static str),
    BySubtype(&'static [(&'static str, &'static str)]),
}

impl From<&BuiltinLocator> for LocatorSpec {
    fn from(locator: &BuiltinLocator) -> Self {
        match locator {
            BuiltinLocator::Fixed(template) => LocatorSpec::Fixed((*template).to_string()),
            BuiltinLocator::BySubtype(pairs) => LocatorSpec::BySubtype(
                pairs
                    .iter()
                    .map(|(subtype, template)| ((*subtype).to_string(), (*template).to_string()))
                    .collect(),
            ),
        }
    }
}

/// Metadata describing one builtin framework.
#[derive(Clone, Copy)]
pub struct FrameworkSpec {
    /// Framework key, the part of the package type before the first hyphen.
    pub key: &'static str,
    /// Where packages of this framework are installed.
    pub locator: BuiltinLocator,
    /// Optional name normalization for this framework's convention.
    pub name_transform: Option<NameTransform>,
}

/// A framework registered in a `FrameworkRegistry`.
#[derive(Clone)]
pub struct FrameworkEntry {
    pub key: String,
    pub locator: LocatorSpec,
    pub name_transform: Option<NameTransform>,
}

impl FrameworkEntry {
    /// Create an entry without a name transform.
    pub fn new(key: impl Into<String>, locator: LocatorSpec) -> Self {
        Self {
            key: key.into(),
            locator,
            name_transform: None,
        }
    }

    /// Attach a name transform.
    pub fn with_name_transform(mut self, transform: NameTransform) -> Self {
        self.name_transform = Some(transform);
        self
    }

    /// Apply this framework's name transform, if any.
    pub fn transform_name(&self, name: &str) -> String {
        match self.name_transform {
            Some(transform) => transform(name),
            None => name.to_string(),
        }
    }
}

impl fmt::Debug for FrameworkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameworkSpec")
            .field("key", &self.key)
            .field("locator", &self.locator)
            .field("name_transform", &self.name_transform.is_some())
            .finish()
    }
}

impl fmt::Debug for FrameworkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameworkEntry")
            .field("key", &self.key)
            .field("locator", &self.locator)
            .field("name_transform", &self.name_transform.is_some())
            .finish()
    }
}

impl From<&FrameworkSpec> for FrameworkEntry {
    fn from(spec: &FrameworkSpec) -> Self {
        Self {
            key: spec.key.to_string(),
            locator: LocatorSpec::from(&spec.locator),
            name_transform: spec.name_transform,
        }
    }
}
