//! Path template rendering and validation
//!
//! Templates are relative paths containing named placeholders from a fixed
//! set: `{name}`, `{vendor}` and `{package_key}`. Rendering is a single pass
//! of substitution, so a substituted value is never re-scanned for
//! placeholders.

use std::path::{Component, Path};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{InstallerError, Result};

/// Placeholders a template may reference.
pub const PLACEHOLDERS: &[&str] = &["name", "vendor", "package_key"];

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]*)\}").expect("placeholder regex is valid"));

/// Values substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    pub name: String,
    pub vendor: String,
}

impl TemplateVars {
    pub fn new(vendor: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor: vendor.into(),
        }
    }

    /// `vendor_name`, or just the name when there is no vendor.
    pub fn package_key(&self) -> String {
        if self.vendor.is_empty() {
            self.name.clone()
        } else {
            format!("{}_{}", self.vendor, self.name)
        }
    }

    fn lookup(&self, placeholder: &str) -> Option<String> {
        match placeholder {
            "name" => Some(self.name.clone()),
            "vendor" => Some(self.vendor.clone()),
            "package_key" => Some(self.package_key()),
            _ => None,
        }
    }
}

/// Substitute placeholders in `template`.
///
/// Unknown placeholders are left as written; `validate_template` rejects
/// them before a template reaches a registry.
pub fn render(template: &str, vars: &TemplateVars) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            vars.lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Render `template` and terminate it with exactly one `/`.
pub fn render_dir(template: &str, vars: &TemplateVars) -> String {
    let mut path = render(template, vars);
    while path.ends_with('/') {
        path.pop();
    }
    path.push('/');
    path
}

/// Names of all placeholders referenced by `template`, in order.
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Validate a path template.
///
/// A template must be non-empty, relative, free of `..` components, and may
/// only reference known placeholders.
pub fn validate_template(template: &str) -> Result<()> {
    let invalid = |reason: &str| InstallerError::InvalidTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    };

    if template.trim().is_empty() {
        return Err(invalid("template is empty"));
    }

    if template.starts_with('/') || template.starts_with('\\') {
        return Err(invalid("template must be a relative path"));
    }

    for component in Path::new(template).components() {
        match component {
            Component::ParentDir => return Err(invalid("template must not contain '..'")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("template must be a relative path"))
            }
            _ => {}
        }
    }

    for placeholder in placeholders(template) {
        if !PLACEHOLDERS.contains(&placeholder) {
            return Err(invalid(&format!(
                "unknown placeholder '{{{}}}', expected one of {{name}}, {{vendor}}, {{package_key}}",
                placeholder
            )));
        }
    }

    Ok(())
}
