//! Custom install path overrides
//!
//! An override pairs a path template with selectors naming the packages it
//! applies to:
//!
//! - `vendor/name`: one exact package
//! - `type:<package-type>`: every package of that type
//! - `vendor:<vendor>`: every package from that vendor
//!
//! When several overrides match, an exact package selector beats a type
//! selector, which beats a vendor selector. Ties go to the override listed
//! first.

use std::str::FromStr;

use crate::error::{InstallerError, Result};
use crate::package::PackageIdentity;
use crate::template::validate_template;

const TYPE_PREFIX: &str = "type:";
const VENDOR_PREFIX: &str = "vendor:";

/// Which packages an override applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSelector {
    /// Exact `vendor/name` pretty name.
    Name(String),
    /// Exact package type.
    Type(String),
    /// Every package from a vendor.
    Vendor(String),
}

impl PackageSelector {
    /// Lower ranks take precedence.
    fn rank(&self) -> u8 {
        match self {
            PackageSelector::Name(_) => 0,
            PackageSelector::Type(_) => 1,
            PackageSelector::Vendor(_) => 2,
        }
    }

    pub fn matches(&self, package: &PackageIdentity) -> bool {
        match self {
            PackageSelector::Name(name) => *name == package.pretty_name(),
            PackageSelector::Type(package_type) => *package_type == package.package_type,
            PackageSelector::Vendor(vendor) => *vendor == package.vendor,
        }
    }
}

impl FromStr for PackageSelector {
    type Err = InstallerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (selector, value) = if let Some(value) = s.strip_prefix(TYPE_PREFIX) {
            (PackageSelector::Type(value.to_string()), value)
        } else if let Some(value) = s.strip_prefix(VENDOR_PREFIX) {
            (PackageSelector::Vendor(value.to_string()), value)
        } else {
            (PackageSelector::Name(s.to_string()), s)
        };

        if value.is_empty() {
            return Err(InstallerError::Config(format!(
                "Invalid package selector '{}': nothing to match",
                s
            )));
        }

        Ok(selector)
    }
}

/// A path template applied to the packages its selectors match.
///
/// Only `new` and `parse` build one, so the template is always validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOverride {
    template: String,
    selectors: Vec<PackageSelector>,
}

impl PathOverride {
    /// Create an override, validating the template.
    pub fn new(template: impl Into<String>, selectors: Vec<PackageSelector>) -> Result<Self> {
        let template = template.into();
        validate_template(&template)?;
        if selectors.is_empty() {
            return Err(InstallerError::Config(format!(
                "Install path '{}' does not name any packages",
                template
            )));
        }
        Ok(Self {
            template,
            selectors,
        })
    }

    /// Parse selectors from their string form.
    pub fn parse<S: AsRef<str>>(template: &str, selectors: &[S]) -> Result<Self> {
        let selectors = selectors
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Self::new(template, selectors)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn selectors(&self) -> &[PackageSelector] {
        &self.selectors
    }

    /// Best (lowest) rank among this override's matching selectors.
    fn match_rank(&self, package: &PackageIdentity) -> Option<u8> {
        self.selectors
            .iter()
            .filter(|selector| selector.matches(package))
            .map(PackageSelector::rank)
            .min()
    }
}

/// Find the override that applies to `package`, if any.
pub fn find_override<'a>(
    overrides: &'a [PathOverride],
    package: &PackageIdentity,
) -> Option<&'a PathOverride> {
    overrides
        .iter()
        .filter_map(|o| o.match_rank(package).map(|rank| (rank, o)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, o)| o)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg() -> PackageIdentity {
        PackageIdentity::new("wordpress-plugin", "acme", "forms")
    }

    // ---- selector tests ----

    #[test]
    fn test_parse_selectors() {
        assert_eq!(
            "type:wordpress-plugin".parse::<PackageSelector>().unwrap(),
            PackageSelector::Type("wordpress-plugin".to_string())
        );
        assert_eq!(
            "vendor:acme".parse::<PackageSelector>().unwrap(),
            PackageSelector::Vendor("acme".to_string())
        );
        assert_eq!(
            "acme/forms".parse::<PackageSelector>().unwrap(),
            PackageSelector::Name("acme/forms".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_empty_selector() {
        assert!("".parse::<PackageSelector>().is_err());
        assert!("type:".parse::<PackageSelector>().is_err());
        assert!("vendor:".parse::<PackageSelector>().is_err());
    }

    #[test]
    fn test_selector_matches() {
        let pkg = pkg();
        assert!(PackageSelector::Name("acme/forms".into()).matches(&pkg));
        assert!(!PackageSelector::Name("acme/other".into()).matches(&pkg));
        assert!(PackageSelector::Type("wordpress-plugin".into()).matches(&pkg));
        assert!(!PackageSelector::Type("wordpress-theme".into()).matches(&pkg));
        assert!(PackageSelector::Vendor("acme".into()).matches(&pkg));
        assert!(!PackageSelector::Vendor("other".into()).matches(&pkg));
    }

    // ---- override tests ----

    #[test]
    fn test_override_requires_selectors() {
        let err = PathOverride::parse::<&str>("custom/{name}", &[]).unwrap_err();
        assert!(err.to_string().contains("does not name any packages"));
    }

    #[test]
    fn test_override_validates_template() {
        assert!(PathOverride::parse("/abs/{name}", &["acme/forms"]).is_err());
        assert!(PathOverride::parse("x/{bogus}", &["acme/forms"]).is_err());
    }

    #[test]
    fn test_override_keeps_validated_template() {
        let custom = PathOverride::parse("custom/{vendor}/{name}", &["vendor:acme"]).unwrap();
        assert_eq!(custom.template(), "custom/{vendor}/{name}");
        assert_eq!(
            custom.selectors(),
            &[PackageSelector::Vendor("acme".to_string())]
        );
        assert!(PathOverride::parse("x/../{name}", &["vendor:acme"]).is_err());
        assert!(PathOverride::parse("x/{type}", &["vendor:acme"]).is_err());
    }

    #[test]
    fn test_find_override_none() {
        let overrides = vec![PathOverride::parse("x/{name}", &["vendor:other"]).unwrap()];
        assert!(find_override(&overrides, &pkg()).is_none());
        assert!(find_override(&[], &pkg()).is_none());
    }

    #[test]
    fn test_find_override_precedence() {
        let overrides = vec![
            PathOverride::parse("by-vendor/{name}", &["vendor:acme"]).unwrap(),
            PathOverride::parse("by-type/{name}", &["type:wordpress-plugin"]).unwrap(),
            PathOverride::parse("by-name/{name}", &["acme/forms"]).unwrap(),
        ];
        assert_eq!(
            find_override(&overrides, &pkg()).unwrap().template(),
            "by-name/{name}"
        );
        assert_eq!(
            find_override(&overrides[..2], &pkg()).unwrap().template(),
            "by-type/{name}"
        );
        assert_eq!(
            find_override(&overrides[..1], &pkg()).unwrap().template(),
            "by-vendor/{name}"
        );
    }

    #[test]
    fn test_find_override_tie_goes_to_first() {
        let overrides = vec![
            PathOverride::parse("first/{name}", &["vendor:acme"]).unwrap(),
            PathOverride::parse("second/{name}", &["vendor:acme"]).unwrap(),
        ];
        assert_eq!(
            find_override(&overrides, &pkg()).unwrap().template(),
            "first/{name}"
        );
    }

    #[test]
    fn test_override_uses_best_selector_of_many() {
        let overrides = vec![
            PathOverride::parse("typed/{name}", &["type:wordpress-plugin"]).unwrap(),
            PathOverride::parse("mixed/{name}", &["vendor:nobody", "acme/forms"]).unwrap(),
        ];
        assert_eq!(
            find_override(&overrides, &pkg()).unwrap().template(),
            "mixed/{name}"
        );
    }
}
