//! Error types for installer path resolution
//!
//! This module defines all error types used throughout the crate.
//! Uses `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations.

use thiserror::Error;

/// The primary error type for installer path resolution.
#[derive(Error, Debug)]
pub enum InstallerError {
    /// The package type has no `<framework>-<subtype>` split.
    #[error("Invalid package type '{0}': expected '<framework>-<subtype>'")]
    InvalidTypeFormat(String),

    /// The framework key is not in the registry.
    #[error("Unknown framework '{0}'")]
    UnknownFramework(String),

    /// The framework is known but has no path convention for the subtype.
    ///
    /// Callers can hit this even after a passing `supports` check, since
    /// `supports` only looks at the framework portion of the type.
    #[error("Package type \"{package_type}\" is not supported: framework '{framework}' has no location for '{subtype}'")]
    UnsupportedSubtype {
        package_type: String,
        framework: String,
        subtype: String,
    },

    /// The package's vendor or name cannot form a path segment.
    #[error("Invalid package '{package}': {reason}")]
    InvalidPackage { package: String, reason: String },

    /// A path template failed validation (absolute path, traversal, unknown placeholder).
    #[error("Invalid path template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// Configuration-related errors (invalid keys, bad selectors, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for installer path resolution.
pub type Result<T> = std::result::Result<T, InstallerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InstallerError::Config("bad selector".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad selector");
    }

    #[test]
    fn test_unsupported_subtype_display() {
        let err = InstallerError::UnsupportedSubtype {
            package_type: "cakephp-whoops".to_string(),
            framework: "cakephp".to_string(),
            subtype: "whoops".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Package type \"cakephp-whoops\" is not supported"));
        assert!(msg.contains("'whoops'"));
    }

    #[test]
    fn test_invalid_package_display() {
        let err = InstallerError::InvalidPackage {
            package: "foo".to_string(),
            reason: "vendor is empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid package 'foo': vendor is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: InstallerError = io_err.into();
        assert!(matches!(err, InstallerError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: InstallerError = json_err.into();
        assert!(matches!(err, InstallerError::Json(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
