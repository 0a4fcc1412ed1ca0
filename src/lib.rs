//! Installer Paths - framework-aware install path resolution
//!
//! Maps a package type such as `wordpress-plugin` or `drupal-module` to the
//! directory the target framework expects that package in.

pub mod config;
pub mod error;
pub mod frameworks;
pub mod installer;
pub mod package;
pub mod resolver;
pub mod template;

pub use config::Config;
pub use error::{InstallerError, Result};
pub use frameworks::{FrameworkRegistry, LocatorSpec};
pub use installer::Installer;
pub use package::PackageIdentity;
pub use resolver::{split_package_type, InstallPathResolver};
