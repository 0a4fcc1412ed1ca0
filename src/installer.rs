//! The seam a host package manager consumes.
//!
//! A host asks every registered installer whether it `supports` a package
//! type, then asks the first one that does for the package's install path,
//! and places the files itself.

use std::sync::Arc;

use crate::error::Result;
use crate::package::PackageIdentity;

/// A pluggable installer as seen by the host.
pub trait Installer: Send + Sync {
    /// Whether this installer handles packages of `package_type`.
    fn supports(&self, package_type: &str) -> bool;

    /// Relative install directory for `package`, with a trailing separator.
    fn install_path(&self, package: &PackageIdentity) -> Result<String>;
}

impl<T: Installer + ?Sized> Installer for Arc<T> {
    fn supports(&self, package_type: &str) -> bool {
        (**self).supports(package_type)
    }

    fn install_path(&self, package: &PackageIdentity) -> Result<String> {
        (**self).install_path(package)
    }
}

impl<T: Installer + ?Sized> Installer for Box<T> {
    fn supports(&self, package_type: &str) -> bool {
        (**self).supports(package_type)
    }

    fn install_path(&self, package: &PackageIdentity) -> Result<String> {
        (**self).install_path(package)
    }
}

/// Pick the first installer that supports `package_type`.
pub fn find_installer<'a>(
    installers: &'a [Box<dyn Installer>],
    package_type: &str,
) -> Option<&'a dyn Installer> {
    installers
        .iter()
        .find(|installer| installer.supports(package_type))
        .map(|installer| &**installer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InstallPathResolver;

    struct LibraryInstaller;

    impl Installer for LibraryInstaller {
        fn supports(&self, package_type: &str) -> bool {
            package_type == "library"
        }

        fn install_path(&self, package: &PackageIdentity) -> Result<String> {
            Ok(format!("vendor/{}/", package.pretty_name()))
        }
    }

    #[test]
    fn test_find_installer_picks_first_supporting() {
        let installers: Vec<Box<dyn Installer>> =
            vec![Box::new(LibraryInstaller), Box::new(InstallPathResolver::new())];

        let pkg = PackageIdentity::from_pretty_name("library", "monolog/monolog");
        let installer = find_installer(&installers, &pkg.package_type).unwrap();
        assert_eq!(installer.install_path(&pkg).unwrap(), "vendor/monolog/monolog/");

        let pkg = PackageIdentity::from_pretty_name("wordpress-theme", "acme/dark");
        let installer = find_installer(&installers, &pkg.package_type).unwrap();
        assert_eq!(installer.install_path(&pkg).unwrap(), "wp-content/themes/dark/");
    }

    #[test]
    fn test_find_installer_none() {
        let installers: Vec<Box<dyn Installer>> = vec![Box::new(LibraryInstaller)];
        assert!(find_installer(&installers, "drupal-module").is_none());
    }

    #[test]
    fn test_arc_installer_shared_across_threads() {
        let installer: Arc<dyn Installer> = Arc::new(InstallPathResolver::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let installer = Arc::clone(&installer);
                std::thread::spawn(move || {
                    let pkg = PackageIdentity::new("drupal-module", "shama", format!("m{}", i));
                    installer.install_path(&pkg).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("modules/m{}/", i));
        }
    }
}
