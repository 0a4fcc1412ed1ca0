//! Install path fixtures for every framework the installer was first built for.

use std::sync::Arc;
use std::thread;

use installer_paths::{InstallPathResolver, InstallerError, PackageIdentity};

const SUPPORTS: &[(&str, bool)] = &[
    ("cakephp", false),
    ("cakephp-", false),
    ("cakephp-app", true),
    ("codeigniter-app", true),
    ("drupal-module", true),
    ("fuelphp-module", true),
    ("joomla-library", true),
    ("laravel-library", true),
    ("lithium-library", true),
    ("magento-library", true),
    ("phpbb-extension", true),
    ("ppi-module", true),
    ("symfony1-plugin", true),
    ("wordpress-plugin", true),
    ("zend-library", true),
];

/// (package type, expected path, vendor/name)
const INSTALL_PATHS: &[(&str, &str, &str)] = &[
    ("cakephp-plugin", "Plugin/Ftp/", "shama/ftp"),
    ("codeigniter-library", "libraries/my_package/", "shama/my_package"),
    ("drupal-module", "modules/my_module/", "shama/my_module"),
    ("fuelphp-module", "modules/my_package/", "shama/my_package"),
    ("joomla-plugin", "plugins/my_plugin/", "shama/my_plugin"),
    ("laravel-library", "libraries/my_package/", "shama/my_package"),
    ("lithium-library", "libraries/li3_test/", "user/li3_test"),
    ("magento-library", "lib/foo/", "test/foo"),
    ("phpbb-extension", "ext/test/foo/", "test/foo"),
    ("ppi-module", "modules/foo/", "test/foo"),
    ("symfony1-plugin", "plugins/sfShamaPlugin/", "shama/sfShamaPlugin"),
    ("wordpress-plugin", "wp-content/plugins/my_plugin/", "shama/my_plugin"),
    ("zend-extra", "extras/library/", "shama/zend_test"),
];

#[test]
fn test_supports() {
    let resolver = InstallPathResolver::new();
    for (package_type, expected) in SUPPORTS {
        assert_eq!(
            resolver.supports(package_type),
            *expected,
            "Failed to show support for {}",
            package_type
        );
    }
}

#[test]
fn test_install_paths() {
    let resolver = InstallPathResolver::new();
    for (package_type, expected, pretty_name) in INSTALL_PATHS {
        let package = PackageIdentity::from_pretty_name(*package_type, pretty_name);
        let path = resolver.install_path(&package).unwrap();
        assert_eq!(path, *expected, "{} as {}", pretty_name, package_type);
    }
}

#[test]
fn test_cakephp_unknown_subtype_rejected() {
    let resolver = InstallPathResolver::new();
    assert!(resolver.supports("cakephp-whoops"));

    let package = PackageIdentity::from_pretty_name("cakephp-whoops", "shama/ftp");
    let err = resolver.install_path(&package).unwrap_err();
    assert!(matches!(err, InstallerError::UnsupportedSubtype { .. }));
}

#[test]
fn test_resolve_direct_arguments() {
    let resolver = InstallPathResolver::new();
    assert_eq!(
        resolver.resolve("drupal-module", "shama", "my_module").unwrap(),
        "modules/my_module/"
    );
    assert_eq!(
        resolver.resolve("wordpress-plugin", "shama", "my_plugin").unwrap(),
        "wp-content/plugins/my_plugin/"
    );
    assert_eq!(
        resolver.resolve("symfony1-plugin", "shama", "sfShamaPlugin").unwrap(),
        "plugins/sfShamaPlugin/"
    );
    assert_eq!(resolver.resolve("phpbb-extension", "test", "foo").unwrap(), "ext/test/foo/");
    assert_eq!(resolver.resolve("magento-library", "test", "foo").unwrap(), "lib/foo/");
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = InstallPathResolver::new();
    for (package_type, _, pretty_name) in INSTALL_PATHS {
        let package = PackageIdentity::from_pretty_name(*package_type, pretty_name);
        assert_eq!(
            resolver.install_path(&package).unwrap(),
            resolver.install_path(&package).unwrap()
        );
    }
}

#[test]
fn test_resolver_shared_across_threads() {
    let resolver = Arc::new(InstallPathResolver::new());
    let handles: Vec<_> = INSTALL_PATHS
        .iter()
        .map(|(package_type, expected, pretty_name)| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let package = PackageIdentity::from_pretty_name(*package_type, pretty_name);
                assert_eq!(resolver.install_path(&package).unwrap(), *expected);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
