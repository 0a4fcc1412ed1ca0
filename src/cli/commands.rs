//! Subcommand handlers.

use anyhow::{Context, Result};
use serde_json::json;

use installer_paths::{InstallPathResolver, PackageIdentity};

/// Print whether the type is supported; exit code 1 when it is not.
pub(crate) fn cmd_supports(resolver: &InstallPathResolver, package_type: &str) -> i32 {
    let supported = resolver.supports(package_type);
    println!("{}", supported);
    if supported {
        0
    } else {
        1
    }
}

/// Print the install path for `vendor/name`.
pub(crate) fn cmd_resolve(
    resolver: &InstallPathResolver,
    package_type: &str,
    package: &str,
    base_dir: Option<&str>,
) -> Result<()> {
    let identity = PackageIdentity::from_pretty_name(package_type, package);
    let path = resolver
        .install_path(&identity)
        .with_context(|| format!("Cannot resolve install path for {}", package))?;

    println!("{}", join_base_dir(base_dir, &path));
    Ok(())
}

/// List frameworks, one per line with their subtypes, or as JSON.
pub(crate) fn cmd_frameworks(resolver: &InstallPathResolver, as_json: bool) -> Result<()> {
    let registry = resolver.registry();

    if as_json {
        let frameworks: Vec<_> = registry
            .iter()
            .map(|entry| {
                json!({
                    "key": entry.key,
                    "locations": entry.locator,
                    "name_transform": entry.name_transform.is_some(),
                })
            })
            .collect();
        let output = serde_json::to_string_pretty(&frameworks)
            .with_context(|| "Failed to serialize frameworks")?;
        println!("{}", output);
        return Ok(());
    }

    for entry in registry.iter() {
        let subtypes = entry.locator.subtypes();
        if subtypes.is_empty() {
            println!("{:<14} (any subtype)", entry.key);
        } else {
            println!("{:<14} {}", entry.key, subtypes.join(", "));
        }
    }
    Ok(())
}

fn join_base_dir(base_dir: Option<&str>, path: &str) -> String {
    match base_dir {
        Some(base) if !base.is_empty() => format!("{}/{}", base.trim_end_matches('/'), path),
        _ => path.to_string(),
    }
}
