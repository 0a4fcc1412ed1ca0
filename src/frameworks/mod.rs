//! Framework catalog
//!
//! Maps a framework key (the part of a package type before the first hyphen,
//! e.g. `wordpress` in `wordpress-plugin`) to a locator spec: either one fixed
//! path template, or one template per package subtype.
//!
//! # Architecture
//!
//! - **types**: `LocatorSpec`, `FrameworkSpec`, `FrameworkEntry`
//! - **builtin**: the `'static` table of builtin frameworks
//! - **registry**: `FrameworkRegistry`, lookup and registration
//! - **inflect**: name transforms attached to some frameworks
//!
//! # Example
//!
//! ```rust
//! use installer_paths::frameworks::BUILTIN_REGISTRY;
//!
//! let spec = BUILTIN_REGISTRY.get_locator_spec("drupal").unwrap();
//! assert_eq!(spec.template_for("module"), Some("modules/{name}"));
//! ```

mod builtin;
pub mod inflect;
pub mod registry;
pub mod types;

pub use builtin::{builtin_spec, BUILTIN_FRAMEWORKS};
pub use registry::{validate_entry, validate_framework_key, FrameworkRegistry, BUILTIN_REGISTRY};
pub use types::{BuiltinLocator, FrameworkEntry, FrameworkSpec, LocatorSpec, NameTransform};
