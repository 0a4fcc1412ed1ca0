//! Builtin framework catalog.
//!
//! Each entry maps a framework key to its install locations. Templates are
//! relative and carry no trailing separator; the resolver appends it.

use super::inflect::{camel_case, lower_snake};
use super::types::{BuiltinLocator, FrameworkSpec};

/// Builtin frameworks, sorted by key.
pub const BUILTIN_FRAMEWORKS: &[FrameworkSpec] = &[
    FrameworkSpec {
        key: "agl",
        locator: BuiltinLocator::BySubtype(&[("module", "More/{name}")]),
        name_transform: Some(camel_case),
    },
    FrameworkSpec {
        key: "aimeos",
        locator: BuiltinLocator::BySubtype(&[("extension", "ext/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "annotatecms",
        locator: BuiltinLocator::BySubtype(&[
            ("module", "addons/modules/{name}"),
            ("component", "addons/components/{name}"),
            ("service", "addons/services/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "attogram",
        locator: BuiltinLocator::BySubtype(&[("module", "modules/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "bitrix",
        locator: BuiltinLocator::BySubtype(&[
            ("module", "bitrix/modules/{name}"),
            ("component", "bitrix/components/{name}"),
            ("theme", "bitrix/templates/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "cakephp",
        locator: BuiltinLocator::BySubtype(&[
            ("model", "Model/{name}"),
            ("view", "View/{name}"),
            ("controller", "Controller/{name}"),
            ("component", "Controller/Component/{name}"),
            ("helper", "View/Helper/{name}"),
            ("plugin", "Plugin/{name}"),
        ]),
        name_transform: Some(camel_case),
    },
    FrameworkSpec {
        key: "codeigniter",
        locator: BuiltinLocator::Fixed("libraries/{name}"),
        name_transform: None,
    },
    FrameworkSpec {
        key: "concrete5",
        locator: BuiltinLocator::BySubtype(&[
            ("block", "blocks/{name}"),
            ("package", "packages/{name}"),
            ("theme", "themes/{name}"),
            ("update", "updates/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "craft",
        locator: BuiltinLocator::BySubtype(&[("plugin", "craft/plugins/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "croogo",
        locator: BuiltinLocator::BySubtype(&[
            ("plugin", "Plugin/{name}"),
            ("theme", "View/Themed/{name}"),
        ]),
        name_transform: Some(camel_case),
    },
    FrameworkSpec {
        key: "dokuwiki",
        locator: BuiltinLocator::BySubtype(&[
            ("plugin", "lib/plugins/{name}"),
            ("template", "lib/tpl/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "dolibarr",
        locator: BuiltinLocator::BySubtype(&[("module", "htdocs/custom/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "drupal",
        locator: BuiltinLocator::BySubtype(&[
            ("module", "modules/{name}"),
            ("theme", "themes/{name}"),
            ("profile", "profiles/{name}"),
            ("drush", "drush/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "elgg",
        locator: BuiltinLocator::BySubtype(&[("plugin", "mod/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "fuelphp",
        locator: BuiltinLocator::BySubtype(&[("module", "modules/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "hurad",
        locator: BuiltinLocator::BySubtype(&[
            ("plugin", "plugins/{name}"),
            ("theme", "plugins/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "joomla",
        locator: BuiltinLocator::BySubtype(&[
            ("component", "components/{name}"),
            ("module", "modules/{name}"),
            ("template", "templates/{name}"),
            ("plugin", "plugins/{name}"),
            ("library", "libraries/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "kirby",
        locator: BuiltinLocator::BySubtype(&[("plugin", "site/plugins/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "kohana",
        locator: BuiltinLocator::BySubtype(&[("module", "modules/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "laravel",
        locator: BuiltinLocator::BySubtype(&[("library", "libraries/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "lithium",
        locator: BuiltinLocator::BySubtype(&[
            ("library", "libraries/{name}"),
            ("source", "libraries/_source/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "magento",
        locator: BuiltinLocator::BySubtype(&[
            ("theme", "app/design/frontend/{name}"),
            ("skin", "skin/frontend/default/{name}"),
            ("library", "lib/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "mako",
        locator: BuiltinLocator::BySubtype(&[("package", "app/packages/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "mautic",
        locator: BuiltinLocator::BySubtype(&[
            ("plugin", "plugins/{name}"),
            ("theme", "themes/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "moodle",
        locator: BuiltinLocator::BySubtype(&[
            ("mod", "mod/{name}"),
            ("block", "blocks/{name}"),
            ("theme", "theme/{name}"),
            ("local", "local/{name}"),
            ("auth", "auth/{name}"),
            ("enrol", "enrol/{name}"),
            ("filter", "filter/{name}"),
            ("report", "report/{name}"),
            ("tool", "admin/tool/{name}"),
            ("qtype", "question/type/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "oxid",
        locator: BuiltinLocator::BySubtype(&[("module", "modules/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "phpbb",
        locator: BuiltinLocator::BySubtype(&[
            ("extension", "ext/{vendor}/{name}"),
            ("language", "language/{name}"),
            ("style", "styles/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "piwik",
        locator: BuiltinLocator::BySubtype(&[("plugin", "plugins/{name}")]),
        name_transform: Some(camel_case),
    },
    FrameworkSpec {
        key: "ppi",
        locator: BuiltinLocator::BySubtype(&[("module", "modules/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "prestashop",
        locator: BuiltinLocator::BySubtype(&[
            ("module", "modules/{name}"),
            ("theme", "themes/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "redaxo",
        locator: BuiltinLocator::BySubtype(&[
            ("addon", "redaxo/include/addons/{name}"),
            (
                "bestyle-plugin",
                "redaxo/include/addons/be_style/plugins/{name}",
            ),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "roundcube",
        locator: BuiltinLocator::BySubtype(&[("plugin", "plugins/{name}")]),
        name_transform: Some(lower_snake),
    },
    FrameworkSpec {
        key: "shopware",
        locator: BuiltinLocator::BySubtype(&[
            ("backend-plugin", "engine/Shopware/Plugins/Local/Backend/{name}"),
            ("core-plugin", "engine/Shopware/Plugins/Local/Core/{name}"),
            ("frontend-plugin", "engine/Shopware/Plugins/Local/Frontend/{name}"),
            ("theme", "templates/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "silverstripe",
        locator: BuiltinLocator::BySubtype(&[
            ("module", "{name}"),
            ("theme", "themes/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "smf",
        locator: BuiltinLocator::BySubtype(&[
            ("module", "Sources/{name}"),
            ("theme", "Themes/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "symfony1",
        locator: BuiltinLocator::BySubtype(&[("plugin", "plugins/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "thelia",
        locator: BuiltinLocator::BySubtype(&[
            ("module", "local/modules/{name}"),
            ("frontoffice-template", "templates/frontOffice/{name}"),
            ("backoffice-template", "templates/backOffice/{name}"),
            ("email-template", "templates/email/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "tusk",
        locator: BuiltinLocator::BySubtype(&[
            ("task", ".tusk/tasks/{name}"),
            ("command", ".tusk/commands/{name}"),
            ("asset", "assets/tusk/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "typo3",
        locator: BuiltinLocator::BySubtype(&[
            ("cms-extension", "typo3conf/ext/{name}"),
            ("flow-package", "Packages/Application/{name}"),
            ("flow-framework", "Packages/Framework/{name}"),
            ("flow-plugin", "Packages/Plugins/{name}"),
            ("flow-site", "Packages/Sites/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "whmcs",
        locator: BuiltinLocator::BySubtype(&[("gateway", "modules/gateways/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "wolfcms",
        locator: BuiltinLocator::BySubtype(&[("plugin", "wolf/plugins/{name}")]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "wordpress",
        locator: BuiltinLocator::BySubtype(&[
            ("plugin", "wp-content/plugins/{name}"),
            ("theme", "wp-content/themes/{name}"),
            ("muplugin", "wp-content/mu-plugins/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "zend",
        locator: BuiltinLocator::BySubtype(&[
            ("library", "library/{name}"),
            ("extra", "extras/library"),
            ("module", "module/{name}"),
        ]),
        name_transform: None,
    },
    FrameworkSpec {
        key: "zikula",
        locator: BuiltinLocator::BySubtype(&[
            ("module", "modules/{package_key}"),
            ("theme", "themes/{package_key}"),
        ]),
        name_transform: None,
    },
];

/// Look up a builtin framework spec by key.
pub fn builtin_spec(key: &str) -> Option<&'static FrameworkSpec> {
    BUILTIN_FRAMEWORKS.iter().find(|spec| spec.key == key)
}
