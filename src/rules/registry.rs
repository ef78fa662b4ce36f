#![forbid(unsafe_code)]

//! Plugin registry: the static registration table for rule plugins
//!
//! Each plugin the preset builds on is registered here with its config key,
//! its npm module specifier, the identifier used for import statements in
//! rendered configs, and its rule contribution (a curated excerpt of the
//! plugin's recommended set). The table is fixed at compile time and
//! resolved once at startup; there is no dynamic plugin loading.

use crate::rules::table::{RuleSetting, RuleTable};
use std::collections::HashSet;

/// A plugin known to the preset
#[derive(Debug, Clone)]
pub struct RegisteredPlugin {
    /// Key the plugin is registered under in linter configs (e.g. `react`)
    pub name: &'static str,
    /// npm module specifier (e.g. `eslint-plugin-react`)
    pub module: &'static str,
    /// Identifier used for the import statement in rendered flat configs
    pub ident: &'static str,
    /// The plugin's recommended-rules contribution
    pub contribution: RuleTable,
}

/// Registry of all plugins the preset composes from
pub struct PluginRegistry {
    plugins: Vec<RegisteredPlugin>,
}

impl PluginRegistry {
    /// Builds the registry of bundled plugins
    ///
    /// Registration order is stable and matches the order plugin
    /// contributions are merged in.
    pub fn builtin() -> Self {
        let mut registry = PluginRegistry {
            plugins: Vec::new(),
        };

        registry.register("import", "eslint-plugin-import", "importPlugin", RuleTable::new());
        registry.register(
            "simple-import-sort",
            "eslint-plugin-simple-import-sort",
            "simpleImportSortPlugin",
            RuleTable::new(),
        );
        registry.register(
            "unicorn",
            "eslint-plugin-unicorn",
            "unicornPlugin",
            RuleTable::new(),
        );
        registry.register("n", "eslint-plugin-n", "nodePlugin", RuleTable::new());
        registry.register(
            "@stylistic",
            "@stylistic/eslint-plugin",
            "stylisticPlugin",
            RuleTable::new(),
        );
        registry.register(
            "react",
            "eslint-plugin-react",
            "reactPlugin",
            react_recommended(),
        );
        registry.register(
            "jsx-a11y",
            "eslint-plugin-jsx-a11y",
            "jsxA11yPlugin",
            jsx_a11y_recommended(),
        );
        registry.register(
            "@typescript-eslint",
            "@typescript-eslint/eslint-plugin",
            "typescriptPlugin",
            typescript_recommended(),
        );
        registry.register("jest", "eslint-plugin-jest", "jestPlugin", jest_recommended());
        registry.register(
            "vitest",
            "eslint-plugin-vitest",
            "vitestPlugin",
            vitest_recommended(),
        );

        registry
    }

    fn register(
        &mut self,
        name: &'static str,
        module: &'static str,
        ident: &'static str,
        contribution: RuleTable,
    ) {
        debug_assert!(
            self.plugin(name).is_none(),
            "duplicate plugin registration: {name}"
        );
        self.plugins.push(RegisteredPlugin {
            name,
            module,
            ident,
            contribution,
        });
    }

    /// Looks up a plugin by its config key
    pub fn plugin(&self, name: &str) -> Option<&RegisteredPlugin> {
        self.plugins.iter().find(|p| p.name == name)
    }

    /// Merges the contributions of the named plugins, in the given order
    ///
    /// Unknown names contribute nothing; the composer's plugin sets are
    /// compile-time-fixed and always resolve.
    pub fn contribution_for(&self, names: &[&str]) -> RuleTable {
        let mut result = RuleTable::new();
        for name in names {
            if let Some(plugin) = self.plugin(name) {
                result.merge(&plugin.contribution);
            }
        }
        result
    }

    /// Iterates registered plugins in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredPlugin> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Excerpt of eslint-plugin-react's recommended set
fn react_recommended() -> RuleTable {
    let mut t = RuleTable::new();
    t.set("react/display-name", RuleSetting::error());
    t.set("react/jsx-key", RuleSetting::error());
    t.set("react/jsx-no-comment-textnodes", RuleSetting::error());
    t.set("react/jsx-no-duplicate-props", RuleSetting::error());
    t.set("react/jsx-no-undef", RuleSetting::error());
    t.set("react/jsx-uses-react", RuleSetting::error());
    t.set("react/jsx-uses-vars", RuleSetting::error());
    t.set("react/no-children-prop", RuleSetting::error());
    t.set("react/no-danger-with-children", RuleSetting::error());
    t.set("react/no-deprecated", RuleSetting::error());
    t.set("react/no-direct-mutation-state", RuleSetting::error());
    t.set("react/no-find-dom-node", RuleSetting::error());
    t.set("react/no-is-mounted", RuleSetting::error());
    t.set("react/no-render-return-value", RuleSetting::error());
    t.set("react/no-string-refs", RuleSetting::error());
    t.set("react/no-unescaped-entities", RuleSetting::error());
    t.set("react/no-unknown-property", RuleSetting::error());
    t.set("react/prop-types", RuleSetting::error());
    t.set("react/react-in-jsx-scope", RuleSetting::error());
    t.set("react/require-render-return", RuleSetting::error());
    t
}

/// Excerpt of eslint-plugin-jsx-a11y's recommended set
fn jsx_a11y_recommended() -> RuleTable {
    let mut t = RuleTable::new();
    t.set("jsx-a11y/alt-text", RuleSetting::error());
    t.set("jsx-a11y/anchor-has-content", RuleSetting::error());
    t.set("jsx-a11y/aria-props", RuleSetting::error());
    t.set("jsx-a11y/aria-role", RuleSetting::error());
    t.set("jsx-a11y/aria-unsupported-elements", RuleSetting::error());
    t.set("jsx-a11y/heading-has-content", RuleSetting::error());
    t.set("jsx-a11y/img-redundant-alt", RuleSetting::error());
    t.set("jsx-a11y/no-access-key", RuleSetting::error());
    t.set("jsx-a11y/role-has-required-aria-props", RuleSetting::error());
    t.set("jsx-a11y/tabindex-no-positive", RuleSetting::warn());
    t
}

/// Excerpt of typescript-eslint's recommended type-checked set
fn typescript_recommended() -> RuleTable {
    let mut t = RuleTable::new();
    t.set("@typescript-eslint/await-thenable", RuleSetting::error());
    t.set("@typescript-eslint/no-explicit-any", RuleSetting::warn());
    t.set("@typescript-eslint/no-floating-promises", RuleSetting::error());
    t.set("@typescript-eslint/no-misused-promises", RuleSetting::error());
    t.set("@typescript-eslint/no-non-null-assertion", RuleSetting::warn());
    t
}

/// Excerpt of eslint-plugin-jest's recommended set
fn jest_recommended() -> RuleTable {
    let mut t = RuleTable::new();
    t.set("jest/expect-expect", RuleSetting::warn());
    t.set("jest/no-disabled-tests", RuleSetting::warn());
    t.set("jest/no-focused-tests", RuleSetting::error());
    t.set("jest/no-identical-title", RuleSetting::error());
    t.set("jest/no-standalone-expect", RuleSetting::error());
    t.set("jest/valid-describe-callback", RuleSetting::error());
    t.set("jest/valid-expect", RuleSetting::error());
    t.set("jest/valid-title", RuleSetting::error());
    t
}

/// Excerpt of eslint-plugin-vitest's recommended set
fn vitest_recommended() -> RuleTable {
    let mut t = RuleTable::new();
    t.set("vitest/expect-expect", RuleSetting::warn());
    t.set("vitest/no-disabled-tests", RuleSetting::warn());
    t.set("vitest/no-focused-tests", RuleSetting::error());
    t.set("vitest/no-identical-title", RuleSetting::error());
    t.set("vitest/valid-expect", RuleSetting::error());
    t.set("vitest/valid-title", RuleSetting::error());
    t
}

/// Sanity helper used by composition: true when every plugin-namespaced rule
/// in `table` belongs to one of `names`
pub fn plugins_cover_table(table: &RuleTable, names: &[&str]) -> bool {
    let known: HashSet<&str> = names.iter().copied().collect();
    table
        .iter()
        .filter_map(|(id, _)| id.plugin())
        .all(|prefix| known.contains(prefix))
}
