#![forbid(unsafe_code)]

//! Rule-set composition
//!
//! Builds one rule table per file category by merging the named rule groups
//! in a fixed precedence order, attaches them to file-glob selectors, and
//! renders the result in the host linter's flat (v9+) or legacy (v8) shape,
//! as JSON or as JavaScript module text.
//!
//! Merge order per category:
//! - general: plugin contributions, base, react
//! - typescript: plugin contributions, base, typescript, react
//! - tests: plugin contributions, base, test
//!
//! Consumer overrides from `lintwrap.toml`, when present, merge last onto
//! every category.

use crate::config::overrides::OverridesConfig;
use crate::rules::registry::{PluginRegistry, plugins_cover_table};
use crate::rules::{RuleTable, base, react, test, typescript};
use crate::types::GlobPattern;
use serde_json::{Value, json};
use std::fmt::Write as _;

/// Parser module bound to the TypeScript category
pub const TYPESCRIPT_PARSER: &str = "@typescript-eslint/parser";

/// Import identifier for the parser in rendered flat configs
const TYPESCRIPT_PARSER_IDENT: &str = "typescriptParser";

/// Glob patterns ignored in every category
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules/**",
    "dist/**",
    "build/**",
    "coverage/**",
    ".next/**",
    "out/**",
    ".cache/**",
    "*.min.js",
    "**/*.min.js",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
];

/// File categories the preset distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    General,
    TypeScript,
    Tests,
}

impl FileCategory {
    pub const ALL: [FileCategory; 3] = [
        FileCategory::General,
        FileCategory::TypeScript,
        FileCategory::Tests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::General => "general",
            FileCategory::TypeScript => "typescript",
            FileCategory::Tests => "tests",
        }
    }

    /// File-glob selectors for this category
    ///
    /// Overrides are applied by the host linter in array order; the test
    /// selectors intentionally shadow the general and TypeScript ones.
    pub fn selectors(&self) -> &'static [&'static str] {
        match self {
            FileCategory::General => &["**/*.js", "**/*.jsx"],
            FileCategory::TypeScript => &["**/*.ts", "**/*.tsx"],
            FileCategory::Tests => &[
                "**/*.test.{js,ts,jsx,tsx}",
                "**/*.spec.{js,ts,jsx,tsx}",
                "tests/**/*.{js,ts,jsx,tsx}",
                "**/__tests__/**/*.{js,ts,jsx,tsx}",
            ],
        }
    }

    /// Plugins bound to this category, in registration order
    pub fn plugin_names(&self) -> &'static [&'static str] {
        match self {
            FileCategory::General => &[
                "import",
                "simple-import-sort",
                "unicorn",
                "n",
                "@stylistic",
                "react",
                "jsx-a11y",
            ],
            FileCategory::TypeScript => &[
                "import",
                "simple-import-sort",
                "unicorn",
                "n",
                "@stylistic",
                "react",
                "jsx-a11y",
                "@typescript-eslint",
            ],
            FileCategory::Tests => &[
                "import",
                "simple-import-sort",
                "unicorn",
                "n",
                "@stylistic",
                "jest",
                "vitest",
            ],
        }
    }
}

/// One entry in the composed configuration: selectors plus the merged table
/// and its parser/plugin bindings
#[derive(Debug, Clone)]
pub struct Override {
    pub category: FileCategory,
    pub files: Vec<GlobPattern>,
    pub plugins: Vec<&'static str>,
    pub parser: Option<&'static str>,
    pub parser_options: Option<Value>,
    pub globals: Option<Value>,
    pub settings: Option<Value>,
    pub rules: RuleTable,
}

/// The fully composed configuration: global ignores plus ordered overrides
#[derive(Debug, Clone)]
pub struct ComposedConfig {
    pub ignores: Vec<GlobPattern>,
    pub overrides: Vec<Override>,
}

/// Composes the preset's configuration
///
/// Pure function of the registry, the bundled rule groups, and the optional
/// consumer overrides. Unknown rule keys pass through unchanged; nothing is
/// validated against a rule catalog.
pub fn compose(registry: &PluginRegistry, consumer: Option<&OverridesConfig>) -> ComposedConfig {
    let mut ignores: Vec<GlobPattern> = DEFAULT_IGNORES
        .iter()
        .copied()
        .map(GlobPattern::from)
        .collect();
    if let Some(config) = consumer {
        ignores.extend(config.ignores.iter().cloned());
    }

    let overrides = FileCategory::ALL
        .iter()
        .map(|&category| build_override(registry, category, consumer))
        .collect();

    ComposedConfig { ignores, overrides }
}

fn build_override(
    registry: &PluginRegistry,
    category: FileCategory,
    consumer: Option<&OverridesConfig>,
) -> Override {
    let contributions = registry.contribution_for(category.plugin_names());
    let base = base::rules();
    let mut rules = match category {
        FileCategory::General => RuleTable::merged([&contributions, &base, &react::rules()]),
        FileCategory::TypeScript => RuleTable::merged([
            &contributions,
            &base,
            &typescript::rules(),
            &react::rules(),
        ]),
        FileCategory::Tests => RuleTable::merged([&contributions, &base, &test::rules()]),
    };
    debug_assert!(
        plugins_cover_table(&rules, category.plugin_names()),
        "composed {} table references an unregistered plugin",
        category.as_str()
    );

    if let Some(config) = consumer {
        config.apply(&mut rules);
    }

    let settings = match category {
        FileCategory::General | FileCategory::TypeScript => Some(json!({
            "react": { "version": "detect" },
            "import/resolver": {
                "node": { "extensions": [".js", ".jsx", ".ts", ".tsx"] }
            }
        })),
        FileCategory::Tests => None,
    };

    let (parser, parser_options) = match category {
        FileCategory::TypeScript => (
            Some(TYPESCRIPT_PARSER),
            Some(json!({
                "project": "./tsconfig.json",
                "ecmaVersion": "latest",
                "sourceType": "module"
            })),
        ),
        _ => (None, None),
    };

    let globals = match category {
        FileCategory::Tests => Some(json!({
            "jest": true,
            "describe": true,
            "test": true,
            "expect": true,
            "it": true,
            "beforeEach": true,
            "afterEach": true,
            "beforeAll": true,
            "afterAll": true,
            "vi": true
        })),
        _ => None,
    };

    Override {
        category,
        files: category
            .selectors()
            .iter()
            .copied()
            .map(GlobPattern::from)
            .collect(),
        plugins: category.plugin_names().to_vec(),
        parser,
        parser_options,
        globals,
        settings,
        rules,
    }
}

impl ComposedConfig {
    /// Plugins used by any override, in registration order, deduplicated
    fn plugins_in_order<'r>(
        &self,
        registry: &'r PluginRegistry,
    ) -> Vec<&'r crate::rules::registry::RegisteredPlugin> {
        registry
            .iter()
            .filter(|plugin| {
                self.overrides
                    .iter()
                    .any(|o| o.plugins.contains(&plugin.name))
            })
            .collect()
    }

    /// Renders the flat (v9+) configuration as a JSON value
    ///
    /// Plugin bindings are represented by their npm module specifiers; the
    /// JavaScript rendering replaces them with imported plugin objects.
    pub fn to_flat_json(&self, registry: &PluginRegistry) -> Value {
        let mut entries = vec![json!({ "ignores": self.ignores })];

        for o in &self.overrides {
            let mut entry = serde_json::Map::new();
            entry.insert("files".to_string(), json!(o.files));

            let mut language_options = serde_json::Map::new();
            if let Some(parser) = o.parser {
                language_options.insert("parser".to_string(), json!(parser));
            }
            if let Some(parser_options) = &o.parser_options {
                language_options.insert("parserOptions".to_string(), parser_options.clone());
            }
            if let Some(globals) = &o.globals {
                language_options.insert("globals".to_string(), globals.clone());
            }
            if !language_options.is_empty() {
                entry.insert(
                    "languageOptions".to_string(),
                    Value::Object(language_options),
                );
            }

            let plugins: serde_json::Map<String, Value> = o
                .plugins
                .iter()
                .filter_map(|name| registry.plugin(name))
                .map(|plugin| (plugin.name.to_string(), json!(plugin.module)))
                .collect();
            entry.insert("plugins".to_string(), Value::Object(plugins));

            if let Some(settings) = &o.settings {
                entry.insert("settings".to_string(), settings.clone());
            }
            entry.insert("rules".to_string(), json!(o.rules));

            entries.push(Value::Object(entry));
        }

        Value::Array(entries)
    }

    /// Renders the legacy (pre-v9) configuration as a JSON value
    pub fn to_legacy_json(&self) -> Value {
        let general = &self.overrides[0];

        let mut plugin_names: Vec<&str> = Vec::new();
        for o in &self.overrides {
            for name in &o.plugins {
                if !plugin_names.contains(name) {
                    plugin_names.push(name);
                }
            }
        }

        let mut overrides = Vec::new();
        for o in &self.overrides[1..] {
            let mut entry = serde_json::Map::new();
            entry.insert("files".to_string(), json!(o.files));
            if let Some(parser) = o.parser {
                entry.insert("parser".to_string(), json!(parser));
            }
            if let Some(parser_options) = &o.parser_options {
                entry.insert("parserOptions".to_string(), parser_options.clone());
            }
            if o.category == FileCategory::Tests {
                entry.insert("env".to_string(), json!({ "jest": true }));
                entry.insert("globals".to_string(), json!({ "vi": true }));
            }
            entry.insert("plugins".to_string(), json!(o.plugins));
            entry.insert("rules".to_string(), json!(o.rules));
            overrides.push(Value::Object(entry));
        }

        json!({
            "plugins": plugin_names,
            "parserOptions": {
                "ecmaVersion": "latest",
                "sourceType": "module",
                "ecmaFeatures": { "jsx": true }
            },
            "settings": general.settings,
            "rules": general.rules,
            "overrides": overrides,
            "ignorePatterns": self.ignores
        })
    }

    /// Renders the flat configuration as ESM JavaScript module text
    pub fn render_flat_module(&self, registry: &PluginRegistry) -> String {
        let plugins = self.plugins_in_order(registry);
        let needs_parser = self.overrides.iter().any(|o| o.parser.is_some());

        let mut out = String::new();
        for plugin in &plugins {
            let _ = writeln!(out, "import {} from '{}'", plugin.ident, plugin.module);
        }
        if needs_parser {
            let _ = writeln!(
                out,
                "import {} from '{}'",
                TYPESCRIPT_PARSER_IDENT, TYPESCRIPT_PARSER
            );
        }

        out.push_str("\nexport default [\n");
        out.push_str("  {\n    ignores: ");
        out.push_str(&indented_json(&json!(self.ignores), 4));
        out.push_str("\n  },\n");

        for o in &self.overrides {
            out.push_str("  {\n");
            out.push_str("    files: ");
            out.push_str(&indented_json(&json!(o.files), 4));
            out.push_str(",\n");

            if o.parser.is_some() || o.parser_options.is_some() || o.globals.is_some() {
                out.push_str("    languageOptions: {\n");
                if o.parser.is_some() {
                    let _ = writeln!(out, "      parser: {},", TYPESCRIPT_PARSER_IDENT);
                }
                if let Some(parser_options) = &o.parser_options {
                    out.push_str("      parserOptions: ");
                    out.push_str(&indented_json(parser_options, 6));
                    out.push_str(",\n");
                }
                if let Some(globals) = &o.globals {
                    out.push_str("      globals: ");
                    out.push_str(&indented_json(globals, 6));
                    out.push_str(",\n");
                }
                out.push_str("    },\n");
            }

            out.push_str("    plugins: {\n");
            for name in &o.plugins {
                if let Some(plugin) = registry.plugin(name) {
                    let _ = writeln!(out, "      '{}': {},", plugin.name, plugin.ident);
                }
            }
            out.push_str("    },\n");

            if let Some(settings) = &o.settings {
                out.push_str("    settings: ");
                out.push_str(&indented_json(settings, 4));
                out.push_str(",\n");
            }

            out.push_str("    rules: ");
            out.push_str(&indented_json(&json!(o.rules), 4));
            out.push_str("\n  },\n");
        }

        out.push_str("]\n");
        out
    }

    /// Renders the legacy configuration as CommonJS module text
    pub fn render_legacy_module(&self) -> String {
        let body = serde_json::to_string_pretty(&self.to_legacy_json())
            .unwrap_or_else(|_| "{}".to_string());
        format!("module.exports = {}\n", body)
    }
}

/// Pretty-prints a JSON value shifted right so it nests inside generated
/// JavaScript at the given indent
fn indented_json(value: &Value, indent: usize) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    let pad = " ".repeat(indent);
    let mut lines = pretty.lines();
    let mut out = String::new();
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        out.push_str(&pad);
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RuleId, Severity};

    fn composed() -> ComposedConfig {
        compose(&PluginRegistry::builtin(), None)
    }

    #[test]
    fn test_compose_produces_one_override_per_category() {
        let config = composed();
        assert_eq!(config.overrides.len(), 3);
        assert_eq!(config.overrides[0].category, FileCategory::General);
        assert_eq!(config.overrides[1].category, FileCategory::TypeScript);
        assert_eq!(config.overrides[2].category, FileCategory::Tests);
    }

    #[test]
    fn test_react_group_overrides_recommended_contribution() {
        // The react plugin contributes prop-types=error; the react group
        // merges later and turns it off.
        let config = composed();
        let general = &config.overrides[0];
        assert_eq!(
            general
                .rules
                .get(&RuleId::new("react/prop-types"))
                .map(|s| s.severity),
            Some(Severity::Off)
        );
        assert_eq!(
            general
                .rules
                .get(&RuleId::new("react/jsx-key"))
                .map(|s| s.severity),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_typescript_category_merges_typescript_group() {
        let config = composed();
        let typescript = &config.overrides[1];
        assert_eq!(
            typescript
                .rules
                .get(&RuleId::new("no-unused-vars"))
                .map(|s| s.severity),
            Some(Severity::Off)
        );
        assert!(
            typescript
                .rules
                .get(&RuleId::new("@typescript-eslint/no-unused-vars"))
                .is_some()
        );
        assert_eq!(typescript.parser, Some(TYPESCRIPT_PARSER));
    }

    #[test]
    fn test_tests_category_gets_test_group_and_globals() {
        let config = composed();
        let tests = &config.overrides[2];
        assert_eq!(
            tests
                .rules
                .get(&RuleId::new("max-nested-callbacks"))
                .map(|s| s.severity),
            Some(Severity::Off)
        );
        assert!(tests.rules.get(&RuleId::new("jest/valid-expect")).is_some());
        let globals = tests.globals.as_ref().unwrap();
        assert_eq!(globals["vi"], json!(true));
    }

    #[test]
    fn test_general_category_has_no_typescript_rules() {
        let config = composed();
        let general = &config.overrides[0];
        assert!(
            general
                .rules
                .get(&RuleId::new("@typescript-eslint/no-unused-vars"))
                .is_none()
        );
    }

    #[test]
    fn test_default_ignores_present() {
        let config = composed();
        let ignores: Vec<&str> = config.ignores.iter().map(|g| g.as_str()).collect();
        assert!(ignores.contains(&"node_modules/**"));
        assert!(ignores.contains(&"pnpm-lock.yaml"));
    }

    #[test]
    fn test_flat_json_shape() {
        let registry = PluginRegistry::builtin();
        let config = compose(&registry, None);
        let flat = config.to_flat_json(&registry);
        let entries = flat.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert!(entries[0].get("ignores").is_some());
        assert_eq!(
            entries[2]["languageOptions"]["parser"],
            json!(TYPESCRIPT_PARSER)
        );
        assert_eq!(
            entries[1]["plugins"]["react"],
            json!("eslint-plugin-react")
        );
        assert!(entries[1]["rules"].get("camelcase").is_some());
    }

    #[test]
    fn test_legacy_json_shape() {
        let config = composed();
        let legacy = config.to_legacy_json();
        assert!(legacy["plugins"].as_array().unwrap().len() >= 8);
        assert_eq!(legacy["parserOptions"]["ecmaFeatures"]["jsx"], json!(true));
        assert_eq!(legacy["overrides"].as_array().unwrap().len(), 2);
        assert_eq!(legacy["overrides"][1]["env"]["jest"], json!(true));
        assert!(
            legacy["ignorePatterns"]
                .as_array()
                .unwrap()
                .contains(&json!("dist/**"))
        );
    }

    #[test]
    fn test_flat_module_renders_imports_and_bindings() {
        let registry = PluginRegistry::builtin();
        let config = compose(&registry, None);
        let module = config.render_flat_module(&registry);
        assert!(module.starts_with("import importPlugin from 'eslint-plugin-import'\n"));
        assert!(module.contains("import typescriptParser from '@typescript-eslint/parser'"));
        assert!(module.contains("export default ["));
        assert!(module.contains("parser: typescriptParser"));
        assert!(module.contains("'react': reactPlugin"));
        assert!(module.contains("\"simple-import-sort/imports\": \"error\""));
    }

    #[test]
    fn test_legacy_module_is_commonjs() {
        let config = composed();
        let module = config.render_legacy_module();
        assert!(module.starts_with("module.exports = {"));
        assert!(module.ends_with("}\n"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let registry = PluginRegistry::builtin();
        let first = compose(&registry, None).render_flat_module(&registry);
        let second = compose(&registry, None).render_flat_module(&registry);
        assert_eq!(first, second);
    }
}
