#![forbid(unsafe_code)]

//! Base rule group applied to every file category

use crate::rules::table::{RuleSetting, RuleTable};
use crate::types::Severity;
use serde_json::json;

/// Returns the base rule table
///
/// These settings apply to all linted files before any category-specific
/// group is merged on top.
pub fn rules() -> RuleTable {
    let mut t = RuleTable::new();

    // Formatter-owned style rules stay off; the formatter is authoritative
    t.set("@stylistic/indent", RuleSetting::off());
    t.set("@stylistic/comma-dangle", RuleSetting::off());
    t.set("@stylistic/object-curly-spacing", RuleSetting::off());
    t.set("@stylistic/semi", RuleSetting::off());
    t.set("indent", RuleSetting::off());
    t.set("eol-last", RuleSetting::off());

    // General rules
    t.set("capitalized-comments", RuleSetting::off());
    t.set(
        "max-nested-callbacks",
        RuleSetting::with_options(Severity::Error, json!(5)),
    );
    t.set("new-cap", RuleSetting::off());
    t.set("camelcase", RuleSetting::warn());
    t.set("no-implicit-coercion", RuleSetting::off());
    t.set(
        "no-unused-vars",
        RuleSetting::with_options(
            Severity::Warn,
            json!({ "argsIgnorePattern": "^_", "varsIgnorePattern": "^_" }),
        ),
    );
    t.set("no-undef", RuleSetting::warn());
    t.set("no-negated-condition", RuleSetting::off());
    t.set(
        "complexity",
        RuleSetting::with_options(Severity::Warn, json!({ "max": 25 })),
    );
    t.set("no-await-in-loop", RuleSetting::off());

    // Import hygiene: sorting is owned by simple-import-sort
    t.set("simple-import-sort/exports", RuleSetting::error());
    t.set("simple-import-sort/imports", RuleSetting::error());
    t.set("import/order", RuleSetting::off());
    t.set("import/extensions", RuleSetting::off());
    t.set("import/no-unassigned-import", RuleSetting::off());
    t.set("import/no-anonymous-default-export", RuleSetting::off());
    t.set("import/no-named-as-default", RuleSetting::off());
    t.set(
        "import/no-unresolved",
        RuleSetting::with_options(
            Severity::Warn,
            json!({ "ignore": ["^@/", "^@typescript-eslint/", "^eslint-plugin-"] }),
        ),
    );

    // Unicorn rules
    t.set("unicorn/filename-case", RuleSetting::off());
    t.set("unicorn/prevent-abbreviations", RuleSetting::off());
    t.set("unicorn/no-anonymous-default-export", RuleSetting::off());
    t.set("unicorn/prefer-global-this", RuleSetting::off());
    t.set("unicorn/numeric-separators-style", RuleSetting::off());
    t.set("unicorn/prefer-module", RuleSetting::off());
    t.set("unicorn/prefer-string-replace-all", RuleSetting::off());
    t.set("unicorn/catch-error-name", RuleSetting::off());
    t.set(
        "unicorn/prefer-switch",
        RuleSetting::with_options(
            Severity::Error,
            json!({ "minimumCases": 4, "emptyDefaultCase": "do-nothing-comment" }),
        ),
    );
    t.set("unicorn/no-empty-file", RuleSetting::warn());
    t.set("unicorn/no-array-reduce", RuleSetting::off());
    t.set("unicorn/no-array-callback-reference", RuleSetting::off());

    // Node rules; resolution is owned by the import plugin
    t.set("n/no-missing-import", RuleSetting::off());
    t.set("n/no-unpublished-import", RuleSetting::off());
    t.set("n/no-unsupported-features/es-syntax", RuleSetting::off());
    t.set("n/prefer-global/process", RuleSetting::off());
    t.set("n/file-extension-in-import", RuleSetting::off());

    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleId;

    #[test]
    fn test_base_rules_disable_formatter_owned_style() {
        let table = rules();
        for id in [
            "@stylistic/indent",
            "@stylistic/semi",
            "indent",
            "eol-last",
        ] {
            assert_eq!(
                table.get(&RuleId::new(id)).map(|s| s.severity),
                Some(Severity::Off),
                "{id} should be off"
            );
        }
    }

    #[test]
    fn test_base_rules_keep_import_sorting_enforced() {
        let table = rules();
        assert_eq!(
            table
                .get(&RuleId::new("simple-import-sort/imports"))
                .map(|s| s.severity),
            Some(Severity::Error)
        );
        assert_eq!(
            table.get(&RuleId::new("import/order")).map(|s| s.severity),
            Some(Severity::Off)
        );
    }

    #[test]
    fn test_base_rules_carry_options_where_expected() {
        let table = rules();
        let complexity = table.get(&RuleId::new("complexity")).unwrap();
        assert_eq!(complexity.options, Some(json!({ "max": 25 })));
        let callbacks = table.get(&RuleId::new("max-nested-callbacks")).unwrap();
        assert_eq!(callbacks.options, Some(json!(5)));
    }
}
