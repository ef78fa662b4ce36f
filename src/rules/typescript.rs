#![forbid(unsafe_code)]

//! TypeScript rule group
//!
//! Applied on top of the base group for `.ts`/`.tsx` files. The base
//! `no-unused-vars` is disabled in favor of the plugin variant, which
//! understands type-only usage.

use crate::rules::table::{RuleSetting, RuleTable};
use crate::types::Severity;
use serde_json::json;

/// Returns the TypeScript rule table
pub fn rules() -> RuleTable {
    let mut t = RuleTable::new();
    t.set("@typescript-eslint/ban-types", RuleSetting::off());
    t.set("@typescript-eslint/naming-convention", RuleSetting::off());
    t.set("@typescript-eslint/no-empty-function", RuleSetting::off());
    t.set("@typescript-eslint/no-unsafe-assignment", RuleSetting::off());
    t.set(
        "@typescript-eslint/prefer-nullish-coalescing",
        RuleSetting::off(),
    );
    t.set("no-unused-vars", RuleSetting::off());
    t.set(
        "@typescript-eslint/no-unused-vars",
        RuleSetting::with_options(Severity::Warn, json!({ "args": "after-used" })),
    );
    t.set(
        "@typescript-eslint/adjacent-overload-signatures",
        RuleSetting::error(),
    );
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleId;

    #[test]
    fn test_typescript_group_swaps_unused_vars_rule() {
        let table = rules();
        assert_eq!(
            table
                .get(&RuleId::new("no-unused-vars"))
                .map(|s| s.severity),
            Some(Severity::Off)
        );
        let plugin_variant = table
            .get(&RuleId::new("@typescript-eslint/no-unused-vars"))
            .unwrap();
        assert_eq!(plugin_variant.severity, Severity::Warn);
        assert_eq!(plugin_variant.options, Some(json!({ "args": "after-used" })));
    }
}
