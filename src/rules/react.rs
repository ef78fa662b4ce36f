#![forbid(unsafe_code)]

//! React rule group
//!
//! Curated adjustments on top of the React plugin's recommended contribution.
//! Prop types are redundant under TypeScript, and the automatic JSX runtime
//! makes the React import obsolete.

use crate::rules::table::{RuleSetting, RuleTable};

/// Returns the React rule table
pub fn rules() -> RuleTable {
    let mut t = RuleTable::new();
    t.set("react/prop-types", RuleSetting::off());
    t.set("react/react-in-jsx-scope", RuleSetting::off());
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RuleId, Severity};

    #[test]
    fn test_react_group_relaxes_recommended_defaults() {
        let table = rules();
        assert_eq!(
            table
                .get(&RuleId::new("react/prop-types"))
                .map(|s| s.severity),
            Some(Severity::Off)
        );
        assert_eq!(
            table
                .get(&RuleId::new("react/react-in-jsx-scope"))
                .map(|s| s.severity),
            Some(Severity::Off)
        );
    }
}
