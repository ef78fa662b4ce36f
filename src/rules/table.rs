#![forbid(unsafe_code)]

//! Rule tables: ordered rule-id to setting maps with last-write-wins merge
//!
//! A [`RuleTable`] is the unit of composition: named rule groups and plugin
//! contributions are each a table, and the composer combines them with
//! [`RuleTable::merge`] in a fixed precedence order. On key collision the
//! later table wins; there are no other ordering semantics. Iteration and
//! serialization order is sorted by rule id so that rendered configs are
//! deterministic.

use crate::types::{RuleId, Severity};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single rule setting: severity, optionally paired with an options value
///
/// Serializes to the host linter's native shape: a bare severity token
/// (`"warn"`), or a two-element array (`["error", {...}]`) when options are
/// attached. Deserialization also accepts the linter's numeric severities
/// (0/1/2).
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSetting {
    pub severity: Severity,
    pub options: Option<serde_json::Value>,
}

impl RuleSetting {
    pub fn new(severity: Severity) -> Self {
        RuleSetting {
            severity,
            options: None,
        }
    }

    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Attaches an options value to this setting
    pub fn with_options(severity: Severity, options: serde_json::Value) -> Self {
        RuleSetting {
            severity,
            options: Some(options),
        }
    }
}

fn severity_from_token(token: &str) -> Option<Severity> {
    match token {
        "off" => Some(Severity::Off),
        "warn" => Some(Severity::Warn),
        "error" => Some(Severity::Error),
        _ => None,
    }
}

fn severity_from_number(n: u64) -> Option<Severity> {
    match n {
        0 => Some(Severity::Off),
        1 => Some(Severity::Warn),
        2 => Some(Severity::Error),
        _ => None,
    }
}

impl Serialize for RuleSetting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.options {
            None => serializer.serialize_str(self.severity.as_str()),
            Some(options) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(self.severity.as_str())?;
                seq.serialize_element(options)?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SettingVisitor;

        impl<'de> Visitor<'de> for SettingVisitor {
            type Value = RuleSetting;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a severity token, numeric severity, or [severity, options] pair")
            }

            fn visit_str<E>(self, value: &str) -> Result<RuleSetting, E>
            where
                E: de::Error,
            {
                severity_from_token(value)
                    .map(RuleSetting::new)
                    .ok_or_else(|| E::custom(format!("unknown severity token '{}'", value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<RuleSetting, E>
            where
                E: de::Error,
            {
                severity_from_number(value)
                    .map(RuleSetting::new)
                    .ok_or_else(|| E::custom(format!("unknown numeric severity {}", value)))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RuleSetting, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let severity: serde_json::Value = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("empty rule setting array"))?;
                let severity = match severity {
                    serde_json::Value::String(s) => severity_from_token(&s)
                        .ok_or_else(|| de::Error::custom(format!("unknown severity token '{}'", s)))?,
                    serde_json::Value::Number(n) => n
                        .as_u64()
                        .and_then(severity_from_number)
                        .ok_or_else(|| de::Error::custom("unknown numeric severity"))?,
                    other => {
                        return Err(de::Error::custom(format!(
                            "invalid severity element: {}",
                            other
                        )));
                    }
                };

                let options: Option<serde_json::Value> = seq.next_element()?;
                // Drain any further elements so trailing entries are not an error
                while seq.next_element::<serde_json::Value>()?.is_some() {}

                Ok(RuleSetting { severity, options })
            }
        }

        deserializer.deserialize_any(SettingVisitor)
    }
}

/// An ordered mapping from rule identifier to rule setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    entries: BTreeMap<RuleId, RuleSetting>,
}

impl RuleTable {
    /// Creates a new empty RuleTable
    pub fn new() -> Self {
        RuleTable {
            entries: BTreeMap::new(),
        }
    }

    /// Sets a rule, replacing any previous setting for the same id
    pub fn set(&mut self, id: impl Into<RuleId>, setting: RuleSetting) {
        self.entries.insert(id.into(), setting);
    }

    /// Looks up the setting for a rule id
    pub fn get(&self, id: &RuleId) -> Option<&RuleSetting> {
        self.entries.get(id)
    }

    /// Merges `other` into this table; entries from `other` win on collision
    pub fn merge(&mut self, other: &RuleTable) {
        for (id, setting) in &other.entries {
            self.entries.insert(id.clone(), setting.clone());
        }
    }

    /// Merges a sequence of tables in order, later tables overriding earlier ones
    pub fn merged<'a>(tables: impl IntoIterator<Item = &'a RuleTable>) -> RuleTable {
        let mut result = RuleTable::new();
        for table in tables {
            result.merge(table);
        }
        result
    }

    /// Iterates entries in sorted rule-id order
    pub fn iter(&self) -> impl Iterator<Item = (&RuleId, &RuleSetting)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(RuleId, RuleSetting)> for RuleTable {
    fn from_iter<T: IntoIterator<Item = (RuleId, RuleSetting)>>(iter: T) -> Self {
        RuleTable {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_later_table_wins_on_collision() {
        let mut first = RuleTable::new();
        first.set("camelcase", RuleSetting::error());
        first.set("no-undef", RuleSetting::error());

        let mut second = RuleTable::new();
        second.set("camelcase", RuleSetting::warn());

        first.merge(&second);
        assert_eq!(
            first.get(&RuleId::new("camelcase")),
            Some(&RuleSetting::warn())
        );
        assert_eq!(
            first.get(&RuleId::new("no-undef")),
            Some(&RuleSetting::error())
        );
    }

    #[test]
    fn test_non_overlapping_keys_survive() {
        let mut a = RuleTable::new();
        a.set("camelcase", RuleSetting::warn());
        let mut b = RuleTable::new();
        b.set("no-undef", RuleSetting::warn());
        let mut c = RuleTable::new();
        c.set("new-cap", RuleSetting::off());

        let merged = RuleTable::merged([&a, &b, &c]);
        assert_eq!(merged.len(), 3);
        assert!(merged.get(&RuleId::new("camelcase")).is_some());
        assert!(merged.get(&RuleId::new("no-undef")).is_some());
        assert!(merged.get(&RuleId::new("new-cap")).is_some());
    }

    #[test]
    fn test_merged_respects_argument_order() {
        let mut a = RuleTable::new();
        a.set("complexity", RuleSetting::error());
        let mut b = RuleTable::new();
        b.set("complexity", RuleSetting::off());

        let merged = RuleTable::merged([&a, &b]);
        assert_eq!(
            merged.get(&RuleId::new("complexity")),
            Some(&RuleSetting::off())
        );

        let merged = RuleTable::merged([&b, &a]);
        assert_eq!(
            merged.get(&RuleId::new("complexity")),
            Some(&RuleSetting::error())
        );
    }

    #[test]
    fn test_setting_serializes_to_bare_token() {
        let json = serde_json::to_value(RuleSetting::warn()).unwrap();
        assert_eq!(json, json!("warn"));
    }

    #[test]
    fn test_setting_serializes_options_as_pair() {
        let setting = RuleSetting::with_options(
            Severity::Error,
            json!({ "minimumCases": 4 }),
        );
        let value = serde_json::to_value(&setting).unwrap();
        assert_eq!(value, json!(["error", { "minimumCases": 4 }]));
    }

    #[test]
    fn test_setting_deserializes_tokens_numbers_and_pairs() {
        let s: RuleSetting = serde_json::from_value(json!("off")).unwrap();
        assert_eq!(s, RuleSetting::off());

        let s: RuleSetting = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(s, RuleSetting::error());

        let s: RuleSetting = serde_json::from_value(json!(["warn", { "max": 25 }])).unwrap();
        assert_eq!(s.severity, Severity::Warn);
        assert_eq!(s.options, Some(json!({ "max": 25 })));
    }

    #[test]
    fn test_setting_rejects_unknown_token() {
        let result: Result<RuleSetting, _> = serde_json::from_value(json!("loud"));
        assert!(result.is_err());
    }

    #[test]
    fn test_table_serialization_is_sorted() {
        let mut table = RuleTable::new();
        table.set("unicorn/no-empty-file", RuleSetting::warn());
        table.set("camelcase", RuleSetting::warn());
        table.set("import/order", RuleSetting::off());

        let text = serde_json::to_string(&table).unwrap();
        let camel = text.find("camelcase").unwrap();
        let import = text.find("import/order").unwrap();
        let unicorn = text.find("unicorn/no-empty-file").unwrap();
        assert!(camel < import && import < unicorn);
    }
}
