//! Detection-rule data model shared with host applications.
//!
//! The migration engine itself only reads a rule's name, description and
//! query, and writes back the translated query and status. Persistence,
//! upload parsing and reporting around these records belong to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source query dialect of a detection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceDialect {
    /// SQL-shaped `SELECT ... FROM ... WHERE ...` rule language.
    Tabular,
    /// Pipe-separated search command language.
    Pipeline,
}

impl fmt::Display for SourceDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceDialect::Tabular => write!(f, "tabular"),
            SourceDialect::Pipeline => write!(f, "pipeline"),
        }
    }
}

/// Review status of a rule in the migration workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    /// Not yet translated, or translation produced no result and the rule
    /// awaits manual conversion.
    #[default]
    Pending,
    /// A translated query is attached.
    Converted,
    /// A human reviewed the translated query.
    Reviewed,
    /// Pushed to the target platform.
    Exported,
}

fn default_severity() -> String {
    "medium".to_string()
}

/// One detection rule moving through the migration.
///
/// # Examples
///
/// ```rust
/// use siem_migrate::{DetectionRule, RuleStatus, SourceDialect};
///
/// let rule = DetectionRule::new(
///     "aql-7",
///     "Suspicious Admin Login",
///     SourceDialect::Tabular,
///     "SELECT * FROM events WHERE username LIKE 'admin'",
/// );
/// assert_eq!(rule.status, RuleStatus::Pending);
/// assert_eq!(rule.severity, "medium");
/// assert!(rule.converted_query.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub source_dialect: SourceDialect,
    pub original_query: String,
    #[serde(default)]
    pub converted_query: Option<String>,
    #[serde(default)]
    pub status: RuleStatus,
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DetectionRule {
    /// Create a pending rule with default severity and no tags.
    pub fn new(id: &str, name: &str, source_dialect: SourceDialect, original_query: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            source_dialect,
            original_query: original_query.to_string(),
            converted_query: None,
            status: RuleStatus::Pending,
            severity: default_severity(),
            tags: Vec::new(),
        }
    }

    /// The rule description, or an empty string when absent.
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Aggregate outcome of a batch migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MigrationSummary {
    pub total_rules: usize,
    pub converted_rules: usize,
    pub failed_conversions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_serde_tags() {
        assert_eq!(
            serde_json::to_string(&SourceDialect::Tabular).unwrap(),
            "\"tabular\""
        );
        assert_eq!(
            serde_json::from_str::<SourceDialect>("\"pipeline\"").unwrap(),
            SourceDialect::Pipeline
        );
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(SourceDialect::Tabular.to_string(), "tabular");
        assert_eq!(SourceDialect::Pipeline.to_string(), "pipeline");
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(RuleStatus::default(), RuleStatus::Pending);
    }

    #[test]
    fn test_rule_deserialization_defaults() {
        let rule: DetectionRule = serde_json::from_str(
            r#"{
                "id": "spl-0",
                "name": "Failed Logins",
                "source_dialect": "pipeline",
                "original_query": "index=auth | where action=failure"
            }"#,
        )
        .unwrap();

        assert_eq!(rule.status, RuleStatus::Pending);
        assert_eq!(rule.severity, "medium");
        assert_eq!(rule.description, None);
        assert_eq!(rule.description_or_default(), "");
        assert!(rule.tags.is_empty());
        assert!(rule.converted_query.is_none());
    }

    #[test]
    fn test_rule_round_trip() {
        let mut rule = DetectionRule::new(
            "aql-3",
            "Port Scan",
            SourceDialect::Tabular,
            "SELECT * FROM flows WHERE destinationport < 1024",
        );
        rule.description = Some("many ports in a short window".to_string());
        rule.status = RuleStatus::Converted;
        rule.converted_query = Some("dataset = xdr_data".to_string());
        rule.tags = vec!["network".to_string()];

        let json = serde_json::to_string(&rule).unwrap();
        let back: DetectionRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_summary_default() {
        let summary = MigrationSummary::default();
        assert_eq!(summary.total_rules, 0);
        assert_eq!(summary.converted_rules, 0);
        assert_eq!(summary.failed_conversions, 0);
    }
}
