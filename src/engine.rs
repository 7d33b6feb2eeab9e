//! Primary migration engine interface.
//!
//! [`MigrationEngine`] bundles the query translator, the analytic catalog
//! and the coverage configuration behind one facade, and adds batch
//! operations over rule sets. All per-rule work is pure, so batches are
//! parallelized with rayon without any coordination.

use rayon::prelude::*;

use crate::config::CoverageConfig;
use crate::coverage::{self, AnalyticEntry, CoverageReport};
use crate::error::Result;
use crate::rule::{DetectionRule, MigrationSummary, RuleStatus, SourceDialect};
use crate::translator::{CategoryMapping, FieldMapping, QueryTranslator};

/// Migration engine for translating rules and scoring their coverage.
///
/// The engine is immutable after construction: the dictionaries, compiled
/// rewrite patterns and catalog are shared by reference across all calls,
/// so one engine can serve concurrent callers.
///
/// # Examples
///
/// ```rust
/// use siem_migrate::{DetectionRule, MigrationEngine, RuleStatus, SourceDialect};
///
/// let engine = MigrationEngine::new(Vec::new())?;
///
/// let mut rule = DetectionRule::new(
///     "aql-1",
///     "Admin Logins",
///     SourceDialect::Tabular,
///     "SELECT sourceip FROM events WHERE username LIKE 'admin'",
/// );
/// engine.migrate_rule(&mut rule);
///
/// assert_eq!(rule.status, RuleStatus::Converted);
/// assert!(rule.converted_query.unwrap().starts_with("dataset = xdr_data"));
/// # Ok::<(), siem_migrate::MigrateError>(())
/// ```
#[derive(Debug)]
pub struct MigrationEngine {
    translator: QueryTranslator,
    catalog: Vec<AnalyticEntry>,
    config: CoverageConfig,
}

impl MigrationEngine {
    /// Create an engine with the default dictionaries and configuration.
    ///
    /// The catalog is loaded by the caller; an empty catalog is legal and
    /// degrades every coverage verdict to "none found".
    pub fn new(catalog: Vec<AnalyticEntry>) -> Result<Self> {
        Ok(Self {
            translator: QueryTranslator::new()?,
            catalog,
            config: CoverageConfig::default(),
        })
    }

    /// Create an engine with custom field and category dictionaries.
    pub fn with_mappings(
        fields: FieldMapping,
        categories: &CategoryMapping,
        catalog: Vec<AnalyticEntry>,
    ) -> Result<Self> {
        Ok(Self {
            translator: QueryTranslator::with_mappings(fields, categories)?,
            catalog,
            config: CoverageConfig::default(),
        })
    }

    /// Override the coverage configuration.
    pub fn with_config(mut self, config: CoverageConfig) -> Self {
        self.config = config;
        self
    }

    /// Translate a raw query; `None` means no translation, a normal outcome
    /// that leaves the rule for manual review.
    pub fn translate(&self, dialect: SourceDialect, raw_query: &str) -> Option<String> {
        self.translator.translate(dialect, raw_query)
    }

    /// Score a rule's name and description against the engine's catalog.
    pub fn analyze_coverage(&self, rule_name: &str, rule_description: &str) -> CoverageReport {
        coverage::analyze(rule_name, rule_description, &self.catalog, &self.config)
    }

    /// Translate one rule in place.
    ///
    /// On success attaches the translated query and marks the rule
    /// converted; on no-result the rule keeps its pending status for manual
    /// conversion.
    pub fn migrate_rule(&self, rule: &mut DetectionRule) {
        match self.translate(rule.source_dialect, &rule.original_query) {
            Some(converted) => {
                rule.converted_query = Some(converted);
                rule.status = RuleStatus::Converted;
            }
            None => {
                rule.converted_query = None;
                rule.status = RuleStatus::Pending;
            }
        }
    }

    /// Translate a batch of rules in place, in parallel, and summarize the
    /// outcome.
    pub fn migrate_batch(&self, rules: &mut [DetectionRule]) -> MigrationSummary {
        rules.par_iter_mut().for_each(|rule| self.migrate_rule(rule));

        let converted_rules = rules
            .iter()
            .filter(|r| r.status == RuleStatus::Converted)
            .count();
        MigrationSummary {
            total_rules: rules.len(),
            converted_rules,
            failed_conversions: rules.len() - converted_rules,
        }
    }

    /// Coverage reports for a batch of rules, in rule order.
    pub fn coverage_batch(&self, rules: &[DetectionRule]) -> Vec<CoverageReport> {
        rules
            .par_iter()
            .map(|rule| self.analyze_coverage(&rule.name, rule.description_or_default()))
            .collect()
    }

    /// The analytic catalog this engine scores against.
    pub fn catalog(&self) -> &[AnalyticEntry] {
        &self.catalog
    }

    /// The translator this engine migrates with.
    pub fn translator(&self) -> &QueryTranslator {
        &self.translator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_catalog() -> MigrationEngine {
        let catalog = vec![
            AnalyticEntry {
                name: "Admin Login Monitoring".to_string(),
                detector_tags: "login, admin".to_string(),
                severity: "high".to_string(),
                ..Default::default()
            },
            AnalyticEntry {
                name: "DNS Tunneling".to_string(),
                detector_tags: "dns".to_string(),
                severity: "medium".to_string(),
                ..Default::default()
            },
        ];
        MigrationEngine::new(catalog).unwrap()
    }

    #[test]
    fn test_migrate_rule_success() {
        let engine = engine_with_catalog();
        let mut rule = DetectionRule::new(
            "aql-1",
            "Admin Login Monitoring",
            SourceDialect::Tabular,
            "SELECT sourceip FROM events WHERE username LIKE 'admin'",
        );
        engine.migrate_rule(&mut rule);
        assert_eq!(rule.status, RuleStatus::Converted);
        assert_eq!(
            rule.converted_query.as_deref(),
            Some(
                "dataset = xdr_data | filter actor_effective_username contains 'admin' | fields action_local_ip"
            )
        );
    }

    #[test]
    fn test_migrate_rule_no_result_stays_pending() {
        let engine = engine_with_catalog();
        let mut rule = DetectionRule::new(
            "aql-2",
            "Broken Rule",
            SourceDialect::Tabular,
            "not a query at all",
        );
        engine.migrate_rule(&mut rule);
        assert_eq!(rule.status, RuleStatus::Pending);
        assert!(rule.converted_query.is_none());
    }

    #[test]
    fn test_migrate_batch_summary() {
        let engine = engine_with_catalog();
        let mut rules = vec![
            DetectionRule::new(
                "aql-1",
                "A",
                SourceDialect::Tabular,
                "SELECT * FROM events",
            ),
            DetectionRule::new("aql-2", "B", SourceDialect::Tabular, "garbage"),
            DetectionRule::new(
                "spl-1",
                "C",
                SourceDialect::Pipeline,
                "index=main | table host",
            ),
        ];
        let summary = engine.migrate_batch(&mut rules);
        assert_eq!(summary.total_rules, 3);
        assert_eq!(summary.converted_rules, 2);
        assert_eq!(summary.failed_conversions, 1);
        assert_eq!(rules[1].status, RuleStatus::Pending);
        assert_eq!(
            rules[2].converted_query.as_deref(),
            Some("dataset = main_raw | fields host")
        );
    }

    #[test]
    fn test_batch_matches_sequential_output() {
        let engine = engine_with_catalog();
        let queries = [
            "SELECT sourceip FROM events WHERE sourceip = '1.1.1.1'",
            "SELECT * FROM flows",
            "bad",
            "SELECT username FROM logins WHERE category = 4000",
        ];
        let mut parallel: Vec<DetectionRule> = queries
            .iter()
            .enumerate()
            .map(|(i, q)| DetectionRule::new(&format!("r-{i}"), "R", SourceDialect::Tabular, q))
            .collect();
        let mut sequential = parallel.clone();

        engine.migrate_batch(&mut parallel);
        for rule in &mut sequential {
            engine.migrate_rule(rule);
        }
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_analyze_coverage_uses_catalog() {
        let engine = engine_with_catalog();
        let report = engine.analyze_coverage("Admin Login Monitoring", "watches admin login events");
        assert!(report.covered);
        assert_eq!(report.best_match.as_deref(), Some("Admin Login Monitoring"));
    }

    #[test]
    fn test_empty_catalog_covers_nothing() {
        let engine = MigrationEngine::new(Vec::new()).unwrap();
        let report = engine.analyze_coverage("Admin Login Monitoring", "watches admin logins");
        assert!(!report.covered);
        assert!(report.matches.is_empty());
    }

    #[test]
    fn test_coverage_batch_order_and_length() {
        let engine = engine_with_catalog();
        let rules = vec![
            DetectionRule::new("1", "Admin Login Monitoring", SourceDialect::Tabular, "q"),
            DetectionRule::new("2", "Nothing Similar Here", SourceDialect::Pipeline, "q"),
        ];
        let reports = engine.coverage_batch(&rules);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].rule_name, "Admin Login Monitoring");
        assert_eq!(reports[1].rule_name, "Nothing Similar Here");
    }

    #[test]
    fn test_custom_config_applies() {
        let engine = engine_with_catalog().with_config(
            CoverageConfig::new().with_threshold(0.99),
        );
        let report = engine.analyze_coverage("Admin Login Monitorin", "admin login");
        assert!(!report.covered);
    }
}
