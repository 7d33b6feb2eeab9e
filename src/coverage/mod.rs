//! Coverage scoring engine.
//!
//! Ranks a migrated rule against the read-only catalog of target-platform
//! analytic detectors and reports whether the rule's intent already appears
//! covered. The engine is organized into sub-modules:
//! - [`similarity`] - Weighted name/keyword scoring of one analytic
//! - [`catalog`] - The analytic catalog model and its JSON loader
//!
//! Scoring never fails: an empty catalog yields an empty match list and
//! `covered = false`, which callers treat as "no existing coverage found",
//! not as an error.
//!
//! # Examples
//!
//! ```rust
//! use siem_migrate::coverage::{analyze, AnalyticEntry};
//! use siem_migrate::CoverageConfig;
//!
//! let catalog = vec![AnalyticEntry {
//!     name: "Brute Force Login Detection".to_string(),
//!     detector_tags: "brute force, authentication".to_string(),
//!     severity: "high".to_string(),
//!     ..Default::default()
//! }];
//!
//! let report = analyze(
//!     "Brute Force Login Detection",
//!     "detects repeated authentication failures",
//!     &catalog,
//!     &CoverageConfig::default(),
//! );
//! assert!(report.covered);
//! assert_eq!(report.best_match.as_deref(), Some("Brute Force Login Detection"));
//! ```

pub mod catalog;
pub mod similarity;

pub use catalog::{load_catalog, parse_catalog, AnalyticEntry};

use serde::Serialize;

use crate::config::CoverageConfig;

/// One qualifying catalog analytic with its similarity score.
///
/// Borrows the analytic from the catalog slice; produced fresh per ranking
/// call and never persisted by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageMatch<'a> {
    pub analytic: &'a AnalyticEntry,
    pub score: f64,
}

/// Condensed match record for reports, with the score rounded to two
/// decimal places as the surrounding application presents it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub name: String,
    pub score: f64,
    pub severity: String,
    pub tags: String,
    pub tactics: String,
}

/// Coverage verdict for one rule.
///
/// `covered` means at least one analytic scored above the threshold;
/// `confidence` is the top score (unrounded) or 0 when nothing qualified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub rule_name: String,
    pub covered: bool,
    pub confidence: f64,
    pub best_match: Option<String>,
    pub matches: Vec<MatchSummary>,
}

/// Rank a rule against the full catalog.
///
/// Scores every entry, keeps those strictly above the configured threshold,
/// sorts descending by score (stable, so catalog order breaks ties) and
/// truncates to the configured maximum. A rule with no qualifying analytic
/// yields an empty list.
pub fn rank<'a>(
    rule_name: &str,
    rule_description: &str,
    catalog: &'a [AnalyticEntry],
    config: &CoverageConfig,
) -> Vec<CoverageMatch<'a>> {
    let mut matches: Vec<CoverageMatch<'a>> = catalog
        .iter()
        .map(|analytic| CoverageMatch {
            analytic,
            score: similarity::score(rule_name, rule_description, analytic),
        })
        .filter(|m| m.score > config.score_threshold)
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(config.max_matches);
    matches
}

/// Analyze one rule for coverage and build its report.
pub fn analyze(
    rule_name: &str,
    rule_description: &str,
    catalog: &[AnalyticEntry],
    config: &CoverageConfig,
) -> CoverageReport {
    let matches = rank(rule_name, rule_description, catalog, config);

    CoverageReport {
        rule_name: rule_name.to_string(),
        covered: !matches.is_empty(),
        confidence: matches.first().map(|m| m.score).unwrap_or(0.0),
        best_match: matches.first().map(|m| m.analytic.name.clone()),
        matches: matches
            .iter()
            .map(|m| MatchSummary {
                name: m.analytic.name.clone(),
                score: round2(m.score),
                severity: m.analytic.severity.clone(),
                tags: m.analytic.detector_tags.clone(),
                tactics: m.analytic.attack_tactic.clone(),
            })
            .collect(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
