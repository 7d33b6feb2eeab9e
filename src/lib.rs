//! # Detection-Rule Migration Engine
//!
//! A Rust library for migrating detection rules between security-query
//! dialects and estimating whether each migrated rule is already covered by
//! an existing catalog of target-platform analytics.
//!
//! Two engines do the work:
//! - the **query translation engine** rewrites field names, boolean
//!   operators, comparison idioms and clause structure from a tabular
//!   (`SELECT ... FROM ... WHERE ...`) or pipeline (pipe-separated search)
//!   dialect into the target pipeline syntax;
//! - the **coverage scoring engine** ranks a rule against the analytic
//!   catalog with a weighted name/keyword similarity metric and reports the
//!   top matches.
//!
//! Both are pure, synchronous and reentrant: dictionaries, compiled rewrite
//! patterns and the catalog are immutable after construction.
//!
//! ## Quick Start
//!
//! ### Translating queries
//!
//! ```rust
//! use siem_migrate::{QueryTranslator, SourceDialect};
//!
//! let translator = QueryTranslator::new()?;
//!
//! let xql = translator.translate(
//!     SourceDialect::Tabular,
//!     "SELECT sourceip, username FROM events WHERE sourceip = '1.2.3.4'",
//! );
//! assert_eq!(
//!     xql.as_deref(),
//!     Some("dataset = xdr_data | filter action_local_ip = '1.2.3.4' | \
//!           fields action_local_ip, actor_effective_username"),
//! );
//! # Ok::<(), siem_migrate::MigrateError>(())
//! ```
//!
//! ### Scoring coverage
//!
//! ```rust
//! use siem_migrate::{coverage, AnalyticEntry, CoverageConfig};
//!
//! let catalog = vec![AnalyticEntry {
//!     name: "Brute Force Login".to_string(),
//!     detector_tags: "brute force, authentication".to_string(),
//!     ..Default::default()
//! }];
//!
//! let report = coverage::analyze(
//!     "Brute Force Login",
//!     "repeated authentication failures",
//!     &catalog,
//!     &CoverageConfig::default(),
//! );
//! assert!(report.covered);
//! ```
//!
//! ### Migrating rule sets
//!
//! ```rust,ignore
//! use siem_migrate::{DetectionRule, MigrationEngine};
//!
//! let catalog = siem_migrate::coverage::load_catalog("analytics.json")?;
//! let engine = MigrationEngine::new(catalog)?;
//!
//! let summary = engine.migrate_batch(&mut rules);
//! println!("{}/{} rules converted", summary.converted_rules, summary.total_rules);
//!
//! for report in engine.coverage_batch(&rules) {
//!     if report.covered {
//!         println!("{} already covered by {:?}", report.rule_name, report.best_match);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod coverage;
pub mod engine;
pub mod error;
pub mod rule;
pub mod translator;

// Primary engine interface
pub use engine::MigrationEngine;

// Translation engine
pub use translator::{CategoryMapping, ClauseRewriter, FieldMapping, QueryTranslator};

// Coverage scoring engine
pub use coverage::{AnalyticEntry, CoverageMatch, CoverageReport, MatchSummary};

// Core types and errors
pub use config::CoverageConfig;
pub use error::{MigrateError, Result};
pub use rule::{DetectionRule, MigrationSummary, RuleStatus, SourceDialect};
