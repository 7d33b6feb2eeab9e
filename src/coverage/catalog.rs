//! Catalog of target-platform analytic detectors.
//!
//! The catalog is read-only reference data: loaded once at startup, then
//! shared by reference into every scoring call. Loading failures are
//! reported to the caller as [`MigrateError`](crate::error::MigrateError)
//! values; the scoring engine itself accepts any already-parsed slice,
//! including an empty one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One analytic detector of the target platform.
///
/// The tag, tactic and technique attributes are free-text lists whose tokens
/// are separated by `", "`, exactly as exported by the platform.
///
/// # Examples
///
/// ```rust
/// use siem_migrate::AnalyticEntry;
///
/// let entry: AnalyticEntry = serde_json::from_str(
///     r#"{
///         "Name": "Suspicious RDP Session",
///         "Detector Tags": "rdp, lateral movement",
///         "ATT&CK Tactic": "Lateral Movement",
///         "ATT&CK Technique": "Remote Services",
///         "Severity": "high"
///     }"#,
/// ).unwrap();
/// assert_eq!(entry.name, "Suspicious RDP Session");
/// assert_eq!(entry.severity, "high");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyticEntry {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Detector Tags", default)]
    pub detector_tags: String,
    #[serde(rename = "ATT&CK Tactic", default)]
    pub attack_tactic: String,
    #[serde(rename = "ATT&CK Technique", default)]
    pub attack_technique: String,
    #[serde(rename = "Severity", default)]
    pub severity: String,
}

/// Parse a catalog from its JSON export (a top-level array of entries).
///
/// Unknown record keys are ignored; missing known keys default to empty
/// strings so partially-populated exports still load.
pub fn parse_catalog(json: &str) -> Result<Vec<AnalyticEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a catalog from a JSON file on disk.
///
/// # Examples
///
/// ```rust,no_run
/// use siem_migrate::coverage::catalog::load_catalog;
///
/// let catalog = load_catalog("analytics.json")?;
/// println!("loaded {} analytics", catalog.len());
/// # Ok::<(), siem_migrate::MigrateError>(())
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<AnalyticEntry>> {
    let contents = fs::read_to_string(path)?;
    parse_catalog(&contents)
}
