//! Pipeline-dialect (pipe-separated search) query conversion.
//!
//! A shallower rewrite than the tabular path: five independent,
//! non-overlapping substitutions applied over the raw search expression.
//! The conversion is total; unmatched parts pass through unchanged.

use regex::Regex;

use crate::error::Result;

/// Suffix appended to index names when they become dataset identifiers.
const RAW_DATASET_SUFFIX: &str = "_raw";

/// Rewrite patterns for the pipeline dialect.
///
/// The patterns are case-sensitive on purpose: pipeline search commands are
/// conventionally written lower-case and the rewrites mirror that convention
/// exactly.
#[derive(Debug)]
pub(crate) struct PipelineConverter {
    index_re: Regex,
    sourcetype_re: Regex,
    stats_re: Regex,
}

impl PipelineConverter {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            index_re: Regex::new(r"index\s*=\s*(\w+)")?,
            sourcetype_re: Regex::new(r"sourcetype\s*=\s*(\S+)")?,
            stats_re: Regex::new(r"stats\s+count\s+by\s+")?,
        })
    }

    /// Convert a pipeline search expression to the target pipeline.
    ///
    /// Applies, in order:
    /// - `index = <name>` → `dataset = <name>_raw`
    /// - `sourcetype = <value>` → `filter <value>` (best effort)
    /// - `stats count by <fields>` → `comp count() by <fields>`
    /// - `| where` → `| filter`
    /// - `| table` → `| fields`
    pub(crate) fn convert(&self, query: &str) -> String {
        let mut out = query.trim().to_string();
        out = self
            .index_re
            .replace_all(&out, format!("dataset = ${{1}}{RAW_DATASET_SUFFIX}"))
            .into_owned();
        out = self.sourcetype_re.replace_all(&out, "filter ${1}").into_owned();
        out = self.stats_re.replace_all(&out, "comp count() by ").into_owned();
        out = out.replace("| where", "| filter");
        out = out.replace("| table", "| fields");
        out
    }
}
