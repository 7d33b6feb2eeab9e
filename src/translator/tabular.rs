//! Tabular-dialect (SELECT/FROM/WHERE) query conversion.
//!
//! Decomposes a SQL-shaped source query into its selected fields, source
//! table and filter clause, then assembles the target pipeline in the fixed
//! stage order dataset → filter → fields.

use regex::Regex;

use crate::error::Result;
use crate::translator::clause::ClauseRewriter;
use crate::translator::field_mapping::FieldMapping;

/// Stage separator of the target pipeline syntax.
pub(crate) const STAGE_SEPARATOR: &str = " | ";

/// Canonical dataset identifier for the reserved source tables.
const CANONICAL_DATASET: &str = "xdr_data";

/// Source tables that resolve to the canonical dataset.
const RESERVED_TABLES: &[&str] = &["events", "flows"];

/// Structural decomposition patterns for the tabular dialect.
#[derive(Debug)]
pub(crate) struct TabularConverter {
    select_re: Regex,
    from_re: Regex,
    where_re: Regex,
}

impl TabularConverter {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            select_re: Regex::new(r"(?is)SELECT\s+(.+?)\s+FROM")?,
            from_re: Regex::new(r"(?i)FROM\s+(\w+)")?,
            where_re: Regex::new(r"(?is)WHERE\s+(.+)")?,
        })
    }

    /// Convert a tabular query to the target pipeline.
    ///
    /// Returns `None` for empty input or input without a recognizable
    /// `SELECT ... FROM` structure. Conversion failure is a normal outcome
    /// for the caller, never an error.
    pub(crate) fn convert(
        &self,
        fields: &FieldMapping,
        rewriter: &ClauseRewriter,
        query: &str,
    ) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let select_clause = self.select_re.captures(query)?.get(1)?.as_str().trim();
        let from_table = self
            .from_re
            .captures(query)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_lowercase())
            .unwrap_or_else(|| "events".to_string());
        let where_clause = self
            .where_re
            .captures(query)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let selected = parse_select_fields(fields, select_clause);

        let mut stages = Vec::with_capacity(3);

        if RESERVED_TABLES.contains(&from_table.as_str()) {
            stages.push(format!("dataset = {CANONICAL_DATASET}"));
        } else {
            stages.push(format!("dataset = {from_table}"));
        }

        if !where_clause.is_empty() {
            stages.push(format!("filter {}", rewriter.rewrite(&where_clause)));
        }

        if !selected.is_empty() {
            stages.push(format!("fields {}", selected.join(", ")));
        }

        Some(stages.join(STAGE_SEPARATOR))
    }
}

/// Extract and map the selected fields.
///
/// A wildcard anywhere in the selection means all-field projection; the
/// returned list is then empty and no fields stage is emitted.
fn parse_select_fields(fields: &FieldMapping, select_clause: &str) -> Vec<String> {
    if select_clause.contains('*') {
        return Vec::new();
    }
    select_clause
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| fields.map_field(f))
        .collect()
}
