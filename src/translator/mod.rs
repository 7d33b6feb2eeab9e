//! Query translation engine.
//!
//! Rewrites detection-rule queries from two source dialects into the target
//! pipeline syntax:
//! - the **tabular** dialect (`SELECT ... FROM ... WHERE ...`), handled by a
//!   structural decomposition plus the ordered clause rewrite passes;
//! - the **pipeline** dialect (pipe-separated search commands), handled by a
//!   set of independent substitutions.
//!
//! The translator is organized into sub-modules:
//! - [`field_mapping`] - Source-to-target field and category dictionaries
//! - [`clause`] - Ordered rewrite passes for tabular filter clauses
//! - `tabular` / `pipeline` - Per-dialect conversion
//!
//! Translation is best-effort and syntactic: it maps names, operators and
//! clause structure, and does not guarantee semantic equivalence of the
//! result. Failure to translate is signaled with `None`, never an error.
//!
//! # Examples
//!
//! ```rust
//! use siem_migrate::{QueryTranslator, SourceDialect};
//!
//! let translator = QueryTranslator::new()?;
//!
//! let xql = translator.translate(
//!     SourceDialect::Tabular,
//!     "SELECT sourceip FROM events WHERE username LIKE 'admin'",
//! );
//! assert_eq!(
//!     xql.as_deref(),
//!     Some("dataset = xdr_data | filter actor_effective_username contains 'admin' | fields action_local_ip"),
//! );
//!
//! // Unparseable tabular input is a normal no-result outcome.
//! assert_eq!(translator.translate(SourceDialect::Tabular, "garbage"), None);
//! # Ok::<(), siem_migrate::MigrateError>(())
//! ```

pub mod clause;
pub mod field_mapping;

mod pipeline;
mod tabular;

pub use clause::ClauseRewriter;
pub use field_mapping::{CategoryMapping, FieldMapping};

use crate::error::Result;
use crate::rule::SourceDialect;
use pipeline::PipelineConverter;
use tabular::TabularConverter;

/// Dialect-aware query translator.
///
/// Owns the field/category dictionaries and the rewrite passes compiled from
/// them. Construction compiles every pattern once; [`translate`] is a pure
/// function over the immutable translator state and is safe to call from
/// multiple threads concurrently.
///
/// [`translate`]: QueryTranslator::translate
#[derive(Debug)]
pub struct QueryTranslator {
    fields: FieldMapping,
    rewriter: ClauseRewriter,
    tabular: TabularConverter,
    pipeline: PipelineConverter,
}

impl QueryTranslator {
    /// Create a translator with the default field and category dictionaries.
    pub fn new() -> Result<Self> {
        Self::with_mappings(FieldMapping::new(), &CategoryMapping::new())
    }

    /// Create a translator with custom dictionaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siem_migrate::translator::{CategoryMapping, FieldMapping};
    /// use siem_migrate::{QueryTranslator, SourceDialect};
    ///
    /// let mut fields = FieldMapping::empty();
    /// fields.add_mapping("srcaddr", "action_local_ip");
    ///
    /// let translator = QueryTranslator::with_mappings(fields, &CategoryMapping::empty())?;
    /// let xql = translator.translate(SourceDialect::Tabular, "SELECT srcaddr FROM events");
    /// assert_eq!(xql.as_deref(), Some("dataset = xdr_data | fields action_local_ip"));
    /// # Ok::<(), siem_migrate::MigrateError>(())
    /// ```
    pub fn with_mappings(fields: FieldMapping, categories: &CategoryMapping) -> Result<Self> {
        let rewriter = ClauseRewriter::new(&fields, categories)?;
        Ok(Self {
            fields,
            rewriter,
            tabular: TabularConverter::new()?,
            pipeline: PipelineConverter::new()?,
        })
    }

    /// Translate a raw source query into the target pipeline syntax.
    ///
    /// Returns `None` when the tabular dialect cannot locate a
    /// `SELECT ... FROM` structure or the input is blank. The pipeline
    /// dialect always produces a result for non-empty input; parts matching
    /// no rewrite pass through unchanged.
    pub fn translate(&self, dialect: SourceDialect, raw_query: &str) -> Option<String> {
        match dialect {
            SourceDialect::Tabular => self.tabular.convert(&self.fields, &self.rewriter, raw_query),
            SourceDialect::Pipeline => Some(self.pipeline.convert(raw_query)),
        }
    }

    /// The field dictionary this translator was built with.
    pub fn field_mapping(&self) -> &FieldMapping {
        &self.fields
    }

    /// The clause rewriter this translator was built with.
    pub fn clause_rewriter(&self) -> &ClauseRewriter {
        &self.rewriter
    }
}
