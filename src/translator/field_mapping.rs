//! Field and category dictionaries for query translation.
//!
//! This module provides the [`FieldMapping`] lookup from source-dialect field
//! identifiers to target-dialect identifiers, and the [`CategoryMapping`]
//! table from numeric event-category codes to semantic event-type labels.
//!
//! Both dictionaries are immutable after construction and safe to share by
//! reference across concurrent translation calls. Entries are stored in a
//! `BTreeMap` so that whole-text substitution passes iterate in ascending
//! lexicographic key order, which keeps translated output deterministic.

use std::collections::BTreeMap;

/// Default source-to-target field identifier pairs.
///
/// Source identifiers are stored lower-cased; lookup is case-insensitive.
const DEFAULT_FIELD_PAIRS: &[(&str, &str)] = &[
    // Network fields
    ("sourceip", "action_local_ip"),
    ("destinationip", "action_remote_ip"),
    ("sourceport", "action_local_port"),
    ("destinationport", "action_remote_port"),
    ("protocol", "action_network_protocol"),
    // User/Identity fields
    ("username", "actor_effective_username"),
    ("userid", "actor_effective_user_sid"),
    ("domainname", "actor_primary_user_upn_prefix"),
    // Process fields
    ("processname", "causality_actor_process_image_name"),
    ("processid", "causality_actor_process_os_pid"),
    ("commandline", "causality_actor_process_command_line"),
    // File fields
    ("filename", "action_file_name"),
    ("filepath", "action_file_path"),
    ("filesize", "action_file_size"),
    // Event fields
    ("eventname", "event_type"),
    ("category", "event_sub_type"),
    ("severity", "alert_severity"),
    ("logsourcename", "agent_hostname"),
    // Time fields
    ("starttime", "event_timestamp"),
    ("endtime", "event_timestamp"),
    // Additional common fields
    ("hostname", "agent_hostname"),
    ("macaddress", "action_local_mac_address"),
    ("url", "action_url"),
    ("domain", "dns_query_name"),
];

/// Default numeric-category-code to event-type-label pairs.
const DEFAULT_CATEGORY_PAIRS: &[(&str, &str)] = &[
    ("1001", "network"),
    ("2000", "process"),
    ("3000", "file"),
    ("4000", "authentication"),
    ("5000", "user"),
    ("6000", "system"),
];

/// Lookup from source field identifiers to target field identifiers.
///
/// Lookup is case-insensitive and total: identifiers without a mapping pass
/// through unchanged.
///
/// # Examples
///
/// ```rust
/// use siem_migrate::translator::FieldMapping;
///
/// let mapping = FieldMapping::new();
/// assert_eq!(mapping.map_field("SourceIP"), "action_local_ip");
/// assert_eq!(mapping.map_field("custom_field"), "custom_field");
/// ```
#[derive(Debug, Clone)]
pub struct FieldMapping {
    field_map: BTreeMap<String, String>,
}

impl FieldMapping {
    /// Create a field mapping with the default source-to-target field table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siem_migrate::translator::FieldMapping;
    ///
    /// let mapping = FieldMapping::new();
    /// assert!(mapping.has_mapping("username"));
    /// ```
    pub fn new() -> Self {
        let field_map = DEFAULT_FIELD_PAIRS
            .iter()
            .map(|&(source, target)| (source.to_string(), target.to_string()))
            .collect();
        Self { field_map }
    }

    /// Create an empty field mapping with no entries.
    ///
    /// Every lookup on an empty mapping is the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siem_migrate::translator::FieldMapping;
    ///
    /// let mapping = FieldMapping::empty();
    /// assert_eq!(mapping.mappings().len(), 0);
    /// assert_eq!(mapping.map_field("sourceip"), "sourceip");
    /// ```
    pub fn empty() -> Self {
        Self {
            field_map: BTreeMap::new(),
        }
    }

    /// Add a custom field mapping. The source identifier is lower-cased so
    /// that lookups remain case-insensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siem_migrate::translator::FieldMapping;
    ///
    /// let mut mapping = FieldMapping::empty();
    /// mapping.add_mapping("DevicePort", "action_remote_port");
    /// assert_eq!(mapping.map_field("deviceport"), "action_remote_port");
    /// ```
    pub fn add_mapping(&mut self, source_field: &str, target_field: &str) {
        self.field_map
            .insert(source_field.to_lowercase(), target_field.to_string());
    }

    /// Map a source field identifier to its target identifier.
    ///
    /// The input is trimmed and lower-cased before lookup. If no mapping
    /// exists the original input is returned unchanged, so this function is
    /// total and idempotent over the default table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siem_migrate::translator::FieldMapping;
    ///
    /// let mapping = FieldMapping::new();
    /// assert_eq!(mapping.map_field(" Username "), "actor_effective_username");
    /// assert_eq!(mapping.map_field("UnmappedField"), "UnmappedField");
    /// ```
    pub fn map_field(&self, field: &str) -> String {
        let key = field.trim().to_lowercase();
        self.field_map
            .get(&key)
            .cloned()
            .unwrap_or_else(|| field.to_string())
    }

    /// Check whether a mapping exists for the given source identifier.
    pub fn has_mapping(&self, field: &str) -> bool {
        self.field_map.contains_key(&field.trim().to_lowercase())
    }

    /// All configured field pairs, in ascending source-key order.
    ///
    /// Substitution passes iterate this map directly, so the returned order
    /// is also the rewrite order.
    pub fn mappings(&self) -> &BTreeMap<String, String> {
        &self.field_map
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup from numeric event-category codes to semantic event-type labels.
///
/// Used only while rewriting tabular filter clauses that compare a category
/// field against a literal code.
#[derive(Debug, Clone)]
pub struct CategoryMapping {
    categories: BTreeMap<String, String>,
}

impl CategoryMapping {
    /// Create a category mapping with the default code table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siem_migrate::translator::CategoryMapping;
    ///
    /// let mapping = CategoryMapping::new();
    /// assert_eq!(mapping.label_for("4000"), Some("authentication"));
    /// assert_eq!(mapping.label_for("9999"), None);
    /// ```
    pub fn new() -> Self {
        let categories = DEFAULT_CATEGORY_PAIRS
            .iter()
            .map(|&(code, label)| (code.to_string(), label.to_string()))
            .collect();
        Self { categories }
    }

    /// Create an empty category mapping.
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Add a custom category code.
    pub fn add_category(&mut self, code: &str, label: &str) {
        self.categories.insert(code.to_string(), label.to_string());
    }

    /// Resolve a category code to its event-type label, if known.
    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.categories.get(code).map(String::as_str)
    }

    /// All configured code pairs, in ascending code order.
    pub fn codes(&self) -> &BTreeMap<String, String> {
        &self.categories
    }
}

impl Default for CategoryMapping {
    fn default() -> Self {
        Self::new()
    }
}
