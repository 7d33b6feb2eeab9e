//! Configuration for the coverage scoring engine.

/// Tuning knobs for coverage ranking.
///
/// The defaults reproduce the reference behavior: analytics must score
/// strictly above 0.3 to qualify and at most 5 matches are reported per
/// rule.
///
/// # Examples
///
/// ```rust
/// use siem_migrate::CoverageConfig;
///
/// let default = CoverageConfig::default();
/// assert_eq!(default.score_threshold, 0.3);
/// assert_eq!(default.max_matches, 5);
///
/// let strict = CoverageConfig::new().with_threshold(0.6).with_max_matches(3);
/// assert_eq!(strict.score_threshold, 0.6);
/// assert_eq!(strict.max_matches, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageConfig {
    /// Minimum score a catalog analytic must exceed to qualify as a match.
    pub score_threshold: f64,
    /// Maximum number of matches reported per rule.
    pub max_matches: usize,
}

impl CoverageConfig {
    /// Create a configuration with the default threshold and match limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the qualifying score threshold.
    pub fn with_threshold(mut self, score_threshold: f64) -> Self {
        self.score_threshold = score_threshold;
        self
    }

    /// Override the per-rule match limit.
    pub fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.3,
            max_matches: 5,
        }
    }
}
