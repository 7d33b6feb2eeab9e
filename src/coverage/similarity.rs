//! Similarity scoring between a rule and one catalog analytic.
//!
//! The score combines two signals:
//! - a normalized sequence-similarity ratio between the lower-cased rule
//!   name and analytic name (longest-matching-blocks ratio in `[0, 1]`);
//! - a keyword bonus of 0.2 per analytic attribute (detector tags, attack
//!   tactics, attack techniques) whose token list hits the lower-cased rule
//!   description, at most 0.6 total.
//!
//! Composite score = 0.6 · name ratio + 0.4 · keyword bonus, left unclamped:
//! the keyword bonus saturates at 0.6 before weighting, so a perfect name
//! match with all three attributes hitting yields 0.84. The arithmetic is
//! preserved exactly rather than renormalized.

use std::collections::HashMap;

use crate::coverage::catalog::AnalyticEntry;

/// Weight of the name-similarity ratio in the composite score.
pub const NAME_WEIGHT: f64 = 0.6;

/// Weight of the keyword accumulator in the composite score.
pub const KEYWORD_WEIGHT: f64 = 0.4;

/// Increment added to the keyword accumulator per matching attribute.
const KEYWORD_INCREMENT: f64 = 0.2;

/// Separator between tokens inside a catalog attribute string.
const TOKEN_SEPARATOR: &str = ", ";

/// Score one analytic against a rule's name and description.
///
/// Total function: empty names, descriptions and attributes are all legal
/// and simply contribute nothing.
///
/// # Examples
///
/// ```rust
/// use siem_migrate::coverage::similarity::score;
/// use siem_migrate::AnalyticEntry;
///
/// let analytic = AnalyticEntry {
///     name: "Suspicious Admin Login".to_string(),
///     detector_tags: "login, privilege".to_string(),
///     ..Default::default()
/// };
///
/// let high = score("Suspicious Admin Login", "detects privilege abuse", &analytic);
/// let low = score("DNS Tunneling", "long dns queries", &analytic);
/// assert!(high > low);
/// ```
pub fn score(rule_name: &str, rule_description: &str, analytic: &AnalyticEntry) -> f64 {
    let name_similarity = sequence_ratio(
        &rule_name.to_lowercase(),
        &analytic.name.to_lowercase(),
    );

    let description = rule_description.to_lowercase();
    let mut keyword_score = 0.0;
    for attribute in [
        &analytic.detector_tags,
        &analytic.attack_tactic,
        &analytic.attack_technique,
    ] {
        if attribute.is_empty() {
            continue;
        }
        // Multiple token hits within one attribute still count once.
        let lowered = attribute.to_lowercase();
        if lowered
            .split(TOKEN_SEPARATOR)
            .any(|token| description.contains(token))
        {
            keyword_score += KEYWORD_INCREMENT;
        }
    }

    name_similarity * NAME_WEIGHT + keyword_score * KEYWORD_WEIGHT
}

/// Normalized sequence-similarity ratio over two strings.
///
/// Computes `2 * M / (len(a) + len(b))` where `M` is the total length of the
/// longest matching blocks found by recursively splitting around the longest
/// common substring. Two empty strings are fully similar. No junk heuristic
/// is applied; inputs here are short rule names.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let length = a.len() + b.len();
    if length == 0 {
        return 1.0;
    }
    let matches = matching_total(&a, &b);
    2.0 * matches as f64 / length as f64
}

/// Total length of the matching blocks between `a` and `b`.
fn matching_total(a: &[char], b: &[char]) -> usize {
    // Positions of each character in b, ascending.
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b2j.entry(ch).or_default().push(j);
    }

    let mut total = 0;
    let mut pending = vec![(0usize, a.len(), 0usize, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;
        pending.push((alo, i, blo, j));
        pending.push((i + size, ahi, j + size, bhi));
    }
    total
}

/// Longest matching block within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Of all maximal blocks, returns the one starting earliest in `a` and, on a
/// tie, earliest in `b`, which keeps the recursion deterministic.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // j2len[j] = length of the longest block ending at a[i], b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, &ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_j2len = HashMap::new();
        if let Some(positions) = b2j.get(&ch) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j == 0 {
                    1
                } else {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_j2len.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        j2len = next_j2len;
    }

    (best_i, best_j, best_size)
}
