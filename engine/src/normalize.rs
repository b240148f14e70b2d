//! Free-text helpers: segment normalization and option filtering.

use std::sync::OnceLock;

use regex::Regex;
use token_namer_vocabulary::Term;

fn separators() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_]+").ok()).as_ref()
}

fn dashes() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").ok()).as_ref()
}

/// Turns free text into a segment: trimmed, lower-cased, whitespace and
/// underscore runs replaced by `-`, repeated dashes collapsed, and leading
/// or trailing dashes removed.
///
/// ```
/// use token_namer_engine::normalize::normalize_segment;
///
/// assert_eq!(normalize_segment("  Focus  Ring__Outer "), "focus-ring-outer");
/// assert_eq!(normalize_segment("--a---b--"), "a-b");
/// ```
#[must_use]
pub fn normalize_segment(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let spaced = match separators() {
        Some(re) => re.replace_all(&lowered, "-").into_owned(),
        None => lowered,
    };
    let collapsed = match dashes() {
        Some(re) => re.replace_all(&spaced, "-").into_owned(),
        None => spaced,
    };
    collapsed.trim_matches('-').to_owned()
}

/// Terms whose value or label contains `query`, ignoring case.
///
/// A blank query returns every term.
#[must_use]
pub fn filter_terms(terms: &[Term], query: &str) -> Vec<Term> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return terms.to_vec();
    }
    terms
        .iter()
        .filter(|t| {
            t.value.to_lowercase().contains(&needle) || t.label.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}
