//! Tag extraction heuristics.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Shortest token kept by `extract_tags`; tokens of 3 chars or fewer are dropped.
pub const MIN_TAG_CHARS: usize = 4;

static MARKUP_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid markup tag regex"));
// ASCII word class; non-ASCII letters act as separators.
static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid non-word regex"));

/// Derives up to `cap` tags from free text.
///
/// Steps:
/// - replace every `<...>` markup span with a single space;
/// - split on runs of non-word characters;
/// - drop tokens shorter than `MIN_TAG_CHARS`;
/// - dedupe keeping first occurrence, then truncate to `cap`.
///
/// Case-sensitive: `Cell` and `cell` are distinct tags. Short but meaningful
/// tokens (`pH`) are dropped while filler words (`this`) survive.
pub fn extract_tags(text: &str, cap: usize) -> Vec<String> {
    let stripped = MARKUP_TAG_RE.replace_all(text, " ");
    let tokens = NON_WORD_RE
        .split(&stripped)
        .filter(|token| token.chars().count() >= MIN_TAG_CHARS);
    dedupe_capped(tokens, cap)
}

/// Derives up to `cap` tags from outline metadata.
///
/// Labels (subject, level, style, tone) come first, then topics. Both are
/// taken as whole trimmed strings without word splitting; blank entries are
/// skipped.
pub fn union_metadata_tags<L, T>(labels: &[L], topics: &[T], cap: usize) -> Vec<String>
where
    L: AsRef<str>,
    T: AsRef<str>,
{
    let entries = labels
        .iter()
        .map(AsRef::as_ref)
        .chain(topics.iter().map(AsRef::as_ref))
        .map(str::trim)
        .filter(|entry| !entry.is_empty());
    dedupe_capped(entries, cap)
}

pub(crate) fn dedupe_capped<'a>(entries: impl Iterator<Item = &'a str>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for entry in entries {
        if tags.len() >= cap {
            break;
        }
        if seen.insert(entry) {
            tags.push(entry.to_string());
        }
    }
    tags
}
