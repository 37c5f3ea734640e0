//! Case folding helpers

use crate::dedup::deduplicate;

/// Lowercase every item
pub fn to_lowercase<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_lowercase()).collect()
}

/// Lowercase every item, then drop repeats keeping first occurrences
pub fn deduplicate_lowercase<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    deduplicate(&to_lowercase(items))
}

/// Whether `needle` equals some item, ignoring case
pub fn contains_ignore_case<S: AsRef<str>>(needle: &str, items: &[S]) -> bool {
    let needle = needle.to_lowercase();
    items.iter().any(|item| item.as_ref().to_lowercase() == needle)
}
