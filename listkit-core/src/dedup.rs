//! Order-preserving deduplication

use std::collections::HashSet;

/// Remove repeated values, keeping the first occurrence of each
///
/// Equality is exact string equality; no case folding or normalization.
pub fn deduplicate<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut result = Vec::new();

    for item in items {
        let item = item.as_ref();
        if seen.insert(item) {
            result.push(item.to_string());
        }
    }

    result
}
