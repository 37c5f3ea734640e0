//! Literal substring filtering

/// Items containing `needle`
///
/// An empty needle is contained in every string, so every item is kept.
pub fn filter_contains<S: AsRef<str>>(items: &[S], needle: &str) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| item.contains(needle))
        .map(str::to_string)
        .collect()
}

/// Items not containing `needle`
///
/// An empty needle removes nothing and the input is returned as a copy.
pub fn remove_containing<S: AsRef<str>>(items: &[S], needle: &str) -> Vec<String> {
    if needle.is_empty() {
        return items.iter().map(|s| s.as_ref().to_string()).collect();
    }

    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !item.contains(needle))
        .map(str::to_string)
        .collect()
}

/// Whether any item contains `needle`
pub fn any_contains<S: AsRef<str>>(items: &[S], needle: &str) -> bool {
    items.iter().any(|item| item.as_ref().contains(needle))
}
