//! Whole-sequence edits: sentinel trimming, subtraction, per-item rewrites
//!
//! None of these mutate their input; each builds a new vector.

use std::collections::{HashMap, HashSet};

/// Drop leading items equal to `sentinel`
pub fn trim_start<S: AsRef<str>>(items: &[S], sentinel: &str) -> Vec<String> {
    let start = items
        .iter()
        .position(|item| item.as_ref() != sentinel)
        .unwrap_or(items.len());
    owned(&items[start..])
}

/// Drop trailing items equal to `sentinel`
pub fn trim_end<S: AsRef<str>>(items: &[S], sentinel: &str) -> Vec<String> {
    let end = items
        .iter()
        .rposition(|item| item.as_ref() != sentinel)
        .map_or(0, |i| i + 1);
    owned(&items[..end])
}

/// Drop leading and trailing items equal to `sentinel`; interior ones stay
pub fn trim<S: AsRef<str>>(items: &[S], sentinel: &str) -> Vec<String> {
    trim_end(&trim_start(items, sentinel), sentinel)
}

/// Drop empty strings; whitespace-only items are kept
pub fn remove_empty<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Multiset difference: each subtrahend element removes one occurrence
///
/// The earliest remaining occurrence is the one removed; elements of
/// `subtrahend` missing from `minuend` are ignored.
pub fn subtract_once<S, T>(minuend: &[S], subtrahend: &[T]) -> Vec<String>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut pending: HashMap<&str, usize> = HashMap::new();
    for item in subtrahend {
        *pending.entry(item.as_ref()).or_insert(0) += 1;
    }

    let mut result = Vec::with_capacity(minuend.len());
    for item in minuend {
        let item = item.as_ref();
        match pending.get_mut(item) {
            Some(count) if *count > 0 => *count -= 1,
            _ => result.push(item.to_string()),
        }
    }

    result
}

/// Remove every occurrence of every subtrahend element, keeping order
pub fn subtract_all<S, T>(minuend: &[S], subtrahend: &[T]) -> Vec<String>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let remove: HashSet<&str> = subtrahend.iter().map(AsRef::as_ref).collect();
    minuend
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !remove.contains(item))
        .map(str::to_string)
        .collect()
}

/// Replace every occurrence of `from` with `to` inside each item
pub fn replace_in_items<S: AsRef<str>>(items: &[S], from: &str, to: &str) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let item = item.as_ref();
            if from.is_empty() {
                item.to_string()
            } else {
                item.replace(from, to)
            }
        })
        .collect()
}

/// Wrap items containing a space in double quotes
pub fn quote_if_contains_blank<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let item = item.as_ref();
            if item.contains(' ') {
                format!("\"{item}\"")
            } else {
                item.to_string()
            }
        })
        .collect()
}

/// Strip each argument and keep the non-empty ones; `None` is skipped
pub fn collect_non_empty<'a, I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    args.into_iter()
        .flatten()
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .map(str::to_string)
        .collect()
}

fn owned<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_string()).collect()
}
