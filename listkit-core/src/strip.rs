//! Per-item trimming of leading and trailing characters

/// Characters removed from the ends of each item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StripSet<'a> {
    Whitespace,
    Chars(&'a str),
}

impl<'a> StripSet<'a> {
    fn from_option(chars: Option<&'a str>) -> Self {
        match chars {
            Some(chars) => StripSet::Chars(chars),
            None => StripSet::Whitespace,
        }
    }

    fn contains(&self, c: char) -> bool {
        match self {
            StripSet::Whitespace => c.is_whitespace(),
            StripSet::Chars(chars) => chars.contains(c),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Both,
    Leading,
    Trailing,
}

fn strip_with<S: AsRef<str>>(items: &[S], chars: Option<&str>, side: Side) -> Vec<String> {
    let set = StripSet::from_option(chars);
    let pred = |c: char| set.contains(c);

    items
        .iter()
        .map(|item| {
            let item = item.as_ref();
            match side {
                Side::Both => item.trim_matches(pred),
                Side::Leading => item.trim_start_matches(pred),
                Side::Trailing => item.trim_end_matches(pred),
            }
            .to_string()
        })
        .collect()
}

/// Trim characters in `chars` (whitespace when `None`) from both ends of
/// every item
///
/// Interior characters are never touched and the sequence length never
/// changes; an item made only of strip characters becomes `""`.
/// `chars` is a set: `Some("xy")` strips any run of `x` and `y`.
pub fn strip_items<S: AsRef<str>>(items: &[S], chars: Option<&str>) -> Vec<String> {
    strip_with(items, chars, Side::Both)
}

/// Like [`strip_items`], leading end only
pub fn lstrip_items<S: AsRef<str>>(items: &[S], chars: Option<&str>) -> Vec<String> {
    strip_with(items, chars, Side::Leading)
}

/// Like [`strip_items`], trailing end only
pub fn rstrip_items<S: AsRef<str>>(items: &[S], chars: Option<&str>) -> Vec<String> {
    strip_with(items, chars, Side::Trailing)
}

/// Strip whitespace, then one matching pair of surrounding quotes
///
/// `'a'` and `"a"` both become `a`; mismatched quotes such as `'a"` are
/// left as they are.
pub fn strip_quotes<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| unquote(item.as_ref().trim()).to_string())
        .collect()
}

fn unquote(item: &str) -> &str {
    for quote in ['"', '\''] {
        if item.len() >= 2 && item.starts_with(quote) && item.ends_with(quote) {
            return &item[1..item.len() - 1];
        }
    }
    item
}
