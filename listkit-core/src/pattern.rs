//! Glob and regular-expression filtering
//!
//! Patterns are compiled once into a [`PatternSet`] before any item is
//! looked at. A set matches an item when any of its patterns matches the
//! whole item.

use crate::error::{Error, Result};
use regex::Regex;

/// Which pattern syntax a set of pattern strings is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternSyntax {
    /// Shell-style wildcards: `*`, `?`, `[...]`, `[!...]`
    #[default]
    Glob,
    /// Regular expressions, matched against the full item
    Regex,
}

impl PatternSyntax {
    /// Lowercase name of the syntax
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternSyntax::Glob => "glob",
            PatternSyntax::Regex => "regex",
        }
    }
}

/// Whether matching items are kept or dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterMode {
    /// Keep only items matching at least one pattern
    #[default]
    Include,
    /// Keep only items matching no pattern
    Exclude,
}

impl FilterMode {
    /// Whether an item with the given match status survives the filter
    pub fn keeps(&self, matched: bool) -> bool {
        match self {
            FilterMode::Include => matched,
            FilterMode::Exclude => !matched,
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Glob(Regex),
    Regex(Regex),
}

impl Matcher {
    fn compile(pattern: &str, syntax: PatternSyntax) -> Result<Self> {
        match syntax {
            PatternSyntax::Glob => {
                let translated = translate_glob(pattern).map_err(|e| pattern_error(pattern, e))?;
                Regex::new(&translated)
                    .map(Matcher::Glob)
                    .map_err(|e| pattern_error(pattern, e))
            }
            PatternSyntax::Regex => {
                // Check the pattern on its own first; wrapping an unbalanced
                // pattern in a group can turn it into a valid one.
                Regex::new(pattern).map_err(|e| pattern_error(pattern, e))?;
                Regex::new(&format!(r"\A(?:{pattern})\z"))
                    .map(Matcher::Regex)
                    .map_err(|e| pattern_error(pattern, e))
            }
        }
    }

    fn is_match(&self, item: &str) -> bool {
        match self {
            Matcher::Glob(regex) | Matcher::Regex(regex) => regex.is_match(item),
        }
    }
}

/// Translate a shell wildcard into an anchored regular expression
///
/// `*` matches any run of characters (runs of `*` act as one), `?` matches
/// one character, and `[...]` / `[!...]` match a character class. A `]`
/// directly after the opening bracket is a member of the class. Every other
/// character, `/` included, matches itself.
fn translate_glob(pattern: &str) -> std::result::Result<String, &'static str> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from(r"\A(?s:");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
                out.push_str(".*");
                i += 1;
            }
            '?' => {
                out.push('.');
                i += 1;
            }
            '[' => {
                i = translate_class(&chars, i, &mut out)?;
            }
            c => {
                push_escaped(&mut out, c);
                i += 1;
            }
        }
    }

    out.push_str(r")\z");
    Ok(out)
}

/// Translate the class opening at `start`, returning the index past its `]`
fn translate_class(
    chars: &[char],
    start: usize,
    out: &mut String,
) -> std::result::Result<usize, &'static str> {
    let mut j = start + 1;
    let negated = chars.get(j) == Some(&'!');
    if negated {
        j += 1;
    }

    let body_start = j;
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    if j >= chars.len() {
        return Err("unterminated character class");
    }

    let body = &chars[body_start..j];
    out.push('[');
    if negated {
        out.push('^');
    }

    let mut k = 0;
    while k < body.len() {
        if k + 2 < body.len() && body[k + 1] == '-' {
            push_escaped(out, body[k]);
            out.push('-');
            push_escaped(out, body[k + 2]);
            k += 3;
        } else {
            push_escaped(out, body[k]);
            k += 1;
        }
    }
    out.push(']');

    Ok(j + 1)
}

fn push_escaped(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

fn pattern_error(pattern: &str, reason: impl ToString) -> Error {
    Error::Pattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

/// A compiled, non-empty set of patterns sharing one syntax
#[derive(Debug, Clone)]
pub struct PatternSet {
    matchers: Vec<Matcher>,
    syntax: PatternSyntax,
}

impl PatternSet {
    /// Compile every pattern, failing on the first one that does not compile
    ///
    /// An empty pattern list is rejected: include-nothing and exclude-nothing
    /// are not guessed.
    pub fn new<P: AsRef<str>>(patterns: &[P], syntax: PatternSyntax) -> Result<Self> {
        if patterns.is_empty() {
            return Err(Error::Validation(
                "at least one pattern is required".to_string(),
            ));
        }

        Self::compile(patterns, syntax)
    }

    fn compile<P: AsRef<str>>(patterns: &[P], syntax: PatternSyntax) -> Result<Self> {
        let matchers = patterns
            .iter()
            .map(|p| Matcher::compile(p.as_ref(), syntax))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { matchers, syntax })
    }

    /// Syntax the set was compiled with
    pub fn syntax(&self) -> PatternSyntax {
        self.syntax
    }

    /// Number of patterns in the set
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the set holds no patterns
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Whether any pattern matches the whole item
    pub fn is_match(&self, item: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(item))
    }

    /// Keep the items whose match status agrees with `mode`, in input order
    pub fn filter<S: AsRef<str>>(&self, items: &[S], mode: FilterMode) -> Vec<String> {
        items
            .iter()
            .map(AsRef::as_ref)
            .filter(|item| mode.keeps(self.is_match(item)))
            .map(str::to_string)
            .collect()
    }
}

/// Keep or drop items by glob or regex pattern
///
/// All patterns are compiled before matching starts; an invalid pattern
/// fails the whole call with [`Error::Pattern`] and an empty pattern list
/// fails with [`Error::Validation`].
pub fn filter_by_pattern<S, P>(
    items: &[S],
    patterns: &[P],
    mode: FilterMode,
    syntax: PatternSyntax,
) -> Result<Vec<String>>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    let set = PatternSet::new(patterns, syntax)?;
    Ok(set.filter(items, mode))
}

/// Whether any item matches any pattern
///
/// Unlike [`filter_by_pattern`] this is a query: with no patterns or no
/// items the answer is simply `false`.
pub fn any_match<S, P>(items: &[S], patterns: &[P], syntax: PatternSyntax) -> Result<bool>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    let set = PatternSet::compile(patterns, syntax)?;
    Ok(items.iter().any(|item| set.is_match(item.as_ref())))
}
