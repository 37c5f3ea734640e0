//! Pure transformations over ordered sequences of strings
//!
//! Every operation borrows its input, never mutates it, and returns a newly
//! built vector. There is no shared state and nothing to initialise, so the
//! functions can be called from any thread.
//!
//! # Operations
//!
//! - [`deduplicate`]: drop repeats, first occurrence wins
//! - [`filter_by_pattern`]: keep or drop items by glob or regex
//! - [`strip_items`]: trim characters from both ends of each item
//! - [`chunk`]: split into fixed-size groups
//!
//! # Example
//!
//! ```rust
//! use listkit_core::{chunk, deduplicate, filter_by_pattern, FilterMode, PatternSyntax};
//!
//! let files = ["report.txt", "image.png", "notes.txt", "report.txt"];
//!
//! let unique = deduplicate(&files);
//! let texts = filter_by_pattern(&unique, &["*.txt"], FilterMode::Include, PatternSyntax::Glob)
//!     .unwrap();
//! assert_eq!(texts, vec!["report.txt", "notes.txt"]);
//!
//! let groups = chunk(&unique, 2).unwrap();
//! assert_eq!(groups, vec![vec!["report.txt", "image.png"], vec!["notes.txt"]]);
//! ```

#![warn(missing_docs)]

pub mod case;
pub mod chunk;
pub mod contains;
pub mod dedup;
pub mod error;
pub mod pattern;
pub mod sequence;
pub mod strip;

pub use case::{contains_ignore_case, deduplicate_lowercase, to_lowercase};
pub use chunk::chunk;
pub use contains::{any_contains, filter_contains, remove_containing};
pub use dedup::deduplicate;
pub use error::{Error, Result};
pub use pattern::{any_match, filter_by_pattern, FilterMode, PatternSet, PatternSyntax};
pub use sequence::{
    collect_non_empty, quote_if_contains_blank, remove_empty, replace_in_items, subtract_all,
    subtract_once, trim, trim_end, trim_start,
};
pub use strip::{lstrip_items, rstrip_items, strip_items, strip_quotes};
