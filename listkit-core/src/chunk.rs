//! Fixed-size partitioning

use crate::error::{Error, Result};

/// Split items into consecutive chunks of at most `size` items
///
/// All chunks hold exactly `size` items except possibly the last, which holds
/// the remainder. Concatenating the chunks gives back the input. An empty
/// input yields no chunks at all, not a single empty one.
pub fn chunk<S: AsRef<str>>(items: &[S], size: usize) -> Result<Vec<Vec<String>>> {
    if size == 0 {
        return Err(Error::Validation(
            "chunk size must be greater than 0".to_string(),
        ));
    }

    Ok(items
        .chunks(size)
        .map(|group| group.iter().map(|s| s.as_ref().to_string()).collect())
        .collect())
}
