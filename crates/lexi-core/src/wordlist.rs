use std::collections::{BTreeSet, HashSet};

use lexi_types::WordKey;

use crate::normalize::normalize;

/// Normalize raw words into a lookup set, dropping blanks
pub fn normalize_set<I, S>(raw: I) -> HashSet<WordKey>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|word| normalize(word.as_ref()))
        .filter(|key| !key.is_empty())
        .collect()
}

/// Distinct, non-empty keys of `raw` that are not in `exclude`.
///
/// `exclude` is expected to hold already known and blacklisted words, normalized with
/// [`normalize_set`].
pub fn prepare_words<I, S>(raw: I, exclude: &HashSet<WordKey>) -> BTreeSet<WordKey>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = 0usize;
    let words: BTreeSet<WordKey> = raw
        .into_iter()
        .inspect(|_| total += 1)
        .map(|word| normalize(word.as_ref()))
        .filter(|key| !key.is_empty() && !exclude.contains(key))
        .collect();

    tracing::debug!(
        "Prepared {} distinct new words from {} raw entries",
        words.len(),
        total
    );

    words
}
