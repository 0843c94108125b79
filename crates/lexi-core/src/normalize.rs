use lexi_types::WordKey;
use unicode_normalization::UnicodeNormalization;

/// Canonical lookup key for a raw word.
///
/// Whitespace-only input gives an empty key, callers drop those before dispatch.
pub fn normalize(raw: &str) -> WordKey {
    // NFKC first: compatibility mappings can expand into leading spaces ("´" -> " \u{301}").
    // The second pass keeps case mappings in normal form.
    let folded: String = raw
        .nfkc()
        .flat_map(char::to_lowercase)
        .nfkc()
        .collect();

    // Only the tail is stripped, "e.g." keeps its inner dot
    let text = folded
        .trim_start()
        .trim_end_matches(|c: char| is_trailing_punctuation(c) || c.is_whitespace());

    if text.is_empty() {
        return WordKey::default();
    }

    WordKey::from_normalized(text.to_string())
}

fn is_trailing_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '。' | '、' | '」' | '』' | '…' | '«' | '»' | '“' | '”' | '‘' | '’' | '¡' | '¿'
        )
}
