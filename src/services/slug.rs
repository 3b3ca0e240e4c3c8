use unicode_normalization::UnicodeNormalization;

pub const MAX_SLUG_LENGTH: usize = 100;

/// Removed by plain substring replacement, in this order.
///
/// The space-bounded words only match text that still contains spaces,
/// which hyphenation has already replaced by the time they run. Existing
/// BIII links depend on this exact sequence, duplicate `";"` included.
#[rustfmt::skip]
const TOKENS_TO_REMOVE: &[&str] = &[
    "(", ")", "{", "}", "[", "]",
    ".", ",", ";", ";",
    "&", "*", "@", "!", "$", "%", "~", "`",
    " a ",
    " an ",
    " as ",
    " at ",
    " before ",
    " but ",
    " by ",
    " for ",
    " from ",
    " is ",
    " in ",
    " into ",
    " like ",
    " of ",
    " off ",
    " on ",
    " onto ",
    " per ",
    " since ",
    " than ",
    " the ",
    " this ",
    " that ",
    " to ",
    " up ",
    " via ",
    " with ",
];

/// Derives the BIII short-link path segment from an entry title.
///
/// The site addresses entries by a slug of their title, so the link can be
/// rebuilt locally instead of asking the index for it. The result is
/// lowercase ASCII, at most [`MAX_SLUG_LENGTH`] characters, and possibly
/// empty.
pub fn slugify(title: &str) -> String {
    let mut slug = title.replace(' ', "-").to_lowercase();

    for token in TOKENS_TO_REMOVE {
        slug = slug.replace(token, "");
        slug = strip_leading_word(slug, token.trim());
    }

    let ascii: String = slug.nfd().filter(char::is_ascii).collect();
    let trimmed = ascii.trim_matches(|c: char| c <= ' ');

    // ASCII only from here, so byte and char offsets agree.
    trimmed[..trimmed.len().min(MAX_SLUG_LENGTH)].to_string()
}

/// Drops `word` followed by a single space from the front of `slug`.
fn strip_leading_word(slug: String, word: &str) -> String {
    match slug.strip_prefix(word).and_then(|rest| rest.strip_prefix(' ')) {
        Some(rest) => rest.to_string(),
        None => slug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_word_requires_trailing_space() {
        assert_eq!(strip_leading_word("the cell".to_string(), "the"), "cell");
        assert_eq!(strip_leading_word("theory".to_string(), "the"), "theory");
        assert_eq!(strip_leading_word("the-cell".to_string(), "the"), "the-cell");
    }

    #[test]
    fn test_token_list_keeps_duplicate_semicolon() {
        assert_eq!(TOKENS_TO_REMOVE.iter().filter(|t| **t == ";").count(), 2);
        assert_eq!(TOKENS_TO_REMOVE.len(), 45);
    }
}
