/// Count whitespace-delimited words in the buffer text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters in the buffer text. FLTK's TextBuffer stores exactly the
/// visible content with no implicit trailing terminator, so this is the
/// length of what the user sees.
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Render the status bar line for the given buffer text.
pub fn status_line(text: &str) -> String {
    format!(
        "Words: {} | Characters: {}",
        count_words(text),
        count_chars(text)
    )
}

/// Replace every literal occurrence of `search` in `text`. Case-sensitive,
/// no regex.
pub fn replace_all(text: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return text.to_string();
    }
    text.replace(search, replacement)
}

/// Byte ranges to mark as misspelled: for each whitespace-delimited token
/// containing any non-alphabetic character, the range of the token's first
/// occurrence in `text`. The scan restarts from the beginning for every
/// token, so a repeated flagged token always resolves to the same range.
/// This is a syntactic filter on token shape, not a dictionary lookup.
pub fn suspect_token_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    for token in text.split_whitespace() {
        if token.chars().all(|c| c.is_alphabetic()) {
            continue;
        }
        if let Some(start) = text.find(token) {
            ranges.push((start, start + token.len()));
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t  "), 0);
    }

    #[test]
    fn test_count_words_simple() {
        assert_eq!(count_words("the cat sat"), 3);
        assert_eq!(count_words("one"), 1);
    }

    #[test]
    fn test_count_words_collapses_whitespace() {
        assert_eq!(count_words("a   b\n\nc\td"), 4);
        assert_eq!(count_words("  leading and trailing  "), 3);
    }

    #[test]
    fn test_count_chars() {
        assert_eq!(count_chars(""), 0);
        assert_eq!(count_chars("hello"), 5);
        // Characters, not bytes
        assert_eq!(count_chars("héllo"), 5);
        // A user-typed trailing newline counts
        assert_eq!(count_chars("hi\n"), 3);
    }

    #[test]
    fn test_status_line_format() {
        assert_eq!(status_line(""), "Words: 0 | Characters: 0");
        assert_eq!(status_line("hello world"), "Words: 2 | Characters: 11");
    }

    #[test]
    fn test_replace_all_simple() {
        assert_eq!(
            replace_all("the cat sat on the cat", "cat", "dog"),
            "the dog sat on the dog"
        );
    }

    #[test]
    fn test_replace_all_no_match() {
        assert_eq!(replace_all("hello world", "paper", "pixels"), "hello world");
    }

    #[test]
    fn test_replace_all_is_case_sensitive() {
        assert_eq!(replace_all("Cat cat CAT", "cat", "dog"), "Cat dog CAT");
    }

    #[test]
    fn test_replace_all_empty_search() {
        assert_eq!(replace_all("hello", "", "x"), "hello");
    }

    #[test]
    fn test_suspect_tokens_flags_punctuation_and_digits() {
        let ranges = suspect_token_ranges("hello, world 123");
        // "hello," and "123" are flagged, "world" is not
        assert_eq!(ranges, vec![(0, 6), (13, 16)]);
    }

    #[test]
    fn test_suspect_tokens_all_clean() {
        assert!(suspect_token_ranges("every word here is alphabetic").is_empty());
    }

    #[test]
    fn test_suspect_tokens_repeated_token_hits_first_occurrence() {
        // Both "a1" tokens resolve to the first occurrence's range.
        let ranges = suspect_token_ranges("a1 b a1");
        assert_eq!(ranges, vec![(0, 2), (0, 2)]);
    }

    #[test]
    fn test_suspect_tokens_empty_text() {
        assert!(suspect_token_ranges("").is_empty());
    }
}
