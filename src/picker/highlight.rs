// Match-span location for result name highlighting

use std::ops::Range;

/// Locate the first case-insensitive occurrence of `query` within `name`.
///
/// Returns the byte range of the matching span in the original string, so
/// the caller can emphasize it while preserving the original casing. The
/// scan compares case-folded characters rather than indexing into a
/// lowercased copy, which keeps the offsets valid for multi-byte names.
pub fn match_span(name: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    for (start, _) in name.char_indices() {
        if let Some(len) = case_insensitive_prefix_len(&name[start..], &needle) {
            return Some(start..start + len);
        }
    }
    None
}

/// Byte length of the shortest prefix of `haystack` whose lowercase form
/// equals `needle` (already lowercased). None if no such prefix exists.
fn case_insensitive_prefix_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut needle_chars = needle.chars();
    let mut pending = needle_chars.next();
    for (offset, ch) in haystack.char_indices() {
        for lowered in ch.to_lowercase() {
            match pending {
                Some(expected) if expected == lowered => pending = needle_chars.next(),
                // Mismatch, or the needle ended mid-character: a span cannot
                // split a source character.
                _ => return None,
            }
        }
        if pending.is_none() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_at_start() {
        assert_eq!(match_span("Rick Sanchez", "Rick"), Some(0..4));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(match_span("Rick Sanchez", "rick"), Some(0..4));
        assert_eq!(match_span("Morty Smith", "MORTY"), Some(0..5));
    }

    #[test]
    fn test_first_occurrence_wins() {
        // "ri" appears in both words; the span must cover the first one
        assert_eq!(match_span("Rick Rickson", "ri"), Some(0..2));
    }

    #[test]
    fn test_match_in_the_middle() {
        assert_eq!(match_span("Pickle Rick", "rick"), Some(7..11));
    }

    #[test]
    fn test_no_occurrence() {
        assert_eq!(match_span("Birdperson", "zzz"), None);
    }

    #[test]
    fn test_empty_query_never_matches() {
        assert_eq!(match_span("Rick Sanchez", ""), None);
    }

    #[test]
    fn test_span_preserves_original_casing() {
        let name = "SEAL Team Rick";
        let span = match_span(name, "seal").unwrap();
        assert_eq!(&name[span], "SEAL");
    }

    #[test]
    fn test_multibyte_name_does_not_panic() {
        // 'é' is two bytes; offsets must stay on char boundaries
        let name = "Glootie né Zarbadar";
        let span = match_span(name, "né").unwrap();
        assert_eq!(&name[span], "né");
    }
}
