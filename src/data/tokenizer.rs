// ============================================================
// Layer 4: Tokenizer
// ============================================================
// Presence, not frequency, is the feature in a multi-variate
// Bernoulli model, so a document reduces to the *set* of its
// whitespace-delimited words.
//
// Whitespace is the C-locale set (space, \t, \n, \v, \f, \r).
// Every other byte belongs to a token, including the bytes of
// non-ASCII spaces and bytes that are not valid UTF-8.
// No case folding and no punctuation stripping.
//
// Reference: Rust Book §8.2 (Slicing and iterating over bytes)

use std::collections::BTreeSet;

/// A token is an arbitrary byte string
pub type Token = Vec<u8>;

/// The six bytes the classic `isspace` accepts.
/// `u8::is_ascii_whitespace` leaves out vertical tab, hence the match.
fn is_separator(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Split `text` on runs of whitespace and collect the unique tokens.
///
/// Total and pure: empty or all-whitespace input gives an empty set.
///
/// ```text
/// tokenize(b"the cat  the\tdog") == {"cat", "dog", "the"}
/// ```
pub fn tokenize(text: &[u8]) -> BTreeSet<Token> {
    text.split(is_separator)
        .filter(|fragment| !fragment.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<Token> {
        words.iter().map(|w| w.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(tokenize(b"dog cat dog dog"), set(&["cat", "dog"]));
    }

    #[test]
    fn test_runs_of_mixed_whitespace() {
        assert_eq!(
            tokenize(b"  a\t\tb\r\nc\x0Bd\x0Ce  "),
            set(&["a", "b", "c", "d", "e"])
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize(b"").is_empty());
        assert!(tokenize(b" \t\n ").is_empty());
    }

    #[test]
    fn test_no_normalisation() {
        // Case and punctuation are part of the token
        assert_eq!(tokenize(b"Cat cat cat."), set(&["Cat", "cat", "cat."]));
    }

    #[test]
    fn test_non_ascii_space_is_not_a_separator() {
        assert_eq!(tokenize("a\u{00A0}b".as_bytes()), set(&["a\u{00A0}b"]));
    }

    #[test]
    fn test_invalid_utf8_bytes_are_kept_verbatim() {
        let tokens = tokenize(b"caf\xe9 dog \x80");
        let expected: BTreeSet<Token> =
            [b"caf\xe9".to_vec(), b"dog".to_vec(), vec![0x80]].into_iter().collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_distinct_invalid_bytes_stay_distinct() {
        assert_eq!(tokenize(b"\xe9 \xe8").len(), 2);
    }

    #[test]
    fn test_idempotent_on_joined_output() {
        let first  = tokenize(b"x  y z\ty x \xff");
        let joined = first.iter().cloned().collect::<Vec<_>>().join(&b' ');
        assert_eq!(tokenize(&joined), first);
    }
}
