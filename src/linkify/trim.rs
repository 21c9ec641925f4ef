//! Trailing whitespace trimming.

/// Whether a UTF-16 code unit is trimmed: space and every control character below it.
pub(crate) fn is_trimmable(unit: u16) -> bool {
    unit <= u16::from(b' ')
}

/// Trims trailing whitespace and control characters (everything `<= ' '`).
///
/// Similar to [`str::trim_end`] but limited to the ASCII range, so non-breaking
/// and other Unicode spaces are kept. When nothing is trimmed the returned slice
/// is the input itself.
pub fn trim_end(text: &str) -> &str {
    text.trim_end_matches(|c: char| c <= ' ')
}

/// Returns the length of `units` once trailing trimmable code units are dropped.
pub(crate) fn trimmed_len(units: &[u16]) -> usize {
    units
        .iter()
        .rposition(|&unit| !is_trimmable(unit))
        .map_or(0, |last| last + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_TEXT: &str = "just setting up my twttr";

    #[test]
    fn test_trim_end_without_trailing_space() {
        let result = trim_end(BASE_TEXT);
        assert!(std::ptr::eq(result, BASE_TEXT));
    }

    #[test]
    fn test_trim_end_with_trailing_space() {
        let text = format!("{}\n\r\t ", BASE_TEXT);
        let result = trim_end(&text);
        assert_eq!(result, BASE_TEXT);
        assert_ne!(result.len(), text.len());
    }

    #[test]
    fn test_trim_end_is_idempotent() {
        for text in ["", "   ", "a \u{0}\u{1f}", " leading kept", "x\u{a0}"] {
            let once = trim_end(text);
            assert_eq!(trim_end(once), once);
        }
        assert_eq!(trim_end(" leading kept \u{7}"), " leading kept");
        // No-break space is above ' ' and survives
        assert_eq!(trim_end("x\u{a0}"), "x\u{a0}");
        assert_eq!(trim_end("   "), "");
    }

    #[test]
    fn test_trimmed_len() {
        let units: Vec<u16> = "ab \t\r\n".encode_utf16().collect();
        assert_eq!(trimmed_len(&units), 2);
        assert_eq!(trimmed_len(&[]), 0);
        assert_eq!(trimmed_len(&[0x20, 0x0A]), 0);
    }
}
