//! HTML entity unescaping for Tweet text.
//!
//! The API returns Tweet text with `&`, `<` and `>` escaped. Unescaping shortens
//! the text, so every replaced escape is reported with its position in order to
//! shift entity offsets afterwards.

use html_escape::decode_html_entities;

/// One escape sequence that was replaced while unescaping.
///
/// `start` and `end` are UTF-16 code unit offsets into the escaped text; `end` is
/// inclusive and points at the terminating `;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapedRange {
    pub start: usize,
    pub end: usize,
    /// Number of code units the text shrank by
    pub removed: usize,
}

/// Result of [`unescape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unescaped {
    pub unescaped: String,
    pub indices: Vec<EscapedRange>,
}

/// Unescapes named, decimal and hexadecimal HTML references.
///
/// Named references are resolved with `html_escape`, which knows the whole HTML
/// entity set. Numeric references are parsed here so that out-of-range values
/// stay in the text. Anything that is not a complete, known reference is copied unchanged: unknown
/// names, `&#;`, out-of-range code points, and an `&` with no `;` after it or with
/// another `&` before the `;`.
pub fn unescape(text: &str) -> Unescaped {
    let mut unescaped = String::with_capacity(text.len());
    let mut indices = Vec::new();
    // Position in the escaped text, in UTF-16 code units
    let mut position = 0;
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        let (before, after) = rest.split_at(amp);
        unescaped.push_str(before);
        position += before.encode_utf16().count();

        match decode_reference(&after[1..]) {
            Some((name_len, value)) => {
                // '&' + name + ';', all ASCII
                let escaped_len = name_len + 2;
                indices.push(EscapedRange {
                    start: position,
                    end: position + escaped_len - 1,
                    removed: escaped_len - value.len_utf16(),
                });
                unescaped.push(value);
                position += escaped_len;
                rest = &after[escaped_len..];
            }
            None => {
                unescaped.push('&');
                position += 1;
                rest = &after[1..];
            }
        }
    }
    unescaped.push_str(rest);

    Unescaped {
        unescaped,
        indices,
    }
}

/// Decodes the reference following an `&`, returning the byte length of its name and its value.
fn decode_reference(after_amp: &str) -> Option<(usize, char)> {
    let semicolon = after_amp.find(';')?;
    if after_amp[..semicolon].contains('&') {
        return None;
    }

    let name = &after_amp[..semicolon];
    let value = match name.strip_prefix('#') {
        Some(number) => decode_numeric(number)?,
        None => lookup_name(name)?,
    };
    Some((semicolon, value))
}

fn decode_numeric(number: &str) -> Option<char> {
    let (digits, radix) = match number.strip_prefix(&['x', 'X'][..]) {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
}

/// Decodes a named reference; only names that stand for exactly one character count.
fn lookup_name(name: &str) -> Option<char> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let reference = format!("&{};", name);
    let decoded = decode_html_entities(&reference);
    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(value), None) => Some(value),
        _ => None,
    }
}
