//! Preparation of a Tweet's text and entities for linkifying.
//!
//! API offsets are counted in code points over the HTML-escaped text, while the
//! renderer works in UTF-16 code units over the unescaped text. Formatting
//! unescapes the text and shifts every entity to match.

use log::debug;

use super::html::{unescape, EscapedRange};
use crate::linkify::FormattedEntity;
use crate::twitter::Tweet;

/// Tweet text together with its entities, with offsets valid for `text`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedTweetText {
    pub text: Option<String>,
    pub url_entities: Vec<FormattedEntity>,
    pub media_entities: Vec<FormattedEntity>,
    pub hashtag_entities: Vec<FormattedEntity>,
    pub mention_entities: Vec<FormattedEntity>,
    pub symbol_entities: Vec<FormattedEntity>,
}

impl FormattedTweetText {
    /// Creates a formatted text without entities.
    pub fn new(text: impl Into<String>) -> Self {
        FormattedTweetText {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    fn entity_lists_mut(&mut self) -> [&mut Vec<FormattedEntity>; 5] {
        [
            &mut self.url_entities,
            &mut self.media_entities,
            &mut self.hashtag_entities,
            &mut self.mention_entities,
            &mut self.symbol_entities,
        ]
    }
}

/// Formats a Tweet's text and entities for rendering.
///
/// The result should be cached by the caller; formatting walks the whole text and
/// every entity.
pub fn format_tweet_text(tweet: Option<&Tweet>) -> Option<FormattedTweetText> {
    let tweet = tweet?;

    let mut formatted = FormattedTweetText::default();
    convert_entities(&mut formatted, tweet);
    format(&mut formatted, tweet);

    Some(formatted)
}

/// Populates the formatted entity lists from the Tweet's entities.
pub fn convert_entities(formatted: &mut FormattedTweetText, tweet: &Tweet) {
    if let Some(entities) = &tweet.entities {
        formatted
            .url_entities
            .extend(entities.urls.iter().map(FormattedEntity::from_url));
        formatted
            .hashtag_entities
            .extend(entities.hashtags.iter().map(FormattedEntity::from_hashtag));
        formatted
            .mention_entities
            .extend(entities.user_mentions.iter().map(FormattedEntity::from_mention));
        formatted
            .symbol_entities
            .extend(entities.symbols.iter().map(FormattedEntity::from_symbol));
    }

    formatted
        .media_entities
        .extend(tweet.media().iter().map(FormattedEntity::from_media));
}

/// Unescapes the Tweet text and fixes the entity offsets accordingly.
///
/// Empty or missing text leaves `formatted.text` untouched.
pub fn format(formatted: &mut FormattedTweetText, tweet: &Tweet) {
    let text = match tweet.display_text() {
        Some(text) if !text.is_empty() => text,
        _ => return,
    };

    let unescaped = unescape(text);
    debug!(
        "Unescaped {} HTML references in Tweet {}",
        unescaped.indices.len(),
        tweet.id
    );

    for entities in formatted.entity_lists_mut() {
        adjust_indices_for_escaped_chars(entities, &unescaped.indices);
    }
    adjust_indices_for_supplementary_chars(&unescaped.unescaped, formatted);

    formatted.text = Some(unescaped.unescaped);
}

/// Shifts entities left by the code units removed by unescaping.
///
/// An entity moves by every escape that ends before its start plus every escape
/// that ends inside it. Both `entities` and `indices` are sorted by position.
pub fn adjust_indices_for_escaped_chars(
    entities: &mut [FormattedEntity],
    indices: &[EscapedRange],
) {
    if indices.is_empty() {
        return;
    }

    // Escapes before the marker lie before every remaining entity
    let mut marker = 0;
    let mut diff: i64 = 0;

    for entity in entities.iter_mut() {
        let mut in_diff: i64 = 0;
        for escaped in &indices[marker..] {
            let end = escaped.end as i64;
            if end < i64::from(entity.start) {
                diff += escaped.removed as i64;
                marker += 1;
            } else if end < i64::from(entity.end) {
                in_diff += escaped.removed as i64;
            }
        }

        entity.start = shift(entity.start, -(diff + in_diff));
        entity.end = shift(entity.end, -(diff + in_diff));
    }
}

/// Moves entities right by one for every surrogate pair at or before their start.
///
/// The API counts a supplementary character (most emoji) as one position, but it
/// takes two UTF-16 code units.
pub fn adjust_indices_for_supplementary_chars(content: &str, formatted: &mut FormattedTweetText) {
    let mut high_surrogate_indices = Vec::new();
    let mut position = 0;
    for c in content.chars() {
        if c.len_utf16() == 2 {
            high_surrogate_indices.push(position);
        }
        position += c.len_utf16();
    }

    for entities in formatted.entity_lists_mut() {
        adjust_entities_with_offsets(entities, &high_surrogate_indices);
    }
}

/// Shifts each entity by the number of `indices` (UTF-16 positions) that fall at or
/// before its start once earlier shifts are taken into account.
pub fn adjust_entities_with_offsets(entities: &mut [FormattedEntity], indices: &[usize]) {
    for entity in entities.iter_mut() {
        let start = i64::from(entity.start);
        let mut offset: i64 = 0;
        for &index in indices {
            if index as i64 - offset <= start {
                offset += 1;
            } else {
                break;
            }
        }

        entity.start = shift(entity.start, offset);
        entity.end = shift(entity.end, offset);
    }
}

fn shift(value: i32, by: i64) -> i32 {
    let shifted = i64::from(value) + by;
    shifted.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkify::EntityKind;
    use crate::twitter::{TweetEntities, UrlEntity};

    const UNESCAPED_TWEET_TEXT: &str = ">Hello there <\"What is a?\" &;";
    const ESCAPED_TWEET_TEXT: &str = "&gt;Hello there &lt;&quot;What is a?&quot; &;";
    const ESCAPED_TWEET_TEXT_WITH_EMOJI: &str =
        "\u{1F469}\u{1F3FD}\u{200D}\u{1F4BB}, community \u{1F493} &amp; https://t.co/oCkwy2C80m";

    fn url_entity(start: i32, end: i32) -> FormattedEntity {
        FormattedEntity::new(
            start,
            end,
            EntityKind::Url,
            "",
            "http://t.co/x",
            None,
        )
    }

    fn tweet_with_text(text: &str) -> Tweet {
        Tweet {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn positions(entities: &[FormattedEntity]) -> Vec<(i32, i32)> {
        entities.iter().map(|e| (e.start, e.end)).collect()
    }

    #[test]
    fn test_format_single_escaping() {
        let mut formatted = FormattedTweetText {
            url_entities: vec![
                url_entity(4, 8),   // Hello
                url_entity(10, 14), // There
                url_entity(26, 29), // What
                url_entity(31, 32), // is
                url_entity(34, 34), // a
            ],
            ..Default::default()
        };

        format(&mut formatted, &tweet_with_text(ESCAPED_TWEET_TEXT));

        assert_eq!(formatted.text.as_deref(), Some(UNESCAPED_TWEET_TEXT));
        assert_eq!(
            positions(&formatted.url_entities),
            vec![(1, 5), (7, 11), (15, 18), (20, 21), (23, 23)]
        );
    }

    #[test]
    fn test_format_html_entity_edge_cases() {
        let cases = [
            ("&amp;", "&"),
            ("&#;", "&#;"),
            ("&#34;", "\""),
            ("&#x22;", "\""),
            ("&lt; & Larry &gt; &", "< & Larry > &"),
            ("&&amp;", "&&"),
            ("&&&&&&&&amp;", "&&&&&&&&"),
            ("&&&&gt&&lt&&amplt;", "&&&&gt&&lt&&amplt;"),
        ];

        for (escaped, expected) in cases {
            let mut formatted = FormattedTweetText::default();
            format(&mut formatted, &tweet_with_text(escaped));
            assert_eq!(formatted.text.as_deref(), Some(expected), "input: {}", escaped);
        }
    }

    #[test]
    fn test_format_with_emoji_and_escaped_html() {
        let mut formatted = FormattedTweetText {
            url_entities: vec![url_entity(24, 47)],
            ..Default::default()
        };

        format(&mut formatted, &tweet_with_text(ESCAPED_TWEET_TEXT_WITH_EMOJI));

        assert_eq!(positions(&formatted.url_entities), vec![(24, 47)]);
        let text = formatted.text.unwrap();
        let units: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(
            String::from_utf16_lossy(&units[24..47]),
            "https://t.co/oCkwy2C80m"
        );
    }

    #[test]
    fn test_adjust_entities_with_offsets() {
        // Two emoji before the entity, one after it
        let mut entities = vec![url_entity(3, 5)];
        adjust_entities_with_offsets(&mut entities, &[0, 3, 9]);
        assert_eq!(positions(&entities), vec![(5, 7)]);
    }

    #[test]
    fn test_format_empty_and_missing_text() {
        let mut formatted = FormattedTweetText::default();
        format(&mut formatted, &tweet_with_text(""));
        assert_eq!(formatted.text, None);

        // Text set by the caller is kept
        let mut formatted = FormattedTweetText::new("kept");
        format(&mut formatted, &tweet_with_text(""));
        assert_eq!(formatted.text.as_deref(), Some("kept"));

        let mut formatted = FormattedTweetText::default();
        format(&mut formatted, &Tweet::default());
        assert_eq!(formatted.text, None);
    }

    #[test]
    fn test_format_tweet_text() {
        assert_eq!(format_tweet_text(None), None);

        let tweet = Tweet {
            text: Some("AT&amp;T https://t.co/a".to_string()),
            entities: Some(TweetEntities {
                urls: vec![UrlEntity {
                    url: "https://t.co/a".to_string(),
                    expanded_url: Some("https://att.com".to_string()),
                    display_url: "att.com".to_string(),
                    indices: [9, 23],
                }],
                ..Default::default()
            }),
            ..Default::default()
        };

        let formatted = format_tweet_text(Some(&tweet)).unwrap();
        assert_eq!(formatted.text.as_deref(), Some("AT&T https://t.co/a"));
        assert_eq!(positions(&formatted.url_entities), vec![(5, 19)]);
        assert_eq!(formatted.url_entities[0].display_url, "att.com");
    }
}
