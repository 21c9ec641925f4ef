//! Detection of the trailing entity that should be hidden from the rendered text.
//!
//! A Tweet rendered with its photo, quoted Tweet or Vine card shown inline does not
//! need the trailing link to that content. Only the last entity can ever qualify.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use super::entity::FormattedEntity;

/// Left-to-right mark some clients append to right-to-left Tweets
const LTR_MARKER: char = '\u{200E}';

static QUOTED_STATUS_URL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^https?://twitter\.com(/#!)?/[A-Za-z0-9_]+/status/[0-9]+$").ok()
});

static VINE_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^https?://vine\.co(/#!)?/v/[A-Za-z0-9_]+$").ok());

/// Returns the entity to elide from the rendered text, if any.
///
/// The candidate is the last entity of `combined` (which must already be sorted).
/// It is stripped only when the text, minus a trailing LTR marker, ends with the
/// entity's literal url, and the entity is a photo, or a quoted status link while
/// `strip_quote_tweet` is set, or a Vine link while `strip_vine_card` is set.
pub fn get_entity_to_strip<'a>(
    text: &str,
    combined: &'a [FormattedEntity],
    strip_quote_tweet: bool,
    strip_vine_card: bool,
) -> Option<&'a FormattedEntity> {
    let candidate = combined.last()?;

    if !strip_ltr_marker(text).ends_with(candidate.url.as_str()) {
        return None;
    }

    if candidate.is_photo()
        || (strip_quote_tweet && is_quoted_status(candidate))
        || (strip_vine_card && is_vine_card(candidate))
    {
        debug!(
            "Stripping trailing entity {} at [{}, {})",
            candidate.url, candidate.start, candidate.end
        );
        Some(candidate)
    } else {
        None
    }
}

/// Removes a single trailing left-to-right mark.
pub fn strip_ltr_marker(text: &str) -> &str {
    text.strip_suffix(LTR_MARKER).unwrap_or(text)
}

/// Whether the expanded url is a permalink to another status.
pub fn is_quoted_status(entity: &FormattedEntity) -> bool {
    matches_expanded_url(&QUOTED_STATUS_URL, entity)
}

/// Whether the expanded url points to a Vine.
pub fn is_vine_card(entity: &FormattedEntity) -> bool {
    matches_expanded_url(&VINE_URL, entity)
}

fn matches_expanded_url(pattern: &LazyLock<Option<Regex>>, entity: &FormattedEntity) -> bool {
    match (pattern.as_ref(), entity.expanded_url.as_deref()) {
        (Some(re), Some(expanded_url)) => re.is_match(expanded_url),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkify::entity::EntityKind;

    const BASE_TEXT: &str = "just setting up my twttr";
    const TEST_RTL_STRING: &str = "ייִדיש משלי https://t.co/sfb4Id7esk\u{200E}";

    fn url_entity(url: &str, expanded_url: &str, display_url: &str) -> FormattedEntity {
        FormattedEntity::new(
            50,
            72,
            EntityKind::Url,
            display_url,
            url,
            Some(expanded_url.to_string()),
        )
    }

    fn photo_entity(url: &str) -> FormattedEntity {
        FormattedEntity::new(
            27,
            49,
            EntityKind::Media {
                media_type: "photo".to_string(),
            },
            "pic.twitter.com/abc",
            url,
            None,
        )
    }

    #[test]
    fn test_strip_ltr_marker() {
        let result = strip_ltr_marker(TEST_RTL_STRING);
        assert_ne!(result, TEST_RTL_STRING);
        assert!(!result.ends_with(LTR_MARKER));
        assert!(result.ends_with("https://t.co/sfb4Id7esk"));
    }

    #[test]
    fn test_strip_ltr_marker_without_marker() {
        assert_eq!(strip_ltr_marker(BASE_TEXT), BASE_TEXT);
    }

    #[test]
    fn test_strip_ltr_marker_removes_only_one() {
        assert_eq!(strip_ltr_marker("abc\u{200E}\u{200E}"), "abc\u{200E}");
    }

    #[test]
    fn test_is_quoted_status() {
        let entity = url_entity(
            "https://t.co/kMXdOEnVMg",
            "https://twitter.com/nasajpl/status/634475698174865408",
            "twitter.com/nasajpl/status\u{2026}",
        );
        assert!(is_quoted_status(&entity));
        assert!(!is_vine_card(&entity));
    }

    #[test]
    fn test_is_quoted_status_variants() {
        let legacy = url_entity("u", "http://twitter.com/#!/jack/status/20", "d");
        assert!(is_quoted_status(&legacy));

        let trailing_path = url_entity("u", "https://twitter.com/jack/status/20/photo/1", "d");
        assert!(!is_quoted_status(&trailing_path));

        let other_host = url_entity("u", "https://example.com/jack/status/20", "d");
        assert!(!is_quoted_status(&other_host));

        let no_expanded = FormattedEntity::new(0, 1, EntityKind::Url, "d", "u", None);
        assert!(!is_quoted_status(&no_expanded));
    }

    #[test]
    fn test_is_vine_card() {
        let entity = url_entity(
            "https://t.co/NdpqweoNbi",
            "https://vine.co/v/eVmZVXbeDK1",
            "vine.co/v/eVmZVXbeDK1",
        );
        assert!(is_vine_card(&entity));
        assert!(!is_quoted_status(&entity));
    }

    #[test]
    fn test_strip_trailing_photo() {
        let text = "first link is a pictwitter http://t.co/PFHCdlr4i0";
        let combined = vec![photo_entity("http://t.co/PFHCdlr4i0")];
        assert_eq!(
            get_entity_to_strip(text, &combined, false, false),
            Some(&combined[0])
        );
    }

    #[test]
    fn test_photo_not_stripped_from_middle() {
        let text = "first link is a pictwitter http://t.co/PFHCdlr4i0 http://t.co/V3hLRdFdeN final text";
        let url = FormattedEntity::new(
            50,
            72,
            EntityKind::Url,
            "example.com",
            "http://t.co/V3hLRdFdeN",
            None,
        );
        let combined = vec![photo_entity("http://t.co/PFHCdlr4i0"), url];
        assert_eq!(get_entity_to_strip(text, &combined, true, true), None);
    }

    #[test]
    fn test_strip_quote_tweet_flag() {
        let text = "Look at this https://t.co/kMXdOEnVMg\u{200E}";
        let combined = vec![url_entity(
            "https://t.co/kMXdOEnVMg",
            "https://twitter.com/nasajpl/status/634475698174865408",
            "twitter.com/nasajpl/status\u{2026}",
        )];

        assert_eq!(
            get_entity_to_strip(text, &combined, true, false),
            Some(&combined[0])
        );
        assert_eq!(get_entity_to_strip(text, &combined, false, true), None);
    }

    #[test]
    fn test_strip_vine_card_flag() {
        let text = "Vine https://t.co/NdpqweoNbi";
        let combined = vec![url_entity(
            "https://t.co/NdpqweoNbi",
            "https://vine.co/v/eVmZVXbeDK1",
            "vine.co/v/eVmZVXbeDK1",
        )];

        assert_eq!(
            get_entity_to_strip(text, &combined, false, true),
            Some(&combined[0])
        );
        assert_eq!(get_entity_to_strip(text, &combined, true, false), None);
    }

    #[test]
    fn test_no_entities_no_strip() {
        assert_eq!(get_entity_to_strip(BASE_TEXT, &[], true, true), None);
    }
}
