//! Tweet text linkifying.
//!
//! Substitutes display urls in place of t.co links, strips the trailing photo,
//! quote Tweet or Vine card link, and marks every substituted entity as a
//! clickable span. The pipeline runs once per call:
//!
//! 1. [`merge_and_sort_entities`] combines the five entity lists.
//! 2. [`get_entity_to_strip`] picks the trailing entity to hide, if any.
//! 3. [`add_url_entities`] rewrites the text and collects the spans.
//! 4. Trailing whitespace is trimmed.
//!
//! Malformed entities never make the call fail; they are skipped.

mod entity;
mod merge;
mod span;
mod strip;
mod substitute;
mod trim;

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::color::Color;
use crate::config::LinkifyConfig;
use crate::text::{format_tweet_text, FormattedTweetText};
use crate::twitter::Tweet;

pub use entity::{EntityKind, FormattedEntity, PHOTO_TYPE};
pub use merge::merge_and_sort_entities;
pub use span::{ClickableLinkSpan, LinkClickListener};
pub use strip::{get_entity_to_strip, is_quoted_status, is_vine_card, strip_ltr_marker};
pub use substitute::add_url_entities;
pub use trim::trim_end;

/// Rendered Tweet text with its clickable spans.
///
/// The text is kept as UTF-16 code units; span ranges index into it.
#[derive(Debug, Clone, Default)]
pub struct LinkifiedText {
    units: Vec<u16>,
    spans: Vec<ClickableLinkSpan>,
}

impl LinkifiedText {
    /// Wraps text that has no spans.
    pub fn plain(text: &str) -> Self {
        LinkifiedText {
            units: text.encode_utf16().collect(),
            spans: Vec::new(),
        }
    }

    /// The rendered text; split surrogate pairs become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    pub fn as_utf16(&self) -> &[u16] {
        &self.units
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn spans(&self) -> &[ClickableLinkSpan] {
        &self.spans
    }

    /// Returns the spans overlapping `range`, like a span lookup on a styled text.
    pub fn spans_in(&self, range: Range<usize>) -> impl Iterator<Item = &ClickableLinkSpan> {
        self.spans
            .iter()
            .filter(move |span| span.range.start < range.end && range.start < span.range.end)
    }

    /// Returns the text in `range` (UTF-16 code units), or `None` when out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Option<String> {
        self.units.get(range).map(String::from_utf16_lossy)
    }

    /// Returns the text a span covers.
    pub fn span_text(&self, span: &ClickableLinkSpan) -> Option<String> {
        self.slice(span.range.clone())
    }

    /// Drops trailing whitespace and control characters, clipping the spans to the new length.
    pub fn trim_end(mut self) -> Self {
        let len = trim::trimmed_len(&self.units);
        if len == self.units.len() {
            return self;
        }

        self.units.truncate(len);
        self.spans.retain_mut(|span| {
            span.range.end = span.range.end.min(len);
            span.range.start < span.range.end
        });
        self
    }
}

impl fmt::Display for LinkifiedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Returns the Tweet text with display urls substituted in place of the t.co links.
///
/// The last photo entity, and the trailing quote Tweet and Vine card urls when the
/// matching flag is set, are stripped from the text. Returns `None` when there is no
/// formatted text or no text in it; empty text is returned unchanged.
///
/// # Parameters
///
/// - `tweet_text`: The formatted Tweet text and entities
/// - `listener`: Notified with the url when a span is clicked
/// - `link_color`: The link color
/// - `link_highlight_color`: The link background color when pressed
/// - `strip_quote_tweet`: Whether a trailing quote Tweet url is stripped
/// - `strip_vine_card`: Whether a trailing Vine card url is stripped
pub fn linkify_urls(
    tweet_text: Option<&FormattedTweetText>,
    listener: Option<Arc<dyn LinkClickListener>>,
    link_color: Color,
    link_highlight_color: Color,
    strip_quote_tweet: bool,
    strip_vine_card: bool,
) -> Option<LinkifiedText> {
    let tweet_text = tweet_text?;
    let text = tweet_text.text.as_deref()?;

    if text.is_empty() {
        return Some(LinkifiedText::plain(text));
    }

    let combined = merge_and_sort_entities(
        &tweet_text.url_entities,
        &tweet_text.media_entities,
        &tweet_text.hashtag_entities,
        &tweet_text.mention_entities,
        &tweet_text.symbol_entities,
    );
    let stripped = get_entity_to_strip(text, &combined, strip_quote_tweet, strip_vine_card);

    let mut units: Vec<u16> = text.encode_utf16().collect();
    let spans = add_url_entities(
        &mut units,
        &combined,
        stripped,
        listener.as_ref(),
        link_color,
        link_highlight_color,
    );

    Some(LinkifiedText { units, spans }.trim_end())
}

/// Formats and linkifies a Tweet with the colors and strip flags from `config`.
pub fn linkify_tweet(
    tweet: &Tweet,
    config: &LinkifyConfig,
    listener: Option<Arc<dyn LinkClickListener>>,
) -> Option<LinkifiedText> {
    let formatted = format_tweet_text(Some(tweet));
    linkify_urls(
        formatted.as_ref(),
        listener,
        config.link_color,
        config.link_highlight_color,
        config.strip_quote_tweet,
        config.strip_vine_card,
    )
}
