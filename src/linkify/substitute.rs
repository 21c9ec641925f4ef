//! In-place substitution of entity spans in the text buffer.

use log::debug;
use std::sync::Arc;

use super::entity::FormattedEntity;
use super::span::{ClickableLinkSpan, LinkClickListener};
use crate::color::Color;

/// Swaps display urls in for the entity spans and records a clickable span for each one.
///
/// `buffer` holds the text as UTF-16 code units and is rewritten left to right.
/// `entities` must be sorted by start; every edit shifts the remaining entities,
/// which is tracked by a single running offset. Entities whose shifted range falls
/// outside the buffer are skipped. The entity matching `stripped` (by start) is
/// deleted without a span, and entities with an empty display url are left as they are.
pub fn add_url_entities(
    buffer: &mut Vec<u16>,
    entities: &[FormattedEntity],
    stripped: Option<&FormattedEntity>,
    listener: Option<&Arc<dyn LinkClickListener>>,
    link_color: Color,
    link_highlight_color: Color,
) -> Vec<ClickableLinkSpan> {
    let mut spans = Vec::new();
    let mut offset: i64 = 0;

    for entity in entities {
        let start = i64::from(entity.start) - offset;
        let end = i64::from(entity.end) - offset;

        if start < 0 || end > buffer.len() as i64 || start > end {
            debug!(
                "Skipping entity {} at [{}, {}): outside of text (length {})",
                entity.url,
                start,
                end,
                buffer.len()
            );
            continue;
        }
        let (start, end) = (start as usize, end as usize);

        // Matching on start is enough since entities never overlap
        if stripped.is_some_and(|s| s.start == entity.start) {
            buffer.drain(start..end);
            offset += (end - start) as i64;
        } else if !entity.display_url.is_empty() {
            let display: Vec<u16> = entity.display_url.encode_utf16().collect();
            let len = display.len();
            buffer.splice(start..end, display);
            offset += (end - start) as i64 - len as i64;

            spans.push(ClickableLinkSpan::new(
                start..start + len,
                entity.url.clone(),
                link_color,
                link_highlight_color,
                listener.cloned(),
            ));
        }
    }

    spans
}
