//! Merging of the per-category entity lists.

use super::entity::FormattedEntity;

/// Combines the five entity lists into one list sorted by start offset.
///
/// The lists are concatenated in the order urls, media, hashtags, mentions,
/// symbols and then stably sorted on `start` only: entities of one Tweet never
/// overlap, so `end` does not matter, and entities sharing a start keep their
/// concatenation order. No bounds or overlap validation happens here.
pub fn merge_and_sort_entities(
    urls: &[FormattedEntity],
    media: &[FormattedEntity],
    hashtags: &[FormattedEntity],
    mentions: &[FormattedEntity],
    symbols: &[FormattedEntity],
) -> Vec<FormattedEntity> {
    let mut combined: Vec<FormattedEntity> = urls
        .iter()
        .chain(media)
        .chain(hashtags)
        .chain(mentions)
        .chain(symbols)
        .cloned()
        .collect();
    // sort_by_key is stable
    combined.sort_by_key(|entity| entity.start);
    combined
}
