//! Positional entities ready for rendering.

use crate::twitter::{
    get_hashtag_permalink, get_profile_permalink, get_symbol_permalink, HashtagEntity,
    MediaEntity, MentionEntity, SymbolEntity, UrlEntity,
};

/// Media type of an inline photo; the only media rendered next to the text.
pub const PHOTO_TYPE: &str = "photo";

/// Category of a [`FormattedEntity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Url,
    Media { media_type: String },
    Hashtag,
    Mention,
    Symbol,
}

/// A span over the Tweet text together with what should be rendered in its place.
///
/// `start` and `end` (exclusive) are UTF-16 code unit offsets into the text the
/// entity belongs to. They are signed so that bad offsets coming from the API can
/// be carried through and rejected by the bounds guard during substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEntity {
    pub start: i32,
    pub end: i32,
    pub kind: EntityKind,
    /// Text shown in place of the span; empty means "leave the span untouched"
    pub display_url: String,
    /// Link the span points to; for URLs and media this is the literal t.co token in the text
    pub url: String,
    pub expanded_url: Option<String>,
}

impl FormattedEntity {
    pub fn new(
        start: i32,
        end: i32,
        kind: EntityKind,
        display_url: impl Into<String>,
        url: impl Into<String>,
        expanded_url: Option<String>,
    ) -> Self {
        FormattedEntity {
            start,
            end,
            kind,
            display_url: display_url.into(),
            url: url.into(),
            expanded_url,
        }
    }

    pub fn from_url(entity: &UrlEntity) -> Self {
        FormattedEntity::new(
            entity.indices[0],
            entity.indices[1],
            EntityKind::Url,
            entity.display_url.clone(),
            entity.url.clone(),
            entity.expanded_url.clone(),
        )
    }

    pub fn from_media(entity: &MediaEntity) -> Self {
        FormattedEntity::new(
            entity.indices[0],
            entity.indices[1],
            EntityKind::Media {
                media_type: entity.media_type.clone(),
            },
            entity.display_url.clone(),
            entity.url.clone(),
            entity.expanded_url.clone(),
        )
    }

    /// Hashtags render as `#text` and link to the hashtag page.
    pub fn from_hashtag(entity: &HashtagEntity) -> Self {
        let url = get_hashtag_permalink(&entity.text);
        FormattedEntity::new(
            entity.indices[0],
            entity.indices[1],
            EntityKind::Hashtag,
            format!("#{}", entity.text),
            url.clone(),
            Some(url),
        )
    }

    /// Mentions render as `@screen_name` and link to the profile.
    pub fn from_mention(entity: &MentionEntity) -> Self {
        let url = get_profile_permalink(&entity.screen_name);
        FormattedEntity::new(
            entity.indices[0],
            entity.indices[1],
            EntityKind::Mention,
            format!("@{}", entity.screen_name),
            url.clone(),
            Some(url),
        )
    }

    /// Cashtags render as `$text` and link to the cashtag search.
    pub fn from_symbol(entity: &SymbolEntity) -> Self {
        let url = get_symbol_permalink(&entity.text);
        FormattedEntity::new(
            entity.indices[0],
            entity.indices[1],
            EntityKind::Symbol,
            format!("${}", entity.text),
            url.clone(),
            Some(url),
        )
    }

    pub fn is_photo(&self) -> bool {
        matches!(&self.kind, EntityKind::Media { media_type } if media_type == PHOTO_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hashtag_builds_display_and_permalink() {
        let hashtag = HashtagEntity {
            text: "TwitterForGood".to_string(),
            indices: [25, 40],
        };
        let entity = FormattedEntity::from_hashtag(&hashtag);

        assert_eq!(entity.start, 25);
        assert_eq!(entity.end, 40);
        assert_eq!(entity.kind, EntityKind::Hashtag);
        assert_eq!(entity.display_url, "#TwitterForGood");
        assert_eq!(
            entity.url,
            "https://twitter.com/hashtag/TwitterForGood?ref_src=twsrc%5Etwitterkit"
        );
        assert_eq!(entity.expanded_url.as_deref(), Some(entity.url.as_str()));
    }

    #[test]
    fn test_from_mention_and_symbol() {
        let mention = MentionEntity {
            screen_name: "TwitterDev".to_string(),
            indices: [0, 11],
            ..Default::default()
        };
        assert_eq!(FormattedEntity::from_mention(&mention).display_url, "@TwitterDev");

        let symbol = SymbolEntity {
            text: "TWTR".to_string(),
            indices: [0, 5],
        };
        let entity = FormattedEntity::from_symbol(&symbol);
        assert_eq!(entity.display_url, "$TWTR");
        assert_eq!(entity.kind, EntityKind::Symbol);
    }

    #[test]
    fn test_is_photo() {
        let photo = MediaEntity {
            url: "http://t.co/PFHCdlr4i0".to_string(),
            display_url: "pic.twitter.com/abc".to_string(),
            indices: [27, 49],
            media_type: "photo".to_string(),
            ..Default::default()
        };
        assert!(FormattedEntity::from_media(&photo).is_photo());

        let video = MediaEntity {
            media_type: "video".to_string(),
            ..photo.clone()
        };
        assert!(!FormattedEntity::from_media(&video).is_photo());

        let url = UrlEntity {
            url: "http://t.co/PFHCdlr4i0".to_string(),
            indices: [27, 49],
            ..Default::default()
        };
        assert!(!FormattedEntity::from_url(&url).is_photo());
    }
}
