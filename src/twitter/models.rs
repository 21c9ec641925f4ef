//! Tweet and entity models as returned by the Twitter/X API.
//!
//! These structures mirror the JSON payloads of the v1.1 status objects closely
//! enough to deserialize them with `serde_json`. Entity offsets are kept exactly
//! as the API reports them (`indices: [start, end]`, counted in code points over
//! the HTML-escaped text); the adjustments needed before rendering live in
//! [`crate::text::format`].

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a list that the API may omit or send as `null`, yielding an empty list instead.
fn deserialize_safe_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A status as delivered by the API, reduced to the fields needed for rendering its text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    /// Numeric identifier of the status
    #[serde(default)]
    pub id: i64,
    /// String form of the identifier
    #[serde(default)]
    pub id_str: Option<String>,
    /// Text of the status (legacy, possibly truncated)
    #[serde(default)]
    pub text: Option<String>,
    /// Untruncated text, present on extended-mode responses
    #[serde(default)]
    pub full_text: Option<String>,
    /// Entities parsed out of the text
    #[serde(default)]
    pub entities: Option<TweetEntities>,
    /// Extended entities; carries every attached media item
    #[serde(default)]
    pub extended_entities: Option<TweetEntities>,
}

impl Tweet {
    /// Returns the text to render, preferring `full_text` over `text`.
    pub fn display_text(&self) -> Option<&str> {
        self.full_text.as_deref().or(self.text.as_deref())
    }

    /// Returns the media entities, taken from `extended_entities` when present.
    pub fn media(&self) -> &[MediaEntity] {
        match (&self.extended_entities, &self.entities) {
            (Some(extended), _) if !extended.media.is_empty() => &extended.media,
            (_, Some(entities)) => &entities.media,
            _ => &[],
        }
    }
}

/// Metadata and contextual information about content posted in a Tweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetEntities {
    /// URLs included in the text
    #[serde(default, deserialize_with = "deserialize_safe_list")]
    pub urls: Vec<UrlEntity>,
    /// Other users mentioned in the text
    #[serde(default, deserialize_with = "deserialize_safe_list")]
    pub user_mentions: Vec<MentionEntity>,
    /// Media elements uploaded with the Tweet
    #[serde(default, deserialize_with = "deserialize_safe_list")]
    pub media: Vec<MediaEntity>,
    /// Hashtags parsed out of the text
    #[serde(default, deserialize_with = "deserialize_safe_list")]
    pub hashtags: Vec<HashtagEntity>,
    /// Cashtags parsed out of the text
    #[serde(default, deserialize_with = "deserialize_safe_list")]
    pub symbols: Vec<SymbolEntity>,
}

/// A URL embedded in the text of a Tweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlEntity {
    /// Wrapped URL as it appears in the raw text
    #[serde(default)]
    pub url: String,
    /// Expanded form of the URL
    #[serde(default)]
    pub expanded_url: Option<String>,
    /// Version of the URL to display to clients
    #[serde(default)]
    pub display_url: String,
    #[serde(default)]
    pub indices: [i32; 2],
}

/// A media element uploaded with the Tweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaEntity {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub id_str: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub display_url: String,
    #[serde(default)]
    pub indices: [i32; 2],
    /// Direct link to the media file
    #[serde(default)]
    pub media_url_https: Option<String>,
    /// Type of uploaded media: `photo`, `video` or `animated_gif`
    #[serde(default, rename = "type")]
    pub media_type: String,
    #[serde(default)]
    pub ext_alt_text: Option<String>,
}

/// A hashtag parsed out of the text, without the leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HashtagEntity {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub indices: [i32; 2],
}

/// A cashtag parsed out of the text, without the leading `$`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolEntity {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub indices: [i32; 2],
}

/// Another user mentioned in the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentionEntity {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub id_str: Option<String>,
    /// Display name of the referenced user
    #[serde(default)]
    pub name: String,
    /// Screen name of the referenced user, without the leading `@`
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub indices: [i32; 2],
}
