//! Twitter/X data model module.
//!
//! This module contains the status and entity structures delivered by the API
//! and the permalink builders used to make hashtags, mentions and cashtags
//! clickable.

mod models;
mod permalink;

// Re-export public API
pub use models::{
    HashtagEntity, MediaEntity, MentionEntity, SymbolEntity, Tweet, TweetEntities, UrlEntity,
};
pub use permalink::{
    get_hashtag_permalink, get_profile_permalink, get_status_permalink, get_symbol_permalink,
};
