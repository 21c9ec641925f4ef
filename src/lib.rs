//! # Tweetlinkify Library
//!
//! Renders Tweet text the way it is shown in a timeline: t.co links are replaced by
//! their display urls, hashtags, mentions and cashtags link to their twitter.com
//! pages, and the trailing link to an attached photo, quote Tweet or Vine card is
//! dropped. Every substituted entity is reported as a clickable span.
//!
//! ## Features
//!
//! - Tweet text formatting (HTML unescaping and offset correction)
//! - Entity substitution and trailing-entity stripping
//! - HTTP service exposing the linkifier (`/`, `/health`, `/linkify`, `/trim`)
//! - Structured logging
//!
//! ## Configuration
//!
//! - `LINKIFY_*`: rendering options, see [`LinkifyConfig::from_env`]
//! - `PORT`: Server port (defaults to 3000)
//!
//! ## Example
//!
//! ```rust
//! use tweetlinkify::{linkify_urls, Color, FormattedEntity, EntityKind, FormattedTweetText};
//!
//! let mut formatted = FormattedTweetText::new("just setting up my twttr http://t.co/foo");
//! formatted.url_entities.push(FormattedEntity::new(
//!     25,
//!     40,
//!     EntityKind::Url,
//!     "dev.twitter.com",
//!     "http://t.co/foo",
//!     Some("https://dev.twitter.com".to_string()),
//! ));
//!
//! let linkified = linkify_urls(Some(&formatted), None, Color::BLACK, Color::WHITE, true, true)
//!     .unwrap();
//! assert_eq!(linkified.text(), "just setting up my twttr dev.twitter.com");
//! assert_eq!(linkified.spans()[0].range, 25..40);
//! ```

pub mod color;
pub mod config;
pub mod handlers;
pub mod linkify;
pub mod text;
pub mod twitter;

// Re-export commonly used types and functions
pub use color::Color;
pub use config::{get_server_port, LinkifyConfig};
pub use handlers::{handle_health, handle_linkify, handle_root, handle_trim};
pub use linkify::{
    linkify_tweet, linkify_urls, trim_end, ClickableLinkSpan, EntityKind, FormattedEntity,
    LinkClickListener, LinkifiedText,
};
pub use text::{format_tweet_text, FormattedTweetText};
pub use twitter::Tweet;
